//! A thread-safe WebSocket manager for topic-based message broadcasting.
//!
//! Uses one Tokio broadcast channel per topic. Broadcasting is best-effort:
//! a topic nobody listens to simply drops the message.

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{RwLock, broadcast};

type Topic = String;
type Sender = broadcast::Sender<String>;
type Receiver = broadcast::Receiver<String>;

/// Per-topic channel capacity; slow viewers past this lag and skip messages.
const CHANNEL_CAPACITY: usize = 100;

/// Manages broadcast channels per topic.
///
/// - Lazily creates a channel on first subscription
/// - Removes a topic once a send finds no live receivers
#[derive(Clone, Default)]
pub struct WebSocketManager {
    inner: Arc<RwLock<HashMap<Topic, Sender>>>,
}

impl WebSocketManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribes to the given topic, creating it if necessary.
    pub async fn subscribe(&self, topic: &str) -> Receiver {
        let mut map = self.inner.write().await;
        map.entry(topic.to_string())
            .or_insert_with(|| broadcast::channel(CHANNEL_CAPACITY).0)
            .subscribe()
    }

    /// Broadcasts a message to all current subscribers of `topic`.
    ///
    /// Unknown topics are a no-op.
    pub async fn broadcast<T: Into<String>>(&self, topic: &str, msg: T) {
        let mut map = self.inner.write().await;
        if let Some(sender) = map.get(topic) {
            let _ = sender.send(msg.into());
            if sender.receiver_count() == 0 {
                tracing::debug!("Removing topic '{topic}' due to no subscribers.");
                map.remove(topic);
            }
        }
    }

    /// Number of live receivers on `topic` (zero for unknown topics).
    pub async fn subscriber_count(&self, topic: &str) -> usize {
        self.inner
            .read()
            .await
            .get(topic)
            .map(|s| s.receiver_count())
            .unwrap_or(0)
    }
}
