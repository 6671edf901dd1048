use crate::ws::WebSocketManager;
use axum::extract::ws::{Message, Utf8Bytes};
use tokio::sync::mpsc;

/// Per-connection context handed to a [`WsHandler`](super::handler_trait::WsHandler).
pub struct WsContext {
    pub topic: String,
    pub ws: WebSocketManager,
    out_tx: mpsc::Sender<Message>,
}

impl WsContext {
    pub fn new(topic: String, ws: WebSocketManager, out_tx: mpsc::Sender<Message>) -> Self {
        Self { topic, ws, out_tx }
    }

    /// Send a single text frame to this client only.
    pub async fn reply_text(&self, text: impl Into<Utf8Bytes>) -> Result<(), ()> {
        self.out_tx
            .send(Message::Text(text.into()))
            .await
            .map_err(|_| ())
    }

    /// Send a WS-level pong to this client.
    pub async fn reply_pong(&self, payload: bytes::Bytes) -> Result<(), ()> {
        self.out_tx
            .send(Message::Pong(payload))
            .await
            .map_err(|_| ())
    }
}
