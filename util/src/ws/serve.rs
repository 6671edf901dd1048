use axum::extract::ws::{Message, WebSocket};
use bytes::Bytes;
use chrono::Utc;
use futures::{SinkExt, StreamExt};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tokio::{sync::mpsc, time};

use super::WebSocketManager;
use super::handler_trait::WsHandler;
use super::runtime::WsContext;

pub struct WsServerOptions {
    /// Interval between WS-level pings.
    pub ws_ping_sec: u64,
    /// Answer `{"type":"ping"}` text frames with an app-level pong.
    pub enable_app_ping: bool,
}

impl Default for WsServerOptions {
    fn default() -> Self {
        Self {
            ws_ping_sec: 30,
            enable_app_ping: true,
        }
    }
}

/// Drives one viewer socket subscribed to `topic` until either side hangs up.
pub async fn serve_topic<H: WsHandler>(
    socket: WebSocket,
    manager: WebSocketManager,
    topic: String,
    handler: Arc<H>,
    opts: WsServerOptions,
) {
    let mut rx = manager.subscribe(&topic).await;
    let (mut sink, mut socket_rx) = socket.split();

    let (out_tx, mut out_rx) = mpsc::channel::<Message>(64);
    let writer_task = tokio::spawn(async move {
        while let Some(frame) = out_rx.recv().await {
            if sink.send(frame).await.is_err() {
                break;
            }
        }
    });

    let ctx = WsContext::new(topic.clone(), manager.clone(), out_tx.clone());

    // S→C: forward broadcasts on this topic
    let forward_task = {
        let out_tx = out_tx.clone();
        let topic = topic.clone();
        tokio::spawn(async move {
            loop {
                match rx.recv().await {
                    Ok(msg) => {
                        if out_tx.send(Message::Text(msg.into())).await.is_err() {
                            tracing::info!("Viewer disconnected while sending to '{topic}'");
                            break;
                        }
                    }
                    Err(tokio::sync::broadcast::error::RecvError::Lagged(skipped)) => {
                        tracing::warn!("Viewer on '{topic}' lagged, skipped {skipped} messages");
                    }
                    Err(_) => break,
                }
            }
        })
    };

    let ping_task = {
        let out_tx = out_tx.clone();
        let ping_every = Duration::from_secs(opts.ws_ping_sec);
        tokio::spawn(async move {
            loop {
                time::sleep(ping_every).await;
                if out_tx.send(Message::Ping(Bytes::new())).await.is_err() {
                    break;
                }
            }
        })
    };
    drop(out_tx);

    handler.on_open(&ctx).await;

    // C→S: parse & dispatch until the client closes
    while let Some(Ok(msg)) = socket_rx.next().await {
        match msg {
            Message::Text(text) => {
                let raw = text.as_str();
                if opts.enable_app_ping && is_app_ping(raw) {
                    let pong = serde_json::json!({
                        "event": "pong",
                        "topic": ctx.topic,
                        "payload": {},
                        "ts": Utc::now().to_rfc3339(),
                    });
                    let _ = ctx.reply_text(pong.to_string()).await;
                    continue;
                }
                match serde_json::from_str::<H::In>(raw) {
                    Ok(parsed) => handler.on_message(&ctx, parsed).await,
                    Err(e) => tracing::warn!("WS invalid message on '{}': {e}", ctx.topic),
                }
            }
            Message::Ping(payload) => {
                let _ = ctx.reply_pong(payload).await;
            }
            Message::Pong(_) | Message::Binary(_) => {}
            Message::Close(_) => {
                handler.on_close(&ctx).await;
                break;
            }
        }
    }

    forward_task.abort();
    ping_task.abort();
    drop(ctx);
    let _ = writer_task.await;
    tracing::info!("WS session ended for topic '{topic}'");
}

fn is_app_ping(raw: &str) -> bool {
    matches!(
        serde_json::from_str::<Value>(raw),
        Ok(Value::Object(map)) if map.get("type").and_then(Value::as_str) == Some("ping")
    )
}

#[cfg(test)]
mod tests {
    use super::is_app_ping;

    #[test]
    fn recognises_app_level_ping() {
        assert!(is_app_ping(r#"{"type":"ping"}"#));
        assert!(!is_app_ping(r#"{"type":"hello"}"#));
        assert!(!is_app_ping("ping"));
    }
}
