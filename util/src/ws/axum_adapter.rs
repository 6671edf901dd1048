// util/ws/axum_adapter.rs
use super::handler_trait::WsHandler;
use super::serve::{WsServerOptions, serve_topic};
use crate::state::AppState;
use axum::{
    extract::{State, WebSocketUpgrade, ws::WebSocket},
    response::IntoResponse,
};
use std::sync::Arc;

/// Upgrades the request and serves `topic` with `handler`.
pub async fn ws_route<H>(
    ws: WebSocketUpgrade,
    State(state): State<AppState>,
    topic: String,
    handler: Arc<H>,
    opts: WsServerOptions,
) -> impl IntoResponse
where
    H: WsHandler,
{
    let manager = state.ws_clone();

    ws.on_upgrade(move |socket: WebSocket| async move {
        serve_topic(socket, manager, topic, handler, opts).await;
    })
}
