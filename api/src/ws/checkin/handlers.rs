use axum::{
    Json,
    extract::{Path, State, WebSocketUpgrade},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::models::event;
use std::sync::Arc;
use util::state::AppState;
use util::ws::axum_adapter::ws_route;
use util::ws::serve::WsServerOptions;

use super::topics::{announcements_topic, event_checkin_topic};
use super::ws_handlers::CheckinWsHandler;
use crate::response::ApiResponse;

pub async fn announcements_ws_handler(
    ws: WebSocketUpgrade,
    State(app_state): State<AppState>,
) -> impl IntoResponse {
    let handler = Arc::new(CheckinWsHandler);
    ws_route(
        ws,
        State(app_state),
        announcements_topic(),
        handler,
        WsServerOptions::default(),
    )
    .await
}

/// Viewer socket for a single event's check-ins. Unknown events are refused
/// before the upgrade.
pub async fn event_checkin_ws_handler(
    ws: WebSocketUpgrade,
    State(app_state): State<AppState>,
    Path(event_id): Path<i64>,
) -> Response {
    match event::Model::find_by_id(app_state.db(), event_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::<()>::error("Event not found")),
            )
                .into_response();
        }
        Err(e) => {
            tracing::error!(event_id, error = %e, "Failed to look up event for WS");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<()>::error("Internal server error")),
            )
                .into_response();
        }
    }

    let handler = Arc::new(CheckinWsHandler);
    ws_route(
        ws,
        State(app_state),
        event_checkin_topic(event_id),
        handler,
        WsServerOptions::default(),
    )
    .await
    .into_response()
}
