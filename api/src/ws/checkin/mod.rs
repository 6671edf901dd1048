use axum::{Router, routing::get};
use util::state::AppState;

pub mod common;
pub mod emit;
pub mod handlers;
pub mod payload;
pub mod topics;
pub mod ws_handlers;

pub use emit::WsAnnouncer;
use handlers::{announcements_ws_handler, event_checkin_ws_handler};

pub fn ws_checkin_routes() -> Router<AppState> {
    Router::new()
        .route("/announcements", get(announcements_ws_handler))
        .route("/events/{event_id}", get(event_checkin_ws_handler))
}
