use axum::Router;
use util::state::AppState;

use crate::ws::checkin::ws_checkin_routes;

pub mod checkin;
pub mod core;

pub fn ws_routes() -> Router<AppState> {
    ws_checkin_routes()
}
