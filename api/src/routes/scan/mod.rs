use axum::{Router, routing::get};
use util::state::AppState;

mod get;

pub use get::scan_card;

pub fn scan_routes() -> Router<AppState> {
    Router::new().route("/{card_id}", get(scan_card))
}
