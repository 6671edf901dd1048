use axum::{Router, routing::get};
use util::state::AppState;

mod get;

pub use get::list_user_events;

pub fn users_routes() -> Router<AppState> {
    Router::new().route("/{user_id}/events", get(list_user_events))
}
