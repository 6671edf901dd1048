use axum::{Router, routing::post};
use util::state::AppState;

mod post;

pub use post::register_user;

pub fn register_routes() -> Router<AppState> {
    Router::new().route("/", post(register_user))
}
