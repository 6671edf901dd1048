use axum::{Router, routing::post};
use util::state::AppState;

mod post;

pub use post::link_card;

pub fn cards_routes() -> Router<AppState> {
    Router::new().route("/", post(link_card))
}
