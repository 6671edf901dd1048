use axum::{
    Router,
    routing::{get, post, put},
};
use util::state::AppState;

mod common;
mod delete;
mod get;
mod post;
mod put;

pub use delete::remove_attendee;
pub use get::list_attendees;
pub use post::{check_in, register_for_event};
pub use put::update_attendee_status;

pub fn events_routes() -> Router<AppState> {
    Router::new()
        .route("/{event_id}/register", post(register_for_event))
        .route("/{event_id}/checkin", post(check_in))
        .route("/{event_id}/attendees", get(list_attendees))
        .route(
            "/{event_id}/attendees/{user_id}",
            put(update_attendee_status).delete(remove_attendee),
        )
}
