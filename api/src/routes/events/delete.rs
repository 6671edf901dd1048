use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use util::state::AppState;

use crate::response::ApiResponse;
use crate::routes::common::{checkin_service, error_response};

/// DELETE /events/{event_id}/attendees/{user_id}
///
/// `404` when there was nothing to remove.
pub async fn remove_attendee(
    State(state): State<AppState>,
    Path((event_id, user_id)): Path<(i64, i64)>,
) -> (StatusCode, Json<ApiResponse<()>>) {
    match checkin_service(&state)
        .remove_attendee(event_id, user_id)
        .await
    {
        Ok(()) => (
            StatusCode::OK,
            Json(ApiResponse::success((), "Attendee removed")),
        ),
        Err(e) => error_response(e),
    }
}
