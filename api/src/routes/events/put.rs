use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use util::state::AppState;

use super::common::{AttendeeResponse, StatusReq, parse_status};
use crate::response::ApiResponse;
use crate::routes::common::{bad_request, checkin_service, error_response};

/// PUT /events/{event_id}/attendees/{user_id}
///
/// Overwrites an attendee's status. The only way to mark someone `absent`.
/// Writes no scan history.
pub async fn update_attendee_status(
    State(state): State<AppState>,
    Path((event_id, user_id)): Path<(i64, i64)>,
    Json(body): Json<StatusReq>,
) -> (StatusCode, Json<ApiResponse<AttendeeResponse>>) {
    let Some(status) = parse_status(&body.status) else {
        return bad_request("Invalid status");
    };

    match checkin_service(&state)
        .update_status(event_id, user_id, status)
        .await
    {
        Ok(record) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                AttendeeResponse::from(record),
                "Attendee status updated",
            )),
        ),
        Err(e) => error_response(e),
    }
}
