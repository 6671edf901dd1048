use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use services::{CheckInOutcome, Presence};
use util::state::AppState;

use super::common::{ActingUserReq, AttendeeResponse};
use crate::response::ApiResponse;
use crate::routes::common::{bad_request, checkin_service, error_response};

/// POST /events/{event_id}/register
///
/// Registers `uid` for the event ahead of time.
///
/// ### Responses
/// - `201 Created` with the new attendance record (`status = registered`)
/// - `400 Bad Request` when `uid` is missing, the event has ended, or the
///   registration window is not open
/// - `403 Forbidden` when `uid` owns the event
/// - `404 Not Found` for an unknown event or user
/// - `409 Conflict` when a record already exists
pub async fn register_for_event(
    State(state): State<AppState>,
    Path(event_id): Path<i64>,
    Json(body): Json<ActingUserReq>,
) -> (StatusCode, Json<ApiResponse<AttendeeResponse>>) {
    let Some(uid) = body.uid else {
        return bad_request("User ID required");
    };

    match checkin_service(&state).register_for_event(uid, event_id).await {
        Ok(record) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(
                AttendeeResponse::from(record),
                "Registered successfully",
            )),
        ),
        Err(e) => error_response(e),
    }
}

#[derive(Debug, Default, serde::Serialize)]
pub struct CheckInResponse {
    pub event_id: i64,
    pub user_id: i64,
    pub presence: Option<Presence>,
}

impl From<CheckInOutcome> for CheckInResponse {
    fn from(o: CheckInOutcome) -> Self {
        Self {
            event_id: o.event_id,
            user_id: o.user_id,
            presence: Some(o.presence),
        }
    }
}

/// POST /events/{event_id}/checkin
///
/// Marks a registered (or absent) attendee present. Unlike a kiosk scan
/// this never registers anyone.
pub async fn check_in(
    State(state): State<AppState>,
    Path(event_id): Path<i64>,
    Json(body): Json<ActingUserReq>,
) -> (StatusCode, Json<ApiResponse<CheckInResponse>>) {
    let Some(uid) = body.uid else {
        return bad_request("User ID required");
    };

    match checkin_service(&state).check_in(uid, event_id).await {
        Ok(outcome) => {
            let message = match outcome.presence {
                Presence::AlreadyPresent => "Already checked in",
                _ => "Checked in successfully",
            };
            (
                StatusCode::OK,
                Json(ApiResponse::success(CheckInResponse::from(outcome), message)),
            )
        }
        Err(e) => error_response(e),
    }
}
