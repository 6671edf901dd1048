use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use services::ledger::RosterEntry;
use util::state::AppState;

use super::common::{RosterQuery, parse_status};
use crate::response::ApiResponse;
use crate::routes::common::{bad_request, checkin_service, error_response};

/// GET /events/{event_id}/attendees?status={status}
///
/// Roster ordered by first name. Each entry carries `scanned_at`, the
/// latest check-in time for that attendee, or `null`.
pub async fn list_attendees(
    State(state): State<AppState>,
    Path(event_id): Path<i64>,
    Query(query): Query<RosterQuery>,
) -> (StatusCode, Json<ApiResponse<Vec<RosterEntry>>>) {
    let status = match query.status.as_deref().filter(|s| !s.trim().is_empty()) {
        None => None,
        Some(raw) => match parse_status(raw) {
            Some(status) => Some(status),
            None => return bad_request("Invalid status filter"),
        },
    };

    match checkin_service(&state).roster(event_id, status).await {
        Ok(entries) => (
            StatusCode::OK,
            Json(ApiResponse::success(entries, "Attendees retrieved successfully")),
        ),
        Err(e) => error_response(e),
    }
}
