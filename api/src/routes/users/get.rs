use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use services::ledger::UserEvent;
use util::state::AppState;

use crate::response::ApiResponse;
use crate::routes::common::{checkin_service, error_response};

/// GET /users/{user_id}/events
///
/// Every event the user holds an attendance record for, with that record's status.
pub async fn list_user_events(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> (StatusCode, Json<ApiResponse<Vec<UserEvent>>>) {
    match checkin_service(&state).events_for_user(user_id).await {
        Ok(events) => (
            StatusCode::OK,
            Json(ApiResponse::success(events, "Events retrieved successfully")),
        ),
        Err(e) => error_response(e),
    }
}
