use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};
use services::NewAccount;
use util::state::AppState;

use crate::response::ApiResponse;
use crate::routes::common::{checkin_service, error_response, lenient_id};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUserReq {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub card_id: String,
    #[serde(default)]
    pub password: String,
    #[serde(default, deserialize_with = "lenient_id")]
    pub event_id: Option<i64>,
}

#[derive(Debug, Default, Serialize)]
pub struct RegisterUserResponse {
    pub user_id: i64,
    pub event_id: Option<i64>,
    pub checked_in: bool,
}

/// POST /register-user
///
/// Creates an account for a card the kiosk did not recognise and, when
/// `eventId` is given, checks the new user in straight away.
///
/// ### Responses
/// - `201 Created` on success
/// - `400 Bad Request` for missing fields, a malformed email or a short card id
/// - `404 Not Found` if `eventId` names no event
/// - `409 Conflict` if the email or card is already taken
pub async fn register_user(
    State(state): State<AppState>,
    Json(body): Json<RegisterUserReq>,
) -> (StatusCode, Json<ApiResponse<RegisterUserResponse>>) {
    if body.card_id.trim().is_empty() || body.email.trim().is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::error("Missing required fields.")),
        );
    }

    let account = NewAccount {
        first_name: body.first_name.trim().to_owned(),
        last_name: body.last_name.trim().to_owned(),
        email: body.email.trim().to_owned(),
        password: body.password,
        card_token: body.card_id,
        event_id: body.event_id,
    };

    match checkin_service(&state).register_user_and_check_in(account).await {
        Ok(outcome) => {
            let checked_in = outcome.presence.is_some();
            let message = if checked_in {
                "Registration and Check-in successful!"
            } else {
                "Registration successful!"
            };
            (
                StatusCode::CREATED,
                Json(ApiResponse::success(
                    RegisterUserResponse {
                        user_id: outcome.user.id,
                        event_id: body.event_id,
                        checked_in,
                    },
                    message,
                )),
            )
        }
        Err(e) => error_response(e),
    }
}
