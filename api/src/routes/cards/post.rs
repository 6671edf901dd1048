use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};
use services::Presence;
use util::state::AppState;

use crate::response::ApiResponse;
use crate::routes::common::{bad_request, checkin_service, error_response, lenient_id};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkCardReq {
    #[serde(default, alias = "uid", deserialize_with = "lenient_id")]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub card_id: String,
    #[serde(default, deserialize_with = "lenient_id")]
    pub event_id: Option<i64>,
}

#[derive(Debug, Default, Serialize)]
pub struct LinkCardResponse {
    pub user_id: i64,
    pub card_id: String,
    pub presence: Option<Presence>,
}

/// POST /cards
///
/// Attaches a card to an existing account. With `eventId`, the tap is also
/// applied to that event exactly as a kiosk scan would be.
pub async fn link_card(
    State(state): State<AppState>,
    Json(body): Json<LinkCardReq>,
) -> (StatusCode, Json<ApiResponse<LinkCardResponse>>) {
    let Some(user_id) = body.user_id else {
        return bad_request("User ID required");
    };

    match checkin_service(&state)
        .link_card(user_id, &body.card_id, body.event_id)
        .await
    {
        Ok(outcome) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                LinkCardResponse {
                    user_id: outcome.user.id,
                    card_id: outcome.user.card_token.unwrap_or_default(),
                    presence: outcome.presence,
                },
                "Card linked successfully",
            )),
        ),
        Err(e) => error_response(e),
    }
}
