use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;
use services::{CheckinError, ScanOutcome, identity};
use util::{config, state::AppState};

use crate::routes::common::checkin_service;

#[derive(Debug, Deserialize)]
pub struct ScanQuery {
    #[serde(rename = "eventId", alias = "eventid", alias = "event_id")]
    pub event_id: Option<String>,
}

/// GET /scan-card/{card_id}?eventId={event_id}
///
/// Kiosk endpoint. Always answers with a plain-text token:
///
/// - `WELCOME_<NAME>`: checked in (or greeted when no event was given)
/// - `ALREADY_IN_<NAME>`: repeat tap, nothing changed
/// - a registration URL: the card is unknown
/// - `INVALID_CARD_ID`, `INVALID_EVENT_ID`, `MISSING_EVENT_ID` (400)
/// - `EVENT_NOT_FOUND` (404)
/// - `SERVER_ERROR` (500)
pub async fn scan_card(
    State(state): State<AppState>,
    Path(card_id): Path<String>,
    Query(query): Query<ScanQuery>,
) -> (StatusCode, String) {
    if identity::validate_card_token(&card_id).is_err() {
        return (StatusCode::BAD_REQUEST, "INVALID_CARD_ID".into());
    }

    let raw_event = query.event_id.filter(|raw| !raw.trim().is_empty());

    match checkin_service(&state)
        .scan_raw_event(&card_id, raw_event.as_deref())
        .await
    {
        Ok(ScanOutcome::RegistrationRequired { card_token, .. }) => (
            StatusCode::OK,
            registration_url(&config::frontend_url(), &card_token, raw_event.as_deref()),
        ),
        Ok(ScanOutcome::Greeted { first_name } | ScanOutcome::CheckedIn { first_name, .. }) => {
            (StatusCode::OK, format!("WELCOME_{}", first_name.to_uppercase()))
        }
        Ok(ScanOutcome::AlreadyCheckedIn { first_name }) => (
            StatusCode::OK,
            format!("ALREADY_IN_{}", first_name.to_uppercase()),
        ),
        Err(CheckinError::InvalidCardId) => (StatusCode::BAD_REQUEST, "INVALID_CARD_ID".into()),
        Err(CheckinError::MissingEventId) => (StatusCode::BAD_REQUEST, "MISSING_EVENT_ID".into()),
        Err(CheckinError::InvalidEventId) => (StatusCode::BAD_REQUEST, "INVALID_EVENT_ID".into()),
        Err(CheckinError::EventNotFound) => (StatusCode::NOT_FOUND, "EVENT_NOT_FOUND".into()),
        Err(e) => {
            tracing::error!(card_id = %card_id, event_id = ?raw_event, error = %e, "Scan failed");
            (StatusCode::INTERNAL_SERVER_ERROR, "SERVER_ERROR".into())
        }
    }
}

/// Link the kiosk renders as a QR code. Card and event ids are passed through verbatim.
pub fn registration_url(frontend: &str, card_token: &str, event_id: Option<&str>) -> String {
    format!(
        "{}/register?cardId={}&eventId={}",
        frontend.trim_end_matches('/'),
        card_token,
        event_id.unwrap_or_default()
    )
}
