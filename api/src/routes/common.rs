//! Helpers shared by the `/api` handlers.

use crate::response::ApiResponse;
use crate::ws::checkin::WsAnnouncer;
use axum::{Json, http::StatusCode};
use serde::{Deserialize, Deserializer, Serialize};
use services::{CheckinError, CheckinService, ErrorKind};
use util::{config, state::AppState};

/// A check-in service wired to this request's store and viewer sockets.
pub fn checkin_service(state: &AppState) -> CheckinService<WsAnnouncer> {
    CheckinService::new(
        state.db_clone(),
        WsAnnouncer::new(state.ws_clone()),
        config::scan_requires_event_id(),
    )
}

pub fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::InvalidInput | ErrorKind::PreconditionFailed => StatusCode::BAD_REQUEST,
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::Conflict => StatusCode::CONFLICT,
        ErrorKind::Forbidden => StatusCode::FORBIDDEN,
        ErrorKind::Transient => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Maps a service error onto the JSON envelope, logging store failures.
pub fn error_response<T>(err: CheckinError) -> (StatusCode, Json<ApiResponse<T>>)
where
    T: Serialize + Default,
{
    if let CheckinError::Transient(ref db_err) = err {
        tracing::error!(error = %db_err, "Store failure");
    }
    (
        status_for(err.kind()),
        Json(ApiResponse::error(err.public_message())),
    )
}

pub fn bad_request<T>(message: &str) -> (StatusCode, Json<ApiResponse<T>>)
where
    T: Serialize + Default,
{
    (StatusCode::BAD_REQUEST, Json(ApiResponse::error(message)))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum IdRepr {
    Int(i64),
    Str(String),
}

/// Accepts ids sent as numbers or as strings copied out of a query string.
/// Blank strings count as absent.
pub fn lenient_id<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<IdRepr>::deserialize(deserializer)? {
        None => Ok(None),
        Some(IdRepr::Int(id)) => Ok(Some(id)),
        Some(IdRepr::Str(s)) if s.trim().is_empty() => Ok(None),
        Some(IdRepr::Str(s)) => s
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| serde::de::Error::custom(format!("invalid id `{s}`"))),
    }
}
