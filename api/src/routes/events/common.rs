use db::models::attendee::{self, AttendeeStatus};
use serde::{Deserialize, Serialize};

use crate::routes::common::lenient_id;

/// Body of the explicit registration and check-in calls.
#[derive(Debug, Deserialize)]
pub struct ActingUserReq {
    #[serde(default, alias = "userId", deserialize_with = "lenient_id")]
    pub uid: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct StatusReq {
    pub status: String,
}

#[derive(Debug, Deserialize)]
pub struct RosterQuery {
    pub status: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AttendeeResponse {
    pub event_id: i64,
    pub user_id: i64,
    pub status: AttendeeStatus,
}

impl From<attendee::Model> for AttendeeResponse {
    fn from(m: attendee::Model) -> Self {
        Self {
            event_id: m.event_id,
            user_id: m.user_id,
            status: m.status,
        }
    }
}

impl Default for AttendeeResponse {
    fn default() -> Self {
        Self {
            event_id: 0,
            user_id: 0,
            status: AttendeeStatus::Registered,
        }
    }
}

/// Parses `registered` / `present` / `absent`, case-insensitively.
pub fn parse_status(raw: &str) -> Option<AttendeeStatus> {
    raw.trim().parse().ok()
}
