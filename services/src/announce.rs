//! Announcement seam between the orchestrator and whatever audience is listening.
//!
//! The orchestrator only produces [`Announcement`] values; rendering them to
//! text and delivering them is the publisher's job.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::future::Future;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AnnouncementKind {
    /// A registered (or absent) attendee was marked present.
    CheckedIn,
    /// An unknown attendee was registered and marked present in one step.
    AutoRegistered,
    /// A new account was created at the kiosk.
    UserRegistered,
    /// A card was attached to an existing account.
    CardLinked,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Announcement {
    pub kind: AnnouncementKind,
    pub event_id: Option<i64>,
    pub user_id: i64,
    pub first_name: String,
    pub at: DateTime<Utc>,
}

impl Announcement {
    pub fn new(
        kind: AnnouncementKind,
        event_id: Option<i64>,
        user_id: i64,
        first_name: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            event_id,
            user_id,
            first_name: first_name.into(),
            at: Utc::now(),
        }
    }
}

/// Fire-and-forget delivery. Implementations must not fail the caller;
/// having nobody listening is the normal case.
pub trait AnnouncementPublisher: Send + Sync + 'static {
    fn publish(&self, announcement: Announcement) -> impl Future<Output = ()> + Send;
}
