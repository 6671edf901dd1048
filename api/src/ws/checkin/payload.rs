use serde::Serialize;
use services::AnnouncementKind;

#[derive(Debug, Clone, Serialize)]
pub struct Announced {
    pub kind: AnnouncementKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_id: Option<i64>,
    pub first_name: String,
    /// Ready-to-display text, e.g. "Welcome, Ada!".
    pub message: String,
    pub at: String, // RFC3339
}
