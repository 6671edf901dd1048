use serde::Deserialize;

/// Client → server frames on check-in topics. `{"type":"ping"}` is answered
/// by the socket runtime before it reaches the handler.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CheckinIncoming {
    /// Asks how many viewers are watching this topic.
    Viewers,
}
