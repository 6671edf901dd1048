/// Global feed every lobby display listens to.
pub fn announcements_topic() -> String {
    "announcements".to_string()
}

pub fn event_checkin_topic(event_id: i64) -> String {
    format!("events:{event_id}:checkin")
}
