use serde::Serialize;
use services::{Announcement, AnnouncementKind, AnnouncementPublisher};
use util::ws::WebSocketManager;

use super::payload;
use super::topics::{announcements_topic, event_checkin_topic};
use crate::ws::core::{envelope, event::Event};

#[derive(Debug, Serialize)]
pub struct AnnouncementEvent {
    #[serde(flatten)]
    pub payload: payload::Announced,
}
impl Event for AnnouncementEvent {
    const NAME: &'static str = "checkin.announcement";
    fn topic_path(&self) -> String {
        announcements_topic()
    }
}

#[derive(Debug, Serialize)]
pub struct EventCheckinEvent {
    #[serde(flatten)]
    pub payload: payload::Announced,
}
impl Event for EventCheckinEvent {
    const NAME: &'static str = "checkin.event";
    fn topic_path(&self) -> String {
        event_checkin_topic(self.payload.event_id.unwrap_or_default())
    }
}

/// Human-readable text for lobby displays.
pub fn render(announcement: &Announcement) -> String {
    let name = &announcement.first_name;
    match announcement.kind {
        AnnouncementKind::CheckedIn => format!("Welcome, {name}!"),
        AnnouncementKind::AutoRegistered => format!("Welcome, {name}! (Auto-Registered)"),
        AnnouncementKind::UserRegistered => format!("{name} registered"),
        AnnouncementKind::CardLinked => format!("Card linked for {name}"),
    }
}

/* ---------- one-liner helpers ---------- */

pub async fn announced(ws: &WebSocketManager, p: payload::Announced) {
    if p.event_id.is_some() {
        envelope::emit(ws, &EventCheckinEvent { payload: p.clone() }).await;
    }
    envelope::emit(ws, &AnnouncementEvent { payload: p }).await;
}

/// Publishes announcements to WebSocket viewers.
#[derive(Clone)]
pub struct WsAnnouncer {
    ws: WebSocketManager,
}

impl WsAnnouncer {
    pub fn new(ws: WebSocketManager) -> Self {
        Self { ws }
    }
}

impl AnnouncementPublisher for WsAnnouncer {
    async fn publish(&self, announcement: Announcement) {
        let payload = payload::Announced {
            kind: announcement.kind,
            event_id: announcement.event_id,
            message: render(&announcement),
            at: announcement.at.to_rfc3339(),
            first_name: announcement.first_name,
        };
        announced(&self.ws, payload).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn renders_each_kind() {
        let mut a = Announcement::new(AnnouncementKind::CheckedIn, Some(1), 2, "Ada");
        assert_eq!(render(&a), "Welcome, Ada!");
        a.kind = AnnouncementKind::AutoRegistered;
        assert_eq!(render(&a), "Welcome, Ada! (Auto-Registered)");
        a.kind = AnnouncementKind::UserRegistered;
        assert_eq!(render(&a), "Ada registered");
        a.kind = AnnouncementKind::CardLinked;
        assert_eq!(render(&a), "Card linked for Ada");
    }

    #[tokio::test]
    async fn publishes_on_global_and_event_topics() {
        let ws = WebSocketManager::new();
        let mut global = ws.subscribe(&announcements_topic()).await;
        let mut scoped = ws.subscribe(&event_checkin_topic(7)).await;

        WsAnnouncer::new(ws.clone())
            .publish(Announcement::new(AnnouncementKind::CheckedIn, Some(7), 3, "Ada"))
            .await;

        let g: Value = serde_json::from_str(&global.recv().await.unwrap()).unwrap();
        assert_eq!(g["event"], "checkin.announcement");
        assert_eq!(g["payload"]["message"], "Welcome, Ada!");
        assert_eq!(g["payload"]["event_id"], 7);
        assert!(g["payload"].get("user_id").is_none());

        let s: Value = serde_json::from_str(&scoped.recv().await.unwrap()).unwrap();
        assert_eq!(s["topic"], "events:7:checkin");
        assert_eq!(s["payload"]["kind"], "checked_in");
    }

    #[tokio::test]
    async fn publishing_without_viewers_is_silent() {
        let ws = WebSocketManager::new();
        WsAnnouncer::new(ws.clone())
            .publish(Announcement::new(AnnouncementKind::UserRegistered, None, 3, "Ada"))
            .await;
        assert_eq!(ws.subscriber_count(&announcements_topic()).await, 0);
    }
}
