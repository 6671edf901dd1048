use crate::announce::{Announcement, AnnouncementKind, AnnouncementPublisher};
use chrono::{Duration, NaiveDate, NaiveTime, Utc};
use db::models::{event, user};
use sea_orm::DatabaseConnection;
use std::sync::{Arc, Mutex};

/// Captures every announcement so tests can count them.
#[derive(Clone, Default)]
pub struct RecordingPublisher {
    seen: Arc<Mutex<Vec<Announcement>>>,
}

impl RecordingPublisher {
    pub fn announcements(&self) -> Vec<Announcement> {
        self.seen.lock().unwrap().clone()
    }

    pub fn count(&self, kind: AnnouncementKind) -> usize {
        self.seen
            .lock()
            .unwrap()
            .iter()
            .filter(|a| a.kind == kind)
            .count()
    }
}

impl AnnouncementPublisher for RecordingPublisher {
    async fn publish(&self, announcement: Announcement) {
        self.seen.lock().unwrap().push(announcement);
    }
}

pub async fn make_user(db: &DatabaseConnection, fname: &str, card: Option<&str>) -> user::Model {
    let email = format!("{}@example.com", fname.to_lowercase());
    user::Model::create(db, fname, "Tester", &email, "password", card)
        .await
        .unwrap()
}

/// An event whose registration window is open today and which ends next week.
pub async fn make_open_event(db: &DatabaseConnection, owner_id: i64) -> event::Model {
    let today = Utc::now().date_naive();
    make_event(
        db,
        owner_id,
        today - Duration::days(1),
        today + Duration::days(1),
        today + Duration::days(7),
    )
    .await
}

pub async fn make_event(
    db: &DatabaseConnection,
    owner_id: i64,
    regis_start: NaiveDate,
    regis_end: NaiveDate,
    day: NaiveDate,
) -> event::Model {
    event::Model::create(
        db,
        event::NewEvent {
            owner_id,
            title: "Demo Day".into(),
            detail: None,
            location: Some("Hall A".into()),
            contact: None,
            start_date: day,
            start_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            end_date: day,
            end_time: NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
            regis_start,
            regis_end,
        },
    )
    .await
    .unwrap()
}
