use crate::seed::Seeder;
use crate::seeds::user::OWNER_EMAIL;
use chrono::{Duration, NaiveDate, NaiveTime, Utc};
use db::models::{event, user};
use sea_orm::{DatabaseConnection, DbErr};

pub struct EventSeeder;

pub const LAUNCH_TITLE: &str = "Product Launch";
pub const MEETUP_TITLE: &str = "Community Meetup";

fn time(h: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, 0, 0).unwrap_or(NaiveTime::MIN)
}

#[async_trait::async_trait]
impl Seeder for EventSeeder {
    async fn seed(&self, db: &DatabaseConnection) -> Result<(), DbErr> {
        let owner = user::Model::find_by_email(db, OWNER_EMAIL)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Seed owner missing".into()))?;

        let existing = event::Model::find_by_owner(db, owner.id).await?;
        let has = |title: &str| existing.iter().any(|e| e.title == title);

        if !has(LAUNCH_TITLE) {
            let day = |d| NaiveDate::from_ymd_opt(2026, 2, d).ok_or_else(|| DbErr::Custom("bad date".into()));
            let regis = |d| NaiveDate::from_ymd_opt(2026, 1, d).ok_or_else(|| DbErr::Custom("bad date".into()));
            event::Model::create(
                db,
                event::NewEvent {
                    owner_id: owner.id,
                    title: LAUNCH_TITLE.into(),
                    detail: Some("Registration required; kiosk check-in at the door.".into()),
                    location: Some("Main Hall".into()),
                    contact: Some(OWNER_EMAIL.into()),
                    start_date: day(10)?,
                    start_time: time(9),
                    end_date: day(10)?,
                    end_time: time(17),
                    regis_start: regis(15)?,
                    regis_end: regis(30)?,
                },
            )
            .await?;
        }

        if !has(MEETUP_TITLE) {
            // Always open so the kiosk flow can be tried right away.
            let today = Utc::now().date_naive();
            event::Model::create(
                db,
                event::NewEvent {
                    owner_id: owner.id,
                    title: MEETUP_TITLE.into(),
                    detail: None,
                    location: Some("Room 2".into()),
                    contact: None,
                    start_date: today,
                    start_time: NaiveTime::MIN,
                    end_date: today + Duration::days(30),
                    end_time: time(23),
                    regis_start: today - Duration::days(1),
                    regis_end: today + Duration::days(30),
                },
            )
            .await?;
        }

        Ok(())
    }
}
