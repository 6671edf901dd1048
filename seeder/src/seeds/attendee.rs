use crate::seed::Seeder;
use crate::seeds::event::MEETUP_TITLE;
use crate::seeds::user::{CARD_HOLDERS, OWNER_EMAIL};
use db::models::attendee::{self, AttendeeStatus};
use db::models::{event, user};
use sea_orm::{DatabaseConnection, DbErr};

pub struct AttendeeSeeder;

/// Pre-registers the first card holder for the meetup so the
/// registered -> present transition can be demoed.
#[async_trait::async_trait]
impl Seeder for AttendeeSeeder {
    async fn seed(&self, db: &DatabaseConnection) -> Result<(), DbErr> {
        let owner = user::Model::find_by_email(db, OWNER_EMAIL)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Seed owner missing".into()))?;
        let Some(meetup) = event::Model::find_by_owner(db, owner.id)
            .await?
            .into_iter()
            .find(|e| e.title == MEETUP_TITLE)
        else {
            return Ok(());
        };

        let (_, _, email, _) = CARD_HOLDERS[0];
        if let Some(ada) = user::Model::find_by_email(db, email).await? {
            if attendee::Model::find(db, meetup.id, ada.id).await?.is_none() {
                attendee::Model::insert(db, meetup.id, ada.id, AttendeeStatus::Registered).await?;
            }
        }
        Ok(())
    }
}
