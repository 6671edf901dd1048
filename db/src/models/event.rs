use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use sea_orm::{ConnectionTrait, QueryOrder};
use serde::{Deserialize, Serialize};

/// An event attendees register for and check in to.
///
/// Dates and times are stored without zone and interpreted as UTC.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "events")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub owner_id: i64,
    pub title: String,
    pub detail: Option<String>,
    pub location: Option<String>,
    pub contact: Option<String>,
    pub start_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_date: NaiveDate,
    pub end_time: NaiveTime,
    pub regis_start: NaiveDate,
    pub regis_end: NaiveDate,
    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::OwnerId",
        to = "super::user::Column::Id",
        on_delete = "Cascade"
    )]
    Owner,
    #[sea_orm(has_many = "super::attendee::Entity")]
    Attendees,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Owner.def()
    }
}

impl Related<super::attendee::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Attendees.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Fields needed to schedule a new event.
#[derive(Debug, Clone)]
pub struct NewEvent {
    pub owner_id: i64,
    pub title: String,
    pub detail: Option<String>,
    pub location: Option<String>,
    pub contact: Option<String>,
    pub start_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_date: NaiveDate,
    pub end_time: NaiveTime,
    pub regis_start: NaiveDate,
    pub regis_end: NaiveDate,
}

impl Model {
    /// Inserts an event. Rejects windows whose end precedes their start.
    pub async fn create<C>(db: &C, new: NewEvent) -> Result<Model, DbErr>
    where
        C: ConnectionTrait,
    {
        let starts = new.start_date.and_time(new.start_time);
        let ends = new.end_date.and_time(new.end_time);
        if ends < starts {
            return Err(DbErr::Custom("Event cannot end before it starts".into()));
        }

        let active = ActiveModel {
            owner_id: Set(new.owner_id),
            title: Set(new.title),
            detail: Set(new.detail),
            location: Set(new.location),
            contact: Set(new.contact),
            start_date: Set(new.start_date),
            start_time: Set(new.start_time),
            end_date: Set(new.end_date),
            end_time: Set(new.end_time),
            regis_start: Set(new.regis_start),
            regis_end: Set(new.regis_end),
            created_at: Set(Utc::now()),
            ..Default::default()
        };
        active.insert(db).await
    }

    pub async fn find_by_id<C>(db: &C, id: i64) -> Result<Option<Model>, DbErr>
    where
        C: ConnectionTrait,
    {
        Entity::find_by_id(id).one(db).await
    }

    pub async fn find_by_owner<C>(db: &C, owner_id: i64) -> Result<Vec<Model>, DbErr>
    where
        C: ConnectionTrait,
    {
        Entity::find()
            .filter(Column::OwnerId.eq(owner_id))
            .order_by_desc(Column::Id)
            .all(db)
            .await
    }

    pub fn is_owned_by(&self, user_id: i64) -> bool {
        self.owner_id == user_id
    }

    pub fn starts_at(&self) -> NaiveDateTime {
        self.start_date.and_time(self.start_time)
    }

    pub fn ends_at(&self) -> NaiveDateTime {
        self.end_date.and_time(self.end_time)
    }

    /// Registration opens at the start of `regis_start`.
    pub fn registration_opens_at(&self) -> NaiveDateTime {
        self.regis_start.and_time(NaiveTime::MIN)
    }

    /// Registration stays open through the last millisecond of `regis_end`.
    pub fn registration_closes_at(&self) -> NaiveDateTime {
        let end_of_day =
            NaiveTime::from_hms_milli_opt(23, 59, 59, 999).unwrap_or(NaiveTime::MIN);
        self.regis_end.and_time(end_of_day)
    }
}
