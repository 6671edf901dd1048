use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use sea_orm::sea_query::Expr;
use sea_orm::{ConnectionTrait, QueryOrder};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Per-(event, user) attendance record. The composite primary key is the
/// uniqueness constraint concurrent creators race on.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "attendees")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub event_id: i64,
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: i64,
    pub status: AttendeeStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    DeriveActiveEnum,
    Display,
    EnumString,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum AttendeeStatus {
    #[sea_orm(string_value = "registered")]
    Registered,
    #[sea_orm(string_value = "present")]
    Present,
    #[sea_orm(string_value = "absent")]
    Absent,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::event::Entity",
        from = "Column::EventId",
        to = "super::event::Column::Id",
        on_delete = "Cascade"
    )]
    Event,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_delete = "Cascade"
    )]
    User,
}

impl Related<super::event::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Event.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub async fn find<C>(db: &C, event_id: i64, user_id: i64) -> Result<Option<Model>, DbErr>
    where
        C: ConnectionTrait,
    {
        Entity::find_by_id((event_id, user_id)).one(db).await
    }

    /// Plain insert; a second insert for the same pair fails with a unique violation.
    pub async fn insert<C>(
        db: &C,
        event_id: i64,
        user_id: i64,
        status: AttendeeStatus,
    ) -> Result<Model, DbErr>
    where
        C: ConnectionTrait,
    {
        let now = Utc::now();
        ActiveModel {
            event_id: Set(event_id),
            user_id: Set(user_id),
            status: Set(status),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(db)
        .await
    }

    /// Flips the record to `present` only if it is not already present.
    /// Returns the number of rows changed (0 or 1).
    pub async fn mark_present<C>(db: &C, event_id: i64, user_id: i64) -> Result<u64, DbErr>
    where
        C: ConnectionTrait,
    {
        let res = Entity::update_many()
            .col_expr(Column::Status, Expr::value(AttendeeStatus::Present))
            .col_expr(Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(Column::EventId.eq(event_id))
            .filter(Column::UserId.eq(user_id))
            .filter(Column::Status.ne(AttendeeStatus::Present))
            .exec(db)
            .await?;
        Ok(res.rows_affected)
    }

    /// Unconditional status overwrite. Returns the number of rows changed.
    pub async fn set_status<C>(
        db: &C,
        event_id: i64,
        user_id: i64,
        status: AttendeeStatus,
    ) -> Result<u64, DbErr>
    where
        C: ConnectionTrait,
    {
        let res = Entity::update_many()
            .col_expr(Column::Status, Expr::value(status))
            .col_expr(Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(Column::EventId.eq(event_id))
            .filter(Column::UserId.eq(user_id))
            .exec(db)
            .await?;
        Ok(res.rows_affected)
    }

    pub async fn delete<C>(db: &C, event_id: i64, user_id: i64) -> Result<u64, DbErr>
    where
        C: ConnectionTrait,
    {
        let res = Entity::delete_by_id((event_id, user_id)).exec(db).await?;
        Ok(res.rows_affected)
    }

    /// Attendees of an event with their user rows, ordered by first name.
    pub async fn find_for_event<C>(
        db: &C,
        event_id: i64,
        status: Option<AttendeeStatus>,
    ) -> Result<Vec<(Model, Option<super::user::Model>)>, DbErr>
    where
        C: ConnectionTrait,
    {
        let mut query = Entity::find().filter(Column::EventId.eq(event_id));
        if let Some(status) = status {
            query = query.filter(Column::Status.eq(status));
        }
        query
            .find_also_related(super::user::Entity)
            .order_by_asc(super::user::Column::Fname)
            .all(db)
            .await
    }

    /// Every record a user holds, with the event it belongs to.
    pub async fn find_for_user<C>(
        db: &C,
        user_id: i64,
    ) -> Result<Vec<(Model, Option<super::event::Model>)>, DbErr>
    where
        C: ConnectionTrait,
    {
        Entity::find()
            .filter(Column::UserId.eq(user_id))
            .find_also_related(super::event::Entity)
            .order_by_asc(super::event::Column::StartDate)
            .all(db)
            .await
    }
}
