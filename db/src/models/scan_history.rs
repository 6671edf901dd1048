use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use sea_orm::{ConnectionTrait, QueryOrder};
use serde::Serialize;
use std::collections::HashMap;

/// Append-only audit row: one per successful check-in transition.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "scan_history")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub user_id: i64,
    pub event_id: i64,
    pub scanned_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_delete = "Cascade"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::event::Entity",
        from = "Column::EventId",
        to = "super::event::Column::Id",
        on_delete = "Cascade"
    )]
    Event,
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub async fn append<C>(
        db: &C,
        user_id: i64,
        event_id: i64,
        scanned_at: DateTime<Utc>,
    ) -> Result<Model, DbErr>
    where
        C: ConnectionTrait,
    {
        ActiveModel {
            user_id: Set(user_id),
            event_id: Set(event_id),
            scanned_at: Set(scanned_at),
            ..Default::default()
        }
        .insert(db)
        .await
    }

    pub async fn find_for_pair<C>(db: &C, event_id: i64, user_id: i64) -> Result<Vec<Model>, DbErr>
    where
        C: ConnectionTrait,
    {
        Entity::find()
            .filter(Column::EventId.eq(event_id))
            .filter(Column::UserId.eq(user_id))
            .order_by_asc(Column::ScannedAt)
            .all(db)
            .await
    }

    /// Latest scan per user for an event.
    pub async fn last_scanned_for_event<C>(
        db: &C,
        event_id: i64,
    ) -> Result<HashMap<i64, DateTime<Utc>>, DbErr>
    where
        C: ConnectionTrait,
    {
        let rows = Entity::find()
            .filter(Column::EventId.eq(event_id))
            .all(db)
            .await?;

        let mut latest: HashMap<i64, DateTime<Utc>> = HashMap::new();
        for row in rows {
            latest
                .entry(row.user_id)
                .and_modify(|at| *at = (*at).max(row.scanned_at))
                .or_insert(row.scanned_at);
        }
        Ok(latest)
    }
}
