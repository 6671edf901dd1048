//! Append-only audit log of successful check-in transitions.

use chrono::{DateTime, Utc};
use db::models::scan_history;
use sea_orm::{ConnectionTrait, DbErr};
use std::collections::HashMap;

pub async fn append<C>(
    db: &C,
    user_id: i64,
    event_id: i64,
    scanned_at: DateTime<Utc>,
) -> Result<scan_history::Model, DbErr>
where
    C: ConnectionTrait,
{
    scan_history::Model::append(db, user_id, event_id, scanned_at).await
}

pub async fn entries_for<C>(
    db: &C,
    event_id: i64,
    user_id: i64,
) -> Result<Vec<scan_history::Model>, DbErr>
where
    C: ConnectionTrait,
{
    scan_history::Model::find_for_pair(db, event_id, user_id).await
}

/// Latest scan per user of `event_id`, keyed by user id.
pub async fn last_scanned<C>(db: &C, event_id: i64) -> Result<HashMap<i64, DateTime<Utc>>, DbErr>
where
    C: ConnectionTrait,
{
    scan_history::Model::last_scanned_for_event(db, event_id).await
}
