//! Attendance ledger: the per-(event, user) status record.
//!
//! The store's `(event_id, user_id)` primary key is the final arbiter when
//! two callers race to create the same record. Every transition to
//! `present` is written together with its scan history row.

use crate::error::CheckinError;
use crate::history;
use chrono::{DateTime, Utc};
use db::is_unique_violation;
use db::models::attendee::{self, AttendeeStatus};
use db::models::event;
use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, TransactionTrait};
use serde::Serialize;

/// Result of a conditional mark-present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkOutcome {
    /// This call moved the record to `present` and appended history.
    Marked,
    /// Someone else got there first; nothing was written.
    AlreadyPresent,
    /// No record exists for the pair.
    Missing,
}

pub async fn get_status<C>(
    db: &C,
    event_id: i64,
    user_id: i64,
) -> Result<Option<AttendeeStatus>, CheckinError>
where
    C: ConnectionTrait,
{
    Ok(attendee::Model::find(db, event_id, user_id)
        .await?
        .map(|record| record.status))
}

pub async fn create_registered<C>(
    db: &C,
    event_id: i64,
    user_id: i64,
) -> Result<attendee::Model, CheckinError>
where
    C: ConnectionTrait,
{
    attendee::Model::insert(db, event_id, user_id, AttendeeStatus::Registered)
        .await
        .map_err(creation_error)
}

/// Creates the record directly in `present` together with its history row.
pub async fn create_present(
    db: &DatabaseConnection,
    event_id: i64,
    user_id: i64,
) -> Result<attendee::Model, CheckinError> {
    let txn = db.begin().await?;

    let record = attendee::Model::insert(&txn, event_id, user_id, AttendeeStatus::Present)
        .await
        .map_err(creation_error)?;
    history::append(&txn, user_id, event_id, Utc::now()).await?;

    txn.commit().await?;
    Ok(record)
}

/// Moves an existing record to `present` unless it already is.
pub async fn set_present(
    db: &DatabaseConnection,
    event_id: i64,
    user_id: i64,
) -> Result<MarkOutcome, CheckinError> {
    let txn = db.begin().await?;

    if attendee::Model::mark_present(&txn, event_id, user_id).await? == 1 {
        history::append(&txn, user_id, event_id, Utc::now()).await?;
        txn.commit().await?;
        return Ok(MarkOutcome::Marked);
    }

    let outcome = match attendee::Model::find(&txn, event_id, user_id).await? {
        Some(_) => MarkOutcome::AlreadyPresent,
        None => MarkOutcome::Missing,
    };
    txn.rollback().await?;
    Ok(outcome)
}

/// Unconditional status overwrite for administrators. Writes no history.
pub async fn set_status<C>(
    db: &C,
    event_id: i64,
    user_id: i64,
    status: AttendeeStatus,
) -> Result<attendee::Model, CheckinError>
where
    C: ConnectionTrait,
{
    if attendee::Model::set_status(db, event_id, user_id, status).await? == 0 {
        return Err(CheckinError::AttendeeNotFound);
    }
    attendee::Model::find(db, event_id, user_id)
        .await?
        .ok_or(CheckinError::AttendeeNotFound)
}

pub async fn remove<C>(db: &C, event_id: i64, user_id: i64) -> Result<(), CheckinError>
where
    C: ConnectionTrait,
{
    match attendee::Model::delete(db, event_id, user_id).await? {
        0 => Err(CheckinError::AttendeeNotFound),
        _ => Ok(()),
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RosterEntry {
    pub user_id: i64,
    pub fname: String,
    pub lname: String,
    pub email: String,
    pub card_token: Option<String>,
    pub status: AttendeeStatus,
    pub scanned_at: Option<DateTime<Utc>>,
}

/// Attendees of an event ordered by first name, each with its latest scan time.
pub async fn roster<C>(
    db: &C,
    event_id: i64,
    status: Option<AttendeeStatus>,
) -> Result<Vec<RosterEntry>, CheckinError>
where
    C: ConnectionTrait,
{
    let rows = attendee::Model::find_for_event(db, event_id, status).await?;
    let last_scanned = history::last_scanned(db, event_id).await?;

    Ok(rows
        .into_iter()
        .filter_map(|(record, user)| {
            let user = user?;
            Some(RosterEntry {
                user_id: user.id,
                scanned_at: last_scanned.get(&user.id).copied(),
                fname: user.fname,
                lname: user.lname,
                email: user.email,
                card_token: user.card_token,
                status: record.status,
            })
        })
        .collect())
}

#[derive(Debug, Clone, Serialize)]
pub struct UserEvent {
    #[serde(flatten)]
    pub event: event::Model,
    pub status: AttendeeStatus,
}

pub async fn events_for_user<C>(db: &C, user_id: i64) -> Result<Vec<UserEvent>, CheckinError>
where
    C: ConnectionTrait,
{
    let rows = attendee::Model::find_for_user(db, user_id).await?;
    Ok(rows
        .into_iter()
        .filter_map(|(record, event)| {
            event.map(|event| UserEvent {
                event,
                status: record.status,
            })
        })
        .collect())
}

fn creation_error(err: DbErr) -> CheckinError {
    if is_unique_violation(&err) {
        CheckinError::AlreadyExists
    } else {
        CheckinError::Transient(err)
    }
}
