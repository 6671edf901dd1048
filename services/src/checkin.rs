//! Check-in orchestrator.
//!
//! Every call re-reads the ledger; nothing about an attendee is cached
//! between requests. The scan path registers unknown attendees on the spot,
//! the explicit paths do not.

use crate::announce::{Announcement, AnnouncementKind, AnnouncementPublisher};
use crate::error::CheckinError;
use crate::identity;
use crate::ledger::{self, MarkOutcome, RosterEntry, UserEvent};
use crate::window;
use chrono::{NaiveDateTime, Utc};
use db::is_unique_violation;
use db::models::attendee::{self, AttendeeStatus};
use db::models::{event, user};
use sea_orm::DatabaseConnection;
use serde::Serialize;
use tracing::{error, info, warn};
use validator::{Validate, ValidationErrors};

/// What a kiosk should show after a tap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanOutcome {
    /// The card belongs to nobody; send the holder to the registration page.
    RegistrationRequired {
        card_token: String,
        event_id: Option<i64>,
    },
    /// Known card but no event to check in to.
    Greeted { first_name: String },
    CheckedIn {
        first_name: String,
        auto_registered: bool,
    },
    AlreadyCheckedIn { first_name: String },
}

/// How the ledger ended up `present`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Presence {
    AutoRegistered,
    Marked,
    AlreadyPresent,
}

impl Presence {
    fn announcement_kind(self) -> Option<AnnouncementKind> {
        match self {
            Presence::AutoRegistered => Some(AnnouncementKind::AutoRegistered),
            Presence::Marked => Some(AnnouncementKind::CheckedIn),
            Presence::AlreadyPresent => None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CheckInOutcome {
    pub event_id: i64,
    pub user_id: i64,
    pub first_name: String,
    pub presence: Presence,
}

/// Account details captured at the kiosk registration page.
#[derive(Debug, Clone, Validate)]
pub struct NewAccount {
    #[validate(length(min = 1, message = "First name cannot be empty"))]
    pub first_name: String,

    #[validate(length(min = 1, message = "Last name cannot be empty"))]
    pub last_name: String,

    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password cannot be empty"))]
    pub password: String,

    pub card_token: String,
    pub event_id: Option<i64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AccountOutcome {
    pub user: user::Model,
    pub presence: Option<Presence>,
}

pub struct CheckinService<P> {
    db: DatabaseConnection,
    publisher: P,
    require_event_id: bool,
}

impl<P: AnnouncementPublisher> CheckinService<P> {
    pub fn new(db: DatabaseConnection, publisher: P, require_event_id: bool) -> Self {
        Self {
            db,
            publisher,
            require_event_id,
        }
    }

    /// Handles a card tap at a kiosk, optionally scoped to an event.
    pub async fn scan(
        &self,
        card_token: &str,
        event_id: Option<i64>,
    ) -> Result<ScanOutcome, CheckinError> {
        self.scan_parsed(card_token, event_id.map(Ok)).await
    }

    /// Same as [`scan`](Self::scan) with the event id still as sent by the
    /// kiosk. Blank means absent. A non-numeric id only fails once the card
    /// is known; unknown cards are always sent to registration.
    pub async fn scan_raw_event(
        &self,
        card_token: &str,
        raw_event: Option<&str>,
    ) -> Result<ScanOutcome, CheckinError> {
        let event = raw_event
            .map(str::trim)
            .filter(|raw| !raw.is_empty())
            .map(|raw| raw.parse::<i64>().map_err(|_| CheckinError::InvalidEventId));
        self.scan_parsed(card_token, event).await
    }

    async fn scan_parsed(
        &self,
        card_token: &str,
        event: Option<Result<i64, CheckinError>>,
    ) -> Result<ScanOutcome, CheckinError> {
        identity::validate_card_token(card_token)?;
        if event.is_none() && self.require_event_id {
            return Err(CheckinError::MissingEventId);
        }

        let Some(user) = identity::resolve(&self.db, card_token).await? else {
            let event_id = event.and_then(Result::ok);
            info!(card_token, ?event_id, "Unknown card, redirecting to registration");
            return Ok(ScanOutcome::RegistrationRequired {
                card_token: card_token.to_owned(),
                event_id,
            });
        };
        let event_id = event.transpose()?;

        let Some(event_id) = event_id else {
            info!(user_id = user.id, "Card scanned without an event");
            return Ok(ScanOutcome::Greeted {
                first_name: user.fname,
            });
        };

        self.require_event(event_id).await?;
        let presence = self.ensure_present(event_id, &user, true).await?;

        Ok(match presence {
            Presence::AlreadyPresent => ScanOutcome::AlreadyCheckedIn {
                first_name: user.fname,
            },
            Presence::AutoRegistered | Presence::Marked => ScanOutcome::CheckedIn {
                first_name: user.fname,
                auto_registered: presence == Presence::AutoRegistered,
            },
        })
    }

    /// Explicit check-in. Requires an existing registration.
    pub async fn check_in(
        &self,
        user_id: i64,
        event_id: i64,
    ) -> Result<CheckInOutcome, CheckinError> {
        let event = self.require_event(event_id).await?;
        let user = identity::find_user(&self.db, user_id).await?;
        if event.is_owned_by(user.id) {
            warn!(event_id, user_id, "Owner tried to check in to own event");
            return Err(CheckinError::CannotActOnOwnEvent);
        }

        let presence = self.ensure_present(event_id, &user, false).await?;
        Ok(CheckInOutcome {
            event_id,
            user_id,
            first_name: user.fname,
            presence,
        })
    }

    pub async fn register_for_event(
        &self,
        user_id: i64,
        event_id: i64,
    ) -> Result<attendee::Model, CheckinError> {
        self.register_for_event_at(user_id, event_id, Utc::now().naive_utc())
            .await
    }

    /// Explicit registration evaluated at `now`.
    pub async fn register_for_event_at(
        &self,
        user_id: i64,
        event_id: i64,
        now: NaiveDateTime,
    ) -> Result<attendee::Model, CheckinError> {
        let event = self.require_event(event_id).await?;
        let user = identity::find_user(&self.db, user_id).await?;
        if event.is_owned_by(user.id) {
            warn!(event_id, user_id, "Owner tried to register for own event");
            return Err(CheckinError::CannotActOnOwnEvent);
        }
        window::check_registration_window(&event, now)?;

        if ledger::get_status(&self.db, event_id, user_id).await?.is_some() {
            return Err(CheckinError::AlreadyRegistered);
        }

        let record = match ledger::create_registered(&self.db, event_id, user_id).await {
            Err(CheckinError::AlreadyExists) => return Err(CheckinError::AlreadyRegistered),
            other => other?,
        };
        info!(event_id, user_id, "Registered for event");
        Ok(record)
    }

    /// Creates an account for an unknown card and, when an event is given,
    /// checks the new user in to it.
    pub async fn register_user_and_check_in(
        &self,
        account: NewAccount,
    ) -> Result<AccountOutcome, CheckinError> {
        let card_token = identity::validate_card_token(&account.card_token)?.to_owned();
        account
            .validate()
            .map_err(|e| CheckinError::InvalidInput(first_message(&e)))?;

        if let Some(event_id) = account.event_id {
            self.require_event(event_id).await?;
        }
        if user::Model::find_by_email(&self.db, &account.email)
            .await?
            .is_some()
        {
            return Err(CheckinError::EmailExists);
        }
        if user::Model::find_by_card_token(&self.db, &card_token)
            .await?
            .is_some()
        {
            return Err(CheckinError::CardInUse);
        }

        let created = user::Model::create(
            &self.db,
            &account.first_name,
            &account.last_name,
            &account.email,
            &account.password,
            Some(card_token.as_str()),
        )
        .await;
        let user = match created {
            Ok(user) => user,
            Err(err) if is_unique_violation(&err) => {
                let email_taken = user::Model::find_by_email(&self.db, &account.email)
                    .await?
                    .is_some();
                return Err(if email_taken {
                    CheckinError::EmailExists
                } else {
                    CheckinError::CardInUse
                });
            }
            Err(err) => return Err(err.into()),
        };
        info!(user_id = user.id, "Account created at kiosk");

        self.publisher
            .publish(Announcement::new(
                AnnouncementKind::UserRegistered,
                account.event_id,
                user.id,
                user.fname.clone(),
            ))
            .await;

        let Some(event_id) = account.event_id else {
            return Ok(AccountOutcome { user, presence: None });
        };
        // The account stays even if the check-in fails; a later scan retries it.
        let presence = match self.ensure_present(event_id, &user, true).await {
            Ok(presence) => Some(presence),
            Err(err) => {
                error!(
                    user_id = user.id,
                    event_id,
                    error = %err,
                    "Account created but check-in failed"
                );
                None
            }
        };
        Ok(AccountOutcome { user, presence })
    }

    /// Attaches `card_token` to an existing user, then runs the scan
    /// transition for `event_id` if one is given.
    pub async fn link_card(
        &self,
        user_id: i64,
        card_token: &str,
        event_id: Option<i64>,
    ) -> Result<AccountOutcome, CheckinError> {
        let token = identity::validate_card_token(card_token)?;
        if let Some(event_id) = event_id {
            self.require_event(event_id).await?;
        }
        identity::find_user(&self.db, user_id).await?;

        if let Some(holder) = user::Model::find_by_card_token(&self.db, token).await? {
            if holder.id != user_id {
                warn!(user_id, holder_id = holder.id, "Card already linked to another user");
                return Err(CheckinError::CardInUse);
            }
        }

        let user = match user::Model::set_card_token(&self.db, user_id, token).await {
            Ok(user) => user,
            Err(err) if is_unique_violation(&err) => return Err(CheckinError::CardInUse),
            Err(err) => return Err(err.into()),
        };
        info!(user_id, "Card linked");

        self.publisher
            .publish(Announcement::new(
                AnnouncementKind::CardLinked,
                event_id,
                user.id,
                user.fname.clone(),
            ))
            .await;

        let presence = match event_id {
            Some(event_id) => Some(self.ensure_present(event_id, &user, true).await?),
            None => None,
        };
        Ok(AccountOutcome { user, presence })
    }

    pub async fn update_status(
        &self,
        event_id: i64,
        user_id: i64,
        status: AttendeeStatus,
    ) -> Result<attendee::Model, CheckinError> {
        let record = ledger::set_status(&self.db, event_id, user_id, status).await?;
        info!(event_id, user_id, %status, "Attendee status overwritten");
        Ok(record)
    }

    pub async fn remove_attendee(&self, event_id: i64, user_id: i64) -> Result<(), CheckinError> {
        ledger::remove(&self.db, event_id, user_id).await?;
        info!(event_id, user_id, "Attendee removed");
        Ok(())
    }

    pub async fn roster(
        &self,
        event_id: i64,
        status: Option<AttendeeStatus>,
    ) -> Result<Vec<RosterEntry>, CheckinError> {
        self.require_event(event_id).await?;
        ledger::roster(&self.db, event_id, status).await
    }

    pub async fn events_for_user(&self, user_id: i64) -> Result<Vec<UserEvent>, CheckinError> {
        identity::find_user(&self.db, user_id).await?;
        ledger::events_for_user(&self.db, user_id).await
    }

    async fn require_event(&self, event_id: i64) -> Result<event::Model, CheckinError> {
        event::Model::find_by_id(&self.db, event_id)
            .await?
            .ok_or(CheckinError::EventNotFound)
    }

    /// Drives the pair to `present` and announces the transition, if any.
    async fn ensure_present(
        &self,
        event_id: i64,
        user: &user::Model,
        auto_register: bool,
    ) -> Result<Presence, CheckinError> {
        let observed = ledger::get_status(&self.db, event_id, user.id).await?;
        let presence = self
            .reconcile(event_id, user.id, observed, auto_register)
            .await?;

        if let Some(kind) = presence.announcement_kind() {
            self.publisher
                .publish(Announcement::new(
                    kind,
                    Some(event_id),
                    user.id,
                    user.fname.clone(),
                ))
                .await;
        }
        Ok(presence)
    }

    /// Applies the transition for `observed`. A write that loses a race
    /// re-reads the ledger and tries once more.
    pub(crate) async fn reconcile(
        &self,
        event_id: i64,
        user_id: i64,
        mut observed: Option<AttendeeStatus>,
        auto_register: bool,
    ) -> Result<Presence, CheckinError> {
        let mut retried = false;
        loop {
            let attempt = match observed {
                None if auto_register => {
                    info!(event_id, user_id, "unknown -> present (auto-register)");
                    ledger::create_present(&self.db, event_id, user_id)
                        .await
                        .map(|_| Presence::AutoRegistered)
                }
                None => {
                    info!(event_id, user_id, "Check-in refused, not registered");
                    return Err(CheckinError::NotRegistered);
                }
                Some(AttendeeStatus::Present) => {
                    info!(event_id, user_id, "Already present, nothing to do");
                    return Ok(Presence::AlreadyPresent);
                }
                Some(status) => {
                    info!(event_id, user_id, from = %status, "{status} -> present");
                    match ledger::set_present(&self.db, event_id, user_id).await? {
                        MarkOutcome::Marked => Ok(Presence::Marked),
                        MarkOutcome::AlreadyPresent => Ok(Presence::AlreadyPresent),
                        MarkOutcome::Missing => Err(CheckinError::AttendeeNotFound),
                    }
                }
            };

            match attempt {
                Err(CheckinError::AlreadyExists | CheckinError::AttendeeNotFound) if !retried => {
                    warn!(event_id, user_id, "Lost attendance race, re-reading ledger");
                    retried = true;
                    observed = ledger::get_status(&self.db, event_id, user_id).await?;
                }
                other => return other,
            }
        }
    }
}

fn first_message(errors: &ValidationErrors) -> String {
    errors
        .field_errors()
        .values()
        .flat_map(|errs| errs.iter())
        .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
        .unwrap_or_else(|| "Invalid input".to_string())
}
