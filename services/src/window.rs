//! Registration-window rules for explicit registration.

use crate::error::CheckinError;
use chrono::NaiveDateTime;
use db::models::event;

/// Checks whether `now` (UTC, like the stored event times) allows registering for `event`.
///
/// The event having ended takes precedence over the registration window.
/// Registration stays open until the end of the `regis_end` calendar day.
pub fn check_registration_window(
    event: &event::Model,
    now: NaiveDateTime,
) -> Result<(), CheckinError> {
    if now > event.ends_at() {
        return Err(CheckinError::EventEnded);
    }
    if now > event.registration_closes_at() {
        return Err(CheckinError::RegistrationClosed);
    }
    if now < event.registration_opens_at() {
        return Err(CheckinError::RegistrationNotOpen);
    }
    Ok(())
}
