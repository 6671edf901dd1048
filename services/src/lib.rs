//! The attendance core: resolving card taps to users, reconciling them
//! against the attendance ledger, and announcing successful check-ins.

pub mod announce;
pub mod checkin;
pub mod error;
pub mod history;
pub mod identity;
pub mod ledger;
pub mod window;

#[cfg(test)]
pub(crate) mod test_support;

pub use announce::{Announcement, AnnouncementKind, AnnouncementPublisher};
pub use checkin::{AccountOutcome, CheckInOutcome, CheckinService, NewAccount, Presence, ScanOutcome};
pub use error::{CheckinError, ErrorKind};
