use sea_orm::DbErr;

/// Coarse classification of [`CheckinError`] used by transports to pick a status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidInput,
    NotFound,
    Conflict,
    Forbidden,
    PreconditionFailed,
    Transient,
}

/// Every way a check-in, registration or roster operation can fail.
#[derive(Debug, thiserror::Error)]
pub enum CheckinError {
    #[error("Card id must be at least 4 characters")]
    InvalidCardId,

    #[error("An event id is required")]
    MissingEventId,

    #[error("Event id must be a number")]
    InvalidEventId,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("User not found")]
    UserNotFound,

    #[error("Event not found")]
    EventNotFound,

    #[error("Attendee record not found")]
    AttendeeNotFound,

    #[error("Attendance record already exists")]
    AlreadyExists,

    #[error("Already registered for this event")]
    AlreadyRegistered,

    #[error("Email is already in use")]
    EmailExists,

    #[error("Card is already linked to another user")]
    CardInUse,

    #[error("Cannot act on your own event")]
    CannotActOnOwnEvent,

    #[error("Registration has not started yet")]
    RegistrationNotOpen,

    #[error("Registration period has ended")]
    RegistrationClosed,

    #[error("Event has ended")]
    EventEnded,

    #[error("Not registered for this event")]
    NotRegistered,

    #[error("Store unavailable: {0}")]
    Transient(#[from] DbErr),
}

impl CheckinError {
    pub fn kind(&self) -> ErrorKind {
        use CheckinError::*;
        match self {
            InvalidCardId | MissingEventId | InvalidEventId | InvalidInput(_) => {
                ErrorKind::InvalidInput
            }
            UserNotFound | EventNotFound | AttendeeNotFound => ErrorKind::NotFound,
            AlreadyExists | AlreadyRegistered | EmailExists | CardInUse => ErrorKind::Conflict,
            CannotActOnOwnEvent => ErrorKind::Forbidden,
            RegistrationNotOpen | RegistrationClosed | EventEnded | NotRegistered => {
                ErrorKind::PreconditionFailed
            }
            Transient(_) => ErrorKind::Transient,
        }
    }

    /// Message safe to show to the caller; store details stay in the logs.
    pub fn public_message(&self) -> String {
        match self {
            CheckinError::Transient(_) => "Internal server error".to_string(),
            other => other.to_string(),
        }
    }
}
