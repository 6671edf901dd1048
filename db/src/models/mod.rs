pub mod attendee;
pub mod event;
pub mod scan_history;
pub mod user;

pub use attendee::Entity as Attendee;
pub use event::Entity as Event;
pub use scan_history::Entity as ScanHistory;
pub use user::Entity as User;
