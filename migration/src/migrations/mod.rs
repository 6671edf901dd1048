pub mod m202601010001_create_users;
pub mod m202601010002_create_events;
pub mod m202601010003_create_attendees;
pub mod m202601010004_create_scan_history;
