mod cards_test;
mod events_test;
mod health_test;
mod register_test;
mod scan_test;
mod users_test;
