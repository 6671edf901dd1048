//! HTTP route entry point for `/api/...`.
//!
//! Route groups:
//! - `/health` → liveness probe
//! - `/scan-card` → kiosk card taps (plain-text tokens)
//! - `/register-user` → kiosk sign-up for unknown cards
//! - `/cards` → linking a card to an existing account
//! - `/events` → explicit registration, check-in and roster administration
//! - `/users` → per-user views

use crate::routes::{
    cards::cards_routes, events::events_routes, health::health_routes,
    register::register_routes, scan::scan_routes, users::users_routes,
};
use axum::Router;
use util::state::AppState;

pub mod cards;
pub mod common;
pub mod events;
pub mod health;
pub mod register;
pub mod scan;
pub mod users;

/// Builds the `/api` router. State is supplied once by [`crate::app`].
pub fn routes() -> Router<AppState> {
    Router::new()
        .nest("/health", health_routes())
        .nest("/scan-card", scan_routes())
        .nest("/register-user", register_routes())
        .nest("/cards", cards_routes())
        .nest("/events", events_routes())
        .nest("/users", users_routes())
}
