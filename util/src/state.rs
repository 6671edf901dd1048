//! Application state shared across axum route handlers.
//!
//! Holds the handles every request needs: the SeaORM connection to the
//! persistent store and the WebSocket manager used to fan out announcements.
//! Nothing here caches attendance data; the store stays the sole authority.

use crate::ws::WebSocketManager;
use sea_orm::DatabaseConnection;

#[derive(Clone)]
pub struct AppState {
    db: DatabaseConnection,
    ws: WebSocketManager,
}

impl AppState {
    pub fn new(db: DatabaseConnection, ws: WebSocketManager) -> Self {
        Self { db, ws }
    }

    /// Borrow the database connection.
    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    /// Borrow the WebSocket manager.
    pub fn ws(&self) -> &WebSocketManager {
        &self.ws
    }

    /// Owned connection handle, for spawned tasks and services.
    pub fn db_clone(&self) -> DatabaseConnection {
        self.db.clone()
    }

    /// Owned manager handle; clones share the same topic map.
    pub fn ws_clone(&self) -> WebSocketManager {
        self.ws.clone()
    }
}
