pub mod models;
pub mod test_utils;

use sea_orm::{Database, DatabaseConnection, DbErr, SqlErr};
use std::path::Path;
use util::config;

/// Connects to the configured store.
///
/// `DATABASE_PATH` may be a full DSN, which is used as-is; anything else is
/// treated as a SQLite file path and opened in read-write-create mode.
pub async fn connect() -> Result<DatabaseConnection, DbErr> {
    let path_or_url = config::database_path();
    let url = if path_or_url.starts_with("sqlite:")
        || path_or_url.starts_with("postgres://")
        || path_or_url.starts_with("mysql://")
    {
        path_or_url
    } else {
        // SQLite won't create intermediate dirs.
        if let Some(parent) = Path::new(&path_or_url).parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        format!("sqlite://{path_or_url}?mode=rwc")
    };

    tracing::debug!(url = %url, "Connecting to store");
    Database::connect(&url).await
}

/// True when `err` is the store rejecting a duplicate key.
pub fn is_unique_violation(err: &DbErr) -> bool {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => true,
        _ => err.to_string().contains("UNIQUE constraint failed"),
    }
}
