//! Global application configuration manager.
//!
//! `AppConfig` is a lazily initialized, globally accessible singleton containing
//! runtime configuration values loaded from environment variables. Tests and
//! tooling can override individual fields through the per-field setters.

use std::env;
use std::str::FromStr;
use std::sync::{OnceLock, RwLock, RwLockReadGuard};

/// Represents the complete application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: String,
    pub project_name: String,
    pub log_level: String,
    pub log_file: String,
    pub log_to_stdout: bool,
    pub database_path: String,
    pub host: String,
    pub port: u16,
    /// Base URL of the web frontend; kiosk registration links point here.
    pub frontend_url: String,
    /// When set, a scan without an event id is rejected with `MISSING_EVENT_ID`
    /// instead of producing a plain welcome.
    pub scan_requires_event_id: bool,
}

/// Lazily-initialized, thread-safe singleton instance of `AppConfig`.
static CONFIG_INSTANCE: OnceLock<RwLock<AppConfig>> = OnceLock::new();

fn var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

fn parse_or<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

impl AppConfig {
    /// Loads the configuration from `.env` and environment variables.
    ///
    /// Malformed numeric or boolean values fall back to their defaults.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            env: var_or("APP_ENV", "development"),
            project_name: var_or("PROJECT_NAME", "checkin"),
            log_level: var_or("LOG_LEVEL", "api=info,services=info"),
            log_file: var_or("LOG_FILE", "api.log"),
            log_to_stdout: parse_or("LOG_TO_STDOUT", false),
            database_path: var_or("DATABASE_PATH", "data/checkin.db"),
            host: var_or("HOST", "127.0.0.1"),
            port: parse_or("PORT", 3000),
            frontend_url: var_or("FRONTEND_URL", "http://localhost:5173"),
            scan_requires_event_id: parse_or("SCAN_REQUIRES_EVENT_ID", false),
        }
    }

    fn lock() -> &'static RwLock<AppConfig> {
        CONFIG_INSTANCE.get_or_init(|| RwLock::new(AppConfig::from_env()))
    }

    /// Returns a read guard over the global configuration.
    ///
    /// A poisoned lock still yields the last written configuration.
    pub fn global() -> RwLockReadGuard<'static, AppConfig> {
        Self::lock()
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Resets the configuration by reloading from environment variables.
    pub fn reset() {
        Self::set_field(|cfg| *cfg = AppConfig::from_env());
    }

    fn set_field<F>(setter: F)
    where
        F: FnOnce(&mut AppConfig),
    {
        let mut guard = Self::lock()
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        setter(&mut guard);
    }

    // --- Per-field setters below ---

    pub fn set_env(value: impl Into<String>) {
        AppConfig::set_field(|cfg| cfg.env = value.into());
    }

    pub fn set_log_level(value: impl Into<String>) {
        AppConfig::set_field(|cfg| cfg.log_level = value.into());
    }

    pub fn set_log_to_stdout(value: bool) {
        AppConfig::set_field(|cfg| cfg.log_to_stdout = value);
    }

    pub fn set_database_path(value: impl Into<String>) {
        AppConfig::set_field(|cfg| cfg.database_path = value.into());
    }

    pub fn set_frontend_url(value: impl Into<String>) {
        AppConfig::set_field(|cfg| cfg.frontend_url = value.into());
    }

    pub fn set_scan_requires_event_id(value: bool) {
        AppConfig::set_field(|cfg| cfg.scan_requires_event_id = value);
    }
}

// --- Free-function accessors ---

pub fn env() -> String {
    AppConfig::global().env.clone()
}

pub fn project_name() -> String {
    AppConfig::global().project_name.clone()
}

pub fn log_level() -> String {
    AppConfig::global().log_level.clone()
}

pub fn log_file() -> String {
    AppConfig::global().log_file.clone()
}

pub fn log_to_stdout() -> bool {
    AppConfig::global().log_to_stdout
}

pub fn database_path() -> String {
    AppConfig::global().database_path.clone()
}

pub fn host() -> String {
    AppConfig::global().host.clone()
}

pub fn port() -> u16 {
    AppConfig::global().port
}

pub fn frontend_url() -> String {
    AppConfig::global().frontend_url.clone()
}

pub fn scan_requires_event_id() -> bool {
    AppConfig::global().scan_requires_event_id
}
