//! Shared infrastructure for the check-in workspace: configuration,
//! application state and the topic-based WebSocket layer.

pub mod config;
pub mod state;
pub mod ws;
