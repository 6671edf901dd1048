pub mod app;
pub mod ws;

pub use app::make_test_app;
pub use ws::{connect_ws, spawn_server};
