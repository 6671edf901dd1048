pub mod middleware;
pub mod response;
pub mod routes;
pub mod ws;

use axum::Router;
use util::state::AppState;

/// Builds the full application: `/api/...` HTTP routes and `/ws/...` viewer sockets.
pub fn app(app_state: AppState) -> Router {
    Router::new()
        .nest("/api", routes::routes())
        .nest("/ws", ws::ws_routes())
        .with_state(app_state)
}
