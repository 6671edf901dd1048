use axum::{
    Router,
    body::Body,
    http::{Request, Response},
};
use chrono::{Duration, NaiveTime, Utc};
use db::models::{event, user};
use db::test_utils::setup_test_db;
use sea_orm::DatabaseConnection;
use serde_json::Value;
use util::{state::AppState, ws::WebSocketManager};

/// Fresh in-memory store with all migrations, wrapped in the full router.
pub async fn make_test_app() -> (Router, AppState) {
    let db = setup_test_db().await;
    let app_state = AppState::new(db, WebSocketManager::new());
    (api::app(app_state.clone()), app_state)
}

pub struct Fixture {
    pub owner: user::Model,
    pub ada: user::Model,
    pub event: event::Model,
}

/// An owner, a card holder `Ada` (card `CARD001`) and an event open for registration.
pub async fn seed_fixture(db: &DatabaseConnection) -> Fixture {
    let owner = user::Model::create(db, "Olive", "Owner", "olive@example.com", "pw", None)
        .await
        .unwrap();
    let ada = user::Model::create(db, "Ada", "Lovelace", "ada@example.com", "pw", Some("CARD001"))
        .await
        .unwrap();

    let today = Utc::now().date_naive();
    let event = event::Model::create(
        db,
        event::NewEvent {
            owner_id: owner.id,
            title: "Open Day".into(),
            detail: None,
            location: Some("Main Hall".into()),
            contact: None,
            start_date: today + Duration::days(7),
            start_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            end_date: today + Duration::days(7),
            end_time: NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
            regis_start: today - Duration::days(1),
            regis_end: today + Duration::days(1),
        },
    )
    .await
    .unwrap();

    Fixture { owner, ada, event }
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn json(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(body.to_vec()).unwrap()
}
