#[cfg(test)]
mod tests {
    use crate::helpers::app::{body_json, body_text, get, json, make_test_app, seed_fixture};
    use axum::http::StatusCode;
    use db::models::user;
    use serde_json::json;
    use serial_test::serial;
    use tower::ServiceExt;

    #[tokio::test]
    #[serial]
    async fn links_card_and_checks_in_for_event() {
        let (app, state) = make_test_app().await;
        let f = seed_fixture(state.db()).await;
        let bob = user::Model::create(state.db(), "Bob", "Builder", "bob@example.com", "pw", None)
            .await
            .unwrap();

        let body = json!({ "userId": bob.id, "cardId": "CARD002", "eventId": f.event.id });
        let response = app
            .clone()
            .oneshot(json("POST", "/api/cards", body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["data"]["card_id"], "CARD002");
        assert_eq!(json["data"]["presence"], "auto_registered");

        let uri = format!("/api/scan-card/CARD002?eventId={}", f.event.id);
        let response = app.oneshot(get(&uri)).await.unwrap();
        assert_eq!(body_text(response).await, "ALREADY_IN_BOB");
    }

    #[tokio::test]
    #[serial]
    async fn card_in_use_and_unknown_user() {
        let (app, state) = make_test_app().await;
        let f = seed_fixture(state.db()).await;

        let body = json!({ "userId": f.owner.id, "cardId": "CARD001" });
        let response = app
            .clone()
            .oneshot(json("POST", "/api/cards", body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CONFLICT);

        let body = json!({ "userId": 9999, "cardId": "CARD404" });
        let response = app
            .clone()
            .oneshot(json("POST", "/api/cards", body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = app
            .oneshot(json("POST", "/api/cards", json!({ "cardId": "CARD404" })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
