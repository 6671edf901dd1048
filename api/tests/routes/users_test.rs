#[cfg(test)]
mod tests {
    use crate::helpers::app::{body_json, get, json, make_test_app, seed_fixture};
    use axum::http::StatusCode;
    use serde_json::json;
    use serial_test::serial;
    use tower::ServiceExt;

    #[tokio::test]
    #[serial]
    async fn lists_events_with_status() {
        let (app, state) = make_test_app().await;
        let f = seed_fixture(state.db()).await;

        let uri = format!("/api/events/{}/register", f.event.id);
        app.clone()
            .oneshot(json("POST", &uri, json!({ "uid": f.ada.id })))
            .await
            .unwrap();

        let response = app
            .clone()
            .oneshot(get(&format!("/api/users/{}/events", f.ada.id)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        let events = json["data"].as_array().unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0]["id"], f.event.id);
        assert_eq!(events[0]["title"], "Open Day");
        assert_eq!(events[0]["status"], "registered");

        let response = app.oneshot(get("/api/users/9999/events")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
