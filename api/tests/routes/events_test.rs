#[cfg(test)]
mod tests {
    use crate::helpers::app::{body_json, delete, get, json, make_test_app, seed_fixture};
    use axum::http::StatusCode;
    use db::models::scan_history;
    use serde_json::json;
    use serial_test::serial;
    use tower::ServiceExt;

    #[tokio::test]
    #[serial]
    async fn register_then_duplicate_is_conflict() {
        let (app, state) = make_test_app().await;
        let f = seed_fixture(state.db()).await;
        let uri = format!("/api/events/{}/register", f.event.id);

        let response = app
            .clone()
            .oneshot(json("POST", &uri, json!({ "uid": f.ada.id })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let json_body = body_json(response).await;
        assert_eq!(json_body["data"]["status"], "registered");

        let response = app
            .oneshot(json("POST", &uri, json!({ "uid": f.ada.id })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CONFLICT);
        let json_body = body_json(response).await;
        assert_eq!(json_body["message"], "Already registered for this event");
    }

    #[tokio::test]
    #[serial]
    async fn owner_is_forbidden() {
        let (app, state) = make_test_app().await;
        let f = seed_fixture(state.db()).await;

        for action in ["register", "checkin"] {
            let uri = format!("/api/events/{}/{action}", f.event.id);
            let response = app
                .clone()
                .oneshot(json("POST", &uri, json!({ "uid": f.owner.id })))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::FORBIDDEN);
        }
    }

    #[tokio::test]
    #[serial]
    async fn missing_uid_and_unknown_event() {
        let (app, state) = make_test_app().await;
        let f = seed_fixture(state.db()).await;

        let uri = format!("/api/events/{}/register", f.event.id);
        let response = app
            .clone()
            .oneshot(json("POST", &uri, json!({})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["message"], "User ID required");

        let response = app
            .oneshot(json("POST", "/api/events/9999/register", json!({ "uid": f.ada.id })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    #[serial]
    async fn checkin_requires_registration() {
        let (app, state) = make_test_app().await;
        let f = seed_fixture(state.db()).await;
        let checkin = format!("/api/events/{}/checkin", f.event.id);

        let response = app
            .clone()
            .oneshot(json("POST", &checkin, json!({ "uid": f.ada.id })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["message"], "Not registered for this event");

        let register = format!("/api/events/{}/register", f.event.id);
        app.clone()
            .oneshot(json("POST", &register, json!({ "uid": f.ada.id })))
            .await
            .unwrap();

        let response = app
            .clone()
            .oneshot(json("POST", &checkin, json!({ "uid": f.ada.id.to_string() })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["message"], "Checked in successfully");
        assert_eq!(body["data"]["presence"], "marked");

        let response = app
            .oneshot(json("POST", &checkin, json!({ "uid": f.ada.id })))
            .await
            .unwrap();
        assert_eq!(body_json(response).await["message"], "Already checked in");

        let history = scan_history::Model::find_for_pair(state.db(), f.event.id, f.ada.id)
            .await
            .unwrap();
        assert_eq!(history.len(), 1);
    }

    #[tokio::test]
    #[serial]
    async fn roster_admin_flow() {
        let (app, state) = make_test_app().await;
        let f = seed_fixture(state.db()).await;

        let scan = format!("/api/scan-card/CARD001?eventId={}", f.event.id);
        app.clone().oneshot(get(&scan)).await.unwrap();

        let roster = format!("/api/events/{}/attendees", f.event.id);
        let response = app.clone().oneshot(get(&roster)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        let entries = body["data"].as_array().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0]["fname"], "Ada");
        assert_eq!(entries[0]["status"], "present");
        assert!(entries[0]["scanned_at"].is_string());

        let response = app
            .clone()
            .oneshot(get(&format!("{roster}?status=absent")))
            .await
            .unwrap();
        assert!(body_json(response).await["data"].as_array().unwrap().is_empty());

        let response = app
            .clone()
            .oneshot(get(&format!("{roster}?status=bogus")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let attendee = format!("/api/events/{}/attendees/{}", f.event.id, f.ada.id);
        let response = app
            .clone()
            .oneshot(json("PUT", &attendee, json!({ "status": "Absent" })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["data"]["status"], "absent");

        let response = app.clone().oneshot(delete(&attendee)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app.clone().oneshot(delete(&attendee)).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = app
            .oneshot(json("PUT", &attendee, json!({ "status": "present" })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
