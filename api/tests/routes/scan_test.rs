#[cfg(test)]
mod tests {
    use crate::helpers::app::{body_text, get, make_test_app, seed_fixture};
    use axum::http::StatusCode;
    use db::models::{attendee, scan_history};
    use serial_test::serial;
    use tower::ServiceExt;
    use util::config;

    #[tokio::test]
    #[serial]
    async fn short_card_is_invalid() {
        let (app, _) = make_test_app().await;

        let response = app.oneshot(get("/api/scan-card/AB1?eventId=1")).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_text(response).await, "INVALID_CARD_ID");
    }

    #[tokio::test]
    #[serial]
    async fn unknown_card_returns_registration_url() {
        let (app, _) = make_test_app().await;

        let response = app
            .oneshot(get("/api/scan-card/NEWCARD9?eventId=42"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let expected = format!(
            "{}/register?cardId=NEWCARD9&eventId=42",
            config::frontend_url().trim_end_matches('/')
        );
        assert_eq!(body_text(response).await, expected);
    }

    #[tokio::test]
    #[serial]
    async fn unknown_card_with_malformed_event_id_still_redirects() {
        let (app, _) = make_test_app().await;

        let response = app
            .oneshot(get("/api/scan-card/NEWCARD9?eventId=abc"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let expected = format!(
            "{}/register?cardId=NEWCARD9&eventId=abc",
            config::frontend_url().trim_end_matches('/')
        );
        assert_eq!(body_text(response).await, expected);
    }

    #[tokio::test]
    #[serial]
    async fn first_scan_welcomes_and_repeats_are_already_in() {
        let (app, state) = make_test_app().await;
        let f = seed_fixture(state.db()).await;
        let uri = format!("/api/scan-card/CARD001?eventId={}", f.event.id);

        let response = app.clone().oneshot(get(&uri)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, "WELCOME_ADA");

        for _ in 0..2 {
            let response = app.clone().oneshot(get(&uri)).await.unwrap();
            assert_eq!(body_text(response).await, "ALREADY_IN_ADA");
        }

        let record = attendee::Model::find(state.db(), f.event.id, f.ada.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(record.status, attendee::AttendeeStatus::Present);
        let history = scan_history::Model::find_for_pair(state.db(), f.event.id, f.ada.id)
            .await
            .unwrap();
        assert_eq!(history.len(), 1);
    }

    #[tokio::test]
    #[serial]
    async fn lowercase_eventid_query_is_accepted() {
        let (app, state) = make_test_app().await;
        let f = seed_fixture(state.db()).await;

        let uri = format!("/api/scan-card/CARD001?eventid={}", f.event.id);
        let response = app.oneshot(get(&uri)).await.unwrap();
        assert_eq!(body_text(response).await, "WELCOME_ADA");
        assert!(attendee::Model::find(state.db(), f.event.id, f.ada.id)
            .await
            .unwrap()
            .is_some());
    }

    #[tokio::test]
    #[serial]
    async fn missing_event_id_greets_unless_required() {
        let (app, state) = make_test_app().await;
        seed_fixture(state.db()).await;

        let response = app.clone().oneshot(get("/api/scan-card/CARD001")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, "WELCOME_ADA");

        config::AppConfig::set_scan_requires_event_id(true);
        let response = app.oneshot(get("/api/scan-card/CARD001")).await.unwrap();
        config::AppConfig::set_scan_requires_event_id(false);

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_text(response).await, "MISSING_EVENT_ID");
    }

    #[tokio::test]
    #[serial]
    async fn bad_or_unknown_event_ids() {
        let (app, state) = make_test_app().await;
        seed_fixture(state.db()).await;

        let response = app
            .clone()
            .oneshot(get("/api/scan-card/CARD001?eventId=abc"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_text(response).await, "INVALID_EVENT_ID");

        let response = app
            .oneshot(get("/api/scan-card/CARD001?eventId=9999"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_text(response).await, "EVENT_NOT_FOUND");
    }
}
