#[cfg(test)]
mod tests {
    use crate::helpers::app::{body_json, body_text, get, json, make_test_app, seed_fixture};
    use axum::http::StatusCode;
    use db::models::{attendee, user};
    use serde_json::json;
    use serial_test::serial;
    use tower::ServiceExt;

    #[tokio::test]
    #[serial]
    async fn registers_new_card_and_checks_in() {
        let (app, state) = make_test_app().await;
        let f = seed_fixture(state.db()).await;

        let body = json!({
            "firstName": "Grace",
            "lastName": "Hopper",
            "email": "grace@example.com",
            "cardId": "CARD777",
            "password": "hunter2",
            "eventId": f.event.id.to_string(),
        });
        let response = app
            .clone()
            .oneshot(json("POST", "/api/register-user", body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let json = body_json(response).await;
        assert_eq!(json["success"], true);
        assert_eq!(json["message"], "Registration and Check-in successful!");
        assert_eq!(json["data"]["checked_in"], true);

        let grace = user::Model::find_by_email(state.db(), "grace@example.com")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(grace.card_token.as_deref(), Some("CARD777"));
        assert!(grace.verify_password("hunter2"));

        let record = attendee::Model::find(state.db(), f.event.id, grace.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(record.status, attendee::AttendeeStatus::Present);

        let uri = format!("/api/scan-card/CARD777?eventId={}", f.event.id);
        let response = app.oneshot(get(&uri)).await.unwrap();
        assert_eq!(body_text(response).await, "ALREADY_IN_GRACE");
    }

    #[tokio::test]
    #[serial]
    async fn registers_without_event() {
        let (app, _) = make_test_app().await;

        let body = json!({
            "firstName": "Grace",
            "lastName": "Hopper",
            "email": "grace@example.com",
            "cardId": "CARD777",
            "password": "hunter2",
            "eventId": "",
        });
        let response = app.oneshot(json("POST", "/api/register-user", body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let json = body_json(response).await;
        assert_eq!(json["data"]["checked_in"], false);
    }

    #[tokio::test]
    #[serial]
    async fn duplicate_email_is_conflict() {
        let (app, state) = make_test_app().await;
        seed_fixture(state.db()).await;

        let body = json!({
            "firstName": "Ada",
            "lastName": "Again",
            "email": "ada@example.com",
            "cardId": "CARD778",
            "password": "pw",
        });
        let response = app.oneshot(json("POST", "/api/register-user", body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::CONFLICT);
        let json = body_json(response).await;
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "Email is already in use");
    }

    #[tokio::test]
    #[serial]
    async fn missing_fields_are_rejected() {
        let (app, _) = make_test_app().await;

        let response = app
            .oneshot(json("POST", "/api/register-user", json!({ "firstName": "Grace" })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["message"], "Missing required fields.");
    }
}
