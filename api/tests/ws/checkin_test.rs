#[cfg(test)]
mod tests {
    use crate::helpers::app::{body_text, get, make_test_app, seed_fixture};
    use crate::helpers::{connect_ws, spawn_server};
    use futures::{SinkExt, StreamExt};
    use serde_json::Value;
    use serial_test::serial;
    use std::time::Duration;
    use tokio::time::timeout;
    use tokio_tungstenite::tungstenite::Message;
    use tower::ServiceExt;

    async fn next_json<S>(ws: &mut S) -> Value
    where
        S: StreamExt<Item = Result<Message, tokio_tungstenite::tungstenite::Error>> + Unpin,
    {
        loop {
            let msg = timeout(Duration::from_secs(2), ws.next())
                .await
                .expect("timed out waiting for frame")
                .expect("socket closed")
                .expect("socket error");
            if let Message::Text(text) = msg {
                return serde_json::from_str(text.as_str()).unwrap();
            }
        }
    }

    #[tokio::test]
    #[serial]
    async fn scan_is_announced_to_viewers() {
        let (app, state) = make_test_app().await;
        let f = seed_fixture(state.db()).await;
        let addr = spawn_server(app.clone()).await;

        let (mut global, _) = connect_ws(&addr.to_string(), "announcements").await.unwrap();
        let (mut scoped, _) = connect_ws(&addr.to_string(), &format!("events/{}", f.event.id))
            .await
            .unwrap();

        // A pong proves the socket is subscribed before we scan.
        for ws in [&mut global, &mut scoped] {
            ws.send(Message::Text(r#"{"type":"ping"}"#.into())).await.unwrap();
            assert_eq!(next_json(ws).await["event"], "pong");
        }

        let uri = format!("/api/scan-card/CARD001?eventId={}", f.event.id);
        let response = app.oneshot(get(&uri)).await.unwrap();
        assert_eq!(body_text(response).await, "WELCOME_ADA");

        let g = next_json(&mut global).await;
        assert_eq!(g["type"], "event");
        assert_eq!(g["topic"], "announcements");
        assert_eq!(g["payload"]["message"], "Welcome, Ada! (Auto-Registered)");

        let s = next_json(&mut scoped).await;
        assert_eq!(s["topic"], format!("events:{}:checkin", f.event.id));
        assert_eq!(s["payload"]["kind"], "auto_registered");
    }

    #[tokio::test]
    #[serial]
    async fn viewers_query_reports_subscriber_count() {
        let (app, _) = make_test_app().await;
        let addr = spawn_server(app).await;

        let (mut ws, _) = connect_ws(&addr.to_string(), "announcements").await.unwrap();
        ws.send(Message::Text(r#"{"type":"viewers"}"#.into())).await.unwrap();

        let reply = next_json(&mut ws).await;
        assert_eq!(reply["event"], "viewers");
        assert_eq!(reply["payload"]["count"], 1);
    }

    #[tokio::test]
    #[serial]
    async fn unknown_event_socket_is_refused() {
        let (app, _) = make_test_app().await;
        let addr = spawn_server(app).await;

        assert!(connect_ws(&addr.to_string(), "events/9999").await.is_err());
    }
}
