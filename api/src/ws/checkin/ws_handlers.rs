use super::common::CheckinIncoming;
use serde_json::json;
use util::ws::handler_trait::WsHandler;
use util::ws::runtime::WsContext;

pub struct CheckinWsHandler;

impl WsHandler for CheckinWsHandler {
    type In = CheckinIncoming;

    async fn on_message(&self, ctx: &WsContext, msg: Self::In) {
        match msg {
            CheckinIncoming::Viewers => {
                let count = ctx.ws.subscriber_count(&ctx.topic).await;
                let _ = ctx
                    .reply_text(
                        json!({
                            "event": "viewers",
                            "topic": ctx.topic,
                            "payload": { "count": count },
                            "ts": chrono::Utc::now().to_rfc3339(),
                        })
                        .to_string(),
                    )
                    .await;
            }
        }
    }
}
