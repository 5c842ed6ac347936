use super::{
    AndroidConfig, Error, Message, MessageContent, MessageNotification, NotificationsService,
    NotificationsServiceConfig,
};
use crate::service::access_token_service::AccessTokenService;
use axum::async_trait;
use serde_json::Value;
use std::sync::Arc;

pub struct NotificationsServiceImpl {
    config: NotificationsServiceConfig,
    access_token_service: Arc<dyn AccessTokenService>,
    http_client: reqwest::Client,
}

impl NotificationsServiceImpl {
    pub fn new(
        config: NotificationsServiceConfig,
        access_token_service: Arc<dyn AccessTokenService>,
        http_client: reqwest::Client,
    ) -> Self {
        Self {
            config,
            access_token_service,
            http_client,
        }
    }

    fn send_url(&self) -> String {
        format!(
            "{}/v1/projects/{}/messages:send",
            self.config.fcm_endpoint, self.config.project_id
        )
    }
}

#[async_trait]
impl NotificationsService for NotificationsServiceImpl {
    async fn send(&self, token: String, title: String, body: String) -> Result<Value, Error> {
        tracing::info!("sending notification");

        let access_token = self.access_token_service.mint().await?;

        let message = Message {
            message: MessageContent {
                token,
                notification: MessageNotification { title, body },
                android: AndroidConfig { priority: "high" },
            },
        };

        let response = self
            .http_client
            .post(self.send_url())
            .bearer_auth(access_token)
            .json(&message)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let details = serde_json::from_str(&text).unwrap_or(Value::String(text));
            tracing::warn!(%status, "provider rejected message");

            return Err(Error::Rejected { status, details });
        }

        let result = response.json::<Value>().await?;
        tracing::info!("notification sent");

        Ok(result)
    }
}
