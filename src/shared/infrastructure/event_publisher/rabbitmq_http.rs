use crate::shared::infrastructure::event_publisher::{EventPublisher, PublishError};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use uuid::Uuid;

#[derive(Serialize)]
struct RabbitMqMessageProperties {
    content_type: &'static str,
    message_id: String,
    delivery_mode: u8,
}

#[derive(Serialize)]
struct RabbitMqPublishBody {
    properties: RabbitMqMessageProperties,
    routing_key: String,
    payload: String,
    payload_encoding: &'static str,
}

#[derive(Deserialize)]
struct RabbitMqPublishResponse {
    routed: bool,
}

/// Publishes through the RabbitMQ management HTTP API, one request per routing key.
#[derive(Debug, Clone)]
pub struct RabbitMqHttpPublisher {
    client: Client,
    management_url: String,
    vhost: String,
    username: String,
    password: String,
}

impl RabbitMqHttpPublisher {
    pub fn new(
        management_url: impl Into<String>,
        vhost: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, PublishError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| PublishError::Backend(err.to_string()))?;
        Ok(Self {
            client,
            management_url: management_url.into().trim_end_matches('/').to_string(),
            vhost: vhost.into(),
            username: username.into(),
            password: password.into(),
        })
    }

    fn publish_url(&self, exchange: &str) -> String {
        format!(
            "{}/api/exchanges/{}/{}/publish",
            self.management_url,
            encode_path_segment(&self.vhost),
            encode_path_segment(exchange)
        )
    }
}

fn encode_path_segment(segment: &str) -> String {
    segment.replace('%', "%25").replace('/', "%2F")
}

#[async_trait]
impl EventPublisher for RabbitMqHttpPublisher {
    async fn publish(
        &self,
        payload: &[u8],
        routing_keys: &[&str],
        exchange: &str,
    ) -> Result<(), PublishError> {
        let payload = std::str::from_utf8(payload)
            .map_err(|err| PublishError::Serialization(err.to_string()))?;
        let url = self.publish_url(exchange);

        for routing_key in routing_keys {
            let body = RabbitMqPublishBody {
                properties: RabbitMqMessageProperties {
                    content_type: "application/json",
                    message_id: Uuid::now_v7().to_string(),
                    delivery_mode: 2,
                },
                routing_key: routing_key.to_string(),
                payload: payload.to_string(),
                payload_encoding: "string",
            };

            let response = self
                .client
                .post(&url)
                .basic_auth(&self.username, Some(&self.password))
                .json(&body)
                .send()
                .await
                .map_err(|err| PublishError::Backend(err.to_string()))?
                .error_for_status()
                .map_err(|err| PublishError::Rejected(err.to_string()))?;

            let outcome: RabbitMqPublishResponse = response
                .json()
                .await
                .map_err(|err| PublishError::Backend(err.to_string()))?;
            if !outcome.routed {
                tracing::warn!(exchange, routing_key, "message was not routed to any queue");
            }
        }

        Ok(())
    }
}
