use crate::shared::infrastructure::event_publisher::{EventPublisher, PublishError};
use tokio::sync::Mutex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishedMessage {
    pub exchange: String,
    pub routing_key: String,
    pub payload: Vec<u8>,
}

impl PublishedMessage {
    pub fn payload_json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.payload).unwrap_or(serde_json::Value::Null)
    }
}

#[derive(Default)]
pub struct InMemoryEventPublisher {
    pub messages: Mutex<Vec<PublishedMessage>>,
    is_offline: bool,
}

impl InMemoryEventPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    pub async fn published(&self) -> Vec<PublishedMessage> {
        self.messages.lock().await.clone()
    }
}

#[async_trait::async_trait]
impl EventPublisher for InMemoryEventPublisher {
    async fn publish(
        &self,
        payload: &[u8],
        routing_keys: &[&str],
        exchange: &str,
    ) -> Result<(), PublishError> {
        if self.is_offline {
            return Err(PublishError::Backend("Broker offline".into()));
        }
        let mut messages = self.messages.lock().await;
        for routing_key in routing_keys {
            messages.push(PublishedMessage {
                exchange: exchange.to_string(),
                routing_key: routing_key.to_string(),
                payload: payload.to_vec(),
            });
        }
        Ok(())
    }
}
