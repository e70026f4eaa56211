// Outbound port for publishing messages to a broker exchange.
//
// Responsibilities
// - Deliver a serialized payload to an exchange once per routing key.
// - Report failures synchronously. Delivery after acceptance belongs to the broker.
//
// A call with several routing keys is not atomic. Keys are sent in order and
// the first failure ends the call, so earlier keys may already be delivered.
// Callers that need all-or-nothing publish one key per call.

pub mod in_memory;
pub mod rabbitmq_http;

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PublishError {
    #[error("failed to serialize message: {0}")]
    Serialization(String),

    #[error("broker rejected message: {0}")]
    Rejected(String),

    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait EventPublisher: Send + Sync {
    async fn publish(
        &self,
        payload: &[u8],
        routing_keys: &[&str],
        exchange: &str,
    ) -> Result<(), PublishError>;
}
