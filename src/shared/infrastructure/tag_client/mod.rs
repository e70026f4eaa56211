// Outbound port to the tag service.
//
// Tags are owned elsewhere. This side only asks whether one exists and fetches
// its display record, which is passed through as opaque JSON.

pub mod in_memory;
pub mod tag_client_http;

use async_trait::async_trait;
use thiserror::Error;

pub type TagId = i32;

#[derive(Debug, Error)]
pub enum TagClientError {
    #[error("tag {0} not found")]
    NotFound(TagId),

    #[error("tag service request failed: {0}")]
    Transport(String),

    #[error("unexpected tag service response: {0}")]
    InvalidResponse(String),
}

#[async_trait]
pub trait TagClient: Send + Sync {
    async fn is_tag_exists(
        &self,
        tag_id: TagId,
        conceal_private_key: bool,
    ) -> Result<bool, TagClientError>;

    async fn get_tag(
        &self,
        tag_id: TagId,
        conceal_private_key: bool,
    ) -> Result<serde_json::Value, TagClientError>;
}
