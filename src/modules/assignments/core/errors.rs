use crate::modules::assignments::adapters::outbound::assignment_repository::StoreError;
use crate::modules::assignments::core::assignment::AssignmentId;
use crate::shared::infrastructure::event_publisher::PublishError;
use crate::shared::infrastructure::tag_client::{TagClientError, TagId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssignmentError {
    #[error("validation failed: {0}")]
    Validation(String),

    #[error("tag {0} not found")]
    TagNotFound(TagId),

    #[error(transparent)]
    TagService(#[from] TagClientError),

    #[error("assignment {0} not found")]
    NotFound(AssignmentId),

    #[error(transparent)]
    Store(StoreError),

    #[error(transparent)]
    Publish(#[from] PublishError),
}

impl From<StoreError> for AssignmentError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => AssignmentError::NotFound(id),
            other => AssignmentError::Store(other),
        }
    }
}
