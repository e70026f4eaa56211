use crate::modules::assignments::core::assignment::{Assignment, AssignmentId};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("assignment {0} not found")]
    NotFound(AssignmentId),

    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait AssignmentRepository: Send + Sync {
    /// Persists a new record and returns it with the store-assigned id.
    async fn create(&self, assignment: &Assignment) -> Result<Assignment, StoreError>;

    /// All records, or only those due at or after now when `from_present` is set.
    async fn get_all(&self, from_present: bool) -> Result<Vec<Assignment>, StoreError>;

    async fn get_by_id(&self, id: AssignmentId) -> Result<Assignment, StoreError>;

    /// Full overwrite of the record with the same id.
    async fn update(&self, assignment: &Assignment) -> Result<(), StoreError>;

    async fn delete(&self, id: AssignmentId) -> Result<(), StoreError>;
}
