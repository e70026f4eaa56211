// Assignment lifecycle as seen by the inbound adapters.
//
// Two implementations exist and one is chosen when the shell is composed:
// - StoreBackedAssignmentService writes the store directly.
// - EventDrivenAssignmentService publishes create and delete events instead.

use crate::modules::assignments::core::assignment::{Assignment, AssignmentId};
use crate::modules::assignments::core::errors::AssignmentError;
use crate::modules::assignments::core::projection::AssignmentPublic;
use crate::modules::assignments::core::requests::UpdateAssignmentRequest;
use async_trait::async_trait;

#[async_trait]
pub trait AssignmentService: Send + Sync {
    async fn create_assignment(
        &self,
        draft: Assignment,
    ) -> Result<AssignmentPublic, AssignmentError>;

    async fn get_all_assignments(
        &self,
        from_present: bool,
    ) -> Result<Vec<AssignmentPublic>, AssignmentError>;

    async fn get_assignment_by_id(
        &self,
        id: AssignmentId,
    ) -> Result<AssignmentPublic, AssignmentError>;

    async fn update_assignment(
        &self,
        update: UpdateAssignmentRequest,
        id: AssignmentId,
    ) -> Result<AssignmentPublic, AssignmentError>;

    async fn delete_assignment(&self, id: AssignmentId) -> Result<(), AssignmentError>;
}
