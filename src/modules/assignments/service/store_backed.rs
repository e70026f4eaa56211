use crate::modules::assignments::adapters::outbound::assignment_repository::AssignmentRepository;
use crate::modules::assignments::core::assignment::{Assignment, AssignmentId};
use crate::modules::assignments::core::errors::AssignmentError;
use crate::modules::assignments::core::projection::AssignmentPublic;
use crate::modules::assignments::core::requests::UpdateAssignmentRequest;
use crate::modules::assignments::service::enrichment::{
    ListEnrichmentPolicy, TagEnrichedStore, ensure_tag_exists,
};
use crate::modules::assignments::service::port::AssignmentService;
use crate::shared::infrastructure::tag_client::TagClient;
use async_trait::async_trait;
use std::sync::Arc;

/// Synchronous variant: every write goes straight to the store.
pub struct StoreBackedAssignmentService {
    store: TagEnrichedStore,
}

impl StoreBackedAssignmentService {
    pub fn new(
        repository: Arc<dyn AssignmentRepository>,
        tag_client: Arc<dyn TagClient>,
        list_policy: ListEnrichmentPolicy,
    ) -> Self {
        Self {
            store: TagEnrichedStore::new(repository, tag_client, list_policy),
        }
    }
}

#[async_trait]
impl AssignmentService for StoreBackedAssignmentService {
    #[tracing::instrument(skip(self, draft), fields(tag_id = draft.tag_id))]
    async fn create_assignment(
        &self,
        draft: Assignment,
    ) -> Result<AssignmentPublic, AssignmentError> {
        ensure_tag_exists(self.store.tag_client(), draft.tag_id).await?;

        let created = self.store.repository().create(&draft).await?;
        tracing::info!(assignment_id = created.id, "assignment created");

        // The record is durable at this point; a missing tag only thins the response.
        let tag = self.store.fetch_tag(created.tag_id).await.ok();
        Ok(AssignmentPublic::from_assignment(&created, tag))
    }

    #[tracing::instrument(skip(self))]
    async fn get_all_assignments(
        &self,
        from_present: bool,
    ) -> Result<Vec<AssignmentPublic>, AssignmentError> {
        self.store.list(from_present).await
    }

    #[tracing::instrument(skip(self))]
    async fn get_assignment_by_id(
        &self,
        id: AssignmentId,
    ) -> Result<AssignmentPublic, AssignmentError> {
        self.store.get(id).await
    }

    #[tracing::instrument(skip(self, update))]
    async fn update_assignment(
        &self,
        update: UpdateAssignmentRequest,
        id: AssignmentId,
    ) -> Result<AssignmentPublic, AssignmentError> {
        self.store.update(&update, id).await
    }

    #[tracing::instrument(skip(self))]
    async fn delete_assignment(&self, id: AssignmentId) -> Result<(), AssignmentError> {
        self.store.repository().delete(id).await?;
        tracing::info!(assignment_id = id, "assignment deleted");
        Ok(())
    }
}
