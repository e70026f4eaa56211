use crate::modules::assignments::adapters::outbound::assignment_repository::AssignmentRepository;
use crate::modules::assignments::core::assignment::{
    Assignment, AssignmentDeleteRequest, AssignmentId,
};
use crate::modules::assignments::core::errors::AssignmentError;
use crate::modules::assignments::core::projection::AssignmentPublic;
use crate::modules::assignments::core::requests::UpdateAssignmentRequest;
use crate::modules::assignments::service::enrichment::{
    ListEnrichmentPolicy, TagEnrichedStore, ensure_tag_exists,
};
use crate::modules::assignments::service::port::AssignmentService;
use crate::shared::infrastructure::event_publisher::{EventPublisher, PublishError};
use crate::shared::infrastructure::tag_client::TagClient;
use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;

pub const CREATE_ROUTING_KEY: &str = "create";
pub const DELETE_ROUTING_KEY: &str = "delete";

/// Event driven variant: creates and deletes are published to the exchange and
/// persisted by a downstream consumer. Reads and updates use the store.
pub struct EventDrivenAssignmentService {
    store: TagEnrichedStore,
    publisher: Arc<dyn EventPublisher>,
    exchange: String,
}

impl EventDrivenAssignmentService {
    pub fn new(
        repository: Arc<dyn AssignmentRepository>,
        tag_client: Arc<dyn TagClient>,
        publisher: Arc<dyn EventPublisher>,
        exchange: impl Into<String>,
        list_policy: ListEnrichmentPolicy,
    ) -> Self {
        Self {
            store: TagEnrichedStore::new(repository, tag_client, list_policy),
            publisher,
            exchange: exchange.into(),
        }
    }

    async fn publish<T: Serialize + Sync>(
        &self,
        message: &T,
        routing_key: &str,
    ) -> Result<(), AssignmentError> {
        let payload = serde_json::to_vec(message)
            .map_err(|err| PublishError::Serialization(err.to_string()))?;
        self.publisher
            .publish(&payload, &[routing_key], &self.exchange)
            .await
            .inspect_err(|err| {
                tracing::error!(routing_key, exchange = %self.exchange, error = %err, "publish failed")
            })?;
        Ok(())
    }
}

#[async_trait]
impl AssignmentService for EventDrivenAssignmentService {
    #[tracing::instrument(skip(self, draft), fields(tag_id = draft.tag_id))]
    async fn create_assignment(
        &self,
        draft: Assignment,
    ) -> Result<AssignmentPublic, AssignmentError> {
        ensure_tag_exists(self.store.tag_client(), draft.tag_id).await?;
        self.publish(&draft, CREATE_ROUTING_KEY).await?;
        tracing::info!("assignment create published");
        Ok(AssignmentPublic::pending(&draft, None))
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
        self.publish(&AssignmentDeleteRequest { id }, DELETE_ROUTING_KEY)
            .await?;
        tracing::info!(assignment_id = id, "assignment delete published");
        Ok(())
    }
}
