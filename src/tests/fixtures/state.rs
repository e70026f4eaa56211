// Application state wired with in memory adapters, for handler and e2e tests.

use crate::modules::assignments::adapters::outbound::assignment_repository_in_memory::InMemoryAssignmentRepository;
use crate::modules::assignments::service::enrichment::ListEnrichmentPolicy;
use crate::modules::assignments::service::event_driven::EventDrivenAssignmentService;
use crate::modules::assignments::service::store_backed::StoreBackedAssignmentService;
use crate::shared::infrastructure::event_publisher::in_memory::InMemoryEventPublisher;
use crate::shared::infrastructure::tag_client::in_memory::InMemoryTagClient;
use crate::shell::state::AppState;
use serde_json::json;
use std::sync::Arc;

pub const EXCHANGE: &str = "assignment";
pub const USER: &str = "user-fixed-0001";

pub struct TestContext {
    pub repository: Arc<InMemoryAssignmentRepository>,
    pub tags: Arc<InMemoryTagClient>,
    pub publisher: Arc<InMemoryEventPublisher>,
    pub state: AppState,
}

pub struct TestContextBuilder {
    repository: InMemoryAssignmentRepository,
    tags: InMemoryTagClient,
    publisher: InMemoryEventPublisher,
    policy: ListEnrichmentPolicy,
}

impl Default for TestContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl TestContextBuilder {
    pub fn new() -> Self {
        Self {
            repository: InMemoryAssignmentRepository::new(),
            tags: InMemoryTagClient::new(),
            publisher: InMemoryEventPublisher::new(),
            policy: ListEnrichmentPolicy::Drop,
        }
    }

    pub fn store_offline(mut self) -> Self {
        self.repository.toggle_offline();
        self
    }

    pub fn tags_offline(mut self) -> Self {
        self.tags.toggle_offline();
        self
    }

    pub fn broker_offline(mut self) -> Self {
        self.publisher.toggle_offline();
        self
    }

    pub fn policy(mut self, policy: ListEnrichmentPolicy) -> Self {
        self.policy = policy;
        self
    }

    async fn parts(
        self,
    ) -> (
        Arc<InMemoryAssignmentRepository>,
        Arc<InMemoryTagClient>,
        Arc<InMemoryEventPublisher>,
        ListEnrichmentPolicy,
    ) {
        let tags = self
            .tags
            .with_tag(5, json!({"id": 5, "name": "Math"}))
            .await;
        (
            Arc::new(self.repository),
            Arc::new(tags),
            Arc::new(self.publisher),
            self.policy,
        )
    }

    pub async fn store_backed(self) -> TestContext {
        let (repository, tags, publisher, policy) = self.parts().await;
        let service =
            StoreBackedAssignmentService::new(repository.clone(), tags.clone(), policy);
        TestContext {
            repository,
            tags,
            publisher,
            state: AppState::new(Arc::new(service)),
        }
    }

    pub async fn event_driven(self) -> TestContext {
        let (repository, tags, publisher, policy) = self.parts().await;
        let service = EventDrivenAssignmentService::new(
            repository.clone(),
            tags.clone(),
            publisher.clone(),
            EXCHANGE,
            policy,
        );
        TestContext {
            repository,
            tags,
            publisher,
            state: AppState::new(Arc::new(service)),
        }
    }
}
