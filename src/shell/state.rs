use std::sync::Arc;

use anyhow::Context;

use crate::modules::assignments::adapters::outbound::assignment_repository::AssignmentRepository;
use crate::modules::assignments::adapters::outbound::assignment_repository_in_memory::InMemoryAssignmentRepository;
use crate::modules::assignments::adapters::outbound::assignment_repository_postgres::PostgresAssignmentRepository;
use crate::modules::assignments::service::event_driven::EventDrivenAssignmentService;
use crate::modules::assignments::service::port::AssignmentService;
use crate::modules::assignments::service::store_backed::StoreBackedAssignmentService;
use crate::shared::infrastructure::event_publisher::rabbitmq_http::RabbitMqHttpPublisher;
use crate::shared::infrastructure::tag_client::TagClient;
use crate::shared::infrastructure::tag_client::tag_client_http::HttpTagClient;
use crate::shell::config::{AppConfig, ServiceMode};

#[derive(Clone)]
pub struct AppState {
    pub assignments: Arc<dyn AssignmentService>,
}

impl AppState {
    pub fn new(assignments: Arc<dyn AssignmentService>) -> Self {
        Self { assignments }
    }

    /// Wires the concrete adapters named by `config` into the selected lifecycle variant.
    pub async fn from_config(config: &AppConfig) -> anyhow::Result<Self> {
        let tag_client: Arc<dyn TagClient> = Arc::new(
            HttpTagClient::new(&config.tag_service_url, config.outbound_timeout)
                .context("building tag service client")?,
        );

        let repository: Arc<dyn AssignmentRepository> = match &config.database_url {
            Some(url) => Arc::new(
                PostgresAssignmentRepository::connect(url)
                    .await
                    .context("connecting to the assignment store")?,
            ),
            None => {
                tracing::warn!("DATABASE_URL not set, falling back to the in-memory store");
                Arc::new(InMemoryAssignmentRepository::new())
            }
        };

        let assignments: Arc<dyn AssignmentService> = match config.service_mode {
            ServiceMode::Synchronous => Arc::new(StoreBackedAssignmentService::new(
                repository,
                tag_client,
                config.list_enrichment,
            )),
            ServiceMode::EventDriven => {
                let rabbitmq = &config.rabbitmq;
                let publisher = RabbitMqHttpPublisher::new(
                    &rabbitmq.management_url,
                    &rabbitmq.vhost,
                    &rabbitmq.username,
                    &rabbitmq.password,
                    config.outbound_timeout,
                )
                .context("building rabbitmq publisher")?;
                Arc::new(EventDrivenAssignmentService::new(
                    repository,
                    tag_client,
                    Arc::new(publisher),
                    &rabbitmq.assignment_exchange,
                    config.list_enrichment,
                ))
            }
        };

        tracing::info!(mode = ?config.service_mode, "assignment service wired");
        Ok(Self::new(assignments))
    }
}
