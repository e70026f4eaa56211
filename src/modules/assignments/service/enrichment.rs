// Store access decorated with tag data, shared by both service variants.
//
// Enrichment policy
// - List: best effort. A failing tag fetch is logged and the item is kept
//   without a tag or dropped, depending on ListEnrichmentPolicy.
// - Single item and update: a failing tag fetch fails the call.

use crate::modules::assignments::adapters::outbound::assignment_repository::AssignmentRepository;
use crate::modules::assignments::core::assignment::AssignmentId;
use crate::modules::assignments::core::errors::AssignmentError;
use crate::modules::assignments::core::projection::AssignmentPublic;
use crate::modules::assignments::core::requests::UpdateAssignmentRequest;
use crate::shared::infrastructure::tag_client::{TagClient, TagId};
use std::str::FromStr;
use std::sync::Arc;

/// Tag records handed out by this service never carry private keys.
pub const CONCEAL_PRIVATE_KEY: bool = true;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ListEnrichmentPolicy {
    KeepWithoutTag,
    #[default]
    Drop,
}

impl FromStr for ListEnrichmentPolicy {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "keep" => Ok(Self::KeepWithoutTag),
            "drop" => Ok(Self::Drop),
            other => Err(format!("unknown list enrichment policy: {other}")),
        }
    }
}

pub async fn ensure_tag_exists(
    tag_client: &dyn TagClient,
    tag_id: TagId,
) -> Result<(), AssignmentError> {
    let exists = tag_client
        .is_tag_exists(tag_id, CONCEAL_PRIVATE_KEY)
        .await
        .inspect_err(|err| tracing::error!(tag_id, error = %err, "tag existence check failed"))?;
    if !exists {
        tracing::warn!(tag_id, "referenced tag does not exist");
        return Err(AssignmentError::TagNotFound(tag_id));
    }
    Ok(())
}

pub struct TagEnrichedStore {
    repository: Arc<dyn AssignmentRepository>,
    tag_client: Arc<dyn TagClient>,
    list_policy: ListEnrichmentPolicy,
}

impl TagEnrichedStore {
    pub fn new(
        repository: Arc<dyn AssignmentRepository>,
        tag_client: Arc<dyn TagClient>,
        list_policy: ListEnrichmentPolicy,
    ) -> Self {
        Self {
            repository,
            tag_client,
            list_policy,
        }
    }

    pub fn repository(&self) -> &dyn AssignmentRepository {
        self.repository.as_ref()
    }

    pub fn tag_client(&self) -> &dyn TagClient {
        self.tag_client.as_ref()
    }

    pub async fn fetch_tag(&self, tag_id: TagId) -> Result<serde_json::Value, AssignmentError> {
        self.tag_client
            .get_tag(tag_id, CONCEAL_PRIVATE_KEY)
            .await
            .map_err(|err| {
                tracing::warn!(tag_id, error = %err, "fetching tag failed");
                AssignmentError::TagService(err)
            })
    }

    pub async fn list(&self, from_present: bool) -> Result<Vec<AssignmentPublic>, AssignmentError> {
        let assignments = self.repository.get_all(from_present).await?;
        let mut results = Vec::with_capacity(assignments.len());
        for assignment in &assignments {
            match self.fetch_tag(assignment.tag_id).await {
                Ok(tag) => results.push(AssignmentPublic::from_assignment(assignment, Some(tag))),
                Err(_) => match self.list_policy {
                    ListEnrichmentPolicy::KeepWithoutTag => {
                        results.push(AssignmentPublic::from_assignment(assignment, None))
                    }
                    ListEnrichmentPolicy::Drop => {
                        tracing::warn!(
                            assignment_id = assignment.id,
                            "dropping assignment from list without tag data"
                        );
                    }
                },
            }
        }
        Ok(results)
    }

    pub async fn get(&self, id: AssignmentId) -> Result<AssignmentPublic, AssignmentError> {
        let assignment = self.repository.get_by_id(id).await?;
        let tag = self.fetch_tag(assignment.tag_id).await?;
        Ok(AssignmentPublic::from_assignment(&assignment, Some(tag)))
    }

    pub async fn update(
        &self,
        update: &UpdateAssignmentRequest,
        id: AssignmentId,
    ) -> Result<AssignmentPublic, AssignmentError> {
        let mut assignment = self.repository.get_by_id(id).await?;
        if let Some(tag_id) = update.parsed_tag_id() {
            ensure_tag_exists(self.tag_client.as_ref(), tag_id).await?;
        }
        update.apply_to(&mut assignment);
        self.repository.update(&assignment).await?;
        tracing::info!(assignment_id = id, "assignment updated");

        let tag = self.fetch_tag(assignment.tag_id).await?;
        Ok(AssignmentPublic::from_assignment(&assignment, Some(tag)))
    }
}
