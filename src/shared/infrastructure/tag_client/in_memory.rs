// In memory tag service used by tests and local development.
//
// Tags can be registered, marked as failing (existence succeeds, fetch errors)
// or the whole client can be taken offline. Every call is counted.

use crate::shared::infrastructure::tag_client::{TagClient, TagClientError, TagId};
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryTagClient {
    tags: RwLock<HashMap<TagId, serde_json::Value>>,
    failing_fetches: RwLock<HashSet<TagId>>,
    calls: AtomicUsize,
    is_offline: bool,
}

impl InMemoryTagClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn with_tag(self, tag_id: TagId, payload: serde_json::Value) -> Self {
        self.tags.write().await.insert(tag_id, payload);
        self
    }

    pub async fn insert(&self, tag_id: TagId, payload: serde_json::Value) {
        self.tags.write().await.insert(tag_id, payload);
    }

    pub async fn fail_fetch_for(&self, tag_id: TagId) {
        self.failing_fetches.write().await.insert(tag_id);
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn record_call(&self) -> Result<(), TagClientError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.is_offline {
            return Err(TagClientError::Transport("Tag service offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl TagClient for InMemoryTagClient {
    async fn is_tag_exists(
        &self,
        tag_id: TagId,
        _conceal_private_key: bool,
    ) -> Result<bool, TagClientError> {
        self.record_call()?;
        Ok(self.tags.read().await.contains_key(&tag_id))
    }

    async fn get_tag(
        &self,
        tag_id: TagId,
        _conceal_private_key: bool,
    ) -> Result<serde_json::Value, TagClientError> {
        self.record_call()?;
        if self.failing_fetches.read().await.contains(&tag_id) {
            return Err(TagClientError::Transport(format!(
                "fetching tag {tag_id} failed"
            )));
        }
        self.tags
            .read()
            .await
            .get(&tag_id)
            .cloned()
            .ok_or(TagClientError::NotFound(tag_id))
    }
}
