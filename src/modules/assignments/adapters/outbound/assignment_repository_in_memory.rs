// In memory implementation of the AssignmentRepository port.
//
// Purpose
// - Support service and handler tests and local development without a database.
//
// Responsibilities
// - Assign increasing ids starting at 1.
// - Filter on due date against the current clock when asked for present records.

use crate::modules::assignments::adapters::outbound::assignment_repository::{
    AssignmentRepository, StoreError,
};
use crate::modules::assignments::core::assignment::{Assignment, AssignmentId};
use crate::shared::core::primitives::now_millis;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::RwLock;

pub struct InMemoryAssignmentRepository {
    inner: RwLock<BTreeMap<AssignmentId, Assignment>>,
    next_id: RwLock<AssignmentId>,
    writes: AtomicUsize,
    is_offline: bool,
}

impl Default for InMemoryAssignmentRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryAssignmentRepository {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(BTreeMap::new()),
            next_id: RwLock::new(1),
            writes: AtomicUsize::new(0),
            is_offline: false,
        }
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    /// Number of create, update and delete calls that reached the store.
    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    pub async fn snapshot(&self) -> Vec<Assignment> {
        self.inner.read().await.values().cloned().collect()
    }

    fn ensure_online(&self) -> Result<(), StoreError> {
        if self.is_offline {
            return Err(StoreError::Backend("Store offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl AssignmentRepository for InMemoryAssignmentRepository {
    async fn create(&self, assignment: &Assignment) -> Result<Assignment, StoreError> {
        self.ensure_online()?;
        self.writes.fetch_add(1, Ordering::SeqCst);
        let mut next_id = self.next_id.write().await;
        let created = Assignment {
            id: *next_id,
            ..assignment.clone()
        };
        *next_id += 1;
        self.inner.write().await.insert(created.id, created.clone());
        Ok(created)
    }

    async fn get_all(&self, from_present: bool) -> Result<Vec<Assignment>, StoreError> {
        self.ensure_online()?;
        let now = now_millis();
        Ok(self
            .inner
            .read()
            .await
            .values()
            .filter(|assignment| !from_present || assignment.is_due_from(now))
            .cloned()
            .collect())
    }

    async fn get_by_id(&self, id: AssignmentId) -> Result<Assignment, StoreError> {
        self.ensure_online()?;
        self.inner
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    async fn update(&self, assignment: &Assignment) -> Result<(), StoreError> {
        self.ensure_online()?;
        self.writes.fetch_add(1, Ordering::SeqCst);
        let mut guard = self.inner.write().await;
        match guard.get_mut(&assignment.id) {
            Some(existing) => {
                *existing = assignment.clone();
                Ok(())
            }
            None => Err(StoreError::NotFound(assignment.id)),
        }
    }

    async fn delete(&self, id: AssignmentId) -> Result<(), StoreError> {
        self.ensure_online()?;
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.inner
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound(id))
    }
}
