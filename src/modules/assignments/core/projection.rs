use crate::modules::assignments::core::assignment::Assignment;
use crate::modules::assignments::core::reminder_time;
use crate::shared::core::primitives::EpochMillis;
use serde::{Deserialize, Serialize};

/// Public view of an assignment. `id` is `None` while the record only exists as
/// a published create event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentPublic {
    pub id: Option<String>,
    pub name: String,
    pub author: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    pub due_date: EpochMillis,
    pub tag: Option<serde_json::Value>,
    pub reminder_time: Vec<i64>,
}

impl AssignmentPublic {
    pub fn from_assignment(assignment: &Assignment, tag: Option<serde_json::Value>) -> Self {
        Self {
            id: Some(assignment.id.to_string()),
            ..Self::pending(assignment, tag)
        }
    }

    pub fn pending(assignment: &Assignment, tag: Option<serde_json::Value>) -> Self {
        Self {
            id: None,
            name: assignment.name.clone(),
            author: assignment.author.clone(),
            description: assignment.description.clone(),
            due_date: assignment.due_date,
            tag,
            reminder_time: reminder_time::decode(&assignment.reminder_time, assignment.id),
        }
    }
}

/// List envelope. Cursors are part of the shape but always null.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulkResponse<T> {
    pub count: usize,
    pub previous: Option<String>,
    pub next: Option<String>,
    pub results: Vec<T>,
}

impl<T> From<Vec<T>> for BulkResponse<T> {
    fn from(results: Vec<T>) -> Self {
        Self {
            count: results.len(),
            previous: None,
            next: None,
            results,
        }
    }
}
