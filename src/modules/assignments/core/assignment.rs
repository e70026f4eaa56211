use crate::shared::core::primitives::EpochMillis;
use crate::shared::infrastructure::tag_client::TagId;
use serde::{Deserialize, Serialize};

pub type AssignmentId = i64;

pub const MAX_REMINDER_TIMES: usize = 3;

/// Storage shape of an assignment. `reminder_time` holds the comma separated
/// offsets exactly as persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    pub id: AssignmentId,
    pub name: String,
    pub author: String,
    pub description: String,
    pub due_date: EpochMillis,
    pub tag_id: TagId,
    pub reminder_time: String,
}

impl Assignment {
    pub fn is_due_from(&self, now: EpochMillis) -> bool {
        self.due_date >= now
    }
}

/// Payload of a "delete" event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentDeleteRequest {
    pub id: AssignmentId,
}
