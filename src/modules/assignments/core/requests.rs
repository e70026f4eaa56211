// Inbound request shapes and their mapping onto the storage record.
//
// - Create: `tagId` arrives as a string; anything unparsable becomes 0.
// - Update: only present fields overwrite; an unparsable `tagId` is ignored.

use crate::modules::assignments::core::assignment::{Assignment, MAX_REMINDER_TIMES};
use crate::modules::assignments::core::errors::AssignmentError;
use crate::modules::assignments::core::reminder_time;
use crate::shared::core::primitives::EpochMillis;
use crate::shared::infrastructure::tag_client::TagId;
use serde::{Deserialize, Deserializer};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentRequest {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub due_date: EpochMillis,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tag_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub reminder_time: Vec<i64>,
}

/// Explicit `null` reads the same as an absent field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl AssignmentRequest {
    pub fn validate(&self) -> Result<(), AssignmentError> {
        if self.name.trim().is_empty() {
            return Err(AssignmentError::Validation("name is required".into()));
        }
        validate_reminder_time(&self.reminder_time)
    }

    pub fn to_assignment(&self, author: &str) -> Assignment {
        Assignment {
            id: 0,
            name: self.name.clone(),
            author: author.to_string(),
            description: self.description.clone(),
            due_date: self.due_date,
            tag_id: self.tag_id.trim().parse().unwrap_or_default(),
            reminder_time: reminder_time::encode(&self.reminder_time),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAssignmentRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub due_date: Option<EpochMillis>,
    pub tag_id: Option<String>,
    pub reminder_time: Option<Vec<i64>>,
}

impl UpdateAssignmentRequest {
    pub fn validate(&self) -> Result<(), AssignmentError> {
        if self
            .name
            .as_deref()
            .is_some_and(|name| name.trim().is_empty())
        {
            return Err(AssignmentError::Validation("name must not be empty".into()));
        }
        match &self.reminder_time {
            Some(offsets) => validate_reminder_time(offsets),
            None => Ok(()),
        }
    }

    /// The new tag id, when one is present and parses.
    pub fn parsed_tag_id(&self) -> Option<TagId> {
        self.tag_id
            .as_deref()
            .and_then(|raw| raw.trim().parse().ok())
    }

    pub fn apply_to(&self, assignment: &mut Assignment) {
        if let Some(name) = &self.name {
            assignment.name = name.clone();
        }
        if let Some(description) = &self.description {
            assignment.description = description.clone();
        }
        if let Some(due_date) = self.due_date {
            assignment.due_date = due_date;
        }
        if let Some(tag_id) = self.parsed_tag_id() {
            assignment.tag_id = tag_id;
        }
        if let Some(offsets) = &self.reminder_time {
            assignment.reminder_time = reminder_time::encode(offsets);
        }
    }
}

fn validate_reminder_time(offsets: &[i64]) -> Result<(), AssignmentError> {
    if offsets.len() > MAX_REMINDER_TIMES {
        return Err(AssignmentError::Validation(format!(
            "reminderTime accepts at most {MAX_REMINDER_TIMES} entries"
        )));
    }
    Ok(())
}
