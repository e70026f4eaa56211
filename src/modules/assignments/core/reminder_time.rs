// Reminder offsets travel as a list of integers and are persisted as a comma
// separated string without brackets.

use crate::modules::assignments::core::assignment::AssignmentId;

pub fn encode(offsets: &[i64]) -> String {
    offsets
        .iter()
        .map(i64::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

/// Tolerant: tokens that are not integers are logged and dropped.
pub fn decode(raw: &str, assignment_id: AssignmentId) -> Vec<i64> {
    raw.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .filter_map(|token| match token.parse::<i64>() {
            Ok(offset) => Some(offset),
            Err(_) => {
                tracing::warn!(assignment_id, token, "dropping non numeric reminder time");
                None
            }
        })
        .collect()
}
