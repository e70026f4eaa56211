// Shared test fixture for stored assignments.
// The default record is read from `json/assignment.json`; setters override it.

use crate::modules::assignments::core::assignment::{Assignment, AssignmentId};
use crate::shared::core::primitives::EpochMillis;
use crate::shared::infrastructure::tag_client::TagId;

const ASSIGNMENT_JSON: &str = include_str!("json/assignment.json");

pub struct AssignmentBuilder {
    inner: Assignment,
}

impl Default for AssignmentBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl AssignmentBuilder {
    pub fn new() -> Self {
        Self {
            inner: serde_json::from_str(ASSIGNMENT_JSON).unwrap(),
        }
    }

    pub fn id(mut self, v: AssignmentId) -> Self {
        self.inner.id = v;
        self
    }

    pub fn name(mut self, v: impl Into<String>) -> Self {
        self.inner.name = v.into();
        self
    }

    pub fn author(mut self, v: impl Into<String>) -> Self {
        self.inner.author = v.into();
        self
    }

    pub fn description(mut self, v: impl Into<String>) -> Self {
        self.inner.description = v.into();
        self
    }

    pub fn due_date(mut self, v: EpochMillis) -> Self {
        self.inner.due_date = v;
        self
    }

    pub fn tag_id(mut self, v: TagId) -> Self {
        self.inner.tag_id = v;
        self
    }

    pub fn reminder_time(mut self, v: impl Into<String>) -> Self {
        self.inner.reminder_time = v.into();
        self
    }

    pub fn build(self) -> Assignment {
        self.inner
    }
}

#[cfg(test)]
mod assignment_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new_and_parses_json() {
        let built = AssignmentBuilder::default().build();
        assert_eq!(built.id, 1);
        assert_eq!(built.name, "HW1");
        assert_eq!(built.author, "user-fixed-0001");
        assert_eq!(built.description, "Read chapter 3");
        assert_eq!(built.due_date, 1_700_000_000_000);
        assert_eq!(built.tag_id, 5);
        assert_eq!(built.reminder_time, "60,1440");
    }

    #[rstest]
    fn setters_override_all_fields_and_build_returns_inner() {
        let built = AssignmentBuilder::new()
            .id(9)
            .name("HW9")
            .author("tester")
            .description("desc")
            .due_date(42)
            .tag_id(7)
            .reminder_time("1")
            .build();

        assert_eq!(built.id, 9);
        assert_eq!(built.name, "HW9");
        assert_eq!(built.author, "tester");
        assert_eq!(built.description, "desc");
        assert_eq!(built.due_date, 42);
        assert_eq!(built.tag_id, 7);
        assert_eq!(built.reminder_time, "1");
    }
}
