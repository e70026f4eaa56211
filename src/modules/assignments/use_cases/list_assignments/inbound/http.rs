use axum::{
    Json,
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::modules::assignments::core::projection::BulkResponse;
use crate::shell::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListAssignmentsParams {
    pub from_present: Option<String>,
}

impl ListAssignmentsParams {
    /// Absent, empty and "false" mean every assignment; anything else means present only.
    pub fn from_present(&self) -> bool {
        !matches!(self.from_present.as_deref(), None | Some("") | Some("false"))
    }
}

pub async fn handle(
    State(state): State<AppState>,
    Query(params): Query<ListAssignmentsParams>,
) -> Response {
    let from_present = params.from_present();
    tracing::debug!(from_present, "listing assignments");

    match state.assignments.get_all_assignments(from_present).await {
        Ok(assignments) => Json(BulkResponse::from(assignments)).into_response(),
        Err(err) => err.into_response(),
    }
}
