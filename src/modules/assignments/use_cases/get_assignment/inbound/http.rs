use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
    response::{IntoResponse, Response},
};

use crate::modules::assignments::adapters::inbound::http_error::bad_request_body;
use crate::modules::assignments::core::assignment::AssignmentId;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    assignment_id: Result<Path<AssignmentId>, PathRejection>,
) -> Response {
    let Path(assignment_id) = match assignment_id {
        Ok(id) => id,
        Err(rejection) => return bad_request_body(rejection),
    };

    match state.assignments.get_assignment_by_id(assignment_id).await {
        Ok(assignment) => Json(assignment).into_response(),
        Err(err) => err.into_response(),
    }
}
