use axum::{
    extract::{Path, State, rejection::PathRejection},
    http::StatusCode,
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

    match state.assignments.delete_assignment(assignment_id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => err.into_response(),
    }
}
