use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    response::{IntoResponse, Response},
};

use crate::modules::assignments::adapters::inbound::http_error::bad_request_body;
use crate::modules::assignments::core::assignment::AssignmentId;
use crate::modules::assignments::core::requests::UpdateAssignmentRequest;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    assignment_id: Result<Path<AssignmentId>, PathRejection>,
    body: Result<Json<UpdateAssignmentRequest>, JsonRejection>,
) -> Response {
    let Path(assignment_id) = match assignment_id {
        Ok(id) => id,
        Err(rejection) => return bad_request_body(rejection),
    };
    let Json(update) = match body {
        Ok(b) => b,
        Err(rejection) => return bad_request_body(rejection),
    };

    if let Err(err) = update.validate() {
        tracing::warn!(assignment_id, error = %err, "update request validation failed");
        return err.into_response();
    }

    match state
        .assignments
        .update_assignment(update, assignment_id)
        .await
    {
        Ok(assignment) => Json(assignment).into_response(),
        Err(err) => err.into_response(),
    }
}
