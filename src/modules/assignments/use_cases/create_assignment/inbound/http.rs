use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::modules::assignments::adapters::inbound::http_error::bad_request_body;
use crate::modules::assignments::adapters::inbound::identity::AuthenticatedUser;
use crate::modules::assignments::core::requests::AssignmentRequest;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    AuthenticatedUser(author): AuthenticatedUser,
    body: Result<Json<AssignmentRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match body {
        Ok(b) => b,
        Err(rejection) => return bad_request_body(rejection),
    };

    if let Err(err) = request.validate() {
        tracing::warn!(error = %err, "create request validation failed");
        return err.into_response();
    }

    match state
        .assignments
        .create_assignment(request.to_assignment(&author))
        .await
    {
        Ok(assignment) => (StatusCode::CREATED, Json(assignment)).into_response(),
        Err(err) => err.into_response(),
    }
}
