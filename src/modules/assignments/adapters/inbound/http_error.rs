use crate::modules::assignments::core::errors::AssignmentError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

pub const BAD_REQUEST_BODY: &str = "bad request body.";

impl AssignmentError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AssignmentError::Validation(_) | AssignmentError::TagNotFound(_) => {
                StatusCode::BAD_REQUEST
            }
            AssignmentError::NotFound(_) => StatusCode::NOT_FOUND,
            AssignmentError::TagService(_)
            | AssignmentError::Store(_)
            | AssignmentError::Publish(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AssignmentError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        message(status, self.to_string())
    }
}

pub fn message(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(json!({ "message": message.into() }))).into_response()
}

pub fn bad_request_body(reason: impl std::fmt::Display) -> Response {
    tracing::warn!(%reason, "can't bind request body");
    message(StatusCode::BAD_REQUEST, BAD_REQUEST_BODY)
}
