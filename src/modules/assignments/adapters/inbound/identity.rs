use axum::{
    Json,
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Set by the gateway once it has authenticated the caller.
pub const USER_UID_HEADER: &str = "x-user-uid";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser(pub String);

impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .headers
            .get(USER_UID_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|uid| !uid.is_empty())
            .map(|uid| AuthenticatedUser(uid.to_string()))
            .ok_or_else(|| {
                tracing::warn!("request without authenticated user");
                (
                    StatusCode::UNAUTHORIZED,
                    Json(json!({"message": "missing authenticated user."})),
                )
                    .into_response()
            })
    }
}
