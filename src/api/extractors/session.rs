use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts, StatusCode},
};
use tracing::Span;

/// The admin's bearer token, extracted once and passed explicitly to
/// upstream calls. The gateway does not validate the token; the
/// marketplace API is the authority and answers 401/403 itself.
pub struct AdminSession {
    pub token: String,
}

impl<S> FromRequestParts<S> for AdminSession
where
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let header_value = parts
            .headers
            .get(header::AUTHORIZATION)
            .ok_or(StatusCode::UNAUTHORIZED)?
            .to_str()
            .map_err(|_| StatusCode::UNAUTHORIZED)?;

        let token = header_value
            .strip_prefix("Bearer ")
            .ok_or(StatusCode::UNAUTHORIZED)?;

        if token.is_empty() {
            return Err(StatusCode::UNAUTHORIZED);
        }

        Span::current().record("session", "admin");

        Ok(AdminSession { token: token.to_string() })
    }
}
