use std::convert::Infallible;

use axum::extract::FromRequestParts;

/// Header carrying the shopper's opaque session id.
pub const SESSION_HEADER: &str = "x-session-id";

/// Fallback session for requests without the header. Clients that never set
/// it share one cart, which is the documented behavior.
pub const ANONYMOUS_SESSION: &str = "anonymous";

/// Extracts the cart session from `x-session-id`, falling back to
/// `"anonymous"` when the header is missing or not valid UTF-8. Never
/// rejects a request.
#[derive(Debug, Clone)]
pub struct SessionId(pub String);

impl<S> FromRequestParts<S> for SessionId
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        let session = parts
            .headers
            .get(SESSION_HEADER)
            .and_then(|value| value.to_str().ok())
            .unwrap_or(ANONYMOUS_SESSION);

        Ok(SessionId(session.to_string()))
    }
}
