use axum::async_trait;
use axum::extract::{FromRequest, RequestParts};
use axum::http::header::AUTHORIZATION;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;
use std::env;
use uuid::Uuid;

use crate::error::{unauthorized_error, Error};

/// Shared-token bearer check applied to every REST route. Role-less: anyone
/// holding the API token may act.
pub async fn require_bearer<B: Send>(req: Request<B>, next: Next<B>) -> Result<Response, Error> {
    let expected = env::var("API_SECRET_TOKEN")?;

    let header = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| unauthorized_error("no token provided"))?;

    if bearer_token(header) != expected {
        return Err(unauthorized_error("invalid token"));
    }

    Ok(next.run(req).await)
}

// the Bearer prefix is conventional but not mandatory
fn bearer_token(header: &str) -> &str {
    header.strip_prefix("Bearer ").unwrap_or(header)
}

/// The acting user for audit stamps, taken from the `x-user-id` header.
#[derive(Debug)]
pub struct Actor(pub Uuid);

#[async_trait]
impl<B: Send> FromRequest<B> for Actor {
    type Rejection = Error;

    async fn from_request(req: &mut RequestParts<B>) -> Result<Self, Self::Rejection> {
        let id = req
            .headers()
            .get("x-user-id")
            .and_then(|value| value.to_str().ok())
            .and_then(|value| Uuid::parse_str(value).ok())
            .ok_or_else(|| unauthorized_error("missing or invalid x-user-id header"))?;

        Ok(Self(id))
    }
}

#[test]
fn bearer_prefix_is_optional() {
    assert_eq!(bearer_token("Bearer sesame"), "sesame");
    assert_eq!(bearer_token("sesame"), "sesame");
}
