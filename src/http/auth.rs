//! Bearer-token extraction for authenticated routes.

use std::sync::Arc;

use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header::AUTHORIZATION, request::Parts},
};
use tracing::debug;

use super::ApiError;
use crate::board::{
    domain::OwnerId,
    ports::{AccessError, AccessTokenVerifier},
};

const BEARER_PREFIX: &str = "Bearer ";

/// Owner identity resolved from the request's `Authorization` header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedOwner(pub OwnerId);

impl<S> FromRequestParts<S> for AuthenticatedOwner
where
    Arc<dyn AccessTokenVerifier>: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let verifier = Arc::<dyn AccessTokenVerifier>::from_ref(state);
        let token = bearer_token(parts)?;
        let owner = verifier
            .verify(token)
            .inspect_err(|err| debug!(error = %err, "rejected access token"))?;
        Ok(Self(owner))
    }
}

fn bearer_token(parts: &Parts) -> Result<&str, AccessError> {
    let header = parts
        .headers
        .get(AUTHORIZATION)
        .ok_or(AccessError::MissingToken)?;
    let value = header
        .to_str()
        .map_err(|err| AccessError::InvalidToken(err.to_string()))?;
    let token = value
        .strip_prefix(BEARER_PREFIX)
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or(AccessError::MissingToken)?;
    Ok(token)
}
