//! Access port resolving an inbound credential to the owning identity.

use crate::board::domain::OwnerId;
use thiserror::Error;

/// Resolves bearer credentials to board owners.
pub trait AccessTokenVerifier: Send + Sync {
    /// Verifies `token` and returns the identity it was issued to.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError`] when the token is malformed, expired, signed
    /// with another key, or names no owner.
    fn verify(&self, token: &str) -> Result<OwnerId, AccessError>;
}

/// Reasons a request could not be resolved to an owner.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AccessError {
    /// The request carried no credential.
    #[error("missing access token")]
    MissingToken,

    /// The credential failed verification.
    #[error("invalid access token: {0}")]
    InvalidToken(String),

    /// The credential verified but carries no usable owner identity.
    #[error("access token does not identify an owner")]
    MissingOwner,
}
