//! HS256 bearer-token verification for board owners.

use crate::board::{
    domain::OwnerId,
    ports::{AccessError, AccessTokenVerifier},
};
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use serde::{Deserialize, Serialize};

/// Claims carried by an access token.
///
/// The owner is read from `userId`, falling back to the registered `sub`
/// claim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnerClaims {
    /// Owner identity as issued by the account service.
    #[serde(rename = "userId", default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    /// Registered subject claim.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,
    /// Expiry as seconds since the Unix epoch.
    pub exp: u64,
}

impl OwnerClaims {
    /// Creates claims naming `owner` that expire at `exp`.
    #[must_use]
    pub fn for_owner(owner: impl Into<String>, exp: u64) -> Self {
        Self {
            user_id: Some(owner.into()),
            sub: None,
            exp,
        }
    }

    fn owner(self) -> Result<OwnerId, AccessError> {
        self.user_id
            .or(self.sub)
            .ok_or(AccessError::MissingOwner)
            .and_then(|raw| OwnerId::new(raw).map_err(|_| AccessError::MissingOwner))
    }
}

/// Verifies HS256 tokens signed with a shared secret.
#[derive(Clone)]
pub struct JwtAccessTokenVerifier {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtAccessTokenVerifier {
    /// Creates a verifier for tokens signed with `secret`.
    #[must_use]
    pub fn new(secret: &[u8]) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_required_spec_claims(&["exp"]);
        Self {
            decoding_key: DecodingKey::from_secret(secret),
            validation,
        }
    }
}

impl AccessTokenVerifier for JwtAccessTokenVerifier {
    fn verify(&self, token: &str) -> Result<OwnerId, AccessError> {
        let data = decode::<OwnerClaims>(token, &self.decoding_key, &self.validation)
            .map_err(|err| AccessError::InvalidToken(err.to_string()))?;
        data.claims.owner()
    }
}
