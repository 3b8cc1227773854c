//! Adapters resolving bearer credentials to board owners.

mod jwt;

pub use jwt::{JwtAccessTokenVerifier, OwnerClaims};
