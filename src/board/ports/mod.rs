//! Port contracts for board management.
//!
//! Ports define infrastructure-agnostic interfaces used by board services
//! and the HTTP layer.

pub mod access;
pub mod repository;

pub use access::{AccessError, AccessTokenVerifier};
pub use repository::{BoardRepository, BoardRepositoryError, BoardRepositoryResult};
