//! Kanban board backend.
//!
//! Each authenticated owner has one board made of sections (columns) and
//! tasks (cards). Tasks carry a sparse sort key within their column, which
//! the board keeps consistent across inserts, deletions, and moves.
//!
//! # Architecture
//!
//! The board module follows hexagonal architecture principles:
//!
//! - **Domain**: the board aggregate and the ordering rules
//! - **Ports**: repository and access-token traits
//! - **Adapters**: in-memory and `PostgreSQL` storage, JWT verification
//! - **Services**: load-mutate-save orchestration per request
//!
//! # Modules
//!
//! - [`board`]: board domain, ports, adapters, and services
//! - [`http`]: axum router exposing the board under `/api`
//! - [`config`]: server configuration
//! - [`telemetry`]: logging setup

pub mod board;
pub mod config;
pub mod http;
pub mod telemetry;
