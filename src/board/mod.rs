//! Kanban board management.
//!
//! A board holds one owner's sections (columns) and tasks (cards). Tasks
//! carry a sparse `order` sort key within their status column; the ordering
//! policy lives in [`domain::ordering`]. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
