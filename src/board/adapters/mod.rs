//! Adapter implementations for board ports.

pub mod access;
pub mod memory;
pub mod postgres;
