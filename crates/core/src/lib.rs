//! Shared primitives for the taskboard backend: database id and timestamp
//! aliases plus the domain error taxonomy used across crates.

pub mod error;
pub mod types;
