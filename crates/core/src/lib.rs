//! Domain logic for the fleetops scheduling backend.
//!
//! This crate has zero internal dependencies so it can be used by the
//! persistence layer, the API server, and any future CLI tooling.

pub mod error;
pub mod interval;
pub mod matching;
pub mod pagination;
pub mod status;
pub mod types;
