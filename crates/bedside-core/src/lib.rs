//! bedside-core
//!
//! Shared vocabulary of the Bedside tools: the tool catalogue and the
//! user-facing notices every surface reports. Pure data, no I/O.

pub mod error;
pub mod models;
