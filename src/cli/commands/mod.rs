//! CLI command handlers for `GpaTracker`.
//!
//! Each command is implemented in its own submodule.

pub mod config;
pub mod query;
pub mod terms;
