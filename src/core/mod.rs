//! Core module: models, search engine, snapshot loading, and presentation

pub mod config;
pub mod loader;
pub mod models;
pub mod query;
pub mod report;

/// Returns the current version of the `GpaTracker` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
