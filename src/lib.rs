//! Shared library for `GpaTracker`
//! Grade vocabulary, course search, and presentation used by the CLI.

pub mod core;
pub mod logger;
pub mod shared;

pub use core::{config, get_version};
