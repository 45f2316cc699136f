//! Shared module for API surface used by every front end

pub mod logger;
