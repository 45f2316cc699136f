//! Re-export of the logger API under `gpa_tracker::shared::logger`.

pub use crate::logger::{
    disable_debug, enable_debug, enable_verbose, init_file_logging, is_debug_enabled,
    is_verbose_enabled, level, set_level, set_level_from_str, Level,
};
