//! JSON renderer
//!
//! Emits `{ courseId: Course }`, or `{ label: { courseId: Course } }` when grouped.

use crate::core::query::FilteredCourses;
use crate::core::report::ResultsRenderer;
use std::error::Error;

/// JSON renderer
pub struct JsonRenderer {
    pretty: bool,
}

impl JsonRenderer {
    /// Create a pretty-printing JSON renderer
    #[must_use]
    pub const fn new() -> Self {
        Self { pretty: true }
    }

    /// Create a compact JSON renderer
    #[must_use]
    pub const fn compact() -> Self {
        Self { pretty: false }
    }
}

impl Default for JsonRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultsRenderer for JsonRenderer {
    fn render(&self, results: &FilteredCourses) -> Result<String, Box<dyn Error>> {
        let mut out = if self.pretty {
            serde_json::to_string_pretty(results)?
        } else {
            serde_json::to_string(results)?
        };
        out.push('\n');
        Ok(out)
    }
}
