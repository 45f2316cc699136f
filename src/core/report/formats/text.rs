//! Plain text renderer
//!
//! One course card per line; grouped results get a heading per group.

use crate::core::query::FilteredCourses;
use crate::core::report::{course_card, ResultsRenderer};
use std::error::Error;
use std::fmt::Write;

/// Plain text renderer
pub struct TextRenderer;

impl TextRenderer {
    /// Create a new text renderer
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultsRenderer for TextRenderer {
    fn render(&self, results: &FilteredCourses) -> Result<String, Box<dyn Error>> {
        let mut out = String::new();
        if results.is_empty() {
            out.push_str("No courses found.\n");
            return Ok(out);
        }

        match results {
            FilteredCourses::Flat(entries) => {
                for entry in entries {
                    writeln!(out, "{}", course_card(entry.course))?;
                }
            }
            FilteredCourses::Grouped(groups) => {
                for (idx, group) in groups.iter().enumerate() {
                    if idx > 0 {
                        out.push('\n');
                    }
                    writeln!(out, "== {} ==", group.label)?;
                    for entry in &group.courses {
                        writeln!(out, "  {}", course_card(entry.course))?;
                    }
                }
            }
        }
        Ok(out)
    }
}
