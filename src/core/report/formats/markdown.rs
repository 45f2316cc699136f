//! Markdown renderer
//!
//! Renders results as Markdown tables. Grouped results get a `###` heading
//! and a table per group.

use crate::core::query::{CourseEntry, FilteredCourses};
use crate::core::report::ResultsRenderer;
use std::error::Error;
use std::fmt::Write;

/// Markdown renderer
pub struct MarkdownRenderer;

impl MarkdownRenderer {
    /// Create a new Markdown renderer
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Generate one results table
    fn generate_table(entries: &[CourseEntry]) -> String {
        let mut table = String::new();

        table.push_str("| Course | Term | Credits | Grade |\n");
        table.push_str("|---|---|---|---|\n");

        for entry in entries {
            let course = entry.course;
            let _ = writeln!(
                table,
                "| {} {} | {} | {} | {} |",
                course.subject,
                course.course_code,
                course.term_name(),
                course.credits,
                course.letter_grade()
            );
        }

        table
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultsRenderer for MarkdownRenderer {
    fn render(&self, results: &FilteredCourses) -> Result<String, Box<dyn Error>> {
        let mut out = String::new();
        let _ = writeln!(out, "## Courses ({})\n", results.len());

        match results {
            FilteredCourses::Flat(entries) => out.push_str(&Self::generate_table(entries)),
            FilteredCourses::Grouped(groups) => {
                for group in groups {
                    let _ = writeln!(out, "### {}\n", group.label);
                    out.push_str(&Self::generate_table(&group.courses));
                    out.push('\n');
                }
            }
        }
        Ok(out)
    }
}
