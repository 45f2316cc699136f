//! Presentation of filter results
//!
//! Renders [`FilteredCourses`] as plain text course cards, Markdown tables, or
//! the keyed JSON shape used by the web client. Also renders the grading scale
//! and per-term summaries for the CLI.

pub mod formats;

use crate::core::models::{Course, Terms, GRADE_SCALE};
use crate::core::query::FilteredCourses;
use std::error::Error;
use std::fmt::Write;
use std::fs;
use std::path::Path;

pub use formats::{JsonRenderer, MarkdownRenderer, ResultsFormat, TextRenderer};

/// Trait for result renderers
pub trait ResultsRenderer {
    /// Render results to a string
    ///
    /// # Errors
    /// Returns an error if rendering fails
    fn render(&self, results: &FilteredCourses) -> Result<String, Box<dyn Error>>;

    /// Render results into a file
    ///
    /// # Errors
    /// Returns an error if rendering or file writing fails
    fn generate(&self, results: &FilteredCourses, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let content = self.render(results)?;
        fs::write(output_path, content)?;
        Ok(())
    }
}

/// Renderer for a format
#[must_use]
pub fn renderer_for(format: ResultsFormat) -> Box<dyn ResultsRenderer> {
    match format {
        ResultsFormat::Text => Box::new(TextRenderer::new()),
        ResultsFormat::Markdown => Box::new(MarkdownRenderer::new()),
        ResultsFormat::Json => Box::new(JsonRenderer::new()),
    }
}

/// Credits as shown on a course card ("3 credits", "1 credit", "1.5 credits")
#[must_use]
pub fn credits_label(credits: f64) -> String {
    let plural = if (credits - 1.0).abs() < f64::EPSILON {
        ""
    } else {
        "s"
    };
    format!("{credits} credit{plural}")
}

/// One-line course card: `MATH 101 | 3 credits | Fall 2024 | A`
#[must_use]
pub fn course_card(course: &Course) -> String {
    format!(
        "{} {} | {} | {} | {}",
        course.subject,
        course.course_code,
        credits_label(course.credits),
        course.term_name(),
        course.letter_grade()
    )
}

/// Grading scale table, highest grade first
#[must_use]
pub fn render_grade_scale() -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:<6} GPA", "Grade");
    for (points, token) in GRADE_SCALE {
        if points < 0.0 {
            let _ = writeln!(out, "{:<6} N/A", token.as_str());
        } else {
            let _ = writeln!(out, "{:<6} {points:.1}", token.as_str());
        }
    }
    out
}

/// Per-term summary lines: name, GPA, credits, and course count
#[must_use]
pub fn render_term_summary(terms: &Terms) -> String {
    let mut out = String::new();
    for (key, term) in terms {
        let name = if term.name.is_empty() {
            key.as_str()
        } else {
            term.name.as_str()
        };
        let _ = writeln!(
            out,
            "{name}: GPA {:.2} | {} | {} course(s)",
            term.gpa,
            credits_label(term.credits),
            term.courses.len()
        );
    }
    out
}
