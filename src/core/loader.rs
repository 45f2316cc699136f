//! Term snapshot loading
//!
//! Reads the `{ termId: { name, gpa, credits, courses: { courseId: Course } } }`
//! document handed over by the data-fetch layer. Key order is preserved.

use crate::core::models::{Semester, Terms};
use std::error::Error;
use std::fs;
use std::path::Path;

/// Parse a term snapshot from a JSON string
///
/// # Errors
/// Returns an error if the JSON is malformed or does not match the snapshot shape
pub fn parse_terms(json: &str) -> Result<Terms, Box<dyn Error>> {
    let terms: Terms = serde_json::from_str(json)?;

    let course_count: usize = terms.values().map(|t| t.courses.len()).sum();
    crate::debug!("Parsed {} term(s), {course_count} course(s)", terms.len());

    for (term_key, term) in &terms {
        for (course_key, course) in &term.courses {
            if Semester::from_code(course.term % 100).is_none() {
                crate::warn!(
                    "Course '{course_key}' in term '{term_key}' has unknown term code {}",
                    course.term
                );
            }
        }
    }

    Ok(terms)
}

/// Load a term snapshot from a JSON file
///
/// # Arguments
/// * `path` - Path to the JSON file
///
/// # Errors
/// Returns an error if the file cannot be read or parsed
pub fn load_terms<P: AsRef<Path>>(path: P) -> Result<Terms, Box<dyn Error>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {e}", path.display()))?;
    parse_terms(&content).map_err(|e| format!("Failed to parse {}: {e}", path.display()).into())
}
