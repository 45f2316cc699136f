//! Term listing, grading scale, and term-code commands

use super::query::resolve_data_path;
use gpa_tracker::config::Config;
use gpa_tracker::core::loader::load_terms;
use gpa_tracker::core::models::format_term_name;
use gpa_tracker::core::report::{render_grade_scale, render_term_summary};
use std::path::Path;

/// Print each term with its GPA, credits, and course count
///
/// # Errors
/// Returns a printable message if the snapshot cannot be loaded
pub fn run_terms(data: Option<&Path>, config: &Config) -> Result<(), String> {
    let data_path = resolve_data_path(data, config)?;
    let terms = load_terms(&data_path).map_err(|e| format!("✗ {e}"))?;
    if terms.is_empty() {
        println!("No terms recorded.");
    } else {
        print!("{}", render_term_summary(&terms));
    }
    Ok(())
}

/// Print the grading scale
pub fn run_grades() {
    print!("{}", render_grade_scale());
}

/// Print the label for each term code
pub fn run_term_names(codes: &[u32]) {
    for code in codes {
        println!("{code}: {}", format_term_name(*code));
    }
}
