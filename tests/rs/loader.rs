//! Integration tests for term snapshot loading

use gpa_tracker::core::loader::{load_terms, parse_terms};
use gpa_tracker::core::models::GradeToken;
use std::fs;
use tempfile::TempDir;

#[test]
fn sample_snapshot_keeps_term_and_course_order() {
    let terms = load_terms("samples/terms.json").expect("sample snapshot should load");

    let names: Vec<&str> = terms.values().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["Fall 2023", "Spring 2024", "Summer 2024"]);

    let fall = &terms[0];
    let subjects: Vec<String> = fall.courses.values().map(|c| c.display_key()).collect();
    assert_eq!(
        subjects,
        vec!["MATH-201", "CMPS-200", "ENGL-203", "PHYS-210L", "PHYS-210"]
    );
}

#[test]
fn sample_snapshot_grades_resolve() {
    let terms = load_terms("samples/terms.json").expect("sample snapshot should load");
    let tokens: Vec<GradeToken> = terms
        .values()
        .flat_map(|t| t.courses.values())
        .map(|c| c.letter_grade())
        .collect();

    assert_eq!(
        tokens,
        vec![
            GradeToken::A,
            GradeToken::BPlus,
            GradeToken::BMinus,
            GradeToken::P,
            GradeToken::AMinus,
            GradeToken::B,
            GradeToken::W,
            GradeToken::NC,
            GradeToken::CMinus,
        ]
    );
}

#[test]
fn load_from_temp_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("terms.json");
    fs::write(
        &path,
        r#"{"t1": {"name": "Fall 2024", "gpa": 4.0, "credits": 3, "courses": {
            "c1": {"id": "c1", "subject": "MATH", "course_code": "101", "term": 202410, "credits": 3, "graded": true, "grade": 4.0}
        }}}"#,
    )
    .expect("Failed to write snapshot");

    let terms = load_terms(&path).expect("snapshot should load");
    assert_eq!(terms["t1"].courses["c1"].term_name(), "Fall 2024");
}

#[test]
fn missing_file_is_an_error() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let err = load_terms(temp_dir.path().join("absent.json")).expect_err("file is missing");
    assert!(err.to_string().contains("Failed to read"));
}

#[test]
fn malformed_json_is_an_error() {
    assert!(parse_terms("{ not json").is_err());
    assert!(parse_terms(r#"{"t1": {"courses": {"c1": {"id": "c1"}}}}"#).is_err());
}

#[test]
fn empty_snapshot_parses() {
    let terms = parse_terms("{}").expect("empty object is a valid snapshot");
    assert!(terms.is_empty());
}
