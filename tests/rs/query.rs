//! Integration tests for course search, sorting, and grouping

use gpa_tracker::core::loader::load_terms;
use gpa_tracker::core::models::{Course, Term, Terms};
use gpa_tracker::core::query::{
    filter_courses, filter_courses_by_names, parse_grade_query, ActiveFilters, ComparisonOp,
    CourseFilter, FilteredCourses, GradeSort, Grouping,
};
use gpa_tracker::core::report::{renderer_for, ResultsFormat};

fn sample() -> Terms {
    load_terms("samples/terms.json").expect("sample snapshot should load")
}

fn keys(results: &FilteredCourses) -> Vec<String> {
    results
        .entries()
        .iter()
        .map(|entry| entry.course.display_key())
        .collect()
}

#[test]
fn parse_grade_query_examples() {
    let parsed = parse_grade_query(">=B+").expect("valid comparison");
    assert_eq!(parsed.op, ComparisonOp::Gte);
    assert_eq!(parsed.token.as_str(), "B+");

    assert!(parse_grade_query("xyz").is_none());
    assert!(parse_grade_query("").is_none());
    assert!(parse_grade_query(">=B+ ").is_some());
}

#[test]
fn course_name_query_matches_one_course() {
    let mut term = Term::new("Fall 2024".to_string(), 4.0, 7.0);
    term.add_course(
        Course::new("c1".to_string(), "MATH".to_string(), "101".to_string(), 202_410, 4.0)
            .with_grade(Some(4.0), true),
    );
    term.add_course(
        Course::new("c2".to_string(), "CMPS".to_string(), "211".to_string(), 202_410, 3.0),
    );
    let mut terms = Terms::new();
    terms.insert("t1".to_string(), term);

    let results = filter_courses(&terms, "math 101", &ActiveFilters::none());
    assert!(!results.is_grouped());
    let entries = results.entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].key, "c1");
}

#[test]
fn empty_query_returns_everything_in_order() {
    let terms = sample();
    let results = filter_courses(&terms, "", &ActiveFilters::none());
    assert_eq!(results.len(), 9);
    assert_eq!(keys(&results)[0], "MATH-201");
    assert_eq!(keys(&results)[8], "HIST-205");
}

#[test]
fn subject_fragment_matches_subject() {
    let terms = sample();
    let results = filter_courses(&terms, "MATH", &ActiveFilters::none());
    assert_eq!(keys(&results), vec!["MATH-201", "MATH-202"]);
}

#[test]
fn grade_comparison_over_snapshot() {
    let terms = sample();

    let results = filter_courses(&terms, ">=b+", &ActiveFilters::none());
    assert_eq!(keys(&results), vec!["MATH-201", "CMPS-200", "PHYS-210"]);

    // W and NC rank below every letter grade
    let results = filter_courses(&terms, "<c", &ActiveFilters::none());
    assert_eq!(keys(&results), vec!["CMPS-211", "CMPS-212", "HIST-205"]);

    // Pass/fail courses never satisfy an ordering
    let results = filter_courses(&terms, "<=f", &ActiveFilters::none());
    assert!(!keys(&results).contains(&"PHYS-210L".to_string()));
}

#[test]
fn null_grades_sort_last_in_both_directions() {
    let terms = sample();

    for sort in [GradeSort::Ascending, GradeSort::Descending] {
        let results = filter_courses(&terms, "cmps", &ActiveFilters::none().with_sort(sort));
        let last = results.entries().last().copied().expect("matches exist");
        assert_eq!(last.course.display_key(), "CMPS-212");
        assert!(last.course.grade.is_none());
    }

    let ascending = filter_courses(
        &terms,
        "cmps",
        &ActiveFilters::none().with_sort(GradeSort::Ascending),
    );
    assert_eq!(keys(&ascending), vec!["CMPS-211", "CMPS-200", "CMPS-212"]);
}

#[test]
fn descending_sort_orders_by_points() {
    let terms = sample();
    let results = filter_courses_by_names(&terms, "", &["gradeDescending"]);
    let grades: Vec<Option<f64>> = results.entries().iter().map(|e| e.course.grade).collect();
    assert_eq!(grades[0], Some(4.0));
    assert_eq!(grades.last().copied().flatten(), None);

    let numeric: Vec<f64> = grades.iter().flatten().copied().collect();
    assert!(numeric.windows(2).all(|pair| pair[0] >= pair[1]));
}

#[test]
fn grouping_by_term_keeps_first_encounter_order() {
    let terms = sample();
    let results = filter_courses(
        &terms,
        "",
        &ActiveFilters::none().with_grouping(Grouping::Term),
    );

    let FilteredCourses::Grouped(groups) = &results else {
        panic!("expected grouped results");
    };
    let labels: Vec<&str> = groups.iter().map(|g| g.label.as_str()).collect();
    assert_eq!(labels, vec!["Fall 2023", "Spring 2024", "Summer 2024"]);
    assert_eq!(groups[0].courses.len(), 5);
    assert_eq!(results.len(), 9);
}

#[test]
fn grouping_by_subject_after_sort() {
    let terms = sample();
    let results = filter_courses_by_names(&terms, "", &["gradeAscending", "subject"]);

    let FilteredCourses::Grouped(groups) = &results else {
        panic!("expected grouped results");
    };
    let cmps = groups
        .iter()
        .find(|g| g.label == "CMPS")
        .expect("CMPS group");
    let codes: Vec<&str> = cmps
        .courses
        .iter()
        .map(|e| e.course.course_code.as_str())
        .collect();
    assert_eq!(codes, vec!["211", "200", "212"]);
}

#[test]
fn conflicting_filters_prefer_term_and_ascending() {
    let terms = sample();
    let expected = filter_courses(
        &terms,
        "",
        &ActiveFilters::none()
            .with_grouping(Grouping::Term)
            .with_sort(GradeSort::Ascending),
    );

    for names in [
        ["term", "subject", "gradeAscending", "gradeDescending"],
        ["subject", "term", "gradeDescending", "gradeAscending"],
    ] {
        assert_eq!(filter_courses_by_names(&terms, "", &names), expected);
    }

    let FilteredCourses::Grouped(groups) = &expected else {
        panic!("expected grouped results");
    };
    assert_eq!(groups[0].label, "Fall 2023");
}

#[test]
fn unknown_filters_are_ignored() {
    let terms = sample();
    let results = filter_courses_by_names(&terms, "", &["bogus"]);
    assert!(!results.is_grouped());
    assert_eq!(results.len(), 9);
}

#[test]
fn filtering_is_idempotent() {
    let terms = sample();
    let filters = ActiveFilters::from_names(&["gradeDescending", "term"]);
    let first = filter_courses(&terms, ">c", &filters);
    let second = filter_courses(&terms, ">c", &filters);
    assert_eq!(first, second);
}

#[test]
fn course_filter_keeps_latest_result() {
    let terms = sample();
    let mut filter = CourseFilter::new(&terms);
    assert!(filter.filtered().is_empty());

    filter.filter("math", &ActiveFilters::none());
    assert_eq!(filter.filtered().len(), 2);

    filter.filter("engl", &ActiveFilters::none());
    assert_eq!(keys(filter.filtered()), vec!["ENGL-203"]);
    assert_eq!(filter.terms().len(), 3);
}

#[test]
fn results_render_in_every_format() {
    let terms = sample();
    let results = filter_courses(
        &terms,
        "math",
        &ActiveFilters::none().with_grouping(Grouping::Term),
    );

    for format in [ResultsFormat::Text, ResultsFormat::Markdown, ResultsFormat::Json] {
        let rendered = renderer_for(format).render(&results).expect("renders");
        assert!(rendered.contains("Fall 2023"), "{format} output: {rendered}");
        assert!(rendered.contains("Spring 2024"), "{format} output: {rendered}");
    }
}
