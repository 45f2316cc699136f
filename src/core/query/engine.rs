//! Course filter / group engine
//!
//! Runs a parsed [`Query`] over every course in a [`Terms`] snapshot, then
//! applies the optional grade sort and the optional grouping. The snapshot is
//! only borrowed: results hold references into it.

use super::filters::{ActiveFilters, GradeSort, Grouping};
use super::parser::Query;
use crate::core::models::{format_term_name, Course, Terms};
use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::cmp::Ordering;

/// A matched course together with its key in the source snapshot
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CourseEntry<'a> {
    /// Course key as it appears in its term's course map
    pub key: &'a str,
    /// The matched course
    pub course: &'a Course,
}

/// A labelled bucket of matched courses
#[derive(Debug, Clone, PartialEq)]
pub struct CourseGroup<'a> {
    /// Term name ("Fall 2024") or subject ("MATH")
    pub label: String,
    /// Courses in this group, in result order
    pub courses: Vec<CourseEntry<'a>>,
}

/// Result of a filter run: a flat list, or groups when a grouping is active
#[derive(Debug, Clone, PartialEq)]
pub enum FilteredCourses<'a> {
    /// Ungrouped matches
    Flat(Vec<CourseEntry<'a>>),
    /// Matches bucketed by term or subject, groups in first-encounter order
    Grouped(Vec<CourseGroup<'a>>),
}

impl Default for FilteredCourses<'_> {
    fn default() -> Self {
        Self::Flat(Vec::new())
    }
}

impl<'a> FilteredCourses<'a> {
    /// Total number of matched courses
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Flat(entries) => entries.len(),
            Self::Grouped(groups) => groups.iter().map(|g| g.courses.len()).sum(),
        }
    }

    /// Whether no course matched
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether the result is grouped
    #[must_use]
    pub const fn is_grouped(&self) -> bool {
        matches!(self, Self::Grouped(_))
    }

    /// All matched courses in result order, across groups
    #[must_use]
    pub fn entries(&self) -> Vec<CourseEntry<'a>> {
        match self {
            Self::Flat(entries) => entries.clone(),
            Self::Grouped(groups) => groups
                .iter()
                .flat_map(|g| g.courses.iter().copied())
                .collect(),
        }
    }
}

struct EntryMap<'s, 'a>(&'s [CourseEntry<'a>]);

impl Serialize for EntryMap<'_, '_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for entry in self.0 {
            map.serialize_entry(entry.key, entry.course)?;
        }
        map.end()
    }
}

/// Serialises to the keyed-object shape consumed by the web client:
/// `{ courseId: Course }` or `{ label: { courseId: Course } }`.
impl Serialize for FilteredCourses<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Flat(entries) => EntryMap(entries).serialize(serializer),
            Self::Grouped(groups) => {
                let mut map = serializer.serialize_map(Some(groups.len()))?;
                for group in groups {
                    map.serialize_entry(&group.label, &EntryMap(&group.courses))?;
                }
                map.end()
            }
        }
    }
}

/// Null grades sort last in both directions; two nulls compare equal.
fn compare_grades(a: Option<f64>, b: Option<f64>, sort: GradeSort) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(x), Some(y)) => match sort {
            GradeSort::Ascending => x.total_cmp(&y),
            GradeSort::Descending => y.total_cmp(&x),
        },
    }
}

fn group_label(course: &Course, grouping: Grouping) -> String {
    match grouping {
        Grouping::Term => format_term_name(course.term),
        Grouping::Subject => course.subject.clone(),
    }
}

fn group_entries(entries: Vec<CourseEntry<'_>>, grouping: Grouping) -> Vec<CourseGroup<'_>> {
    let mut groups: IndexMap<String, Vec<CourseEntry<'_>>> = IndexMap::new();
    for entry in entries {
        groups
            .entry(group_label(entry.course, grouping))
            .or_default()
            .push(entry);
    }
    groups
        .into_iter()
        .map(|(label, courses)| CourseGroup { label, courses })
        .collect()
}

/// Filter, sort, and group the courses of a snapshot
///
/// # Arguments
/// * `terms` - Term snapshot; iterated in its stored order
/// * `query` - Raw search text (trimmed and lowercased here)
/// * `filters` - Active grouping / sort selection
///
/// Sorting runs over the whole match set before grouping, so each group keeps
/// the sorted relative order. An empty query with no filters returns every
/// course, ungrouped, in snapshot order.
#[must_use]
pub fn filter_courses<'a>(
    terms: &'a Terms,
    query: &str,
    filters: &ActiveFilters,
) -> FilteredCourses<'a> {
    let parsed = Query::parse(query);
    crate::debug!("Filtering with {parsed:?} and {:?}", filters.names());

    // Keyed by course key: a repeated key keeps its first position and takes the later course.
    let mut matched: IndexMap<&'a str, &'a Course> = IndexMap::new();
    for term in terms.values() {
        for (key, course) in &term.courses {
            if parsed.matches(course) {
                matched.insert(key.as_str(), course);
            }
        }
    }

    let mut entries: Vec<CourseEntry<'a>> = matched
        .into_iter()
        .map(|(key, course)| CourseEntry { key, course })
        .collect();

    if let Some(sort) = filters.sort {
        entries.sort_by(|a, b| compare_grades(a.course.grade, b.course.grade, sort));
    }

    crate::debug!("{} course(s) matched", entries.len());

    match filters.grouping {
        Some(grouping) => FilteredCourses::Grouped(group_entries(entries, grouping)),
        None => FilteredCourses::Flat(entries),
    }
}

/// Same as [`filter_courses`], taking filter wire names
///
/// The names are normalised first (see [`ActiveFilters::from_names`]).
#[must_use]
pub fn filter_courses_by_names<'a, S: AsRef<str>>(
    terms: &'a Terms,
    query: &str,
    filter_names: &[S],
) -> FilteredCourses<'a> {
    filter_courses(terms, query, &ActiveFilters::from_names(filter_names))
}

/// Holds the latest filter result for one snapshot
///
/// A new snapshot needs a new `CourseFilter`, which starts empty again.
#[derive(Debug, Clone)]
pub struct CourseFilter<'a> {
    terms: &'a Terms,
    filtered: FilteredCourses<'a>,
}

impl<'a> CourseFilter<'a> {
    /// Wrap a snapshot with an empty result
    #[must_use]
    pub fn new(terms: &'a Terms) -> Self {
        Self {
            terms,
            filtered: FilteredCourses::default(),
        }
    }

    /// Recompute and store the result, replacing the previous one
    pub fn filter(&mut self, query: &str, filters: &ActiveFilters) -> &FilteredCourses<'a> {
        self.filtered = filter_courses(self.terms, query, filters);
        &self.filtered
    }

    /// Latest stored result
    #[must_use]
    pub const fn filtered(&self) -> &FilteredCourses<'a> {
        &self.filtered
    }

    /// The snapshot being filtered
    #[must_use]
    pub const fn terms(&self) -> &'a Terms {
        self.terms
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::Term;

    fn course(id: &str, subject: &str, code: &str, term: u32, grade: Option<f64>) -> Course {
        Course::new(
            id.to_string(),
            subject.to_string(),
            code.to_string(),
            term,
            3.0,
        )
        .with_grade(grade, true)
    }

    fn sample_terms() -> Terms {
        let mut fall = Term::new("Fall 2024".to_string(), 3.5, 9.0);
        fall.add_course(course("c1", "MATH", "101", 202_410, Some(4.0)));
        fall.add_course(course("c2", "CMPS", "211", 202_410, None));
        fall.add_course(course("c3", "ENGL", "203", 202_410, Some(2.7)));

        let mut spring = Term::new("Spring 2025".to_string(), 3.3, 6.0);
        spring.add_course(course("c4", "MATH", "201", 202_520, Some(3.3)));
        spring.add_course(course("c5", "CMPS", "212", 202_520, Some(3.0)));

        let mut terms = Terms::new();
        terms.insert("t1".to_string(), fall);
        terms.insert("t2".to_string(), spring);
        terms
    }

    fn keys(result: &FilteredCourses<'_>) -> Vec<String> {
        result.entries().iter().map(|e| e.key.to_string()).collect()
    }

    #[test]
    fn test_empty_query_returns_all_in_order() {
        let terms = sample_terms();
        let result = filter_courses(&terms, "", &ActiveFilters::none());
        assert!(!result.is_grouped());
        assert_eq!(keys(&result), vec!["c1", "c2", "c3", "c4", "c5"]);
    }

    #[test]
    fn test_subject_query() {
        let terms = sample_terms();
        let result = filter_courses(&terms, "MATH", &ActiveFilters::none());
        assert_eq!(keys(&result), vec!["c1", "c4"]);
    }

    #[test]
    fn test_grade_query() {
        let terms = sample_terms();
        let result = filter_courses(&terms, ">=B+", &ActiveFilters::none());
        assert_eq!(keys(&result), vec!["c1", "c4"]);

        let below = filter_courses(&terms, "<b", &ActiveFilters::none());
        assert_eq!(keys(&below), vec!["c2", "c3"]);
    }

    #[test]
    fn test_sort_ascending_puts_missing_grades_last() {
        let terms = sample_terms();
        let filters = ActiveFilters::none().with_sort(GradeSort::Ascending);
        let result = filter_courses(&terms, "", &filters);
        assert_eq!(keys(&result), vec!["c3", "c5", "c4", "c1", "c2"]);
    }

    #[test]
    fn test_sort_descending_puts_missing_grades_last() {
        let terms = sample_terms();
        let filters = ActiveFilters::none().with_sort(GradeSort::Descending);
        let result = filter_courses(&terms, "", &filters);
        assert_eq!(keys(&result), vec!["c1", "c4", "c5", "c3", "c2"]);
    }

    #[test]
    fn test_group_by_term() {
        let terms = sample_terms();
        let filters = ActiveFilters::none().with_grouping(Grouping::Term);
        let FilteredCourses::Grouped(groups) = filter_courses(&terms, "", &filters) else {
            panic!("expected grouped result");
        };
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].label, "Fall 2024");
        assert_eq!(groups[0].courses.len(), 3);
        assert_eq!(groups[1].label, "Spring 2025");
    }

    #[test]
    fn test_sort_then_group_by_subject_keeps_sorted_order() {
        let terms = sample_terms();
        let filters = ActiveFilters::none()
            .with_grouping(Grouping::Subject)
            .with_sort(GradeSort::Descending);
        let FilteredCourses::Grouped(groups) = filter_courses(&terms, "", &filters) else {
            panic!("expected grouped result");
        };
        let labels: Vec<&str> = groups.iter().map(|g| g.label.as_str()).collect();
        assert_eq!(labels, vec!["MATH", "CMPS", "ENGL"]);
        let cmps: Vec<&str> = groups[1].courses.iter().map(|e| e.key).collect();
        assert_eq!(cmps, vec!["c5", "c2"]);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let terms = sample_terms();
        let filters = ActiveFilters::none().with_grouping(Grouping::Term);
        let first = filter_courses(&terms, "cmps", &filters);
        let second = filter_courses(&terms, "cmps", &filters);
        assert_eq!(first, second);
    }

    #[test]
    fn test_by_names_normalises() {
        let terms = sample_terms();
        let result = filter_courses_by_names(&terms, "", &["subject", "term"]);
        let FilteredCourses::Grouped(groups) = result else {
            panic!("expected grouped result");
        };
        let labels: Vec<&str> = groups.iter().map(|g| g.label.as_str()).collect();
        assert_eq!(labels, vec!["Fall 2024", "Spring 2025"]);

        let sorted =
            filter_courses_by_names(&terms, "math", &["gradeAscending", "gradeDescending"]);
        assert_eq!(keys(&sorted), vec!["c4", "c1"]);
    }

    #[test]
    fn test_course_filter_keeps_latest_result() {
        let terms = sample_terms();
        let mut course_filter = CourseFilter::new(&terms);
        assert!(course_filter.filtered().is_empty());

        course_filter.filter("math", &ActiveFilters::none());
        assert_eq!(course_filter.filtered().len(), 2);

        course_filter.filter("engl", &ActiveFilters::none());
        assert_eq!(keys(course_filter.filtered()), vec!["c3"]);
    }

    #[test]
    fn test_serializes_keyed_shape() {
        let terms = sample_terms();
        let filters = ActiveFilters::none().with_grouping(Grouping::Subject);
        let result = filter_courses(&terms, "engl", &filters);
        let value = serde_json::to_value(&result).expect("serializable");
        assert_eq!(value["ENGL"]["c3"]["course_code"], "203");
    }
}
