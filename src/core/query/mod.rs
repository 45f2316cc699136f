//! Course search: query parsing, filter selection, and the filter/group engine

pub mod engine;
pub mod filters;
pub mod parser;

pub use engine::{
    filter_courses, filter_courses_by_names, CourseEntry, CourseFilter, CourseGroup,
    FilteredCourses,
};
pub use filters::{ActiveFilters, FilterKind, GradeSort, Grouping};
pub use parser::{parse_grade_query, ComparisonOp, GradeComparison, Query, TextQuery};
