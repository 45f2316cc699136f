//! Data models for `GpaTracker`

pub mod course;
pub mod grade;
pub mod term;

pub use course::Course;
pub use grade::{letter_grade, GradeToken, GRADE_ORDER, GRADE_SCALE};
pub use term::{format_term_name, term_code, Semester, Term, Terms};
