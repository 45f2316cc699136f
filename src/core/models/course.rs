//! Course model

use super::grade::{letter_grade, GradeToken};
use super::term::format_term_name;
use serde::{Deserialize, Serialize};

/// A course record as delivered by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    /// Opaque identifier, unique within the owning user's data
    pub id: String,

    /// Subject code (e.g., "MATH", "CMPS")
    pub subject: String,

    /// Course code within the subject (e.g., "101", "211")
    pub course_code: String,

    /// Term code, `year * 100 + semester code` (e.g., 202410)
    pub term: u32,

    /// Credit hours (can be fractional, in steps of 0.5)
    pub credits: f64,

    /// `true` for the letter-grade scale, `false` for pass/fail
    pub graded: bool,

    /// Stored grade, `None` when the course is not completed
    #[serde(default)]
    pub grade: Option<f64>,
}

impl Course {
    /// Create a new graded course with no grade yet
    ///
    /// # Arguments
    /// * `id` - Course identifier
    /// * `subject` - Subject code
    /// * `course_code` - Course code
    /// * `term` - Term code
    /// * `credits` - Credit hours
    #[must_use]
    pub const fn new(
        id: String,
        subject: String,
        course_code: String,
        term: u32,
        credits: f64,
    ) -> Self {
        Self {
            id,
            subject,
            course_code,
            term,
            credits,
            graded: true,
            grade: None,
        }
    }

    /// Builder-style setter for the grade and scale
    #[must_use]
    pub fn with_grade(mut self, grade: Option<f64>, graded: bool) -> Self {
        self.grade = grade;
        self.graded = graded;
        self
    }

    /// Display token for this course's grade
    #[must_use]
    pub fn letter_grade(&self) -> GradeToken {
        letter_grade(self.grade, self.graded)
    }

    /// Joined `SUBJECT-CODE` name used by free-text search
    #[must_use]
    pub fn display_key(&self) -> String {
        format!("{}-{}", self.subject, self.course_code)
    }

    /// Human label of the course's term (e.g., "Fall 2024")
    #[must_use]
    pub fn term_name(&self) -> String {
        format_term_name(self.term)
    }
}
