//! Term model and term-code formatting

use super::Course;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Academic semester, identified by the two low digits of a term code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Semester {
    /// Fall (code 10)
    Fall,
    /// Winter (code 15)
    Winter,
    /// Spring (code 20)
    Spring,
    /// Summer (code 30)
    Summer,
}

impl Semester {
    /// Two-digit code used inside a term code
    #[must_use]
    pub const fn code(self) -> u32 {
        match self {
            Self::Fall => 10,
            Self::Winter => 15,
            Self::Spring => 20,
            Self::Summer => 30,
        }
    }

    /// Semester for a two-digit code, if known
    #[must_use]
    pub const fn from_code(code: u32) -> Option<Self> {
        match code {
            10 => Some(Self::Fall),
            15 => Some(Self::Winter),
            20 => Some(Self::Spring),
            30 => Some(Self::Summer),
            _ => None,
        }
    }

    /// Display name ("Fall", "Winter", ...)
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Fall => "Fall",
            Self::Winter => "Winter",
            Self::Spring => "Spring",
            Self::Summer => "Summer",
        }
    }
}

impl fmt::Display for Semester {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Semester {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fall" => Ok(Self::Fall),
            "winter" => Ok(Self::Winter),
            "spring" => Ok(Self::Spring),
            "summer" => Ok(Self::Summer),
            _ => Err(format!("Unknown semester: {s}")),
        }
    }
}

/// Build a term code from a year and semester (e.g., 2024 + Fall = 202410)
#[must_use]
pub const fn term_code(year: u32, semester: Semester) -> u32 {
    year * 100 + semester.code()
}

/// Decode a term code into a human label
///
/// `202410` becomes `"Fall 2024"`. An unknown semester code leaves the
/// semester name empty, so `202499` becomes `" 2024"`.
#[must_use]
pub fn format_term_name(code: u32) -> String {
    let year = code / 100;
    let semester = Semester::from_code(code % 100).map_or("", Semester::name);
    format!("{semester} {year}")
}

/// A term bucket with its courses and backend-computed aggregates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Term {
    /// Term name as stored by the backend
    #[serde(default)]
    pub name: String,

    /// Term GPA (computed upstream)
    #[serde(default)]
    pub gpa: f64,

    /// Total credits (computed upstream)
    #[serde(default)]
    pub credits: f64,

    /// Courses keyed by course id, in backend order
    #[serde(default)]
    pub courses: IndexMap<String, Course>,
}

impl Term {
    /// Create an empty term
    #[must_use]
    pub fn new(name: String, gpa: f64, credits: f64) -> Self {
        Self {
            name,
            gpa,
            credits,
            courses: IndexMap::new(),
        }
    }

    /// Add a course keyed by its id. Returns `false` if the key was already present.
    pub fn add_course(&mut self, course: Course) -> bool {
        self.courses.insert(course.id.clone(), course).is_none()
    }
}

/// A full term collection keyed by term id, in backend order
pub type Terms = IndexMap<String, Term>;
