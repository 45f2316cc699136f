//! Free-text query parsing
//!
//! A query is either a grade comparison (`>=B+`, `c-`, `=A`) or plain text
//! matched against subject and course code.

use crate::core::models::{Course, GradeToken};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

static GRADE_QUERY_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^([<>]=?|=)?([A-D][+-]?|F)$").expect("grade query pattern is valid")
});

static COURSE_NAME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^([a-z]+)\s*([0-9]+)$").expect("course name pattern is valid")
});

/// Comparison operator of a grade query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComparisonOp {
    /// Strictly better than the operand (`>`)
    Gt,
    /// Better than or equal to the operand (`>=`)
    Gte,
    /// Strictly worse than the operand (`<`)
    Lt,
    /// Worse than or equal to the operand (`<=`)
    Lte,
    /// Same token as the operand (`=` or no operator)
    Exact,
}

impl ComparisonOp {
    /// Wire name of the operator (`"gt"`, `"gte"`, ...)
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Gt => "gt",
            Self::Gte => "gte",
            Self::Lt => "lt",
            Self::Lte => "lte",
            Self::Exact => "exact",
        }
    }

    fn from_symbol(symbol: Option<&str>) -> Self {
        match symbol {
            Some(">") => Self::Gt,
            Some(">=") => Self::Gte,
            Some("<") => Self::Lt,
            Some("<=") => Self::Lte,
            _ => Self::Exact,
        }
    }
}

impl fmt::Display for ComparisonOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parsed grade comparison such as `>=B+`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradeComparison {
    /// Comparison operator
    #[serde(rename = "type")]
    pub op: ComparisonOp,
    /// Letter-grade operand
    #[serde(rename = "value")]
    pub token: GradeToken,
}

impl GradeComparison {
    /// Check a course's display token against this comparison
    ///
    /// Ordering uses positions in the grade order, where a lower position is
    /// a better grade. A token without a position (`P`) never satisfies an
    /// ordering operator; it can only equal itself.
    #[must_use]
    pub fn matches(&self, course_token: GradeToken) -> bool {
        if self.op == ComparisonOp::Exact {
            return course_token == self.token;
        }

        let (Some(course_rank), Some(operand_rank)) = (course_token.rank(), self.token.rank())
        else {
            return false;
        };

        match self.op {
            ComparisonOp::Gt => course_rank < operand_rank,
            ComparisonOp::Gte => course_rank <= operand_rank,
            ComparisonOp::Lt => course_rank > operand_rank,
            ComparisonOp::Lte => course_rank >= operand_rank,
            ComparisonOp::Exact => unreachable!("exact comparisons return early"),
        }
    }
}

/// Parse a grade comparison query
///
/// Accepts an optional operator (`>`, `>=`, `<`, `<=`, `=`) immediately
/// followed by a letter grade `A`-`D` with optional `+`/`-`, or `F`. Case is
/// ignored and surrounding whitespace is trimmed. Anything else returns `None`.
#[must_use]
pub fn parse_grade_query(query: &str) -> Option<GradeComparison> {
    let captures = GRADE_QUERY_REGEX.captures(query.trim())?;
    let op = ComparisonOp::from_symbol(captures.get(1).map(|m| m.as_str()));
    let token = captures.get(2)?.as_str().parse::<GradeToken>().ok()?;
    Some(GradeComparison { op, token })
}

/// Plain-text query matched against subject and course code
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextQuery {
    /// `SUBJECT CODE` form (e.g., "math 101" or "math101"): both must match exactly
    SubjectAndCode {
        /// Lowercased subject
        subject: String,
        /// Lowercased course code
        code: String,
    },
    /// Any other text: exact subject, exact code, or a substring of `SUBJECT-CODE`
    Fragment(String),
}

impl TextQuery {
    /// Classify an already normalised (trimmed, lowercased) query
    #[must_use]
    pub fn parse(normalized: &str) -> Self {
        COURSE_NAME_REGEX.captures(normalized).map_or_else(
            || Self::Fragment(normalized.to_string()),
            |captures| Self::SubjectAndCode {
                subject: captures[1].to_lowercase(),
                code: captures[2].to_lowercase(),
            },
        )
    }

    /// Check whether a course matches (case-insensitive)
    #[must_use]
    pub fn matches(&self, course: &Course) -> bool {
        let subject = course.subject.to_lowercase();
        let code = course.course_code.to_lowercase();
        match self {
            Self::SubjectAndCode {
                subject: query_subject,
                code: query_code,
            } => subject == *query_subject && code == *query_code,
            Self::Fragment(fragment) => {
                subject == *fragment
                    || code == *fragment
                    || course.display_key().to_lowercase().contains(fragment.as_str())
            }
        }
    }
}

/// A fully classified search query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    /// Grade comparison against the course's display token
    Grade(GradeComparison),
    /// Subject / course-code text match
    Text(TextQuery),
}

impl Query {
    /// Normalise raw user input and classify it
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let normalized = raw.trim().to_lowercase();
        parse_grade_query(&normalized)
            .map_or_else(|| Self::Text(TextQuery::parse(&normalized)), Self::Grade)
    }

    /// Check whether a course satisfies the query
    #[must_use]
    pub fn matches(&self, course: &Course) -> bool {
        match self {
            Self::Grade(comparison) => comparison.matches(course.letter_grade()),
            Self::Text(text) => text.matches(course),
        }
    }
}
