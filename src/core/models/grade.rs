//! Grade vocabulary
//!
//! Maps numeric GPA points to letter-grade display tokens and defines the
//! total order used by grade-comparison queries.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Tolerance used when matching stored grade points against the scale.
const POINT_TOLERANCE: f64 = 1e-9;

/// Canonical grade display token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GradeToken {
    /// A+ (4.3)
    #[serde(rename = "A+")]
    APlus,
    /// A (4.0)
    A,
    /// A- (3.7)
    #[serde(rename = "A-")]
    AMinus,
    /// B+ (3.3)
    #[serde(rename = "B+")]
    BPlus,
    /// B (3.0)
    B,
    /// B- (2.7)
    #[serde(rename = "B-")]
    BMinus,
    /// C+ (2.3)
    #[serde(rename = "C+")]
    CPlus,
    /// C (2.0)
    C,
    /// C- (1.7)
    #[serde(rename = "C-")]
    CMinus,
    /// D+ (1.3)
    #[serde(rename = "D+")]
    DPlus,
    /// D (1.0)
    D,
    /// Failing grade, on either scale
    F,
    /// Withdrawn
    W,
    /// Passed a pass/fail course
    P,
    /// Not completed, or a value outside the scale
    NC,
}

/// Total order over grade tokens, best first.
///
/// `P` has no position: a pass carries no letter to rank against.
pub const GRADE_ORDER: [GradeToken; 14] = [
    GradeToken::APlus,
    GradeToken::A,
    GradeToken::AMinus,
    GradeToken::BPlus,
    GradeToken::B,
    GradeToken::BMinus,
    GradeToken::CPlus,
    GradeToken::C,
    GradeToken::CMinus,
    GradeToken::DPlus,
    GradeToken::D,
    GradeToken::F,
    GradeToken::W,
    GradeToken::NC,
];

/// Grade points to letter for graded courses, highest first.
///
/// The trailing `-1.0` entry is the withdrawal marker.
pub const GRADE_SCALE: [(f64, GradeToken); 13] = [
    (4.3, GradeToken::APlus),
    (4.0, GradeToken::A),
    (3.7, GradeToken::AMinus),
    (3.3, GradeToken::BPlus),
    (3.0, GradeToken::B),
    (2.7, GradeToken::BMinus),
    (2.3, GradeToken::CPlus),
    (2.0, GradeToken::C),
    (1.7, GradeToken::CMinus),
    (1.3, GradeToken::DPlus),
    (1.0, GradeToken::D),
    (0.0, GradeToken::F),
    (-1.0, GradeToken::W),
];

impl GradeToken {
    /// Display form of the token (e.g. `"B+"`)
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::APlus => "A+",
            Self::A => "A",
            Self::AMinus => "A-",
            Self::BPlus => "B+",
            Self::B => "B",
            Self::BMinus => "B-",
            Self::CPlus => "C+",
            Self::C => "C",
            Self::CMinus => "C-",
            Self::DPlus => "D+",
            Self::D => "D",
            Self::F => "F",
            Self::W => "W",
            Self::P => "P",
            Self::NC => "NC",
        }
    }

    /// Position in [`GRADE_ORDER`] (0 = best), or `None` for `P`
    #[must_use]
    pub fn rank(self) -> Option<usize> {
        GRADE_ORDER.iter().position(|&token| token == self)
    }

    /// Whether the token is a letter grade (A+ through F)
    #[must_use]
    pub const fn is_letter(self) -> bool {
        !matches!(self, Self::W | Self::P | Self::NC)
    }
}

impl fmt::Display for GradeToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GradeToken {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = match s.trim().to_ascii_uppercase().as_str() {
            "A+" => Self::APlus,
            "A" => Self::A,
            "A-" => Self::AMinus,
            "B+" => Self::BPlus,
            "B" => Self::B,
            "B-" => Self::BMinus,
            "C+" => Self::CPlus,
            "C" => Self::C,
            "C-" => Self::CMinus,
            "D+" => Self::DPlus,
            "D" => Self::D,
            "F" => Self::F,
            "W" => Self::W,
            "P" => Self::P,
            "NC" => Self::NC,
            _ => return Err(format!("Unknown grade token: {s}")),
        };
        Ok(token)
    }
}

/// Resolve the display token for a stored grade
///
/// # Arguments
/// * `grade` - Stored grade value, `None` when the course is not completed
/// * `graded` - `true` for the letter-grade scale, `false` for pass/fail
///
/// Values outside the applicable scale resolve to `NC`. A graded `-1` is read
/// as a withdrawal (`W`) through the last [`GRADE_SCALE`] entry instead of
/// falling through to `NC`. Grade queries match the same courses either way,
/// since both tokens rank below `F`.
#[must_use]
pub fn letter_grade(grade: Option<f64>, graded: bool) -> GradeToken {
    let Some(points) = grade else {
        return GradeToken::NC;
    };

    if graded {
        return GRADE_SCALE
            .iter()
            .find(|(scale_points, _)| (scale_points - points).abs() < POINT_TOLERANCE)
            .map_or(GradeToken::NC, |&(_, token)| token);
    }

    if (points - 1.0).abs() < POINT_TOLERANCE {
        GradeToken::P
    } else if points.abs() < POINT_TOLERANCE {
        GradeToken::F
    } else if (points + 1.0).abs() < POINT_TOLERANCE {
        GradeToken::W
    } else {
        GradeToken::NC
    }
}
