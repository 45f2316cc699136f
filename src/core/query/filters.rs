//! Filter chip selection
//!
//! Grouping (`term` / `subject`) and grade sorting (`gradeAscending` /
//! `gradeDescending`) are two independent single-select categories.

use std::fmt;
use std::str::FromStr;

/// A single selectable filter, named as on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterKind {
    /// Group results by formatted term name (`"term"`)
    Term,
    /// Group results by subject (`"subject"`)
    Subject,
    /// Sort by grade, lowest first (`"gradeAscending"`)
    GradeAscending,
    /// Sort by grade, highest first (`"gradeDescending"`)
    GradeDescending,
}

impl FilterKind {
    /// Wire name of the filter
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Term => "term",
            Self::Subject => "subject",
            Self::GradeAscending => "gradeAscending",
            Self::GradeDescending => "gradeDescending",
        }
    }
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "term" => Ok(Self::Term),
            "subject" => Ok(Self::Subject),
            "gradeAscending" => Ok(Self::GradeAscending),
            "gradeDescending" => Ok(Self::GradeDescending),
            _ => Err(format!("Unknown filter: {s}")),
        }
    }
}

/// How results are bucketed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Grouping {
    /// By formatted term name
    Term,
    /// By raw subject string
    Subject,
}

/// Direction of the grade sort
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GradeSort {
    /// Lowest grade first
    Ascending,
    /// Highest grade first
    Descending,
}

/// The active filter set: at most one grouping and at most one sort
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActiveFilters {
    /// Active grouping, if any
    pub grouping: Option<Grouping>,
    /// Active grade sort, if any
    pub sort: Option<GradeSort>,
}

impl ActiveFilters {
    /// No grouping, no sort
    #[must_use]
    pub const fn none() -> Self {
        Self {
            grouping: None,
            sort: None,
        }
    }

    /// Builder-style setter for grouping
    #[must_use]
    pub const fn with_grouping(self, grouping: Grouping) -> Self {
        Self {
            grouping: Some(grouping),
            ..self
        }
    }

    /// Builder-style setter for sort
    #[must_use]
    pub const fn with_sort(self, sort: GradeSort) -> Self {
        Self {
            sort: Some(sort),
            ..self
        }
    }

    /// Whether a given filter is currently selected
    #[must_use]
    pub fn is_active(&self, kind: FilterKind) -> bool {
        match kind {
            FilterKind::Term => self.grouping == Some(Grouping::Term),
            FilterKind::Subject => self.grouping == Some(Grouping::Subject),
            FilterKind::GradeAscending => self.sort == Some(GradeSort::Ascending),
            FilterKind::GradeDescending => self.sort == Some(GradeSort::Descending),
        }
    }

    /// Select a filter, replacing the other member of its category
    pub fn select(&mut self, kind: FilterKind) {
        match kind {
            FilterKind::Term => self.grouping = Some(Grouping::Term),
            FilterKind::Subject => self.grouping = Some(Grouping::Subject),
            FilterKind::GradeAscending => self.sort = Some(GradeSort::Ascending),
            FilterKind::GradeDescending => self.sort = Some(GradeSort::Descending),
        }
    }

    /// Chip toggle: clears the filter if it is active, otherwise selects it
    pub fn toggle(&mut self, kind: FilterKind) {
        if self.is_active(kind) {
            match kind {
                FilterKind::Term | FilterKind::Subject => self.grouping = None,
                FilterKind::GradeAscending | FilterKind::GradeDescending => self.sort = None,
            }
        } else {
            self.select(kind);
        }
    }

    /// Normalise a list of wire names into a consistent selection
    ///
    /// Unknown names are skipped. Name order does not matter: when both
    /// members of a category are present, `term` beats `subject` and
    /// `gradeAscending` beats `gradeDescending`.
    #[must_use]
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Self {
        let mut present = Vec::with_capacity(names.len());
        for name in names {
            let name = name.as_ref();
            match name.parse::<FilterKind>() {
                Ok(kind) => present.push(kind),
                Err(_) => crate::warn!("Ignoring unknown filter '{name}'"),
            }
        }

        let pick = |preferred: FilterKind, other: FilterKind| {
            match (present.contains(&preferred), present.contains(&other)) {
                (true, true) => {
                    crate::warn!(
                        "Filters '{preferred}' and '{other}' conflict; keeping '{preferred}'"
                    );
                    Some(preferred)
                }
                (true, false) => Some(preferred),
                (false, true) => Some(other),
                (false, false) => None,
            }
        };

        let mut filters = Self::none();
        if let Some(kind) = pick(FilterKind::Term, FilterKind::Subject) {
            filters.select(kind);
        }
        if let Some(kind) = pick(FilterKind::GradeAscending, FilterKind::GradeDescending) {
            filters.select(kind);
        }
        filters
    }

    /// Active filters as wire names (grouping first)
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        [
            FilterKind::Term,
            FilterKind::Subject,
            FilterKind::GradeAscending,
            FilterKind::GradeDescending,
        ]
        .into_iter()
        .filter(|kind| self.is_active(*kind))
        .map(FilterKind::as_str)
        .collect()
    }
}
