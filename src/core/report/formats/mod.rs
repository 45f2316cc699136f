//! Result format implementations
//!
//! Provides renderers for plain text, Markdown, and JSON output.

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonRenderer;
pub use markdown::MarkdownRenderer;
pub use text::TextRenderer;

use std::fmt;
use std::str::FromStr;

/// Supported result formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResultsFormat {
    /// Course-card lines with group headings
    #[default]
    Text,
    /// Markdown tables, one per group
    Markdown,
    /// Keyed JSON object
    Json,
}

impl ResultsFormat {
    /// Get the file extension for this format
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Text => "txt",
            Self::Markdown => "md",
            Self::Json => "json",
        }
    }
}

impl FromStr for ResultsFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "md" | "markdown" => Ok(Self::Markdown),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown results format: {s}")),
        }
    }
}

impl fmt::Display for ResultsFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Markdown => write!(f, "markdown"),
            Self::Json => write!(f, "json"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_parse() {
        assert_eq!("MD".parse::<ResultsFormat>(), Ok(ResultsFormat::Markdown));
        assert_eq!("txt".parse::<ResultsFormat>(), Ok(ResultsFormat::Text));
        assert!("pdf".parse::<ResultsFormat>().is_err());
    }

    #[test]
    fn test_format_display_and_extension() {
        assert_eq!(ResultsFormat::Json.to_string(), "json");
        assert_eq!(ResultsFormat::Markdown.extension(), "md");
    }
}
