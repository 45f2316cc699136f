//! CLI argument definitions for `GpaTracker`

use clap::{builder::BoolishValueParser, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use gpa_tracker::config::ConfigOverrides;
use gpa_tracker::core::query::{GradeSort, Grouping};
use gpa_tracker::logger::Level;

/// CLI log level argument
///
/// Converts to lowercase strings for config storage and to `Level` for runtime use.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&Level::from(*self), f)
    }
}

/// Grouping chip
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum GroupArg {
    /// Group by term name
    Term,
    /// Group by subject
    Subject,
}

impl From<GroupArg> for Grouping {
    fn from(arg: GroupArg) -> Self {
        match arg {
            GroupArg::Term => Self::Term,
            GroupArg::Subject => Self::Subject,
        }
    }
}

/// Grade sort chip
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum SortArg {
    /// Lowest to highest
    #[value(alias = "asc")]
    Ascending,
    /// Highest to lowest
    #[value(alias = "desc")]
    Descending,
}

impl From<SortArg> for GradeSort {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Ascending => Self::Ascending,
            SortArg::Descending => Self::Descending,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Print one setting, or every setting when KEY is omitted.
    Get {
        /// Optional configuration key to display (e.g., `level`, `terms_file`, `format`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Change a setting and save it.
    Set {
        /// Setting to change
        #[arg(value_name = "KEY")]
        key: String,
        /// New value
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Restore a setting to its default and save it.
    Unset {
        /// Setting to restore
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Delete the config file after confirmation.
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show or edit the saved settings (shows all of them without a subcommand).
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// Search courses.
    ///
    /// QUERY is a grade comparison (`>=B+`, `<c`, `A-`), a course name
    /// (`math 101`), or free text matched against subject and course code.
    Query {
        /// Search text (empty matches every course)
        #[arg(value_name = "QUERY", default_value = "")]
        query: String,

        /// Term snapshot JSON (defaults to config `terms_file`)
        #[arg(short, long, value_name = "FILE")]
        data: Option<PathBuf>,

        /// Group results
        #[arg(short, long, value_enum)]
        group: Option<GroupArg>,

        /// Sort results by grade
        #[arg(short, long, value_enum)]
        sort: Option<SortArg>,

        /// Raw filter names (term, subject, gradeAscending, gradeDescending), applied in order
        #[arg(long = "filter", value_name = "NAME")]
        filters: Vec<String>,

        /// Output format: text, markdown (md), or json (defaults to config `format`)
        #[arg(short, long, value_name = "FORMAT")]
        format: Option<String>,

        /// Write results to a file instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// List terms with GPA, credits, and course counts.
    Terms {
        /// Term snapshot JSON (defaults to config `terms_file`)
        #[arg(short, long, value_name = "FILE")]
        data: Option<PathBuf>,
    },
    /// Show the grading scale.
    Grades,
    /// Decode term codes (e.g., 202410 -> Fall 2024).
    TermName {
        /// One or more term codes
        #[arg(value_name = "CODE", num_args = 1..)]
        codes: Vec<u32>,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "gpatracker",
    about = "GPA tracker command-line interface",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Log level for this run (error|warn|info|debug); config `level` otherwise
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Print progress messages
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Shorthand for `--log-level debug`
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Append log lines to PATH instead of the terminal
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Override config logging level
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config `file` for this run
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config `verbose` for this run (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Override config term snapshot path
    #[arg(long = "terms-file", value_name = "PATH", global = true)]
    pub terms_file: Option<PathBuf>,

    /// Override config results format
    #[arg(long = "config-format", value_name = "FORMAT")]
    pub config_format: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// `None` fields leave the loaded configuration untouched.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string()),
            file: self
                .config_log_file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            verbose: self.config_verbose,
            terms_file: self
                .terms_file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            format: self.config_format.clone(),
        }
    }
}
