//! Query command handler

use gpa_tracker::config::Config;
use gpa_tracker::core::loader::load_terms;
use gpa_tracker::core::query::{filter_courses, ActiveFilters, GradeSort, Grouping};
use gpa_tracker::core::report::{renderer_for, ResultsFormat};
use gpa_tracker::{info, verbose};
use std::path::{Path, PathBuf};

/// Everything the query command needs from the command line
#[derive(Debug, Clone, Default)]
pub struct QueryRequest {
    /// Raw search text
    pub query: String,
    /// Snapshot path, if given on the command line
    pub data: Option<PathBuf>,
    /// `--group`
    pub group: Option<Grouping>,
    /// `--sort`
    pub sort: Option<GradeSort>,
    /// `--filter` names, applied after `--group` / `--sort`
    pub filter_names: Vec<String>,
    /// `--format`
    pub format: Option<String>,
    /// `--output`
    pub output: Option<PathBuf>,
}

impl QueryRequest {
    /// Merge the typed flags and raw filter names into one selection
    pub fn active_filters(&self) -> ActiveFilters {
        let mut filters = ActiveFilters::none();
        if let Some(grouping) = self.group {
            filters = filters.with_grouping(grouping);
        }
        if let Some(sort) = self.sort {
            filters = filters.with_sort(sort);
        }
        let named = ActiveFilters::from_names(&self.filter_names);
        ActiveFilters {
            grouping: named.grouping.or(filters.grouping),
            sort: named.sort.or(filters.sort),
        }
    }
}

/// Resolve the snapshot path: command line first, then config
///
/// # Errors
/// Returns a printable message when neither source names a file
pub fn resolve_data_path(data: Option<&Path>, config: &Config) -> Result<PathBuf, String> {
    if let Some(path) = data {
        return Ok(path.to_path_buf());
    }
    if config.data.terms_file.is_empty() {
        return Err("✗ No term snapshot given; pass --data or set terms_file".to_string());
    }
    Ok(PathBuf::from(&config.data.terms_file))
}

/// Run a search and print or write the results
///
/// # Errors
/// Returns a printable message if the snapshot cannot be loaded, the format is
/// unknown, or the output cannot be written
pub fn run(request: &QueryRequest, config: &Config) -> Result<(), String> {
    let data_path = resolve_data_path(request.data.as_deref(), config)?;
    let terms = load_terms(&data_path).map_err(|e| format!("✗ {e}"))?;
    verbose!("✓ Loaded {} term(s) from {}", terms.len(), data_path.display());

    let format_name = request
        .format
        .as_deref()
        .unwrap_or(config.display.format.as_str());
    let format = if format_name.is_empty() {
        ResultsFormat::default()
    } else {
        format_name.parse::<ResultsFormat>().map_err(|e| format!("✗ {e}"))?
    };

    let filters = request.active_filters();
    let results = filter_courses(&terms, &request.query, &filters);
    info!(
        "Query '{}' with filters {:?} matched {} course(s)",
        request.query,
        filters.names(),
        results.len()
    );

    let renderer = renderer_for(format);
    match &request.output {
        Some(path) => {
            renderer
                .generate(&results, path)
                .map_err(|e| format!("✗ Failed to write {}: {e}", path.display()))?;
            println!("✓ Results written to: {}", path.display());
        }
        None => {
            let rendered = renderer
                .render(&results)
                .map_err(|e| format!("✗ Failed to render results: {e}"))?;
            print!("{rendered}");
        }
    }
    Ok(())
}
