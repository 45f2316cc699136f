//! Command-line interface entry point for `GpaTracker`

mod args;
mod commands;

use args::{Cli, Command};
use clap::Parser;
use gpa_tracker::config::Config;
use gpa_tracker::info;
use gpa_tracker::logger::{enable_debug, enable_verbose, init_file_logging, set_level, Level};
use std::path::PathBuf;

fn main() {
    let args = Cli::parse();

    // Load configuration once at startup and apply CLI overrides to it
    let mut config = Config::load();
    let defaults = Config::from_defaults();
    config.apply_overrides(&args.to_config_overrides());

    // CLI flag overrides config; otherwise use config logging.level; fallback warn
    let mut level = args
        .log_level
        .map(Level::from)
        .or_else(|| config.logging.level.parse().ok())
        .unwrap_or(Level::Warn);

    if args.debug_flag || level == Level::Debug {
        level = Level::Debug;
        enable_debug();
    }

    let verbose = args.verbose || config.logging.verbose;
    if verbose {
        enable_verbose();
    }
    set_level(level);

    // File logging: CLI flag wins, otherwise config logging.file if set
    let config_log_path = (!config.logging.file.is_empty())
        .then(|| PathBuf::from(&config.logging.file));

    if let Some(log_path) = args.log_file.as_ref().or(config_log_path.as_ref()) {
        if let Some(parent) = log_path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        let display_path = log_path.to_string_lossy();
        if init_file_logging(log_path) {
            info!("File logging initialized at: {display_path}");
        } else {
            eprintln!("✗ Failed to initialize file logging at: {display_path}");
        }
    }

    let status = match args.command {
        Command::Config { subcommand } => commands::config::run(subcommand, &mut config, &defaults),
        Command::Query {
            query,
            data,
            group,
            sort,
            filters,
            format,
            output,
        } => commands::query::run(
            &commands::query::QueryRequest {
                query,
                data,
                group: group.map(Into::into),
                sort: sort.map(Into::into),
                filter_names: filters,
                format,
                output,
            },
            &config,
        ),
        Command::Terms { data } => commands::terms::run_terms(data.as_deref(), &config),
        Command::Grades => {
            commands::terms::run_grades();
            Ok(())
        }
        Command::TermName { codes } => {
            commands::terms::run_term_names(&codes);
            Ok(())
        }
    };

    if let Err(message) = status {
        eprintln!("{message}");
        std::process::exit(1);
    }
}
