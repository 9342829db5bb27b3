// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Check command implementation.

use std::path::PathBuf;

use sitelint::checks;
use sitelint::cli::{CheckArgs, Cli, OutputFormat};
use sitelint::color::resolve_color;
use sitelint::config::{self, Config};
use sitelint::discovery;
use sitelint::error::{Error, ExitCode};
use sitelint::output::FormatOptions;
use sitelint::output::json::{self, JsonFormatter};
use sitelint::output::text::TextFormatter;
use sitelint::runner::{CheckRunner, RunnerConfig};
use sitelint::walker::{WalkerConfig, collect_html_files};

/// Resolve the site root from the optional PATH argument.
fn resolve_root(path: Option<&PathBuf>) -> anyhow::Result<PathBuf> {
    let cwd = std::env::current_dir()?;
    let root = match path {
        None => cwd,
        Some(path) if path.is_absolute() => path.clone(),
        Some(path) => cwd.join(path),
    };
    if !root.is_dir() {
        return Err(Error::Argument(format!("not a directory: {}", root.display())).into());
    }
    Ok(root)
}

/// Run the check command.
pub fn run(cli: &Cli, args: &CheckArgs) -> anyhow::Result<ExitCode> {
    let root = resolve_root(args.path.as_ref())?;

    // Resolve config from -C/SITELINT_CONFIG or discovery
    let config = match discovery::resolve_config(cli.config.as_deref(), &root)? {
        Some(path) => {
            tracing::debug!("loading config from {}", path.display());
            config::load_with_warnings(&path)?
        }
        None => {
            tracing::debug!("no config found, using defaults");
            Config::default()
        }
    };

    tracing::trace!("check command starting");

    // === Discovery Phase ===
    let walker_config = WalkerConfig {
        max_depth: Some(args.max_depth),
        ..WalkerConfig::from_project(&config.project)
    };
    let (files, stats) = collect_html_files(&root, &walker_config);
    tracing::debug!(
        "found {} html files ({} other files, {} symlink loops, {} errors)",
        stats.files_found,
        stats.files_skipped,
        stats.symlink_loops,
        stats.errors
    );

    // === Checking Phase ===
    let checks = checks::filter_checks(args);
    let runner = CheckRunner::new(RunnerConfig {
        fail_fast: !args.keep_going,
    });
    let results = runner.run(checks, &files, &config, &root);
    let output = json::create_output(results);

    // === Output Phase ===
    match args.output {
        OutputFormat::Text => {
            let options = FormatOptions {
                limit: args.display_limit(),
            };
            let mut formatter = TextFormatter::stdout(resolve_color(args.color_flag()), options);

            for result in &output.checks {
                formatter.write_check(result)?;
            }
            formatter.write_summary(&output)?;
            if formatter.was_truncated() {
                formatter.write_truncation_message(output.total_violations())?;
            }
        }
        OutputFormat::Json => {
            let mut formatter = JsonFormatter::new(std::io::stdout());
            formatter.write(&output)?;
        }
    }

    Ok(if output.passed {
        ExitCode::Success
    } else {
        ExitCode::CheckFailed
    })
}
