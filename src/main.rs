use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use ignore::WalkBuilder;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use phpdoc_standards::checker::Checker;
use phpdoc_standards::report::RunReport;

/// Check that every PHP function and method documents its parameters
/// correctly and completely.
#[derive(Parser)]
#[command(name = "phpdoc-standards", version, about)]
struct Cli {
    /// Files or directories to check. Directories are walked recursively
    /// for `.php` files, honoring ignore files.
    #[arg(required = true)]
    paths: Vec<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value = "text")]
    format: Format,

    /// Suppress output; only set the exit code.
    #[arg(long)]
    quiet: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut report = RunReport::new();
    for path in collect_php_files(&cli.paths) {
        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(err) => {
                warn!("skipping `{}`: {err}", path.display());
                continue;
            }
        };
        let checker = Checker::from_php(&content);
        report.add_file(path.display().to_string(), &checker.check_all());
    }

    if !cli.quiet {
        match cli.format {
            Format::Text => print!("{}", report.render_text()),
            Format::Json => {
                let json = report.to_json().context("rendering JSON report")?;
                println!("{json}");
            }
        }
    }

    Ok(if report.has_findings() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

/// Expand the given paths into a sorted list of PHP files. Plain file
/// arguments are taken as-is (whatever their extension); directories are
/// walked recursively.
fn collect_php_files(paths: &[PathBuf]) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for path in paths {
        if path.is_file() {
            files.push(path.clone());
            continue;
        }
        for entry in WalkBuilder::new(path).build() {
            match entry {
                Ok(entry) if is_php_file(entry.path()) => files.push(entry.into_path()),
                Ok(_) => {}
                Err(err) => warn!("skipping unreadable entry: {err}"),
            }
        }
    }
    files.sort();
    files.dedup();
    files
}

fn is_php_file(path: &Path) -> bool {
    path.is_file() && path.extension().is_some_and(|ext| ext == "php")
}
