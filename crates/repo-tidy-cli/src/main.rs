//! repo-tidy command-line entry point.
//!
//! Exit behavior:
//! - normal runs exit with the failed-rule count (clamped to 100),
//! - manifest load failures and empty manifests exit with 101,
//! - the unstaged-changes guard performs its own exit(1) during
//!   fix-in-place runs over a dirty tree.

use anyhow::Context;
use clap::Parser;
use repo_tidy::{RepoContext, RuleManifest, RunOptions, RunReport, Standard, git, run_checks};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Exit code for configuration failures, outside the failed-count range.
const EXIT_CONFIG: u8 = 101;

/// Failed-count exits are clamped below [`EXIT_CONFIG`].
const MAX_FAILED_EXIT: usize = 100;

#[derive(Parser, Debug)]
#[command(
    name = "repo-tidy",
    version,
    about = "Check a repository against a declarative standard"
)]
struct Args {
    /// Path to the repository to check
    repo_path: PathBuf,

    /// Try to automatically fix found issues
    #[arg(long)]
    fix_inplace: bool,

    /// Print verbose output for each check
    #[arg(long)]
    verbose: bool,

    /// All checks are required regardless of their severity (every
    /// RECOMMENDATION becomes a REQUIREMENT)
    #[arg(long)]
    require_all: bool,

    /// Comma-separated list of checks to run (defaults to every rule the
    /// standard defines)
    #[arg(long, value_delimiter = ',')]
    checks: Option<Vec<String>>,

    /// Path to a standard manifest (defaults to the bundled standard)
    #[arg(long)]
    standard: Option<PathBuf>,

    /// Write a JSON run report to this path
    #[arg(long)]
    report: Option<PathBuf>,
}

fn load_manifest(args: &Args) -> anyhow::Result<RuleManifest> {
    match &args.standard {
        Some(path) => RuleManifest::load(path)
            .with_context(|| format!("failed to load the standard from `{}`", path.display())),
        None => RuleManifest::bundled().context("failed to load the bundled standard"),
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let manifest = match load_manifest(&args) {
        Ok(manifest) => manifest,
        Err(err) => {
            eprintln!("repo-tidy: {err:#}. STOP.");
            return ExitCode::from(EXIT_CONFIG);
        }
    };
    if manifest.is_empty() {
        eprintln!("repo-tidy: the standard manifest defines no rules. STOP.");
        return ExitCode::from(EXIT_CONFIG);
    }

    let repo = match git::gather_repo_info(&args.repo_path) {
        Ok(repo) => repo,
        Err(err) => {
            eprintln!("repo-tidy: {err}");
            return ExitCode::FAILURE;
        }
    };

    let standard = Standard::new(manifest);
    let selection: Vec<String> = args.checks.clone().unwrap_or_else(|| {
        standard.manifest.names().map(String::from).collect()
    });

    let opts = RunOptions {
        fix_inplace: args.fix_inplace,
        verbose: args.verbose,
        require_all: args.require_all,
    };

    match run_checks(&selection, &standard, &repo, &opts) {
        Ok(summary) => {
            if let Some(path) = &args.report {
                write_report(&summary, &repo, path);
            }
            let failed = summary.failed_count(opts.require_all).min(MAX_FAILED_EXIT);
            ExitCode::from(u8::try_from(failed).unwrap_or(u8::MAX))
        }
        Err(err) => {
            eprintln!("repo-tidy: {err}");
            ExitCode::from(EXIT_CONFIG)
        }
    }
}

fn write_report(summary: &repo_tidy::RunSummary, repo: &RepoContext, path: &Path) {
    let report = RunReport::new(summary.clone(), &repo.top_level);
    if let Err(err) = std::fs::write(path, report.to_json()) {
        tracing::warn!(path = %path.display(), %err, "failed to write the run report");
    }
}
