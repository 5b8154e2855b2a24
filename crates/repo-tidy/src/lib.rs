//! Repository Standard Compliance Checks
//!
//! This crate validates that a repository conforms to a named standard:
//! - Required top-level files (README, LICENSE, CHANGELOG)
//! - README structure (title line, badges, status, references)
//! - License text against an approved set
//! - Directory layout (sources, tests, docs)
//! - Repository metadata (name, default branch, CODEOWNERS)
//!
//! The standard itself is declarative: a YAML manifest lists every known
//! rule with its severity and configuration values, and a [`CheckRegistry`]
//! maps rule identifiers to the procedures that implement them. The two are
//! bundled into a [`Standard`] and executed by the pipeline:
//!
//! ```ignore
//! use repo_tidy::{RuleManifest, RunOptions, Standard, run_checks_pipeline};
//!
//! let manifest = RuleManifest::bundled()?;
//! let standard = Standard::new(manifest);
//! let selection: Vec<String> = standard.manifest.names().map(String::from).collect();
//! let failed = run_checks_pipeline(&selection, &standard, &repo, &RunOptions::default())?;
//! ```

pub mod checks;
pub mod context;
pub mod git;
pub mod manifest;
pub mod pipeline;
pub mod registry;
pub mod report;

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

pub use checks::base::{Check, CheckCtx, DirCheck, FileCheck};
pub use context::RepoContext;
pub use manifest::{ManifestEntry, RuleManifest, ValueGroup};
pub use pipeline::{RunOptions, run_checks, run_checks_pipeline};
pub use registry::{CheckFactory, CheckRegistry, Standard};
pub use report::{RunReport, RunSummary, Tally};

/// Result type for compliance operations
pub type Result<T> = std::result::Result<T, TidyError>;

/// Compliance error types
#[derive(Error, Debug)]
pub enum TidyError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("manifest error: {0}")]
    Manifest(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("git error: {0}")]
    Git(String),
}

/// Severity class for rules
///
/// A `Requirement` must pass; a `Recommendation` is advisory unless the run
/// promotes it with the require-all flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    Requirement,
    Recommendation,
}

impl Severity {
    /// Log level used when a check of this severity emits a message.
    pub fn log_level(self) -> &'static str {
        match self {
            Self::Requirement => "ERROR",
            Self::Recommendation => "WARNING",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Requirement => write!(f, "REQUIREMENT"),
            Self::Recommendation => write!(f, "RECOMMENDATION"),
        }
    }
}

impl FromStr for Severity {
    type Err = TidyError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "REQUIREMENT" => Ok(Self::Requirement),
            "RECOMMENDATION" => Ok(Self::Recommendation),
            other => Err(TidyError::Manifest(format!(
                "invalid severity `{other}` (expected REQUIREMENT or RECOMMENDATION)"
            ))),
        }
    }
}
