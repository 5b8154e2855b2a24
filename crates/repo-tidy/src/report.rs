//! Run Report Generation
//!
//! Aggregated counts and coverage for one pipeline run, with a
//! human-readable terminal summary and a JSON rendering for CI. The colors
//! are cosmetic; automated callers should rely on the numbers and the
//! process exit code only.

use crate::Severity;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub(crate) const GREEN: &str = "\x1b[92m";
pub(crate) const RED: &str = "\x1b[91m";
pub(crate) const YELLOW: &str = "\x1b[93m";
pub(crate) const GRAY: &str = "\x1b[90m";
pub(crate) const NO_COLOR: &str = "\x1b[0m";

/// A pair of counters, one per severity class.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    pub requirement: usize,
    pub recommendation: usize,
}

impl Tally {
    pub fn bump(&mut self, severity: Severity) {
        match severity {
            Severity::Requirement => self.requirement += 1,
            Severity::Recommendation => self.recommendation += 1,
        }
    }

    pub fn get(self, severity: Severity) -> usize {
        match severity {
            Severity::Requirement => self.requirement,
            Severity::Recommendation => self.recommendation,
        }
    }

    pub fn total(self) -> usize {
        self.requirement + self.recommendation
    }
}

/// Aggregate counts for one pipeline run. Ephemeral: nothing here persists
/// beyond the invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Executed checks that passed
    pub passed: Tally,
    /// Executed checks that failed
    pub failed: Tally,
    /// Manifest rules with no registered implementation
    pub skipped: Tally,
    /// Manifest rules with a registered implementation
    pub implemented: Tally,
    /// All manifest rules
    pub defined: Tally,
}

impl RunSummary {
    /// Coverage percentage for one severity: passed / implemented × 100,
    /// rounded to two decimals.
    pub fn coverage(&self, severity: Severity) -> f64 {
        percentage(self.passed.get(severity), self.implemented.get(severity))
    }

    /// Combined coverage over both severities.
    pub fn total_coverage(&self) -> f64 {
        percentage(self.passed.total(), self.implemented.total())
    }

    /// The run's externally visible failure signal: REQUIREMENT failures
    /// always count; RECOMMENDATION failures only under require-all.
    pub fn failed_count(&self, require_all: bool) -> usize {
        self.failed.requirement
            + if require_all {
                self.failed.recommendation
            } else {
                0
            }
    }
}

/// A severity with zero implemented rules reports full coverage: nothing
/// implemented can fail, and the summary line stays printable for
/// manifests carrying a single severity.
fn percentage(passed: usize, implemented: usize) -> f64 {
    if implemented == 0 {
        return 100.0;
    }
    #[allow(clippy::cast_precision_loss)]
    let raw = passed as f64 / implemented as f64 * 100.0;
    (raw * 100.0).round() / 100.0
}

fn coverage_color(coverage: f64) -> &'static str {
    if coverage >= 100.0 {
        GREEN
    } else if coverage <= 0.0 {
        RED
    } else {
        YELLOW
    }
}

/// Print the two summary lines and the coverage lines.
///
/// RECOMMENDATION and TOTAL coverage appear only under require-all,
/// mirroring what counts toward the exit code.
pub fn print_summary(summary: &RunSummary, require_all: bool) {
    for severity in [Severity::Requirement, Severity::Recommendation] {
        println!(
            "Summary {:>14}: {GREEN} {} checks PASSED{NO_COLOR}, {RED}{} checks FAILED{NO_COLOR}, {GRAY}{} skipped (NOT implemented).{NO_COLOR}",
            severity.to_string(),
            summary.passed.get(severity),
            summary.failed.get(severity),
            summary.skipped.get(severity),
        );
    }

    let requirement = summary.coverage(Severity::Requirement);
    println!(
        "\n{}Coverage    REQUIREMENT: {requirement:>6.2}% ({}/{} checks passed).{NO_COLOR}",
        coverage_color(requirement),
        summary.passed.requirement,
        summary.implemented.requirement,
    );

    if require_all {
        let recommendation = summary.coverage(Severity::Recommendation);
        println!(
            "{}Coverage RECOMMENDATION: {recommendation:>6.2}% ({}/{} checks passed).{NO_COLOR}",
            coverage_color(recommendation),
            summary.passed.recommendation,
            summary.implemented.recommendation,
        );
        let total = summary.total_coverage();
        println!(
            "{}Coverage          TOTAL: {total:>6.2}% ({}/{} checks passed).{NO_COLOR}",
            coverage_color(total),
            summary.passed.total(),
            summary.implemented.total(),
        );
    } else {
        println!("Note: RECOMMENDATIONs are not included (--require-all NOT set).");
    }
}

/// Serializable run report for CI consumers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    /// Timestamp of the run
    pub timestamp: String,
    /// Repository that was checked
    pub repo_root: PathBuf,
    /// Aggregate counts
    pub summary: RunSummary,
    /// REQUIREMENT coverage percentage
    pub coverage_requirement: f64,
    /// RECOMMENDATION coverage percentage
    pub coverage_recommendation: f64,
    /// Combined coverage percentage
    pub coverage_total: f64,
}

impl RunReport {
    pub fn new(summary: RunSummary, repo_root: impl Into<PathBuf>) -> Self {
        Self {
            timestamp: chrono::Utc::now().to_rfc3339(),
            repo_root: repo_root.into(),
            coverage_requirement: summary.coverage(Severity::Requirement),
            coverage_recommendation: summary.coverage(Severity::Recommendation),
            coverage_total: summary.total_coverage(),
            summary,
        }
    }

    /// Generate the JSON rendering.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}
