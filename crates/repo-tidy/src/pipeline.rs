//! Check Execution Pipeline
//!
//! Runs a selection of rules against one repository, strictly in the given
//! order and on a single thread: a rule's `fix()` may create files that a
//! later rule's `check()` reads, so sequential execution is a correctness
//! requirement, not an optimization choice.

use crate::checks::base::Check;
use crate::checks::system::NoUnstagedChanges;
use crate::context::RepoContext;
use crate::registry::Standard;
use crate::report::{self, GREEN, NO_COLOR, RED, RunSummary};
use crate::Result;

/// Flags controlling one pipeline run.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    /// Attempt to repair failing rules in place
    pub fix_inplace: bool,
    /// Print per-check progress and check log output
    pub verbose: bool,
    /// Promote RECOMMENDATION failures to the failure count
    pub require_all: bool,
}

/// Execute the selected rules and return the aggregated counts.
///
/// Identifiers without a registered implementation are skipped silently,
/// the designed incremental-completeness path, not an error. A registered
/// rule whose construction fails (missing manifest entry) aborts the run.
pub fn run_checks(
    selection: &[String],
    standard: &Standard,
    repo: &RepoContext,
    opts: &RunOptions,
) -> Result<RunSummary> {
    let log = |message: &str| {
        if opts.verbose {
            println!("{message}");
        }
    };

    log("repo-tidy pipeline started ...\n");

    // In-place fixes over a dirty tree are unrecoverable; the guard's own
    // fix() terminates the process before any other rule runs. Its logging
    // is forced on regardless of verbosity.
    if opts.fix_inplace {
        let mut guard = NoUnstagedChanges::new(repo, &standard.manifest)?;
        run_one(&mut guard, opts, true);
    }

    let mut summary = RunSummary::default();

    for name in selection {
        let Some(factory) = standard.registry.get(name) else {
            tracing::debug!(check = %name, "no registered implementation; skipping");
            continue;
        };

        let mut check = factory(repo, &standard.manifest)?;
        let severity = check.severity();
        if run_one(check.as_mut(), opts, false) {
            summary.passed.bump(severity);
        } else {
            summary.failed.bump(severity);
        }
    }

    // Walk the whole manifest, independent of the executed subset: the
    // implemented totals are the coverage denominators.
    for entry in standard.manifest.entries() {
        summary.defined.bump(entry.severity);
        if standard.registry.contains(&entry.name) {
            summary.implemented.bump(entry.severity);
        } else {
            summary.skipped.bump(entry.severity);
        }
    }

    log("\nrepo-tidy pipeline finished.\n");

    report::print_summary(&summary, opts.require_all);

    Ok(summary)
}

/// Execute the selected rules and return the failed-rule count, the
/// process's externally visible success/failure signal.
pub fn run_checks_pipeline(
    selection: &[String],
    standard: &Standard,
    repo: &RepoContext,
    opts: &RunOptions,
) -> Result<usize> {
    let summary = run_checks(selection, standard, repo, opts)?;
    Ok(summary.failed_count(opts.require_all))
}

/// Drive one check through its lifecycle.
///
/// A rule passes when its preconditions and predicate hold, or when
/// fix-in-place is requested and `fix()` reports success.
fn run_one(check: &mut dyn Check, opts: &RunOptions, force_log: bool) -> bool {
    check.set_log_enabled(opts.verbose || force_log);

    if opts.verbose {
        println!("Running check [{}][{}] ... ", check.severity(), check.name());
    }

    let passed = (check.pre_check() && check.check()) || (opts.fix_inplace && check.fix());

    if opts.verbose {
        let verdict = if passed {
            format!("{GREEN}PASSED{NO_COLOR}")
        } else {
            format!("{RED}FAILED{NO_COLOR}")
        };
        println!(
            "\tcheck [{}][{}] ... {verdict}\n",
            check.severity(),
            check.name()
        );
    }

    passed
}
