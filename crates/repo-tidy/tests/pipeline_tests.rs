//! Tests for the check execution pipeline.

mod common;

use repo_tidy::{
    RuleManifest, RunOptions, Standard, Tally, run_checks, run_checks_pipeline,
};

fn selection(standard: &Standard) -> Vec<String> {
    standard.manifest.names().map(String::from).collect()
}

#[test]
fn test_conforming_repo_passes_everything() {
    let (_temp, repo) = common::conforming_repo("fixture-repo");
    let standard = Standard::new(common::standard_manifest());

    let summary = run_checks(&selection(&standard), &standard, &repo, &RunOptions::default())
        .unwrap();

    assert_eq!(
        summary.passed,
        Tally {
            requirement: 10,
            recommendation: 4
        }
    );
    assert_eq!(summary.failed, Tally::default());
    assert_eq!(
        summary.implemented,
        Tally {
            requirement: 10,
            recommendation: 4
        }
    );
    assert_eq!(
        summary.skipped,
        Tally {
            requirement: 0,
            recommendation: 3
        }
    );
    assert_eq!(summary.defined.total(), standard.manifest.len());
    assert_eq!(summary.failed_count(true), 0);
}

#[test]
fn test_unimplemented_identifier_counts_as_skipped_only() {
    let (_temp, repo) = common::conforming_repo("fixture-repo");
    let standard = Standard::new(common::standard_manifest());

    // RELEASE.NOTES is defined by the standard but has no implementation.
    let summary = run_checks(
        &["RELEASE.NOTES".to_string()],
        &standard,
        &repo,
        &RunOptions::default(),
    )
    .unwrap();

    assert_eq!(summary.passed.total(), 0);
    assert_eq!(summary.failed.total(), 0);
    assert!(summary.skipped.recommendation >= 1);
}

#[test]
fn test_empty_registry_skips_every_rule() {
    let (_temp, repo) = common::conforming_repo("fixture-repo");
    let standard = Standard::with_registry(
        common::standard_manifest(),
        repo_tidy::CheckRegistry::new(),
    );

    let summary = run_checks(&selection(&standard), &standard, &repo, &RunOptions::default())
        .unwrap();

    assert_eq!(summary.passed.total(), 0);
    assert_eq!(summary.failed.total(), 0);
    assert_eq!(summary.implemented.total(), 0);
    assert_eq!(summary.skipped, summary.defined);
}

#[test]
fn test_fix_ordering_is_observable() {
    let manifest = common::standard_manifest();
    let fix = RunOptions {
        fix_inplace: true,
        ..RunOptions::default()
    };

    // README.TITLE's fix creates README.md, which TOPLEVEL.README needs:
    // running it first lets the later check observe the new file.
    let (_temp, repo) = common::empty_repo("fixture-repo");
    let standard = Standard::new(manifest);
    let forward = vec!["README.TITLE".to_string(), "TOPLEVEL.README".to_string()];
    let summary = run_checks(&forward, &standard, &repo, &fix).unwrap();
    assert_eq!(summary.failed.requirement, 0);

    // Reversed, TOPLEVEL.README runs before the file exists and fails.
    let (_temp, repo) = common::empty_repo("fixture-repo");
    let reversed = vec!["TOPLEVEL.README".to_string(), "README.TITLE".to_string()];
    let summary = run_checks(&reversed, &standard, &repo, &fix).unwrap();
    assert_eq!(summary.failed.requirement, 1);
}

#[test]
fn test_require_all_gates_recommendation_failures() {
    // A repository with neither LICENSE nor README fails the REQUIREMENT
    // and the RECOMMENDATION below; require-all decides which count.
    let manifest = RuleManifest::parse(
        "TOPLEVEL.LICENSE:\n  - type: REQUIREMENT\nREADME.BADGES:\n  - type: RECOMMENDATION\n",
    )
    .unwrap();
    let standard = Standard::new(manifest);
    let (_temp, repo) = common::empty_repo("fixture-repo");

    let failed = run_checks_pipeline(
        &selection(&standard),
        &standard,
        &repo,
        &RunOptions::default(),
    )
    .unwrap();
    assert_eq!(failed, 1);

    let failed = run_checks_pipeline(
        &selection(&standard),
        &standard,
        &repo,
        &RunOptions {
            require_all: true,
            ..RunOptions::default()
        },
    )
    .unwrap();
    assert_eq!(failed, 2);
}

#[test]
fn test_guard_is_not_invoked_without_fix_inplace() {
    let (_temp, repo) = common::conforming_repo("fixture-repo");
    let repo = repo.with_unstaged_changes(" src/lib.rs | 3 ++-\n 1 file changed");
    let standard = Standard::new(common::standard_manifest());

    // A dirty tree only matters to fix-in-place runs; this one completes
    // normally (the guard would have terminated the process).
    let summary = run_checks(&selection(&standard), &standard, &repo, &RunOptions::default())
        .unwrap();
    assert_eq!(summary.failed_count(true), 0);
}

#[test]
fn test_fix_inplace_repairs_fixable_rules() {
    let (temp, repo) = common::empty_repo("fixture-repo");
    common::write_file(temp.path(), "README.md", "# wrong-title\n");

    let standard = Standard::new(common::standard_manifest());
    let fix = RunOptions {
        fix_inplace: true,
        ..RunOptions::default()
    };

    let summary = run_checks(
        &[
            "README.TITLE".to_string(),
            "README.LIBRARY_STATUS".to_string(),
            "TOPLEVEL.CHANGELOG".to_string(),
        ],
        &standard,
        &repo,
        &fix,
    )
    .unwrap();

    assert_eq!(summary.failed.total(), 0);
    let readme = std::fs::read_to_string(temp.path().join("README.md")).unwrap();
    assert!(readme.starts_with("# fixture-repo:"));
    assert!(readme.contains("**Status**: experimental"));
    assert!(temp.path().join("CHANGELOG.md").exists());
}
