//! Tests for the concrete check implementations.

mod common;

use repo_tidy::checks::base::Check;
use repo_tidy::checks::license::LicenseApproved;
use repo_tidy::checks::readme::{ReadmeBadges, ReadmeLibraryStatus, ReadmeTitle};
use repo_tidy::checks::repository::{RepositoryDefaultBranch, RepositoryName};
use repo_tidy::checks::toplevel::ToplevelChangelog;

#[test]
fn test_readme_title_valid() {
    let (_temp, repo) = common::conforming_repo("fixture-repo");
    let check = ReadmeTitle::new(&repo, &common::standard_manifest()).unwrap();

    assert!(check.pre_check());
    assert!(check.check());
}

#[test]
fn test_readme_title_invalid() {
    let (temp, repo) = common::empty_repo("fixture-repo");
    common::write_file(temp.path(), "README.md", "# wrong-title\n\nBody.\n");

    let check = ReadmeTitle::new(&repo, &common::standard_manifest()).unwrap();
    assert!(check.pre_check());
    assert!(!check.check());
}

#[test]
fn test_readme_title_fix_is_idempotent() {
    let (temp, repo) = common::empty_repo("fixture-repo");
    common::write_file(temp.path(), "README.md", "# wrong-title\n\nBody.\n");

    let check = ReadmeTitle::new(&repo, &common::standard_manifest()).unwrap();
    assert!(!check.check());
    assert!(check.fix());
    assert!(check.check());

    // The body below the title survives the fix.
    let content = std::fs::read_to_string(temp.path().join("README.md")).unwrap();
    assert!(content.contains("Body."));
}

#[test]
fn test_readme_badges_requires_one_per_group() {
    let (temp, repo) = common::empty_repo("fixture-repo");
    common::write_file(
        temp.path(),
        "README.md",
        "# fixture-repo: lib\n\n\
         ![Experimental](https://img.shields.io/badge/status-experimental-orange.svg)\n",
    );

    // One status badge but no license badge.
    let check = ReadmeBadges::new(&repo, &common::standard_manifest()).unwrap();
    assert!(!check.check());

    common::write_file(
        temp.path(),
        "README.md",
        "# fixture-repo: lib\n\n\
         ![Experimental](https://img.shields.io/badge/status-experimental-orange.svg)\n\
         ![License: MIT](https://img.shields.io/badge/license-MIT-blue.svg)\n",
    );
    assert!(check.check());
}

#[test]
fn test_readme_library_status_fix_appends_default() {
    let (temp, repo) = common::empty_repo("fixture-repo");
    common::write_file(temp.path(), "README.md", "# fixture-repo: lib\n");

    let check = ReadmeLibraryStatus::new(&repo, &common::standard_manifest()).unwrap();
    assert!(!check.check());
    assert!(check.fix());
    assert!(check.check());

    let content = std::fs::read_to_string(temp.path().join("README.md")).unwrap();
    assert!(content.contains("**Status**: experimental"));
}

#[test]
fn test_readme_library_status_rejects_multiple() {
    let (temp, repo) = common::empty_repo("fixture-repo");
    common::write_file(
        temp.path(),
        "README.md",
        "# fixture-repo: lib\n\n**Status**: experimental\n\n**Status**: stable\n",
    );

    let check = ReadmeLibraryStatus::new(&repo, &common::standard_manifest()).unwrap();
    assert!(!check.check());
    // Conflicting statuses cannot be fixed mechanically.
    assert!(!check.fix());
}

#[test]
fn test_license_approved() {
    let (temp, repo) = common::empty_repo("fixture-repo");
    common::write_file(temp.path(), "LICENSE", "MIT License\n\nCopyright (c) 2026\n");

    let check = LicenseApproved::new(&repo, &common::standard_manifest()).unwrap();
    assert!(check.pre_check());
    assert!(check.check());
}

#[test]
fn test_license_not_approved() {
    let (temp, repo) = common::empty_repo("fixture-repo");
    common::write_file(temp.path(), "LICENSE", "Custom Proprietary License\n");

    let check = LicenseApproved::new(&repo, &common::standard_manifest()).unwrap();
    assert!(!check.check());
    assert!(!check.fix());
}

#[test]
fn test_default_branch_check() {
    let (_temp, repo) = common::empty_repo("fixture-repo");
    let manifest = common::standard_manifest();

    let check = RepositoryDefaultBranch::new(&repo, &manifest).unwrap();
    assert!(check.check());

    let (_temp, legacy) = common::empty_repo("fixture-repo");
    let legacy = legacy.with_default_branch("master");
    let check = RepositoryDefaultBranch::new(&legacy, &manifest).unwrap();
    assert!(!check.check());
}

#[test]
fn test_repository_name_check() {
    let manifest = common::standard_manifest();

    let (_temp, good) = common::empty_repo("my-repo_2");
    assert!(RepositoryName::new(&good, &manifest).unwrap().check());

    let (_temp, bad) = common::empty_repo("MyRepo");
    assert!(!RepositoryName::new(&bad, &manifest).unwrap().check());
}

#[test]
fn test_changelog_fix_creates_skeleton() {
    let (temp, repo) = common::empty_repo("fixture-repo");

    let check = ToplevelChangelog::new(&repo, &common::standard_manifest()).unwrap();
    assert!(!check.check());
    assert!(check.fix());
    assert!(check.check());
    assert!(temp.path().join("CHANGELOG.md").exists());
}

#[test]
fn test_file_preconditions_reject_missing_and_empty() {
    let (temp, repo) = common::empty_repo("fixture-repo");
    let manifest = common::standard_manifest();

    let check = ReadmeTitle::new(&repo, &manifest).unwrap();
    assert!(!check.pre_check(), "missing README must fail the pre-check");

    common::write_file(temp.path(), "README.md", "");
    assert!(!check.pre_check(), "empty README must fail the pre-check");
}
