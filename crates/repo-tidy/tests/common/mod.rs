//! Shared fixtures for integration tests.
#![allow(dead_code)]

use repo_tidy::{RepoContext, RuleManifest};
use std::path::Path;
use tempfile::TempDir;

/// The bundled standard; every registered rule has an entry in it.
pub fn standard_manifest() -> RuleManifest {
    RuleManifest::bundled().expect("bundled standard must parse")
}

/// Write a file below `root`, creating parent directories.
pub fn write_file(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("create fixture directories");
    }
    std::fs::write(path, content).expect("write fixture file");
}

/// An empty repository working tree plus its context.
pub fn empty_repo(name: &str) -> (TempDir, RepoContext) {
    let temp = TempDir::new().expect("create fixture repo");
    let repo = RepoContext::new(temp.path(), name);
    (temp, repo)
}

/// A repository that satisfies every registered rule of the bundled
/// standard.
pub fn conforming_repo(name: &str) -> (TempDir, RepoContext) {
    let (temp, repo) = empty_repo(name);
    let root = temp.path();

    write_file(
        root,
        "README.md",
        &format!(
            "# {name}: A tiny example library\n\
             \n\
             ![Experimental](https://img.shields.io/badge/status-experimental-orange.svg)\n\
             ![License: MIT](https://img.shields.io/badge/license-MIT-blue.svg)\n\
             \n\
             **Implements**: [Widget Spec v2](https://example.com/widget-spec)\n\
             \n\
             **Status**: experimental\n"
        ),
    );
    write_file(
        root,
        "LICENSE",
        "MIT License\n\nCopyright (c) 2026 Example Maintainers\n",
    );
    write_file(root, "CHANGELOG.md", "# Changelog\n\n## Unreleased\n");
    write_file(root, ".github/CODEOWNERS", "* @example/maintainers\n");
    write_file(root, "src/lib.rs", "pub fn answer() -> u32 { 42 }\n");
    write_file(root, "tests/smoke.rs", "#[test]\nfn smoke() {}\n");
    write_file(root, "docs/overview.md", "# Overview\n");

    (temp, repo)
}
