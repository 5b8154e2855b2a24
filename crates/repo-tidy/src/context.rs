//! Repository Context
//!
//! A snapshot of the target repository's identity and working-tree state.
//! Gathered once per invocation (see [`crate::git`]) and treated as
//! read-only input by the pipeline: checks never refresh it, and fixes
//! mutate target files only, never this record.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Everything the checks need to know about the repository under test.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepoContext {
    /// Top-level directory of the working tree
    pub top_level: PathBuf,
    /// Repository short name (directory name of the top level)
    pub name: String,
    /// `origin` remote URL, when one exists
    pub remote_url: Option<String>,
    /// Currently checked-out branch
    pub current_branch: String,
    /// HEAD commit hash
    pub commit_hash: String,
    /// Default branch name
    pub default_branch: String,
    /// `git status` text
    pub status: String,
    /// Unstaged-change summary (`git diff --stat`); empty means clean
    pub unstaged_changes: String,
}

impl RepoContext {
    /// Build a context with just the identity fields set; the remaining
    /// fields default to a clean checkout of `main`.
    pub fn new(top_level: impl Into<PathBuf>, name: impl Into<String>) -> Self {
        Self {
            top_level: top_level.into(),
            name: name.into(),
            remote_url: None,
            current_branch: "main".to_string(),
            commit_hash: String::new(),
            default_branch: "main".to_string(),
            status: String::new(),
            unstaged_changes: String::new(),
        }
    }

    /// Override the default branch.
    pub fn with_default_branch(mut self, branch: impl Into<String>) -> Self {
        self.default_branch = branch.into();
        self
    }

    /// Override the unstaged-change summary.
    pub fn with_unstaged_changes(mut self, summary: impl Into<String>) -> Self {
        self.unstaged_changes = summary.into();
        self
    }
}
