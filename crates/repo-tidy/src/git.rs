//! Repository Metadata Gathering
//!
//! Shells out to `git` to build the [`RepoContext`] record. This module is
//! the only place that invokes version control; the pipeline and the checks
//! consume the resulting context as plain data.

use crate::context::RepoContext;
use crate::{Result, TidyError};
use std::path::Path;
use std::process::Command;

/// Inspect the working copy at `path` and produce its context.
///
/// Fails with [`TidyError::Git`] when `path` is not inside a git working
/// tree or a required git query fails.
pub fn gather_repo_info(path: &Path) -> Result<RepoContext> {
    let top_level = git_output(path, &["rev-parse", "--show-toplevel"])?;
    let top_level = Path::new(&top_level).to_path_buf();

    let name = top_level
        .file_name()
        .and_then(|n| n.to_str())
        .map(String::from)
        .ok_or_else(|| {
            TidyError::Git(format!(
                "cannot derive a repository name from `{}`",
                top_level.display()
            ))
        })?;

    // A repository without an `origin` remote is still checkable.
    let remote_url = git_output(&top_level, &["remote", "get-url", "origin"]).ok();

    let current_branch = git_output(&top_level, &["branch", "--show-current"])?;
    let commit_hash = git_output(&top_level, &["rev-parse", "HEAD"])?;
    let status = git_output(&top_level, &["status"])?;
    let unstaged_changes = git_output(&top_level, &["diff", "--stat"])?;

    // `origin/HEAD` is only present after a clone or an explicit
    // `remote set-head`; fall back to `main` when it is missing.
    let default_branch = git_output(
        &top_level,
        &["symbolic-ref", "--short", "refs/remotes/origin/HEAD"],
    )
    .map(|r| r.strip_prefix("origin/").unwrap_or(&r).to_string())
    .unwrap_or_else(|_| "main".to_string());

    tracing::debug!(repo = %name, branch = %current_branch, "gathered repository context");

    Ok(RepoContext {
        top_level,
        name,
        remote_url,
        current_branch,
        commit_hash,
        default_branch,
        status,
        unstaged_changes,
    })
}

/// Run one git query and return its trimmed stdout.
fn git_output(dir: &Path, args: &[&str]) -> Result<String> {
    let output = Command::new("git")
        .arg("-C")
        .arg(dir)
        .args(args)
        .output()?;

    if !output.status.success() {
        return Err(TidyError::Git(format!(
            "`git {}` failed: {}",
            args.join(" "),
            String::from_utf8_lossy(&output.stderr).trim()
        )));
    }

    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}
