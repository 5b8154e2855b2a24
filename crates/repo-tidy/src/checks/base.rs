//! Check Contract
//!
//! Every rule is a [`Check`]: a `pre_check`/`check`/`fix` lifecycle over one
//! target in the repository. Shared lifecycle state lives in [`CheckCtx`];
//! the two capability bases [`FileCheck`] and [`DirCheck`] add a resolved
//! target path and the exists/non-empty preconditions for it.
//! Metadata-only rules hold a bare [`CheckCtx`] and implement the trait
//! directly.

use crate::context::RepoContext;
use crate::manifest::RuleManifest;
use crate::{Result, Severity, TidyError};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Identifier prefix for rules that live outside the manifest.
pub const INTERNAL_PREFIX: &str = "INTERNAL.";

/// The check lifecycle, implemented by every rule.
///
/// The pipeline drives one instance through
/// `pre_check()` → `check()` → (on failure, when fixing in place) `fix()`.
pub trait Check {
    /// Shared lifecycle state.
    fn ctx(&self) -> &CheckCtx;

    /// Mutable access to the shared state.
    fn ctx_mut(&mut self) -> &mut CheckCtx;

    /// Rule identifier, e.g. `README.TITLE`.
    fn name(&self) -> &str {
        self.ctx().name()
    }

    /// Severity class, copied from the manifest at construction.
    fn severity(&self) -> Severity {
        self.ctx().severity()
    }

    /// Enable or disable this instance's log output.
    fn set_log_enabled(&mut self, enabled: bool) {
        self.ctx_mut().set_log_enabled(enabled);
    }

    /// Emit `[LEVEL][IDENTIFIER]: message` to stdout, gated by the
    /// instance-level enable flag.
    fn log(&self, message: &str) {
        self.ctx().log(message);
    }

    /// Verify structural preconditions. Returns false (after logging the
    /// failing precondition) instead of erroring.
    fn pre_check(&self) -> bool {
        self.ctx().pre_check()
    }

    /// True iff the repository already conforms to this rule.
    /// Read-only: must not mutate the target.
    fn check(&self) -> bool;

    /// Try to make a subsequent `check()` pass. Returns true when the rule
    /// was already satisfied or the mutation was applied; advisory fixes
    /// log guidance instead (see each rule for its classification).
    fn fix(&self) -> bool;
}

/// Lifecycle state shared by every check instance.
///
/// Instances are built fresh per pipeline run and never shared across runs.
#[derive(Debug, Clone)]
pub struct CheckCtx {
    name: String,
    severity: Severity,
    repo: RepoContext,
    log_enabled: bool,
}

impl CheckCtx {
    /// Bind an identifier to the repository under test.
    ///
    /// Non-internal rules must have a manifest entry; a missing entry is a
    /// fatal configuration error, not a skip. Internal rules default to
    /// [`Severity::Requirement`].
    pub fn new(name: &str, repo: &RepoContext, manifest: &RuleManifest) -> Result<Self> {
        let severity = if name.starts_with(INTERNAL_PREFIX) {
            Severity::Requirement
        } else {
            manifest
                .get(name)
                .ok_or_else(|| {
                    TidyError::Config(format!("no manifest entry for check `{name}`"))
                })?
                .severity
        };

        Ok(Self {
            name: name.to_string(),
            severity,
            repo: repo.clone(),
            log_enabled: false,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn repo(&self) -> &RepoContext {
        &self.repo
    }

    pub fn set_log_enabled(&mut self, enabled: bool) {
        self.log_enabled = enabled;
    }

    /// Log with the call-level gate open.
    pub fn log(&self, message: &str) {
        self.log_when(message, true);
    }

    /// Log a message; both the instance flag and `enabled` must be true.
    ///
    /// e.g. `[ERROR  ][TOPLEVEL.LICENSE         ]: The file '...' does not exist.`
    pub fn log_when(&self, message: &str, enabled: bool) {
        if self.log_enabled && enabled {
            println!(
                "[{:<7}][{:<25}]: {}",
                self.severity.log_level(),
                self.name,
                message
            );
        }
    }

    /// Structural preconditions common to every rule.
    pub fn pre_check(&self) -> bool {
        if self.name.is_empty() {
            self.log("The check name is not set.");
            return false;
        }

        if self.repo.name.is_empty() {
            self.log("The repository name is not set.");
            return false;
        }

        if self.repo.top_level.as_os_str().is_empty() {
            self.log("The repository path is not set.");
            return false;
        }

        true
    }
}

/// Capability base for checks that target one file.
#[derive(Debug, Clone)]
pub struct FileCheck {
    ctx: CheckCtx,
    path: PathBuf,
}

impl FileCheck {
    /// Resolve the target to `repository_root / relative_path`. An entry's
    /// `file_name` attribute, when present, overrides `relative_path`.
    pub fn new(
        name: &str,
        repo: &RepoContext,
        manifest: &RuleManifest,
        relative_path: impl AsRef<Path>,
    ) -> Result<Self> {
        let ctx = CheckCtx::new(name, repo, manifest)?;
        let relative = manifest
            .get(name)
            .and_then(|e| e.file_name.clone())
            .map_or_else(|| relative_path.as_ref().to_path_buf(), PathBuf::from);
        let path = repo.top_level.join(relative);
        Ok(Self { ctx, path })
    }

    pub fn ctx(&self) -> &CheckCtx {
        &self.ctx
    }

    pub fn ctx_mut(&mut self) -> &mut CheckCtx {
        &mut self.ctx
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Preconditions: the file exists and is not empty.
    pub fn pre_check(&self) -> bool {
        if !self.ctx.pre_check() {
            return false;
        }

        if !self.path.exists() {
            self.ctx
                .log(&format!("The file '{}' does not exist.", self.path.display()));
            return false;
        }

        if self.is_empty() {
            self.ctx
                .log(&format!("The file '{}' is empty.", self.path.display()));
            return false;
        }

        true
    }

    /// File content, or empty on read failure.
    pub fn read(&self) -> String {
        std::fs::read_to_string(&self.path).unwrap_or_default()
    }

    pub fn read_lines(&self) -> Vec<String> {
        self.read().lines().map(String::from).collect()
    }

    pub fn read_lines_strip(&self) -> Vec<String> {
        self.read().lines().map(|l| l.trim().to_string()).collect()
    }

    /// Write content to the target; failures are logged, not propagated,
    /// because `fix()` reports success through its return value.
    pub fn write(&self, content: &str) -> bool {
        match std::fs::write(&self.path, content) {
            Ok(()) => true,
            Err(err) => {
                self.ctx.log(&format!(
                    "Error writing the file '{}': {err}",
                    self.path.display()
                ));
                false
            }
        }
    }

    pub fn write_lines(&self, lines: &[String]) -> bool {
        self.write(&(lines.join("\n") + "\n"))
    }

    /// Replace the line at `index`, appending when the file is shorter.
    pub fn replace_line(&self, index: usize, new_line: &str) -> bool {
        let mut lines = self.read_lines();
        if index < lines.len() {
            lines[index] = new_line.to_string();
        } else {
            lines.push(new_line.to_string());
        }
        self.write_lines(&lines)
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Literal (non-regex) content match.
    pub fn has_content(&self, needle: &str) -> bool {
        self.read().contains(needle)
    }
}

/// Capability base for checks that target one directory.
#[derive(Debug, Clone)]
pub struct DirCheck {
    ctx: CheckCtx,
    path: PathBuf,
}

impl DirCheck {
    pub fn new(
        name: &str,
        repo: &RepoContext,
        manifest: &RuleManifest,
        relative_path: impl AsRef<Path>,
    ) -> Result<Self> {
        let ctx = CheckCtx::new(name, repo, manifest)?;
        let path = repo.top_level.join(relative_path);
        Ok(Self { ctx, path })
    }

    pub fn ctx(&self) -> &CheckCtx {
        &self.ctx
    }

    pub fn ctx_mut(&mut self) -> &mut CheckCtx {
        &mut self.ctx
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Preconditions: the directory exists and has at least one entry.
    pub fn pre_check(&self) -> bool {
        if !self.ctx.pre_check() {
            return false;
        }

        if !self.path.is_dir() {
            self.ctx.log(&format!(
                "The directory '{}' does not exist.",
                self.path.display()
            ));
            return false;
        }

        if self.is_empty() {
            self.ctx
                .log(&format!("The directory '{}' is empty.", self.path.display()));
            return false;
        }

        true
    }

    /// Direct entries of the directory.
    pub fn entries(&self) -> Vec<PathBuf> {
        std::fs::read_dir(&self.path)
            .map(|entries| {
                entries
                    .filter_map(std::result::Result::ok)
                    .map(|e| e.path())
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }

    /// True when the tree below the target contains at least one file.
    pub fn contains_files(&self) -> bool {
        WalkDir::new(&self.path)
            .into_iter()
            .filter_map(std::result::Result::ok)
            .any(|e| e.file_type().is_file())
    }
}
