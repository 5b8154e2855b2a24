//! `DIRECTORY.*` checks: expected directory layout.

use crate::checks::base::{Check, CheckCtx, DirCheck};
use crate::context::RepoContext;
use crate::manifest::RuleManifest;
use crate::registry::CheckRegistry;
use crate::Result;

pub fn register(registry: &mut CheckRegistry) {
    registry.register(DirectoryExists::SOURCES, |repo, manifest| {
        Ok(Box::new(DirectoryExists::sources(repo, manifest)?))
    });
    registry.register(DirectoryExists::TESTS, |repo, manifest| {
        Ok(Box::new(DirectoryExists::tests(repo, manifest)?))
    });
    registry.register(DirectoryExists::DOCS, |repo, manifest| {
        Ok(Box::new(DirectoryExists::docs(repo, manifest)?))
    });
}

/// A required directory exists and contains at least one file.
///
/// One implementation serves all `DIRECTORY.*` rules; the identifier and
/// target are bound at construction.
pub struct DirectoryExists {
    dir: DirCheck,
}

impl DirectoryExists {
    pub const SOURCES: &'static str = "DIRECTORY.SOURCES";
    pub const TESTS: &'static str = "DIRECTORY.TESTS";
    pub const DOCS: &'static str = "DIRECTORY.DOCS";

    pub fn new(
        name: &str,
        repo: &RepoContext,
        manifest: &RuleManifest,
        relative_path: &str,
    ) -> Result<Self> {
        Ok(Self {
            dir: DirCheck::new(name, repo, manifest, relative_path)?,
        })
    }

    pub fn sources(repo: &RepoContext, manifest: &RuleManifest) -> Result<Self> {
        Self::new(Self::SOURCES, repo, manifest, "src")
    }

    pub fn tests(repo: &RepoContext, manifest: &RuleManifest) -> Result<Self> {
        Self::new(Self::TESTS, repo, manifest, "tests")
    }

    pub fn docs(repo: &RepoContext, manifest: &RuleManifest) -> Result<Self> {
        Self::new(Self::DOCS, repo, manifest, "docs")
    }
}

impl Check for DirectoryExists {
    fn ctx(&self) -> &CheckCtx {
        self.dir.ctx()
    }

    fn ctx_mut(&mut self) -> &mut CheckCtx {
        self.dir.ctx_mut()
    }

    fn pre_check(&self) -> bool {
        self.dir.pre_check()
    }

    fn check(&self) -> bool {
        if !self.dir.pre_check() {
            return false;
        }

        if !self.dir.contains_files() {
            self.log(&format!(
                "The directory '{}' contains no files.",
                self.dir.path().display()
            ));
            return false;
        }

        true
    }

    fn fix(&self) -> bool {
        // An empty skeleton directory would satisfy nothing; content has to
        // be authored.
        self.log(&format!(
            "Please populate the '{}' directory.",
            self.dir.path().display()
        ));
        false
    }
}
