//! `REPOSITORY.*` checks: repository metadata and hosting conventions.

use crate::checks::base::{Check, CheckCtx, FileCheck};
use crate::context::RepoContext;
use crate::manifest::RuleManifest;
use crate::registry::CheckRegistry;
use crate::{Result, TidyError};
use regex::Regex;

pub fn register(registry: &mut CheckRegistry) {
    registry.register(RepositoryCodeowners::NAME, |repo, manifest| {
        Ok(Box::new(RepositoryCodeowners::new(repo, manifest)?))
    });
    registry.register(RepositoryDefaultBranch::NAME, |repo, manifest| {
        Ok(Box::new(RepositoryDefaultBranch::new(repo, manifest)?))
    });
    registry.register(RepositoryName::NAME, |repo, manifest| {
        Ok(Box::new(RepositoryName::new(repo, manifest)?))
    });
}

/// A `.github/CODEOWNERS` file must exist and be non-empty.
pub struct RepositoryCodeowners {
    file: FileCheck,
}

impl RepositoryCodeowners {
    pub const NAME: &'static str = "REPOSITORY.CODEOWNERS";

    pub fn new(repo: &RepoContext, manifest: &RuleManifest) -> Result<Self> {
        Ok(Self {
            file: FileCheck::new(Self::NAME, repo, manifest, ".github/CODEOWNERS")?,
        })
    }
}

impl Check for RepositoryCodeowners {
    fn ctx(&self) -> &CheckCtx {
        self.file.ctx()
    }

    fn ctx_mut(&mut self) -> &mut CheckCtx {
        self.file.ctx_mut()
    }

    fn pre_check(&self) -> bool {
        self.file.pre_check()
    }

    fn check(&self) -> bool {
        self.file.pre_check()
    }

    fn fix(&self) -> bool {
        // Ownership assignments cannot be invented.
        self.log("Please add a CODEOWNERS file to the repository.");
        false
    }
}

/// The default branch must match the configured name (`main` by default).
///
/// Metadata-only rule: implements the contract directly over [`CheckCtx`].
pub struct RepositoryDefaultBranch {
    ctx: CheckCtx,
    expected: String,
}

impl RepositoryDefaultBranch {
    pub const NAME: &'static str = "REPOSITORY.DEFAULT_BRANCH";

    pub fn new(repo: &RepoContext, manifest: &RuleManifest) -> Result<Self> {
        let expected = manifest
            .get(Self::NAME)
            .and_then(|entry| entry.value.clone())
            .unwrap_or_else(|| "main".to_string());
        Ok(Self {
            ctx: CheckCtx::new(Self::NAME, repo, manifest)?,
            expected,
        })
    }
}

impl Check for RepositoryDefaultBranch {
    fn ctx(&self) -> &CheckCtx {
        &self.ctx
    }

    fn ctx_mut(&mut self) -> &mut CheckCtx {
        &mut self.ctx
    }

    fn check(&self) -> bool {
        let default_branch = &self.ctx.repo().default_branch;
        if default_branch != &self.expected {
            self.log(&format!(
                "Invalid default branch: '{}' vs '{}'.",
                default_branch, self.expected
            ));
            return false;
        }

        true
    }

    fn fix(&self) -> bool {
        // The default branch lives on the hosting side, out of reach.
        self.log(&format!(
            "Please set `{}` as the default branch of the repository.",
            self.expected
        ));
        false
    }
}

/// The repository name must be lowercase kebab/snake case.
pub struct RepositoryName {
    ctx: CheckCtx,
    name_re: Regex,
}

impl RepositoryName {
    pub const NAME: &'static str = "REPOSITORY.NAME";
    const PATTERN: &'static str = "^[a-z][a-z0-9_-]*$";

    pub fn new(repo: &RepoContext, manifest: &RuleManifest) -> Result<Self> {
        Ok(Self {
            ctx: CheckCtx::new(Self::NAME, repo, manifest)?,
            name_re: Regex::new(Self::PATTERN)
                .map_err(|err| TidyError::Config(format!("check `{}`: {err}", Self::NAME)))?,
        })
    }
}

impl Check for RepositoryName {
    fn ctx(&self) -> &CheckCtx {
        &self.ctx
    }

    fn ctx_mut(&mut self) -> &mut CheckCtx {
        &mut self.ctx
    }

    fn check(&self) -> bool {
        let name = &self.ctx.repo().name;
        if !self.name_re.is_match(name) {
            self.log(&format!(
                "The repository name '{name}' should be lowercase (kebab or snake case)."
            ));
            return false;
        }

        true
    }

    fn fix(&self) -> bool {
        self.log("Please rename the repository to a lowercase name.");
        false
    }
}
