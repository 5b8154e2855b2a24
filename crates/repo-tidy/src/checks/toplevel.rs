//! `TOPLEVEL.*` checks: required files at the repository root.

use crate::checks::base::{Check, CheckCtx, FileCheck};
use crate::context::RepoContext;
use crate::manifest::RuleManifest;
use crate::registry::CheckRegistry;
use crate::Result;

pub fn register(registry: &mut CheckRegistry) {
    registry.register(ToplevelReadme::NAME, |repo, manifest| {
        Ok(Box::new(ToplevelReadme::new(repo, manifest)?))
    });
    registry.register(ToplevelLicense::NAME, |repo, manifest| {
        Ok(Box::new(ToplevelLicense::new(repo, manifest)?))
    });
    registry.register(ToplevelChangelog::NAME, |repo, manifest| {
        Ok(Box::new(ToplevelChangelog::new(repo, manifest)?))
    });
}

/// A README.md must exist at the top level and be non-empty.
pub struct ToplevelReadme {
    file: FileCheck,
}

impl ToplevelReadme {
    pub const NAME: &'static str = "TOPLEVEL.README";

    pub fn new(repo: &RepoContext, manifest: &RuleManifest) -> Result<Self> {
        Ok(Self {
            file: FileCheck::new(Self::NAME, repo, manifest, "README.md")?,
        })
    }
}

impl Check for ToplevelReadme {
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
        // Existence is the whole rule; the preconditions carry it.
        self.file.pre_check()
    }

    fn fix(&self) -> bool {
        self.log("Please write a README.md file describing the repository.");
        false
    }
}

/// A LICENSE file must exist at the top level and be non-empty.
pub struct ToplevelLicense {
    file: FileCheck,
}

impl ToplevelLicense {
    pub const NAME: &'static str = "TOPLEVEL.LICENSE";

    pub fn new(repo: &RepoContext, manifest: &RuleManifest) -> Result<Self> {
        Ok(Self {
            file: FileCheck::new(Self::NAME, repo, manifest, "LICENSE")?,
        })
    }
}

impl Check for ToplevelLicense {
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
        // A license cannot be chosen mechanically.
        self.log("Please add a LICENSE file to the repository.");
        false
    }
}

/// A CHANGELOG.md must exist at the top level and be non-empty.
pub struct ToplevelChangelog {
    file: FileCheck,
}

impl ToplevelChangelog {
    pub const NAME: &'static str = "TOPLEVEL.CHANGELOG";

    pub fn new(repo: &RepoContext, manifest: &RuleManifest) -> Result<Self> {
        Ok(Self {
            file: FileCheck::new(Self::NAME, repo, manifest, "CHANGELOG.md")?,
        })
    }
}

impl Check for ToplevelChangelog {
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

    /// Verified fix: writes an empty changelog skeleton.
    fn fix(&self) -> bool {
        if self.check() {
            return true;
        }
        self.file.write("# Changelog\n\n## Unreleased\n")
    }
}
