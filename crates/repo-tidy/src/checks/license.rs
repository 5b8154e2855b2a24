//! `LICENSE.*` checks: license text against the approved set.

use crate::checks::base::{Check, CheckCtx, FileCheck};
use crate::context::RepoContext;
use crate::manifest::RuleManifest;
use crate::registry::CheckRegistry;
use crate::Result;

pub fn register(registry: &mut CheckRegistry) {
    registry.register(LicenseApproved::NAME, |repo, manifest| {
        Ok(Box::new(LicenseApproved::new(repo, manifest)?))
    });
}

/// The LICENSE text must open with one of the approved license headers.
pub struct LicenseApproved {
    file: FileCheck,
    approved: Vec<String>,
}

impl LicenseApproved {
    pub const NAME: &'static str = "LICENSE.APPROVED";

    pub fn new(repo: &RepoContext, manifest: &RuleManifest) -> Result<Self> {
        let approved = manifest
            .get(Self::NAME)
            .map(|entry| entry.values.clone())
            .unwrap_or_default();
        Ok(Self {
            file: FileCheck::new(Self::NAME, repo, manifest, "LICENSE")?,
            approved,
        })
    }
}

impl Check for LicenseApproved {
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
        let lines = self.file.read_lines_strip();
        let Some(header) = lines.iter().find(|line| !line.is_empty()) else {
            self.log(&format!(
                "The file '{}' has no license header.",
                self.file.path().display()
            ));
            return false;
        };

        if !self.approved.iter().any(|approved| approved == header) {
            self.log(&format!(
                "The license header '{}' is not in the approved set {:?}.",
                header, self.approved
            ));
            return false;
        }

        true
    }

    fn fix(&self) -> bool {
        // Replacing a license is a legal decision, not a mechanical one.
        self.log("Please replace LICENSE with one of the approved licenses.");
        false
    }
}
