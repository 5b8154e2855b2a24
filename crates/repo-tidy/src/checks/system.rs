//! Internal system checks.
//!
//! These rules guard the tool itself rather than the standard; they are not
//! registered and never appear in the manifest.

use crate::checks::base::{Check, CheckCtx};
use crate::context::RepoContext;
use crate::manifest::RuleManifest;
use crate::Result;

/// Fix-in-place requires a clean working tree.
///
/// In-place fixes over unstaged edits would mix generated and human changes
/// into one unreviewable diff, so this is the one rule whose `fix()`
/// terminates the whole process instead of returning false.
pub struct NoUnstagedChanges {
    ctx: CheckCtx,
}

impl NoUnstagedChanges {
    pub const NAME: &'static str = "INTERNAL.NO_UNSTAGED_CHANGES";

    pub fn new(repo: &RepoContext, manifest: &RuleManifest) -> Result<Self> {
        Ok(Self {
            ctx: CheckCtx::new(Self::NAME, repo, manifest)?,
        })
    }
}

impl Check for NoUnstagedChanges {
    fn ctx(&self) -> &CheckCtx {
        &self.ctx
    }

    fn ctx_mut(&mut self) -> &mut CheckCtx {
        &mut self.ctx
    }

    fn check(&self) -> bool {
        self.ctx.repo().unstaged_changes.trim().is_empty()
    }

    fn fix(&self) -> bool {
        self.log(
            "The --fix-inplace mode requires no unstaged changes. \
             Please commit or stash your changes. STOP.",
        );
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::RuleManifest;

    #[test]
    fn test_clean_tree_passes() {
        let repo = RepoContext::new("/tmp/clean", "clean");
        let guard = NoUnstagedChanges::new(&repo, &RuleManifest::default()).unwrap();
        assert!(guard.check());
    }

    #[test]
    fn test_dirty_tree_fails() {
        let repo = RepoContext::new("/tmp/dirty", "dirty")
            .with_unstaged_changes(" src/lib.rs | 12 +++---\n 1 file changed");
        let guard = NoUnstagedChanges::new(&repo, &RuleManifest::default()).unwrap();
        assert!(!guard.check());
    }
}
