//! Check Registry
//!
//! Maps rule identifiers to the factories that build their check instances.
//! The registry is populated exactly once, by an explicit list of
//! per-category registration calls (see [`crate::checks::register_all`]),
//! so registration order is deterministic, not an import side effect. Every
//! concrete check declares its identifier as an associated constant, and the
//! registration call supplies it, so no reverse lookup is ever needed.

use crate::checks::base::Check;
use crate::context::RepoContext;
use crate::manifest::RuleManifest;
use crate::{Result, checks};

/// Builds a fresh check instance for one pipeline run.
///
/// Fails when the rule has no manifest entry; that is a configuration
/// error, not a skippable condition.
pub type CheckFactory = fn(&RepoContext, &RuleManifest) -> Result<Box<dyn Check>>;

/// Identifier → factory store, ordered by registration.
#[derive(Default)]
pub struct CheckRegistry {
    slots: Vec<(String, CheckFactory)>,
}

impl CheckRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self { slots: Vec::new() }
    }

    /// Record a factory under an identifier.
    ///
    /// A repeated identifier silently replaces the earlier factory in its
    /// original slot (last registration wins). Only concrete leaf rules are
    /// registered, so collisions do not occur in practice.
    pub fn register(&mut self, name: &str, factory: CheckFactory) {
        if let Some(slot) = self.slots.iter_mut().find(|(n, _)| n == name) {
            slot.1 = factory;
        } else {
            self.slots.push((name.to_string(), factory));
        }
    }

    /// Look up the factory registered for an identifier.
    pub fn get(&self, name: &str) -> Option<CheckFactory> {
        self.slots
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, factory)| *factory)
    }

    /// Whether an identifier has a registered implementation.
    pub fn contains(&self, name: &str) -> bool {
        self.slots.iter().any(|(n, _)| n == name)
    }

    /// All registered identifiers, in registration order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.slots.iter().map(|(n, _)| n.as_str())
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

/// A standard ready to run: the manifest plus the registered check set.
///
/// Constructed once at startup and passed explicitly to the pipeline; there
/// is no process-global registry, so tests can build isolated standards.
pub struct Standard {
    pub manifest: RuleManifest,
    pub registry: CheckRegistry,
}

impl Standard {
    /// Bundle a manifest with the full built-in check set.
    pub fn new(manifest: RuleManifest) -> Self {
        let mut registry = CheckRegistry::new();
        checks::register_all(&mut registry);
        Self { manifest, registry }
    }

    /// Bundle a manifest with a caller-supplied registry.
    pub fn with_registry(manifest: RuleManifest, registry: CheckRegistry) -> Self {
        Self { manifest, registry }
    }
}
