//! Check Implementations
//!
//! One module per rule category. Every concrete rule declares its
//! identifier as an associated constant and is registered by its module's
//! `register` function; [`register_all`] calls those functions in a fixed
//! order, so registration order is explicit and deterministic.

pub mod base;
pub mod directory;
pub mod license;
pub mod readme;
pub mod repository;
pub mod system;
pub mod toplevel;

pub use base::{Check, CheckCtx, DirCheck, FileCheck};

use crate::registry::CheckRegistry;

/// Register the full built-in rule set.
///
/// The internal unstaged-changes guard is deliberately absent: the pipeline
/// constructs it directly and it never appears in the standard.
pub fn register_all(registry: &mut CheckRegistry) {
    toplevel::register(registry);
    readme::register(registry);
    license::register(registry);
    directory::register(registry);
    repository::register(registry);
}
