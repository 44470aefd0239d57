//! The transformer plug contract.
//!
//! During the host's class-loading phase, classes the host decides to route through
//! transformation pass through a [`GameTransformer`], which fans the call out to its
//! registered [`GamePatch`]es in order. Patches are stateless values; a class node is
//! borrowed from the class source for the duration of one callback and handed back
//! through the emitter if (and only if) it was mutated.

use crate::{bytecode::ClassNode, host::Launcher, Result};

/// Resolver handing out class nodes by fully-qualified (dot-form) name.
///
/// Returns `Ok(None)` when the host has no bytecode for the name; errors are
/// resolution failures, not absence.
pub type ClassSource<'a> = dyn FnMut(&str) -> Result<Option<ClassNode>> + 'a;

/// Sink receiving mutated class nodes.
pub type ClassEmitter<'a> = dyn FnMut(ClassNode) + 'a;

/// A single bytecode patch applied during the host's class-loading phase.
///
/// Implementations must be stateless: the host may invoke `process` multiple times
/// (once per class load), always for a single class at a time, always on the thread
/// that triggered the class load.
pub trait GamePatch {
    /// Apply this patch.
    ///
    /// ## Arguments
    /// * 'launcher'      - The host launcher (environment and entrypoint queries)
    /// * 'class_source'  - Resolver for class nodes by name
    /// * 'class_emitter' - Sink for mutated class nodes
    ///
    /// # Errors
    /// Unrecoverable patch failures: the target class or method is missing, or the
    /// method body has no viable injection point.
    fn process(
        &self,
        launcher: &dyn Launcher,
        class_source: &mut ClassSource<'_>,
        class_emitter: &mut ClassEmitter<'_>,
    ) -> Result<()>;
}

/// An ordered collection of patches, shared process-wide as an immutable value.
pub struct GameTransformer {
    patches: Vec<Box<dyn GamePatch + Send + Sync>>,
}

impl GameTransformer {
    /// Create a transformer over the given patches.
    ///
    /// ## Arguments
    /// * 'patches' - The patches to apply, in order
    #[must_use]
    pub fn new(patches: Vec<Box<dyn GamePatch + Send + Sync>>) -> GameTransformer {
        GameTransformer { patches }
    }

    /// Run every registered patch against the supplied source/emitter pair.
    ///
    /// # Errors
    /// The first patch failure, unchanged.
    pub fn process(
        &self,
        launcher: &dyn Launcher,
        class_source: &mut ClassSource<'_>,
        class_emitter: &mut ClassEmitter<'_>,
    ) -> Result<()> {
        for patch in &self.patches {
            patch.process(launcher, class_source, class_emitter)?;
        }
        Ok(())
    }
}

impl std::fmt::Debug for GameTransformer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameTransformer")
            .field("patches", &self.patches.len())
            .finish()
    }
}
