//! # cosmic-provider Prelude
//!
//! A curated selection of the most frequently used types from across the crate, allowing
//! for convenient glob imports.
//!
//! # Example
//!
//! ```rust,no_run
//! use cosmic_provider::prelude::*;
//!
//! let provider = CosmicReachProvider::new();
//! assert_eq!(provider.game_name(), "Cosmic Reach");
//! ```

pub use crate::{
    bytecode::{ClassNode, Insn, InsnList, MethodNode},
    game::{
        classifier::{Classification, CosmicLibrary},
        patch::CrInitPatch,
        provider::{CosmicReachProvider, GameProvider},
    },
    host::{
        Arguments, BuiltinMod, ClassLoader, Env, GamePatch, GameTransformer, Launcher,
        LoadedClass, ModMetadata,
    },
    Error, Result,
};
