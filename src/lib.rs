#![deny(missing_docs)]
//#![deny(unsafe_code)]
// - 'game/classifier.rs' and 'game/version.rs' use mmap to map an archive into memory

//! # cosmic-provider
//!
//! A game-provider adapter that teaches a generic mod-loader host how to locate, identify,
//! transform, and launch the Cosmic Reach voxel sandbox distribution. The provider plugs into
//! the host's boot sequence: it discovers the game archive on disk, confirms the archive's
//! identity by its marker classes, derives a version string, patches the game's initialization
//! routine so that control transfers into the mod subsystem the moment the game finishes its
//! own boot, and finally hands the entrypoint to the host for the reflective launch.
//!
//! ## Architecture
//!
//! The crate is organized into three layers:
//!
//! - [`host`] - The plug surfaces shared with the mod-loader host: the launcher and
//!   class-loader seams, the argument model, builtin-mod metadata, and the transformer
//!   routing contract.
//! - [`bytecode`] - The mutable in-memory class representation the transformer operates on:
//!   class and method nodes, instruction sequences, opcode constants, and method-descriptor
//!   parsing.
//! - [`game`] - The Cosmic Reach specifics: archive location, library classification,
//!   version probing, the init patch, and the provider lifecycle itself.
//!
//! ## Lifecycle
//!
//! The host drives the provider through a fixed, single-threaded sequence:
//!
//! ```text
//! locate -> initialize -> (class loading, patch applies) -> unlock class path -> launch
//! ```
//!
//! Every step is sequential and completes before the next; the only supported way to decline
//! activation is a `false` return from locate.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use cosmic_provider::prelude::*;
//!
//! # fn run(launcher: &mut dyn Launcher, loader: &dyn ClassLoader) -> cosmic_provider::Result<()> {
//! let args: Vec<String> = std::env::args().skip(1).collect();
//!
//! let mut provider = CosmicReachProvider::new();
//! if !provider.locate_game(launcher, &args)? {
//!     return Ok(()); // not our game, yield to the next provider
//! }
//!
//! provider.initialize(launcher)?;
//! provider.unlock_class_path(launcher)?;
//! provider.launch(loader)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! All fallible operations return [`Result<T, Error>`](Result). The provider is boot-critical:
//! apart from the soft not-found signal during locate, every error is terminal and surfaces to
//! the host unchanged.

mod error;

/// Mutable in-memory class representation used by the entrypoint transformer.
///
/// This module models a compiled class the way the transformation phase sees it: a tree of
/// method definitions, each holding an ordered instruction sequence. It also carries the
/// opcode constants and the method-descriptor parsing needed to derive return opcodes.
///
/// # Key Types
/// - [`bytecode::ClassNode`] - A single class as a mutable tree
/// - [`bytecode::MethodNode`] - A method definition with its instruction list
/// - [`bytecode::Insn`] - One instruction inside a method body
/// - [`bytecode::InsnList`] - The ordered instruction sequence of a method
pub mod bytecode;

/// Cosmic Reach specifics: location, classification, version, patch, lifecycle.
///
/// # Key Types
/// - [`game::provider::CosmicReachProvider`] - The provider lifecycle implementation
/// - [`game::classifier::CosmicLibrary`] - The closed set of known library markers
/// - [`game::patch::CrInitPatch`] - The init-hook bytecode patch
pub mod game;

/// Plug surfaces shared with the mod-loader host.
///
/// # Key Types
/// - [`host::Launcher`] - The host's launcher seam
/// - [`host::ClassLoader`] - The reflective load/invoke seam used at launch
/// - [`host::Arguments`] - Ordered command-line tokens with keyed lookup
/// - [`host::GameTransformer`] - Routes transformation calls through registered patches
pub mod host;

/// Convenient re-exports of the most commonly used types and traits.
///
/// # Example
///
/// ```rust,no_run
/// use cosmic_provider::prelude::*;
///
/// let provider = CosmicReachProvider::new();
/// assert_eq!(provider.game_id(), "cosmic_reach");
/// ```
pub mod prelude;

/// `cosmic-provider` Result type
///
/// A type alias for [`std::result::Result<T, Error>`] where the error type is always
/// [`Error`]. Used consistently throughout the crate for all fallible operations.
pub type Result<T> = std::result::Result<T, Error>;

/// `cosmic-provider` Error type
///
/// The main error type for all operations in this crate. See [`error`](Error) for the
/// full taxonomy of archive, patch, and launch failures.
pub use error::Error;

/// The provider lifecycle contract and its Cosmic Reach implementation.
///
/// [`GameProvider`] is the host's plug interface; [`CosmicReachProvider`] answers it for
/// the Cosmic Reach distribution.
pub use game::provider::{CosmicReachProvider, GameProvider};
