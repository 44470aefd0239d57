//! Plug surfaces shared with the mod-loader host.
//!
//! Everything in this module is contract, not policy: the traits the host implements
//! ([`Launcher`], [`ClassLoader`], [`LoadedClass`]), the trait the provider's patches
//! implement ([`GamePatch`]), and the small data carriers exchanged across the boundary
//! ([`Arguments`], [`BuiltinMod`], [`ModMetadata`]).
//!
//! # Key Types
//! - [`Launcher`] - Environment, entrypoint, and class-path control
//! - [`ClassLoader`] / [`LoadedClass`] - The reflective load/invoke seam used at launch
//! - [`Arguments`] - Ordered command-line tokens with keyed lookup
//! - [`GameTransformer`] - Routes transformation calls through registered patches

mod arguments;
mod launcher;
mod metadata;
mod transformer;

pub use arguments::Arguments;
pub use launcher::{ClassLoader, Env, HostError, Launcher, LoadedClass};
pub use metadata::{BuiltinMod, ContactInformation, ModMetadata, ModMetadataBuilder, Person};
pub use transformer::{ClassEmitter, ClassSource, GamePatch, GameTransformer};
