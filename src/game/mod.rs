//! Cosmic Reach specifics.
//!
//! Leaves first: [`locator`] produces candidate archive paths, [`classifier`]
//! confirms which archive is the game and which must stay on the parent class
//! path, [`version`] derives the version string, [`patch`] injects the mod-init
//! hook, and [`provider`] sequences all of it behind the host's lifecycle
//! contract.

pub mod classifier;
pub mod locator;
pub mod patch;
pub mod provider;
pub mod version;
