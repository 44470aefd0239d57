//! The launcher and class-loader seams.
//!
//! These traits are the host's side of the provider contract. The provider never
//! loads classes or manipulates class paths itself; it asks the launcher to do so,
//! and at the end of the lifecycle it drives the launch through the
//! [`ClassLoader`] seam so that reflective failures and game exceptions stay
//! distinguishable.

use std::path::{Path, PathBuf};

/// Boxed error type carried across the host boundary.
///
/// Host-side failures (a class that cannot be loaded, an exception thrown by the
/// game's `main`) arrive as opaque causes; the provider wraps them into its own
/// error taxonomy without inspecting them.
pub type HostError = Box<dyn std::error::Error + Send + Sync>;

/// The environment a library tag may be restricted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Env {
    /// The game client
    Client,
    /// A dedicated server distribution
    Server,
}

/// The host's launcher: environment, entrypoint, and class-path control.
///
/// Lifecycle methods receive the launcher from the host; the provider uses it to
/// restrict the parent class path to the computed system libraries (so the game
/// archive itself is *not* visible from the parent and transformation interposes)
/// and, once transformation is registered, to add the game archive to the runtime
/// class path.
pub trait Launcher {
    /// The environment this launch targets.
    fn env_type(&self) -> Env;

    /// The fully-qualified (dot-form) name of the entrypoint class selected at locate.
    fn entrypoint(&self) -> &str;

    /// Restrict the parent class loader to exactly these archives.
    ///
    /// ## Arguments
    /// * 'paths' - The system libraries that must remain loadable from the parent
    fn set_valid_parent_class_path(&mut self, paths: Vec<PathBuf>);

    /// Add an archive to the runtime class path.
    ///
    /// ## Arguments
    /// * 'path' - The archive to make loadable
    fn add_to_class_path(&mut self, path: &Path);
}

/// A class resolved by the host's runtime class loader, ready for invocation.
pub trait LoadedClass {
    /// Invoke the class's `main(String[])` with the forwarded argument vector.
    ///
    /// # Errors
    /// The exception thrown by the game's own `main`, already unwrapped from any
    /// reflective machinery - the provider re-raises it as a "game crashed" fatal
    /// with this value as the cause.
    fn invoke_main(&self, args: &[String]) -> std::result::Result<(), HostError>;
}

/// The host's runtime class loader, as seen at launch time.
pub trait ClassLoader {
    /// Load a class by its fully-qualified (dot-form) name and resolve its
    /// `public static void main(String[])`.
    ///
    /// # Errors
    /// Any reflective failure unrelated to game code: class not found on the
    /// runtime class path, no matching `main`, or access restrictions.
    fn load_class(&self, name: &str) -> std::result::Result<Box<dyn LoadedClass>, HostError>;
}
