use thiserror::Error;

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// This enum covers every failure mode of the provider: archive I/O during location and
/// classification, bytecode patching of the game's initialization routine, and the final
/// reflective launch. Apart from the soft "archive not found" signal (which is a `false`
/// return from locate, not an error), none of these are recoverable - the provider is
/// boot-critical and any of them aborts activation.
///
/// # Error Categories
///
/// ## Archive Errors
/// - [`Error::Io`] - Filesystem I/O errors while reading a candidate archive
/// - [`Error::Zip`] - Malformed or unreadable jar structure
///
/// ## Patch Errors
/// - [`Error::MissingClass`] - The entrypoint class could not be resolved
/// - [`Error::MissingMethod`] - The entrypoint has no initialization method
/// - [`Error::MissingReturn`] - The initialization method has no matching return
/// - [`Error::MalformedDescriptor`] - A method descriptor could not be parsed
///
/// ## Launch Errors
/// - [`Error::GameCrash`] - The game's own `main` threw; carries only the cause
/// - [`Error::LaunchFailure`] - Reflective load/invocation machinery failed
#[derive(Error, Debug)]
pub enum Error {
    /// File I/O error.
    ///
    /// Wraps standard I/O errors that can occur while opening or mapping a game
    /// archive during classification or version probing.
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// The archive could not be read as a jar.
    ///
    /// Wraps failures from the zip layer when a candidate file exists but is not
    /// a valid archive, or an entry cannot be decompressed.
    #[error("{0}")]
    Zip(#[from] zip::result::ZipError),

    /// The entrypoint class could not be resolved by the host's class source.
    ///
    /// Raised by the init patch when the class-loading phase asks it to transform
    /// an entrypoint whose class node the host cannot supply.
    #[error("Could not load main class {0}!")]
    MissingClass(String),

    /// The entrypoint class has no method with the expected name.
    ///
    /// The init patch targets the post-construction initialization method by exact
    /// name; a distribution without it cannot receive the mod hook.
    #[error("Could not find method \"{method}\" in {class}!")]
    MissingMethod {
        /// Name of the initialization method that was searched for
        method: String,
        /// Fully-qualified name of the class that was searched
        class: String,
    },

    /// The target method contains no return instruction of the expected opcode.
    ///
    /// Tail injection inserts before a return whose opcode matches the method's
    /// declared return type; a body without one cannot be patched.
    #[error("TAIL could not locate a valid RETURN in the target method!")]
    MissingReturn,

    /// A method descriptor could not be parsed.
    ///
    /// The expected return opcode is derived from the descriptor's return type,
    /// so a descriptor without a parseable return type is fatal to the patch.
    #[error("Malformed method descriptor: {0}")]
    MalformedDescriptor(String),

    /// The launched game's `main` threw an exception.
    ///
    /// Carries only the cause reported by the host's invoker, never the
    /// reflective wrapper around it.
    #[error("The game has crashed!")]
    GameCrash(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The entrypoint could not be loaded or invoked.
    ///
    /// Covers reflective failures unrelated to game code: the class is missing
    /// from the runtime class path, or it lacks a `main(String[])`.
    #[error("Failed to launch the game")]
    LaunchFailure(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Generic error for miscellaneous failures.
    ///
    /// Used for errors that don't fit into other categories, such as lifecycle
    /// calls arriving before locate has populated the provider.
    #[error("{0}")]
    Error(String),
}
