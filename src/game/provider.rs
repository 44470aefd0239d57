//! Provider lifecycle.
//!
//! Implements the host's provider contract for Cosmic Reach, sequencing
//! locate (archive location, classification, version probe), initialize
//! (parent-class-path restriction, transformer registration), class-path
//! unlocking, and the reflective launch.
//!
//! ```text
//! NEW --locate()--> LOCATED --initialize()--> INITIALIZED
//!         (false: FAILED)                 --unlock_class_path()--> UNLOCKED
//!                                         --launch()--> RUNNING | CRASHED
//! ```
//!
//! The provider runs as a guest inside the host's boot thread; every lifecycle
//! call is sequential and completes before the next.

use std::path::{Path, PathBuf};

use tracing::error;

use crate::{
    game::{
        classifier::{self, CosmicLibrary},
        locator,
        patch::CrInitPatch,
        version,
    },
    host::{
        Arguments, BuiltinMod, ClassLoader, ContactInformation, GameTransformer, Launcher,
        ModMetadata,
    },
    Error, Result,
};

/// Stable identifier of the game.
pub const GAME_ID: &str = "cosmic_reach";

/// Display name of the game.
pub const GAME_NAME: &str = "Cosmic Reach";

/// Stable identifier of the provider's own builtin-mod entry.
pub const PROVIDER_ID: &str = "cosmic_reach_provider";

/// Version of the provider's own builtin-mod entry.
pub const PROVIDER_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Named argument overriding the launch directory.
pub const PROPERTY_GAME_DIRECTORY: &str = "appDirectory";

/// The provider plug contract between the mod-loader host and a game adapter.
///
/// The host calls the metadata accessors freely and the lifecycle methods in
/// the order documented on each; implementations must not assume any other
/// interleaving.
pub trait GameProvider {
    /// Stable identifier of the game, e.g. `"cosmic_reach"`.
    fn game_id(&self) -> &str;

    /// Human-readable name of the game.
    fn game_name(&self) -> &str;

    /// The version string exactly as probed from the distribution.
    fn raw_game_version(&self) -> &str;

    /// The version string in normalized form.
    fn normalized_game_version(&self) -> &str;

    /// The builtin mods this provider contributes to dependency resolution.
    fn builtin_mods(&self) -> Vec<BuiltinMod>;

    /// Fully-qualified (dot-form) name of the entrypoint class selected at locate.
    fn entrypoint(&self) -> &str;

    /// The directory the game is launched in.
    fn launch_directory(&self) -> PathBuf;

    /// Whether the distribution ships obfuscated.
    fn is_obfuscated(&self) -> bool;

    /// Whether the host must fall back to a URL class loader.
    fn requires_url_class_loader(&self) -> bool;

    /// Whether this provider is enabled at all.
    fn is_enabled(&self) -> bool;

    /// Locate the game archive and populate the provider's descriptor state.
    ///
    /// Returns `Ok(false)` to decline activation (the host falls through to its
    /// chain of alternative providers).
    ///
    /// # Errors
    /// Archive read failures; not-found is a `false` return, not an error.
    fn locate_game(&mut self, launcher: &dyn Launcher, args: &[String]) -> Result<bool>;

    /// Restrict the parent class path so transformation interposes on the game.
    ///
    /// Called once after a successful locate.
    ///
    /// # Errors
    /// Lifecycle violations (locate has not populated the provider).
    fn initialize(&mut self, launcher: &mut dyn Launcher) -> Result<()>;

    /// The transformer the host routes entrypoint class loads through.
    fn entrypoint_transformer(&self) -> &GameTransformer;

    /// Add the game archive to the runtime class path so the transformed
    /// entrypoint becomes loadable.
    ///
    /// # Errors
    /// Lifecycle violations (locate has not populated the provider).
    fn unlock_class_path(&self, launcher: &mut dyn Launcher) -> Result<()>;

    /// Reflectively load the entrypoint and invoke its `main(String[])` with the
    /// forwarded argument vector.
    ///
    /// # Errors
    /// [`Error::GameCrash`] when the game's own `main` throws (cause only);
    /// [`Error::LaunchFailure`] for reflective failures unrelated to game code.
    fn launch(&self, loader: &dyn ClassLoader) -> Result<()>;

    /// The argument set parsed during locate, if any.
    fn arguments(&self) -> Option<&Arguments>;

    /// The argument vector forwarded to the game's `main`.
    ///
    /// ## Arguments
    /// * 'sanitize' - Whether host-internal tokens should be stripped (this
    ///   provider forwards everything either way)
    fn launch_arguments(&self, sanitize: bool) -> Vec<String>;
}

/// A custom game provider which grants the mod-loader host the necessary
/// information to launch Cosmic Reach.
#[derive(Debug)]
pub struct CosmicReachProvider {
    arguments: Option<Arguments>,
    game_jar: Option<PathBuf>,
    version: Option<String>,
    entrypoint: Option<String>,
    system_libraries: Vec<PathBuf>,
    transformer: GameTransformer,
}

impl CosmicReachProvider {
    /// Create a provider in the NEW state, with the init patch registered.
    #[must_use]
    pub fn new() -> CosmicReachProvider {
        CosmicReachProvider {
            arguments: None,
            game_jar: None,
            version: None,
            entrypoint: None,
            system_libraries: Vec::new(),
            transformer: GameTransformer::new(vec![Box::new(CrInitPatch)]),
        }
    }

    /// The located game archive, if locate succeeded.
    #[must_use]
    pub fn game_jar(&self) -> Option<&Path> {
        self.game_jar.as_deref()
    }

    fn located_game_jar(&self) -> Result<&Path> {
        self.game_jar
            .as_deref()
            .ok_or_else(|| Error::Error("The game has not been located yet".to_string()))
    }

    fn game_contact() -> ContactInformation {
        let mut contact = ContactInformation::new();
        contact.insert(
            "homepage".to_string(),
            "https://finalforeach.itch.io/cosmic-reach".to_string(),
        );
        contact.insert(
            "wiki".to_string(),
            "https://finalforeach.itch.io/cosmic-reach".to_string(),
        );
        contact
    }
}

impl Default for CosmicReachProvider {
    fn default() -> CosmicReachProvider {
        CosmicReachProvider::new()
    }
}

impl GameProvider for CosmicReachProvider {
    fn game_id(&self) -> &str {
        GAME_ID
    }

    fn game_name(&self) -> &str {
        GAME_NAME
    }

    fn raw_game_version(&self) -> &str {
        self.version.as_deref().unwrap_or(version::UNKNOWN_VERSION)
    }

    fn normalized_game_version(&self) -> &str {
        self.raw_game_version()
    }

    fn builtin_mods(&self) -> Vec<BuiltinMod> {
        let contact = Self::game_contact();

        let game_metadata = ModMetadata::builder(GAME_ID, self.normalized_game_version())
            .name(GAME_NAME)
            .author("FinalForEach", contact.clone())
            .contact(contact)
            .description("Cosmic Reach Game")
            .build();

        let provider_metadata = ModMetadata::builder(PROVIDER_ID, PROVIDER_VERSION)
            .name("Cosmic Reach Provider")
            .description("The adapter between the loader and Cosmic Reach")
            .build();

        vec![
            BuiltinMod {
                paths: self.game_jar.iter().cloned().collect(),
                metadata: game_metadata,
            },
            BuiltinMod {
                paths: Vec::new(),
                metadata: provider_metadata,
            },
        ]
    }

    fn entrypoint(&self) -> &str {
        self.entrypoint.as_deref().unwrap_or("")
    }

    fn launch_directory(&self) -> PathBuf {
        match &self.arguments {
            Some(arguments) => PathBuf::from(arguments.get_or(PROPERTY_GAME_DIRECTORY, ".")),
            None => PathBuf::from("."),
        }
    }

    fn is_obfuscated(&self) -> bool {
        false
    }

    fn requires_url_class_loader(&self) -> bool {
        false
    }

    fn is_enabled(&self) -> bool {
        true
    }

    fn locate_game(&mut self, launcher: &dyn Launcher, args: &[String]) -> Result<bool> {
        let mut arguments = Arguments::new();
        arguments.parse(args);
        self.arguments = Some(arguments);

        // Build the list of possible locations for the game archive, then narrow
        // it to files that actually exist.
        let candidates = locator::candidate_paths();
        let existing = locator::existing_candidates(&candidates);

        let classification = classifier::classify(&existing, launcher.env_type())?;

        let origin = classification.origin(CosmicLibrary::CosmicClient);
        let class_name = classification.class_name(CosmicLibrary::CosmicClient);
        let (Some(origin), Some(class_name)) = (origin, class_name) else {
            let locations = candidates
                .iter()
                .map(|p| format!("* {}", p.display()))
                .collect::<Vec<_>>()
                .join("\n");
            error!("Could not locate the application JAR! We looked in:\n{locations}");
            return Ok(false);
        };

        self.version = Some(version::probe(origin)?);
        self.entrypoint = Some(class_name.to_string());
        self.system_libraries = classification.system_libraries().iter().cloned().collect();
        self.game_jar = Some(origin.to_path_buf());

        Ok(true)
    }

    fn initialize(&mut self, launcher: &mut dyn Launcher) -> Result<()> {
        self.located_game_jar()?;
        launcher.set_valid_parent_class_path(self.system_libraries.clone());
        Ok(())
    }

    fn entrypoint_transformer(&self) -> &GameTransformer {
        &self.transformer
    }

    fn unlock_class_path(&self, launcher: &mut dyn Launcher) -> Result<()> {
        launcher.add_to_class_path(self.located_game_jar()?);
        Ok(())
    }

    fn launch(&self, loader: &dyn ClassLoader) -> Result<()> {
        let target_class = self.entrypoint();
        if target_class.is_empty() {
            return Err(Error::Error(
                "The game has not been located yet".to_string(),
            ));
        }

        let main = loader
            .load_class(target_class)
            .map_err(Error::LaunchFailure)?;

        main.invoke_main(&self.launch_arguments(false))
            .map_err(Error::GameCrash)
    }

    fn arguments(&self) -> Option<&Arguments> {
        self.arguments.as_ref()
    }

    fn launch_arguments(&self, _sanitize: bool) -> Vec<String> {
        self.arguments
            .as_ref()
            .map(Arguments::to_vec)
            .unwrap_or_default()
    }
}
