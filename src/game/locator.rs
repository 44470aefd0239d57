//! Archive locator.
//!
//! Produces an ordered list of filesystem paths that may contain the game archive,
//! then filters it down to existing regular files. An empty result is a valid
//! "not found" signal - the caller decides whether that is fatal.
//!
//! Candidate order:
//! 1. The process property [`GAME_JAR_PATH_PROPERTY`], when set
//! 2. `./cosmic-reach.jar`
//! 3. `./game/cosmic-reach.jar`

use std::path::{Component, Path, PathBuf};

/// Process property overriding the game archive location.
pub const GAME_JAR_PATH_PROPERTY: &str = "COSMIC_JAR_PATH";

/// Default archive locations, relative to the working directory, in priority order.
pub const DEFAULT_LOCATIONS: [&str; 2] = ["cosmic-reach.jar", "game/cosmic-reach.jar"];

/// Build the ordered candidate list against the current working directory, honoring
/// the [`GAME_JAR_PATH_PROPERTY`] process property.
///
/// Paths are absolute and lexically normalized; existence is NOT checked here, so
/// the full list can be reported when nothing is found.
#[must_use]
pub fn candidate_paths() -> Vec<PathBuf> {
    let base = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let jar_property = std::env::var_os(GAME_JAR_PATH_PROPERTY).map(PathBuf::from);
    candidate_paths_in(&base, jar_property.as_deref())
}

/// Build the ordered candidate list against an explicit base directory.
///
/// ## Arguments
/// * 'base'         - Directory relative candidates are resolved against
/// * 'jar_override' - Value of the archive-path property, when set; listed first
#[must_use]
pub fn candidate_paths_in(base: &Path, jar_override: Option<&Path>) -> Vec<PathBuf> {
    let mut candidates = Vec::with_capacity(DEFAULT_LOCATIONS.len() + 1);

    if let Some(path) = jar_override {
        candidates.push(absolute_normalized(base, path));
    }
    for location in DEFAULT_LOCATIONS {
        candidates.push(absolute_normalized(base, Path::new(location)));
    }

    candidates
}

/// Filter a candidate list down to existing regular files, order preserved.
///
/// ## Arguments
/// * 'candidates' - The ordered candidate list
#[must_use]
pub fn existing_candidates(candidates: &[PathBuf]) -> Vec<PathBuf> {
    candidates
        .iter()
        .filter(|p| p.is_file())
        .cloned()
        .collect()
}

/// Resolve a path against `base` and normalize it lexically.
///
/// `.` components are dropped and `..` components pop their parent. Symlinks are
/// deliberately not resolved: the candidate may not exist yet, and the unresolved
/// form is what belongs in the not-found report.
fn absolute_normalized(base: &Path, path: &Path) -> PathBuf {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    };

    let mut normalized = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}
