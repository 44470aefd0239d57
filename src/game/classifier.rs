//! Library classifier.
//!
//! Scans candidate archives for known marker class files to determine (i) which
//! archive contains the game entrypoint, (ii) what class name serves as the
//! entrypoint, and (iii) the set of archives that must remain visible to the
//! parent class loader so that host machinery (loader core, bytecode library,
//! mixin engine) can resolve its own classes.
//!
//! Markers form a closed, tagged enumeration: each [`CosmicLibrary`] variant
//! carries an optional environment restriction and a non-empty list of internal
//! class paths. Presence is determined by direct entry lookup in the archive's
//! central directory, never by scanning.

use std::{
    collections::{BTreeSet, HashMap},
    fs::File,
    io::Cursor,
    path::{Path, PathBuf},
};

use memmap2::Mmap;
use strum::{EnumIter, IntoEnumIterator};
use zip::ZipArchive;

use crate::{host::Env, Result};

/// The closed set of known library markers.
///
/// `CosmicClient` identifies the game itself; every other variant marks a
/// cooperating library that must stay loadable from the parent class loader.
/// Adding a new cooperating dependency requires extending this list, or the
/// parent class loader will refuse to expose it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum CosmicLibrary {
    /// The client game distribution
    CosmicClient,
    /// The mod-loader core
    Loader,
    /// The bytecode library's visitor API
    AsmVisitor,
    /// The bytecode library's instruction-tree API
    AsmTree,
    /// The bytecode library's analyzer API
    AsmAnalysis,
    /// The bytecode library's disassembler utilities
    AsmUtil,
    /// The bytecode library's advice adapters
    AsmCommons,
    /// The mixin engine bootstrap
    MixinBootstrap,
}

impl CosmicLibrary {
    /// The environment this tag is restricted to, if any.
    #[must_use]
    pub fn env(self) -> Option<Env> {
        match self {
            CosmicLibrary::CosmicClient => Some(Env::Client),
            _ => None,
        }
    }

    /// The internal class paths (slash form, `.class` suffix) marking this tag.
    ///
    /// Every tag's path list is non-empty.
    #[must_use]
    pub fn paths(self) -> &'static [&'static str] {
        match self {
            CosmicLibrary::CosmicClient => {
                &["finalforeach/cosmicreach/lwjgl3/Lwjgl3Launcher.class"]
            }
            CosmicLibrary::Loader => &["net/fabricmc/loader/api/FabricLoader.class"],
            CosmicLibrary::AsmVisitor => &["org/objectweb/asm/AnnotationVisitor.class"],
            CosmicLibrary::AsmTree => &["org/objectweb/asm/tree/AbstractInsnNode.class"],
            CosmicLibrary::AsmAnalysis => &["org/objectweb/asm/tree/analysis/Analyzer.class"],
            CosmicLibrary::AsmUtil => &["org/objectweb/asm/util/ASMifier.class"],
            CosmicLibrary::AsmCommons => &["org/objectweb/asm/commons/AdviceAdapter.class"],
            CosmicLibrary::MixinBootstrap => &["org/spongepowered/asm/launch/MixinBootstrap.class"],
        }
    }

    /// Whether this tag applies to the given environment.
    ///
    /// A tag is applicable if its restriction is absent or matches.
    #[must_use]
    pub fn is_applicable(self, env: Env) -> bool {
        self.env().is_none_or(|restricted| restricted == env)
    }

    /// Whether archives matching this tag must remain on the parent class path.
    #[must_use]
    pub fn is_system_library(self) -> bool {
        !matches!(self, CosmicLibrary::CosmicClient)
    }
}

/// The result of classifying a set of archives.
#[derive(Debug, Default)]
pub struct Classification {
    origins: HashMap<CosmicLibrary, PathBuf>,
    class_names: HashMap<CosmicLibrary, String>,
    system_libraries: BTreeSet<PathBuf>,
}

impl Classification {
    /// The archive that first supplied a class for this tag, if any.
    #[must_use]
    pub fn origin(&self, library: CosmicLibrary) -> Option<&Path> {
        self.origins.get(&library).map(PathBuf::as_path)
    }

    /// The fully-qualified (dot-form) name of the matched marker class, if any.
    #[must_use]
    pub fn class_name(&self, library: CosmicLibrary) -> Option<&str> {
        self.class_names.get(&library).map(String::as_str)
    }

    /// The archives that must remain loadable from the parent class loader.
    #[must_use]
    pub fn system_libraries(&self) -> &BTreeSet<PathBuf> {
        &self.system_libraries
    }
}

/// Classify a set of archives against every tag applicable to `env`.
///
/// Archive scan order follows input order; the first archive supplying a tag's
/// class becomes that tag's origin, while later matches still contribute their
/// archive to the system-library set. Each archive handle is opened and released
/// within the scope of its own scan.
///
/// ## Arguments
/// * 'archives' - Existing archive paths, in priority order
/// * 'env'      - The environment being launched
///
/// # Errors
/// [`crate::Error::Io`] / [`crate::Error::Zip`] if an archive cannot be read.
pub fn classify(archives: &[PathBuf], env: Env) -> Result<Classification> {
    let mut classification = Classification::default();

    for archive_path in archives {
        let file = File::open(archive_path)?;
        let mmap = unsafe { Mmap::map(&file)? };
        let archive = ZipArchive::new(Cursor::new(&mmap[..]))?;

        for library in CosmicLibrary::iter() {
            if !library.is_applicable(env) {
                continue;
            }

            for path in library.paths() {
                if archive.index_for_name(path).is_none() {
                    continue;
                }

                if library.is_system_library() {
                    classification
                        .system_libraries
                        .insert(archive_path.clone());
                }
                if !classification.origins.contains_key(&library) {
                    classification
                        .origins
                        .insert(library, archive_path.clone());
                    classification
                        .class_names
                        .insert(library, to_class_name(path));
                }
                break;
            }
        }
    }

    Ok(classification)
}

/// Convert an internal class path back to a fully-qualified dot-form name.
fn to_class_name(path: &str) -> String {
    path.strip_suffix(".class").unwrap_or(path).replace('/', ".")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const CLIENT_MARKER: &str = "finalforeach/cosmicreach/lwjgl3/Lwjgl3Launcher.class";

    fn build_jar(dir: &Path, name: &str, entries: &[&str]) -> PathBuf {
        let path = dir.join(name);
        let file = File::create(&path).unwrap();
        let mut writer = zip::ZipWriter::new(file);
        let options = zip::write::SimpleFileOptions::default();
        for entry in entries {
            writer.start_file(*entry, options).unwrap();
            writer.write_all(&[0xCA, 0xFE, 0xBA, 0xBE]).unwrap();
        }
        writer.finish().unwrap();
        path
    }

    #[test]
    fn client_marker_identifies_origin_and_entrypoint() {
        let dir = tempfile::tempdir().unwrap();
        let jar = build_jar(dir.path(), "cosmic-reach.jar", &[CLIENT_MARKER]);

        let classification = classify(&[jar.clone()], Env::Client).unwrap();

        assert_eq!(
            classification.origin(CosmicLibrary::CosmicClient),
            Some(jar.as_path())
        );
        assert_eq!(
            classification.class_name(CosmicLibrary::CosmicClient),
            Some("finalforeach.cosmicreach.lwjgl3.Lwjgl3Launcher")
        );
        assert!(classification.system_libraries().is_empty());
    }

    #[test]
    fn client_tag_is_not_applicable_on_server() {
        let dir = tempfile::tempdir().unwrap();
        let jar = build_jar(dir.path(), "cosmic-reach.jar", &[CLIENT_MARKER]);

        let classification = classify(&[jar], Env::Server).unwrap();
        assert_eq!(classification.origin(CosmicLibrary::CosmicClient), None);
    }

    #[test]
    fn first_archive_wins_for_origin() {
        let dir = tempfile::tempdir().unwrap();
        let first = build_jar(dir.path(), "first.jar", &[CLIENT_MARKER]);
        let second = build_jar(dir.path(), "second.jar", &[CLIENT_MARKER]);

        let classification = classify(&[first.clone(), second], Env::Client).unwrap();
        assert_eq!(
            classification.origin(CosmicLibrary::CosmicClient),
            Some(first.as_path())
        );
    }

    #[test]
    fn system_markers_populate_system_libraries() {
        let dir = tempfile::tempdir().unwrap();
        let game = build_jar(dir.path(), "cosmic-reach.jar", &[CLIENT_MARKER]);
        let asm = build_jar(
            dir.path(),
            "asm.jar",
            &[
                "org/objectweb/asm/AnnotationVisitor.class",
                "org/objectweb/asm/tree/AbstractInsnNode.class",
            ],
        );
        let mixin = build_jar(
            dir.path(),
            "mixin.jar",
            &["org/spongepowered/asm/launch/MixinBootstrap.class"],
        );

        let classification =
            classify(&[game.clone(), asm.clone(), mixin.clone()], Env::Client).unwrap();

        assert_eq!(
            classification.origin(CosmicLibrary::CosmicClient),
            Some(game.as_path())
        );
        let system: Vec<_> = classification.system_libraries().iter().cloned().collect();
        assert!(system.contains(&asm));
        assert!(system.contains(&mixin));
        assert!(!system.contains(&game));
    }

    #[test]
    fn duplicate_system_marker_still_contributes_archive() {
        let dir = tempfile::tempdir().unwrap();
        let first = build_jar(
            dir.path(),
            "asm1.jar",
            &["org/objectweb/asm/AnnotationVisitor.class"],
        );
        let second = build_jar(
            dir.path(),
            "asm2.jar",
            &["org/objectweb/asm/AnnotationVisitor.class"],
        );

        let classification = classify(&[first.clone(), second.clone()], Env::Client).unwrap();

        assert_eq!(
            classification.origin(CosmicLibrary::AsmVisitor),
            Some(first.as_path())
        );
        assert!(classification.system_libraries().contains(&first));
        assert!(classification.system_libraries().contains(&second));
    }

    #[test]
    fn unreadable_archive_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let bogus = dir.path().join("not-a-jar.jar");
        std::fs::write(&bogus, b"definitely not a zip").unwrap();

        assert!(classify(&[bogus], Env::Client).is_err());
    }

    #[test]
    fn every_tag_has_paths() {
        for library in CosmicLibrary::iter() {
            assert!(!library.paths().is_empty());
        }
    }
}
