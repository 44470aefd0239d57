//! Builtin-mod metadata carriers.
//!
//! The host surfaces the game itself (and the provider) as builtin mods so that
//! dependency resolution can target them like any other mod. The provider only
//! assembles these values; interpretation is entirely host-side.

use std::{collections::BTreeMap, path::PathBuf};

/// Keyed contact information (homepage, wiki, issue tracker, ...).
///
/// A `BTreeMap` keeps serialization deterministic.
pub type ContactInformation = BTreeMap<String, String>;

/// An author entry in mod metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    /// Display name
    pub name: String,
    /// Contact information for this person
    pub contact: ContactInformation,
}

/// Metadata describing one builtin mod.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModMetadata {
    /// Stable identifier, e.g. `"cosmic_reach"`
    pub id: String,
    /// Version string
    pub version: String,
    /// Human-readable display name
    pub name: String,
    /// Short description
    pub description: String,
    /// Author entries
    pub authors: Vec<Person>,
    /// Contact information for the mod itself
    pub contact: ContactInformation,
}

impl ModMetadata {
    /// Start building metadata for the given id and version.
    ///
    /// ## Arguments
    /// * 'id'      - Stable mod identifier
    /// * 'version' - Version string
    #[must_use]
    pub fn builder(id: &str, version: &str) -> ModMetadataBuilder {
        ModMetadataBuilder {
            metadata: ModMetadata {
                id: id.to_string(),
                version: version.to_string(),
                name: String::new(),
                description: String::new(),
                authors: Vec::new(),
                contact: ContactInformation::new(),
            },
        }
    }
}

/// Chained builder for [`ModMetadata`].
///
/// # Example
/// ```rust
/// use cosmic_provider::host::{ContactInformation, ModMetadata};
///
/// let metadata = ModMetadata::builder("cosmic_reach", "0.5.9")
///     .name("Cosmic Reach")
///     .description("Cosmic Reach Game")
///     .author("FinalForEach", ContactInformation::new())
///     .build();
/// assert_eq!(metadata.name, "Cosmic Reach");
/// ```
#[derive(Debug)]
pub struct ModMetadataBuilder {
    metadata: ModMetadata,
}

impl ModMetadataBuilder {
    /// Set the display name.
    #[must_use]
    pub fn name(mut self, name: &str) -> ModMetadataBuilder {
        self.metadata.name = name.to_string();
        self
    }

    /// Set the description.
    #[must_use]
    pub fn description(mut self, description: &str) -> ModMetadataBuilder {
        self.metadata.description = description.to_string();
        self
    }

    /// Add an author entry.
    ///
    /// ## Arguments
    /// * 'name'    - The author's display name
    /// * 'contact' - Contact information for the author
    #[must_use]
    pub fn author(mut self, name: &str, contact: ContactInformation) -> ModMetadataBuilder {
        self.metadata.authors.push(Person {
            name: name.to_string(),
            contact,
        });
        self
    }

    /// Set the mod's contact information.
    #[must_use]
    pub fn contact(mut self, contact: ContactInformation) -> ModMetadataBuilder {
        self.metadata.contact = contact;
        self
    }

    /// Finish building.
    #[must_use]
    pub fn build(self) -> ModMetadata {
        self.metadata
    }
}

/// A builtin mod: its contributing archives and its metadata.
///
/// The game's entry carries the located archive; the provider's own entry
/// carries an empty path list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltinMod {
    /// Archives contributing this mod's classes (empty for pure-metadata entries)
    pub paths: Vec<PathBuf>,
    /// The mod's metadata
    pub metadata: ModMetadata,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_assembles_all_fields() {
        let mut contact = ContactInformation::new();
        contact.insert("homepage".to_string(), "https://example.com".to_string());

        let metadata = ModMetadata::builder("cosmic_reach", "0.5.9")
            .name("Cosmic Reach")
            .description("Cosmic Reach Game")
            .author("FinalForEach", contact.clone())
            .contact(contact.clone())
            .build();

        assert_eq!(metadata.id, "cosmic_reach");
        assert_eq!(metadata.version, "0.5.9");
        assert_eq!(metadata.authors.len(), 1);
        assert_eq!(metadata.authors[0].name, "FinalForEach");
        assert_eq!(metadata.contact, contact);
    }
}
