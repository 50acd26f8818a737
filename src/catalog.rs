//! Catalog of rooms, children, and loggable actions
//!
//! The catalog is the read-only input to a picker session: who the children
//! are, which room each belongs to, which actions can be logged, and the
//! recently-selected list offered for quick re-selection. It is loaded from
//! a TOML file and validated once; the picker never mutates it.
//!
//! Room membership is the catalog's child order filtered by room, so it is
//! fixed per catalog and independent of any selection.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Errors raised while loading or validating a catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Catalog file could not be read
    #[error("Cannot read catalog file: {0}")]
    Io(#[from] std::io::Error),

    /// Catalog file is not valid TOML
    #[error("Cannot parse catalog: {0}")]
    Parse(#[from] toml::de::Error),

    /// The same id appears twice within a section
    #[error("Duplicate {kind} id: '{id}'")]
    DuplicateId { kind: &'static str, id: String },

    /// A child references a room that is not in the catalog
    #[error("Child '{child}' references unknown room '{room}'")]
    UnknownRoom { child: String, room: String },

    /// The recent list references a child that is not in the catalog
    #[error("Recent list references unknown child '{0}'")]
    UnknownRecent(String),
}

/// A child that can be selected in the picker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Child {
    /// Unique identifier
    pub id: String,

    /// Display name
    pub name: String,

    /// Id of the room this child belongs to
    pub room: String,

    /// Whether the child is currently present (false = checked out)
    #[serde(default = "default_active")]
    pub active: bool,
}

const fn default_active() -> bool {
    true
}

/// A named room grouping children
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    /// Unique identifier
    pub id: String,

    /// Display name
    pub name: String,
}

/// A loggable action, e.g. "Log nap" or "Check-in or out"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionKind {
    /// Unique identifier
    pub id: String,

    /// Short label shown in the action chooser
    pub label: String,

    /// Longer description
    #[serde(default)]
    pub description: String,
}

/// Full catalog as loaded from a TOML file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    /// Rooms in display order
    #[serde(default)]
    pub rooms: Vec<Room>,

    /// Children in display order; room membership follows this order
    #[serde(default)]
    pub children: Vec<Child>,

    /// Actions offered by the action chooser
    #[serde(default)]
    pub actions: Vec<ActionKind>,

    /// Recently-selected child ids, most recent first, crossing rooms
    #[serde(default)]
    pub recent: Vec<String>,
}

impl Catalog {
    /// Load and validate a catalog from a TOML file
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the file cannot be read, parsed, or fails
    /// validation.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let text = fs::read_to_string(path)?;
        Self::from_toml(&text)
    }

    /// Parse and validate a catalog from TOML text
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the text cannot be parsed or fails
    /// validation.
    pub fn from_toml(text: &str) -> Result<Self, CatalogError> {
        let catalog: Self = toml::from_str(text)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Validate cross-references and id uniqueness
    fn validate(&self) -> Result<(), CatalogError> {
        let room_ids = unique_ids("room", self.rooms.iter().map(|r| r.id.as_str()))?;
        let child_ids = unique_ids("child", self.children.iter().map(|c| c.id.as_str()))?;
        unique_ids("action", self.actions.iter().map(|a| a.id.as_str()))?;

        for child in &self.children {
            if !room_ids.contains(child.room.as_str()) {
                return Err(CatalogError::UnknownRoom {
                    child: child.id.clone(),
                    room: child.room.clone(),
                });
            }
        }

        for id in &self.recent {
            if !child_ids.contains(id.as_str()) {
                return Err(CatalogError::UnknownRecent(id.clone()));
            }
        }

        Ok(())
    }

    /// Check whether a child id exists in the catalog
    #[must_use]
    pub fn contains_child(&self, id: &str) -> bool {
        self.children.iter().any(|c| c.id == id)
    }

    /// Look up a child by id
    #[must_use]
    pub fn child(&self, id: &str) -> Option<&Child> {
        self.children.iter().find(|c| c.id == id)
    }

    /// Look up a room by id
    #[must_use]
    pub fn room(&self, id: &str) -> Option<&Room> {
        self.rooms.iter().find(|r| r.id == id)
    }

    /// Look up an action by id
    #[must_use]
    pub fn action(&self, id: &str) -> Option<&ActionKind> {
        self.actions.iter().find(|a| a.id == id)
    }

    /// Members of a room in catalog order, regardless of visibility
    #[must_use]
    pub fn room_members(&self, room_id: &str) -> Vec<&Child> {
        self.children.iter().filter(|c| c.room == room_id).collect()
    }

    /// Children from the recent list in recency order
    ///
    /// Ids are validated at load time, so every entry resolves.
    #[must_use]
    pub fn recent_children(&self) -> Vec<&Child> {
        self.recent
            .iter()
            .filter_map(|id| self.child(id))
            .collect()
    }
}

/// Collect ids into a set, rejecting duplicates
fn unique_ids<'a>(
    kind: &'static str,
    ids: impl Iterator<Item = &'a str>,
) -> Result<HashSet<&'a str>, CatalogError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(CatalogError::DuplicateId {
                kind,
                id: id.to_string(),
            });
        }
    }
    Ok(seen)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::sample_catalog;

    #[test]
    fn test_sample_catalog_is_valid() {
        let catalog = sample_catalog();
        assert!(catalog.validate().is_ok());
    }

    #[test]
    fn test_lookup_by_id() {
        let catalog = sample_catalog();

        assert_eq!(catalog.child("c1").map(|c| c.name.as_str()), Some("Adam"));
        assert_eq!(catalog.room("r2").map(|r| r.name.as_str()), Some("Toddlers"));
        assert_eq!(
            catalog.action("a3").map(|a| a.label.as_str()),
            Some("Log nap")
        );
        assert!(catalog.child("nope").is_none());
        assert!(!catalog.contains_child("nope"));
    }

    #[test]
    fn test_room_members_follow_catalog_order() {
        let catalog = sample_catalog();

        let members: Vec<&str> = catalog
            .room_members("r1")
            .iter()
            .map(|c| c.id.as_str())
            .collect();
        assert_eq!(members, vec!["c1", "c2", "c3", "c4", "c5"]);
    }

    #[test]
    fn test_recent_children_resolve_in_order() {
        let catalog = sample_catalog();

        let recent: Vec<&str> = catalog
            .recent_children()
            .iter()
            .map(|c| c.id.as_str())
            .collect();
        assert_eq!(recent, vec!["c1", "c6", "c9"]);
    }

    #[test]
    fn test_from_toml_round_trip() {
        // Top-level keys must precede the table sections in TOML
        let text = r#"
            recent = ["c2"]

            [[rooms]]
            id = "r1"
            name = "Babies"

            [[children]]
            id = "c1"
            name = "Adam"
            room = "r1"

            [[children]]
            id = "c2"
            name = "Elise"
            room = "r1"
            active = false

            [[actions]]
            id = "a1"
            label = "Send message"
            description = "Quick note to parents"
        "#;

        let catalog = Catalog::from_toml(text).unwrap();
        assert_eq!(catalog.rooms.len(), 1);
        assert_eq!(catalog.children.len(), 2);
        assert!(catalog.child("c1").unwrap().active);
        assert!(!catalog.child("c2").unwrap().active);
        assert_eq!(catalog.recent, vec!["c2"]);
    }

    #[test]
    fn test_duplicate_child_id_rejected() {
        let text = r#"
            [[rooms]]
            id = "r1"
            name = "Babies"

            [[children]]
            id = "c1"
            name = "Adam"
            room = "r1"

            [[children]]
            id = "c1"
            name = "Elise"
            room = "r1"
        "#;

        let err = Catalog::from_toml(text).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::DuplicateId { kind: "child", .. }
        ));
    }

    #[test]
    fn test_unknown_room_reference_rejected() {
        let text = r#"
            [[rooms]]
            id = "r1"
            name = "Babies"

            [[children]]
            id = "c1"
            name = "Adam"
            room = "r9"
        "#;

        let err = Catalog::from_toml(text).unwrap_err();
        assert!(matches!(err, CatalogError::UnknownRoom { .. }));
    }

    #[test]
    fn test_unknown_recent_reference_rejected() {
        let text = r#"
            recent = ["c9"]

            [[rooms]]
            id = "r1"
            name = "Babies"

            [[children]]
            id = "c1"
            name = "Adam"
            room = "r1"
        "#;

        let err = Catalog::from_toml(text).unwrap_err();
        assert!(matches!(err, CatalogError::UnknownRecent(id) if id == "c9"));
    }
}
