//! Visible membership under the active visibility filter
//!
//! A `GroupIndex` is a pure view over (catalog, visibility mode): it reports
//! which members of a room or of the recent list currently participate in
//! the picker. There is no cache to invalidate; every read reflects the mode
//! it was built with.

use crate::catalog::Catalog;
use crate::picker::{PickerError, Result, VisibilityMode};

/// Partitions children by room and applies the visibility filter
#[derive(Debug, Clone, Copy)]
pub struct GroupIndex<'a> {
    catalog: &'a Catalog,
    mode: VisibilityMode,
}

impl<'a> GroupIndex<'a> {
    /// Create an index over a catalog with the given visibility mode
    #[must_use]
    pub const fn new(catalog: &'a Catalog, mode: VisibilityMode) -> Self {
        Self { catalog, mode }
    }

    /// The active visibility mode
    #[must_use]
    pub const fn mode(&self) -> VisibilityMode {
        self.mode
    }

    /// Visible members of a room, in catalog order
    ///
    /// # Errors
    ///
    /// Returns `PickerError::UnknownRoom` if the room id is not in the
    /// catalog.
    pub fn visible_members(&self, room_id: &str) -> Result<Vec<&'a str>> {
        if self.catalog.room(room_id).is_none() {
            return Err(PickerError::UnknownRoom(room_id.to_string()));
        }

        Ok(self
            .catalog
            .children
            .iter()
            .filter(|c| c.room == room_id && self.mode.shows(c.active))
            .map(|c| c.id.as_str())
            .collect())
    }

    /// Visible children from the recent list, in recency order
    #[must_use]
    pub fn visible_recent(&self) -> Vec<&'a str> {
        self.catalog
            .recent_children()
            .into_iter()
            .filter(|c| self.mode.shows(c.active))
            .map(|c| c.id.as_str())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::sample_catalog;

    #[test]
    fn test_present_only_filters_inactive_members() {
        let catalog = sample_catalog();
        let index = GroupIndex::new(&catalog, VisibilityMode::PresentOnly);

        // c4 is checked out, so r1 shows 4 of its 5 members
        let members = index.visible_members("r1").unwrap();
        assert_eq!(members, vec!["c1", "c2", "c3", "c5"]);
    }

    #[test]
    fn test_everyone_shows_full_membership() {
        let catalog = sample_catalog();
        let index = GroupIndex::new(&catalog, VisibilityMode::Everyone);

        let members = index.visible_members("r1").unwrap();
        assert_eq!(members, vec!["c1", "c2", "c3", "c4", "c5"]);
    }

    #[test]
    fn test_room_with_no_visible_members() {
        let catalog = sample_catalog();
        let index = GroupIndex::new(&catalog, VisibilityMode::PresentOnly);

        // r3's only member is checked out
        assert!(index.visible_members("r3").unwrap().is_empty());

        let index = GroupIndex::new(&catalog, VisibilityMode::Everyone);
        assert_eq!(index.visible_members("r3").unwrap(), vec!["c9"]);
    }

    #[test]
    fn test_unknown_room_rejected() {
        let catalog = sample_catalog();
        let index = GroupIndex::new(&catalog, VisibilityMode::PresentOnly);

        let err = index.visible_members("r9").unwrap_err();
        assert!(matches!(err, PickerError::UnknownRoom(id) if id == "r9"));
    }

    #[test]
    fn test_visible_recent_applies_same_filter() {
        let catalog = sample_catalog();

        let index = GroupIndex::new(&catalog, VisibilityMode::PresentOnly);
        // c9 is checked out and drops from the recent view
        assert_eq!(index.visible_recent(), vec!["c1", "c6"]);

        let index = GroupIndex::new(&catalog, VisibilityMode::Everyone);
        assert_eq!(index.visible_recent(), vec!["c1", "c6", "c9"]);
    }
}
