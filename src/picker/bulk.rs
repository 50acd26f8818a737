//! Derived coverage flags and select-all semantics
//!
//! Coverage is a tri-state summary of how much of a room's (or the recent
//! list's) visible membership is selected. It is computed on demand from the
//! selection store and never stored, so it cannot drift out of sync with the
//! selection the way an independently kept "all selected" boolean can.
//!
//! Select-all follows a fixed tie-break rule: a partial selection always
//! resolves to "select the rest", never to
//! "deselect everything", even when only one child is missing. Only children
//! whose state differs from the target are flipped.

use crate::picker::{GroupIndex, Result, SelectionStore};

/// How much of a visible member list is selected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coverage {
    /// No visible member is selected (also the state of an empty list)
    None,

    /// Some, but not all, visible members are selected
    Partial,

    /// Every visible member is selected, and at least one exists
    Full,
}

impl Coverage {
    /// Derive coverage of a member list from the selection store
    #[must_use]
    pub fn of(members: &[&str], store: &SelectionStore) -> Self {
        if members.is_empty() {
            return Self::None;
        }

        let selected = members.iter().filter(|id| store.is_selected(id)).count();
        if selected == 0 {
            Self::None
        } else if selected == members.len() {
            Self::Full
        } else {
            Self::Partial
        }
    }
}

/// Applies select-all / deselect-all over visible member lists
///
/// Borrows the store mutably for the duration of one bulk operation, so the
/// whole pass is a single synchronous transaction: no caller can observe a
/// half-applied toggle.
#[derive(Debug)]
pub struct BulkToggle<'a, 's> {
    store: &'s mut SelectionStore,
    index: GroupIndex<'a>,
}

impl<'a, 's> BulkToggle<'a, 's> {
    /// Create a coordinator over a store and a visibility-filtered index
    pub fn new(store: &'s mut SelectionStore, index: GroupIndex<'a>) -> Self {
        Self { store, index }
    }

    /// Coverage of a room's visible members
    ///
    /// # Errors
    ///
    /// Returns `PickerError::UnknownRoom` for an id outside the catalog.
    pub fn room_coverage(&self, room_id: &str) -> Result<Coverage> {
        let members = self.index.visible_members(room_id)?;
        Ok(Coverage::of(&members, self.store))
    }

    /// Coverage of the visible recent list
    #[must_use]
    pub fn recent_coverage(&self) -> Coverage {
        let members = self.index.visible_recent();
        Coverage::of(&members, self.store)
    }

    /// Select-all / deselect-all over a room's visible members
    ///
    /// `Full` coverage deselects every visible member; anything else selects
    /// the visible members that are still missing. Returns the number of
    /// children whose state changed.
    ///
    /// # Errors
    ///
    /// Returns `PickerError::UnknownRoom` for an id outside the catalog.
    pub fn toggle_room_all(&mut self, room_id: &str) -> Result<usize> {
        let members = self.index.visible_members(room_id)?;
        self.apply(&members)
    }

    /// Select-all / deselect-all over the visible recent list
    ///
    /// # Errors
    ///
    /// Propagates store errors; member lists come from the catalog, so none
    /// occur in practice.
    pub fn toggle_recent_all(&mut self) -> Result<usize> {
        let members = self.index.visible_recent();
        self.apply(&members)
    }

    /// Flip every member whose state differs from the target
    fn apply(&mut self, members: &[&str]) -> Result<usize> {
        let target = Coverage::of(members, self.store) != Coverage::Full;

        let mut flipped = 0;
        for id in members {
            if self.store.is_selected(id) != target {
                self.store.toggle(id)?;
                flipped += 1;
            }
        }
        Ok(flipped)
    }
}
