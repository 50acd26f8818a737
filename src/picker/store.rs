//! Selection store - the single source of truth for selected children
//!
//! Both the room view and the recently-used view read and mutate this one
//! set, so a child's selection state is identical regardless of which view
//! displays it.

use crate::catalog::Catalog;
use crate::picker::{PickerError, Result};
use std::collections::HashSet;

/// Owns the set of currently selected child ids
///
/// The store knows the catalog's id universe and rejects toggles for ids
/// outside it, so `selected` is always a subset of the known ids.
#[derive(Debug, Clone)]
pub struct SelectionStore {
    known: HashSet<String>,
    selected: HashSet<String>,
}

impl SelectionStore {
    /// Create an empty store over the catalog's children
    #[must_use]
    pub fn new(catalog: &Catalog) -> Self {
        Self {
            known: catalog.children.iter().map(|c| c.id.clone()).collect(),
            selected: HashSet::new(),
        }
    }

    /// Flip the selection state of a child
    ///
    /// Returns the new state (`true` = now selected). A second immediate
    /// call undoes the first.
    ///
    /// # Errors
    ///
    /// Returns `PickerError::UnknownChild` for an id outside the catalog;
    /// the selection is left unchanged.
    pub fn toggle(&mut self, id: &str) -> Result<bool> {
        if !self.known.contains(id) {
            return Err(PickerError::UnknownChild(id.to_string()));
        }

        if self.selected.remove(id) {
            Ok(false)
        } else {
            self.selected.insert(id.to_string());
            Ok(true)
        }
    }

    /// Check whether a child is selected
    #[must_use]
    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.contains(id)
    }

    /// Number of selected children
    #[must_use]
    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    /// Whether nothing is selected
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Clear the selection
    pub fn reset(&mut self) {
        self.selected.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::sample_catalog;

    #[test]
    fn test_toggle_selects_and_deselects() {
        let catalog = sample_catalog();
        let mut store = SelectionStore::new(&catalog);

        assert!(store.toggle("c1").unwrap());
        assert!(store.is_selected("c1"));
        assert_eq!(store.selected_count(), 1);

        assert!(!store.toggle("c1").unwrap());
        assert!(!store.is_selected("c1"));
        assert_eq!(store.selected_count(), 0);
    }

    #[test]
    fn test_double_toggle_restores_prior_state() {
        let catalog = sample_catalog();
        let mut store = SelectionStore::new(&catalog);
        store.toggle("c2").unwrap();

        for id in ["c1", "c2"] {
            let before = store.is_selected(id);
            store.toggle(id).unwrap();
            store.toggle(id).unwrap();
            assert_eq!(store.is_selected(id), before);
        }
    }

    #[test]
    fn test_unknown_id_rejected_without_mutation() {
        let catalog = sample_catalog();
        let mut store = SelectionStore::new(&catalog);
        store.toggle("c1").unwrap();

        let err = store.toggle("ghost").unwrap_err();
        assert!(matches!(err, PickerError::UnknownChild(id) if id == "ghost"));
        assert_eq!(store.selected_count(), 1);
        assert!(store.is_selected("c1"));
    }

    #[test]
    fn test_reset_clears_selection() {
        let catalog = sample_catalog();
        let mut store = SelectionStore::new(&catalog);
        store.toggle("c1").unwrap();
        store.toggle("c6").unwrap();

        store.reset();

        assert!(store.is_empty());
        assert_eq!(store.selected_count(), 0);
    }
}
