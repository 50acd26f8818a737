//! Picker session - the single mutation surface for one logging workflow
//!
//! A session is created when the picker opens: empty selection, default
//! visibility, no bound action. Every UI event (toggle one child, toggle a
//! room, toggle visibility, bind an action, finalize, cancel) goes through
//! the session, which keeps the store, the filter, and the bound action
//! consistent and recomputes aggregate flags synchronously on read.
//!
//! # Workflow
//!
//! ```text
//! Session Created (Idle)
//!     ↓
//! bind_action() → AwaitingSelection
//!     ↓
//! toggle_child() / toggle_room_all() / toggle_recent_all() / visibility
//!     ↓
//! finalize() → Submission handed to sink, selection reset → Idle
//! cancel()   → selection reset, nothing emitted → Idle
//! ```

use crate::catalog::{ActionKind, Catalog};
use crate::picker::{BulkToggle, Coverage, GroupIndex, PickerError, Result, SelectionStore, VisibilityMode};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashSet;

/// Immutable record emitted once at finalize
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Submission {
    /// The action that was bound for this session
    pub action: ActionKind,

    /// Selected child ids, snapshotted in catalog order
    pub children: Vec<String>,

    /// When the submission was finalized
    pub recorded_at: DateTime<Utc>,
}

/// Selection session over a borrowed catalog
pub struct PickerSession<'a> {
    catalog: &'a Catalog,
    store: SelectionStore,
    mode: VisibilityMode,
    bound: Option<ActionKind>,
    expanded: HashSet<String>,
}

impl<'a> PickerSession<'a> {
    /// Open a fresh session: empty selection, default visibility, no action
    ///
    /// The first room starts expanded, matching the picker's initial view.
    #[must_use]
    pub fn new(catalog: &'a Catalog) -> Self {
        let expanded = catalog
            .rooms
            .first()
            .map(|r| r.id.clone())
            .into_iter()
            .collect();

        Self {
            catalog,
            store: SelectionStore::new(catalog),
            mode: VisibilityMode::default(),
            bound: None,
            expanded,
        }
    }

    /// The catalog this session operates on
    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        self.catalog
    }

    // ------------------------------------------------------------------
    // Selection
    // ------------------------------------------------------------------

    /// Flip one child's selection state
    ///
    /// # Errors
    ///
    /// Returns `PickerError::UnknownChild` for ids outside the catalog.
    pub fn toggle_child(&mut self, id: &str) -> Result<bool> {
        self.store.toggle(id)
    }

    /// Check whether a child is selected
    #[must_use]
    pub fn is_selected(&self, id: &str) -> bool {
        self.store.is_selected(id)
    }

    /// Number of selected children
    #[must_use]
    pub fn selected_count(&self) -> usize {
        self.store.selected_count()
    }

    /// Selected child ids in catalog order (read-only view)
    #[must_use]
    pub fn selected_ids(&self) -> Vec<&str> {
        self.catalog
            .children
            .iter()
            .map(|c| c.id.as_str())
            .filter(|id| self.store.is_selected(id))
            .collect()
    }

    // ------------------------------------------------------------------
    // Visibility
    // ------------------------------------------------------------------

    /// The active visibility mode
    #[must_use]
    pub const fn visibility(&self) -> VisibilityMode {
        self.mode
    }

    /// Set the visibility mode
    ///
    /// Pure configuration change: the selection is untouched, only derived
    /// membership and coverage change.
    pub fn set_visibility(&mut self, mode: VisibilityMode) {
        self.mode = mode;
    }

    /// Flip between the two visibility modes
    pub fn toggle_visibility(&mut self) {
        self.mode.toggle();
    }

    /// Visible members of a room under the active filter, in catalog order
    ///
    /// # Errors
    ///
    /// Returns `PickerError::UnknownRoom` for ids outside the catalog.
    pub fn visible_members(&self, room_id: &str) -> Result<Vec<&'a str>> {
        self.index().visible_members(room_id)
    }

    /// Visible recent children under the active filter, in recency order
    #[must_use]
    pub fn visible_recent(&self) -> Vec<&'a str> {
        self.index().visible_recent()
    }

    // ------------------------------------------------------------------
    // Aggregates and bulk toggles
    // ------------------------------------------------------------------

    /// Derived coverage of a room's visible members
    ///
    /// # Errors
    ///
    /// Returns `PickerError::UnknownRoom` for ids outside the catalog.
    pub fn room_coverage(&self, room_id: &str) -> Result<Coverage> {
        let members = self.index().visible_members(room_id)?;
        Ok(Coverage::of(&members, &self.store))
    }

    /// Derived coverage of the visible recent list
    #[must_use]
    pub fn recent_coverage(&self) -> Coverage {
        let members = self.index().visible_recent();
        Coverage::of(&members, &self.store)
    }

    /// Select-all / deselect-all over a room's visible members
    ///
    /// # Errors
    ///
    /// Returns `PickerError::UnknownRoom` for ids outside the catalog.
    pub fn toggle_room_all(&mut self, room_id: &str) -> Result<usize> {
        let index = GroupIndex::new(self.catalog, self.mode);
        BulkToggle::new(&mut self.store, index).toggle_room_all(room_id)
    }

    /// Select-all / deselect-all over the visible recent list
    ///
    /// # Errors
    ///
    /// Propagates store errors; none occur for catalog-sourced ids.
    pub fn toggle_recent_all(&mut self) -> Result<usize> {
        let index = GroupIndex::new(self.catalog, self.mode);
        BulkToggle::new(&mut self.store, index).toggle_recent_all()
    }

    // ------------------------------------------------------------------
    // Room expansion
    // ------------------------------------------------------------------

    /// Flip a room between expanded and collapsed
    ///
    /// Returns the new state (`true` = expanded).
    ///
    /// # Errors
    ///
    /// Returns `PickerError::UnknownRoom` for ids outside the catalog.
    pub fn toggle_room_expanded(&mut self, room_id: &str) -> Result<bool> {
        if self.catalog.room(room_id).is_none() {
            return Err(PickerError::UnknownRoom(room_id.to_string()));
        }

        if self.expanded.remove(room_id) {
            Ok(false)
        } else {
            self.expanded.insert(room_id.to_string());
            Ok(true)
        }
    }

    /// Whether a room is currently expanded
    #[must_use]
    pub fn is_room_expanded(&self, room_id: &str) -> bool {
        self.expanded.contains(room_id)
    }

    // ------------------------------------------------------------------
    // Action binding and finalize
    // ------------------------------------------------------------------

    /// Bind the action this session will log
    ///
    /// The id is resolved against the catalog once, so the rest of the
    /// session works with a validated descriptor.
    ///
    /// # Errors
    ///
    /// Returns `PickerError::AlreadyBound` if an action is bound, or
    /// `PickerError::UnknownAction` if the id is not in the catalog. Either
    /// way the session is unchanged.
    pub fn bind_action(&mut self, action_id: &str) -> Result<()> {
        if let Some(bound) = &self.bound {
            return Err(PickerError::AlreadyBound(bound.id.clone()));
        }

        let action = self
            .catalog
            .action(action_id)
            .ok_or_else(|| PickerError::UnknownAction(action_id.to_string()))?;
        self.bound = Some(action.clone());
        Ok(())
    }

    /// The currently bound action, if any
    #[must_use]
    pub const fn bound_action(&self) -> Option<&ActionKind> {
        self.bound.as_ref()
    }

    /// Whether an action is bound and the session awaits a selection
    #[must_use]
    pub const fn is_awaiting_selection(&self) -> bool {
        self.bound.is_some()
    }

    /// Finalize the session: emit a submission record and reset
    ///
    /// The record snapshots the bound action and the selected ids in catalog
    /// order, is handed to `sink`, and is also returned. Afterwards the
    /// selection is empty and no action is bound.
    ///
    /// # Errors
    ///
    /// Returns `PickerError::NoBoundAction` if no action is bound; the
    /// selection and binding are left exactly as they were.
    pub fn finalize(&mut self, sink: impl FnOnce(&Submission)) -> Result<Submission> {
        let action = self.bound.take().ok_or(PickerError::NoBoundAction)?;

        let submission = Submission {
            action,
            children: self.selected_ids().iter().map(|id| (*id).to_string()).collect(),
            recorded_at: Utc::now(),
        };

        sink(&submission);
        self.store.reset();
        Ok(submission)
    }

    /// Abandon the session: reset selection and binding, emit nothing
    pub fn cancel(&mut self) {
        self.store.reset();
        self.bound = None;
    }

    fn index(&self) -> GroupIndex<'a> {
        GroupIndex::new(self.catalog, self.mode)
    }
}
