//! Children picker - selection engine for the logging workflow
//!
//! This module implements the state behind the "select children" screen:
//! one selection store shared by the room view and the recently-used view,
//! aggregate select-all flags derived from it on demand, and a session that
//! binds a chosen action and produces a submission record on finalize.
//!
//! # Architecture
//!
//! - `store`: the selection set itself, validated against the catalog
//! - `visibility`: the show/hide filter for checked-out children
//! - `index`: visible room and recent membership under the active filter
//! - `bulk`: derived coverage flags and select-all / deselect-all semantics
//! - `session`: the single mutation surface, plus action binding and finalize
//!
//! Aggregate flags are never stored; they are recomputed from the store and
//! the visibility filter whenever they are read, so no view can drift out of
//! sync with the selection.

pub mod bulk;
pub mod index;
pub mod session;
pub mod store;
pub mod visibility;

pub use bulk::{BulkToggle, Coverage};
pub use index::GroupIndex;
pub use session::{PickerSession, Submission};
pub use store::SelectionStore;
pub use visibility::VisibilityMode;

/// Picker result type
pub type Result<T> = std::result::Result<T, PickerError>;

/// Errors that can occur while operating the picker
///
/// All variants are recoverable; a rejected operation leaves the selection
/// and the bound action exactly as they were before the call.
#[derive(Debug, thiserror::Error)]
pub enum PickerError {
    /// Toggle referenced a child id outside the catalog
    #[error("Unknown child id: '{0}'")]
    UnknownChild(String),

    /// Operation referenced a room id outside the catalog
    #[error("Unknown room id: '{0}'")]
    UnknownRoom(String),

    /// Bind referenced an action id outside the catalog
    #[error("Unknown action id: '{0}'")]
    UnknownAction(String),

    /// Bind attempted while an action is already bound
    #[error("Action '{0}' is already bound; finalize or cancel first")]
    AlreadyBound(String),

    /// Finalize attempted with no bound action
    #[error("No action bound; nothing to finalize")]
    NoBoundAction,
}
