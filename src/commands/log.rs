//! The log command - a scripted run of the full picker workflow
//!
//! Binds the action, applies room-all / recent-all / per-child toggles in
//! that order, then finalizes. The submission record goes to stdout as JSON;
//! the informational summary goes to stderr so the record stays pipeable.

use crate::catalog::Catalog;
use crate::picker::{PickerSession, VisibilityMode};
use crate::RoomlogError;

type Result<T> = std::result::Result<T, RoomlogError>;

/// Arguments for one scripted log run
#[derive(Debug, Clone)]
pub struct LogRequest {
    /// Action id to bind
    pub action: String,

    /// Child ids to toggle individually
    pub children: Vec<String>,

    /// Room ids to select-all
    pub room_all: Vec<String>,

    /// Whether to select-all over the recent list
    pub recent_all: bool,
}

/// Handle the log command - bind, select, finalize, print
///
/// # Errors
///
/// Returns `RoomlogError` if the action, a room, or a child id is unknown,
/// if nothing ends up selected, or if the record cannot be serialized.
pub fn handle_log(
    catalog: &Catalog,
    request: &LogRequest,
    mode: VisibilityMode,
    quiet: bool,
) -> Result<()> {
    let mut session = PickerSession::new(catalog);
    session.set_visibility(mode);
    session.bind_action(&request.action)?;

    for room_id in &request.room_all {
        let flipped = session.toggle_room_all(room_id)?;
        if !quiet {
            eprintln!("Room '{room_id}': {flipped} child(ren) toggled");
        }
    }

    if request.recent_all {
        let flipped = session.toggle_recent_all()?;
        if !quiet {
            eprintln!("Recently used: {flipped} child(ren) toggled");
        }
    }

    for child_id in &request.children {
        session.toggle_child(child_id)?;
    }

    if session.selected_count() == 0 {
        session.cancel();
        return Err(RoomlogError::InvalidInput(
            "No children selected; nothing to log".into(),
        ));
    }

    let submission = session.finalize(|record| {
        if !quiet {
            eprintln!(
                "Logged '{}' for {} child(ren)",
                record.action.label,
                record.children.len()
            );
        }
    })?;

    println!("{}", serde_json::to_string_pretty(&submission)?);
    Ok(())
}
