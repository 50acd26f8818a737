//! Listing commands: rooms, children, actions

use crate::catalog::Catalog;
use crate::output;
use crate::picker::{PickerSession, VisibilityMode};
use crate::RoomlogError;

type Result<T> = std::result::Result<T, RoomlogError>;

/// Handle the rooms command - list rooms with visible member counts
///
/// # Errors
///
/// Returns `RoomlogError` if a room lookup fails; the catalog is validated
/// at load, so this does not occur in practice.
pub fn handle_rooms(catalog: &Catalog, mode: VisibilityMode, quiet: bool) -> Result<()> {
    let mut session = PickerSession::new(catalog);
    session.set_visibility(mode);

    if catalog.rooms.is_empty() {
        if !quiet {
            println!("No rooms in catalog.");
        }
        return Ok(());
    }

    if !quiet {
        println!("Rooms ({}):", mode.description());
    }

    for room in &catalog.rooms {
        let visible = session.visible_members(&room.id)?.len();
        let total = catalog.room_members(&room.id).len();
        let coverage = session.room_coverage(&room.id)?;
        println!("{}", output::room_line(room, visible, total, coverage, quiet));
    }

    Ok(())
}

/// Handle the children command - list children, optionally for one room
///
/// # Errors
///
/// Returns `RoomlogError::InvalidInput` if the room id is unknown.
pub fn handle_children(
    catalog: &Catalog,
    room: Option<&str>,
    mode: VisibilityMode,
    quiet: bool,
) -> Result<()> {
    if let Some(room_id) = room {
        let room = catalog
            .room(room_id)
            .ok_or_else(|| RoomlogError::InvalidInput(format!("Unknown room '{room_id}'")))?;

        if !quiet {
            println!("{}:", room.name);
        }
        for child in catalog.room_members(room_id) {
            if mode.shows(child.active) {
                println!("{}", output::child_line(child, false, quiet));
            }
        }
        return Ok(());
    }

    if !quiet {
        println!("Children ({}):", mode.description());
    }
    for child in &catalog.children {
        if mode.shows(child.active) {
            println!("{}", output::child_line(child, false, quiet));
        }
    }

    Ok(())
}

/// Handle the actions command - list the loggable actions
pub fn handle_actions(catalog: &Catalog, quiet: bool) {
    if catalog.actions.is_empty() {
        if !quiet {
            println!("No actions in catalog.");
        }
        return;
    }

    if !quiet {
        println!("Actions:");
    }
    for action in &catalog.actions {
        println!("{}", output::action_line(action, quiet));
    }
}
