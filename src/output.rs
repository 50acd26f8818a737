//! Output formatting for CLI display
//!
//! Pure string producers for room, child, and action lines. Coverage markers
//! mirror the picker's tri-state: `[ ]` none, `[~]` partial, `[x]` full.

use crate::catalog::{ActionKind, Child, Room};
use crate::picker::Coverage;
use colored::Colorize;

/// Checkbox-style marker for a coverage state
#[must_use]
pub const fn coverage_marker(coverage: Coverage) -> &'static str {
    match coverage {
        Coverage::None => "[ ]",
        Coverage::Partial => "[~]",
        Coverage::Full => "[x]",
    }
}

/// Format a room with its visible member count and coverage
#[must_use]
pub fn room_line(room: &Room, visible: usize, total: usize, coverage: Coverage, quiet: bool) -> String {
    if quiet {
        return room.id.clone();
    }

    if visible == total {
        format!(
            "  {} {} ({} children)",
            coverage_marker(coverage),
            room.name,
            total
        )
    } else {
        format!(
            "  {} {} ({} of {} present)",
            coverage_marker(coverage),
            room.name,
            visible,
            total
        )
    }
}

/// Format a child line, dimming checked-out children
#[must_use]
pub fn child_line(child: &Child, selected: bool, quiet: bool) -> String {
    if quiet {
        return child.id.clone();
    }

    let marker = if selected { "[x]" } else { "[ ]" };
    if child.active {
        format!("  {} {} ({})", marker, child.name, child.id)
    } else {
        format!(
            "  {} {} ({}) {}",
            marker,
            child.name.dimmed(),
            child.id,
            "checked out".dimmed()
        )
    }
}

/// Format an action line for the action chooser listing
#[must_use]
pub fn action_line(action: &ActionKind, quiet: bool) -> String {
    if quiet {
        return action.id.clone();
    }

    if action.description.is_empty() {
        format!("  {} - {}", action.id, action.label)
    } else {
        format!("  {} - {} ({})", action.id, action.label, action.description)
    }
}
