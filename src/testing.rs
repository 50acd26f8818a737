//! Testing utilities for roomlog
//!
//! Provides a sample catalog mirroring the shape of a small childcare
//! center: three rooms, a few checked-out children, and a recently-used
//! list that crosses rooms.
//!
//! Only available when compiled with `cfg(test)`.

use crate::catalog::{ActionKind, Catalog, Child, Room};

fn child(id: &str, name: &str, room: &str, active: bool) -> Child {
    Child {
        id: id.into(),
        name: name.into(),
        room: room.into(),
        active,
    }
}

/// Build the sample catalog used throughout the unit tests
///
/// Layout:
/// - r1 "Babies": c1-c5, with c4 checked out (5 members, 4 present)
/// - r2 "Toddlers": c6-c8, all present
/// - r3 "Pre-K": c9 only, checked out (no visible members by default)
/// - recent: c1, c6, c9 (crosses rooms, includes a checked-out child)
#[must_use]
pub fn sample_catalog() -> Catalog {
    Catalog {
        rooms: vec![
            Room {
                id: "r1".into(),
                name: "Babies".into(),
            },
            Room {
                id: "r2".into(),
                name: "Toddlers".into(),
            },
            Room {
                id: "r3".into(),
                name: "Pre-K".into(),
            },
        ],
        children: vec![
            child("c1", "Adam", "r1", true),
            child("c2", "Elise", "r1", true),
            child("c3", "Levi", "r1", true),
            child("c4", "Leo", "r1", false),
            child("c5", "Lottie", "r1", true),
            child("c6", "Nathaniel", "r2", true),
            child("c7", "Olivia", "r2", true),
            child("c8", "Zandra", "r2", true),
            child("c9", "Noah", "r3", false),
        ],
        actions: vec![
            ActionKind {
                id: "a1".into(),
                label: "Send message".into(),
                description: "Quick note to parents".into(),
            },
            ActionKind {
                id: "a2".into(),
                label: "Log diaper".into(),
                description: "Record diaper change".into(),
            },
            ActionKind {
                id: "a3".into(),
                label: "Log nap".into(),
                description: "Start or end nap time".into(),
            },
            ActionKind {
                id: "a5".into(),
                label: "Check-in or out".into(),
                description: "Arrival or departure".into(),
            },
        ],
        recent: vec!["c1".into(), "c6".into(), "c9".into()],
    }
}
