//! Visibility filter for checked-out children
//!
//! The filter only changes which children are counted when membership and
//! coverage are computed; it never touches the selection itself. A selected
//! child who becomes hidden stays selected and simply stops influencing the
//! room's select-all button until visibility is restored.

use serde::{Deserialize, Serialize};

/// Whether checked-out children participate in the picker views
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VisibilityMode {
    /// Only children who are currently present (the default)
    #[default]
    PresentOnly,

    /// Everyone, including checked-out children
    Everyone,
}

impl VisibilityMode {
    /// Whether a child with the given active flag is visible under this mode
    #[must_use]
    pub const fn shows(self, active: bool) -> bool {
        match self {
            Self::PresentOnly => active,
            Self::Everyone => true,
        }
    }

    /// Toggle between the two modes
    pub const fn toggle(&mut self) {
        *self = match self {
            Self::PresentOnly => Self::Everyone,
            Self::Everyone => Self::PresentOnly,
        };
    }

    /// Get description for UI
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::PresentOnly => "present children only",
            Self::Everyone => "everyone, including checked out",
        }
    }
}
