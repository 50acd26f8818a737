//! Command-line interface definitions and parsing
//!
//! This module defines the CLI structure for roomlog using the `clap` crate.
//!
//! # Commands
//!
//! - **rooms**: List rooms with visible member counts (default)
//! - **children**: List children, optionally for one room
//! - **actions**: List the loggable actions
//! - **log**: Bind an action, apply selections, and print the submission
//!
//! # Examples
//!
//! ```bash
//! # List rooms
//! roomlog rooms
//!
//! # List children in one room, including checked-out ones
//! roomlog children --room r1 --everyone
//!
//! # Log a nap for two children
//! roomlog log --action a3 --child c2 --child c6
//!
//! # Log check-in for a whole room plus the recent list
//! roomlog log --action a5 --room-all r1 --recent-all
//! ```

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Room and child activity logging prototype
#[derive(Debug, Parser)]
#[command(name = "roomlog", version, about)]
pub struct Cli {
    /// Suppress informational output (ids only, JSON on stdout)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to the catalog TOML file (overrides the configured path)
    #[arg(short = 'C', long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Include checked-out children in listings and select-all targets
    #[arg(short = 'e', long, global = true)]
    pub everyone: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List rooms with visible member counts
    #[command(alias = "r")]
    Rooms,

    /// List children, optionally restricted to one room
    #[command(alias = "ch")]
    Children {
        /// Room id to list
        #[arg(short, long)]
        room: Option<String>,
    },

    /// List the loggable actions
    #[command(alias = "a")]
    Actions,

    /// Bind an action, select children, and print the submission record
    #[command(alias = "l")]
    Log {
        /// Action id to log
        #[arg(short, long)]
        action: String,

        /// Child id to toggle (repeatable)
        #[arg(short, long = "child", value_name = "ID")]
        children: Vec<String>,

        /// Room id to select-all (repeatable)
        #[arg(long = "room-all", value_name = "ROOM")]
        room_all: Vec<String>,

        /// Select-all over the recently-used list
        #[arg(long)]
        recent_all: bool,
    },
}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// The requested command, defaulting to `rooms`
    #[must_use]
    pub fn command(self) -> Commands {
        self.command.unwrap_or(Commands::Rooms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_rooms() {
        let cli = Cli::parse_from(["roomlog"]);
        assert!(!cli.quiet);
        assert!(matches!(cli.command(), Commands::Rooms));
    }

    #[test]
    fn test_log_collects_repeated_flags() {
        let cli = Cli::parse_from([
            "roomlog", "log", "--action", "a3", "--child", "c1", "--child", "c2",
            "--room-all", "r1", "--recent-all",
        ]);

        match cli.command() {
            Commands::Log {
                action,
                children,
                room_all,
                recent_all,
            } => {
                assert_eq!(action, "a3");
                assert_eq!(children, vec!["c1", "c2"]);
                assert_eq!(room_all, vec!["r1"]);
                assert!(recent_all);
            }
            other => panic!("Expected Log command, got {other:?}"),
        }
    }

    #[test]
    fn test_global_flags_and_aliases() {
        let cli = Cli::parse_from(["roomlog", "-q", "-e", "ch", "--room", "r2"]);

        assert!(cli.quiet);
        assert!(cli.everyone);
        match cli.command() {
            Commands::Children { room } => assert_eq!(room.as_deref(), Some("r2")),
            other => panic!("Expected Children command, got {other:?}"),
        }
    }
}
