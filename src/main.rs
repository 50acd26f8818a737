//! Roomlog CLI application entry point
//!
//! Room and child activity logging prototype for childcare teams. Loads the
//! catalog of rooms, children, and actions, then runs one of the listing
//! commands or a scripted logging workflow.
//!
//! # Usage
//!
//! ```bash
//! # List rooms (default command)
//! roomlog
//! roomlog rooms
//!
//! # List children in a room
//! roomlog children --room r1
//!
//! # Log a nap for two children, plus everyone recently used
//! roomlog log --action a3 --child c2 --child c6 --recent-all
//!
//! # Include checked-out children in listings and select-all targets
//! roomlog --everyone rooms
//! ```
//!
//! # Configuration
//!
//! The catalog path and defaults are stored in the user's config directory
//! (`~/.config/roomlog/config.toml` on Linux) and can be overridden with
//! `--catalog`.

use roomlog::{
    catalog::Catalog,
    cli::{Cli, Commands},
    commands::{self, log::LogRequest},
    config::RoomlogConfig,
    picker::VisibilityMode,
    RoomlogError,
};
use std::path::PathBuf;

type Result<T> = std::result::Result<T, RoomlogError>;

/// Resolve the catalog path from CLI override or configuration
fn resolve_catalog_path(cli_path: Option<PathBuf>, config: &RoomlogConfig) -> Result<PathBuf> {
    cli_path
        .or_else(|| config.catalog.clone())
        .ok_or_else(|| {
            RoomlogError::InvalidInput(
                "No catalog file configured. Pass --catalog <path> or set 'catalog' in the config file.".into(),
            )
        })
}

/// Main entry point for the roomlog application
///
/// Loads configuration, parses command-line arguments, loads the catalog,
/// and dispatches to the appropriate command handler.
///
/// # Errors
///
/// Returns `RoomlogError` if configuration or catalog loading fails, or if
/// any command handler returns an error.
fn main() -> Result<()> {
    let config = RoomlogConfig::load()?;

    let cli = Cli::parse_args();

    let quiet = cli.quiet || config.quiet;
    let mode = if cli.everyone || config.show_inactive {
        VisibilityMode::Everyone
    } else {
        VisibilityMode::PresentOnly
    };

    let catalog_path = resolve_catalog_path(cli.catalog.clone(), &config)?;
    let catalog = Catalog::load(&catalog_path)?;

    match cli.command() {
        Commands::Rooms => commands::handle_rooms(&catalog, mode, quiet)?,
        Commands::Children { room } => {
            commands::handle_children(&catalog, room.as_deref(), mode, quiet)?;
        }
        Commands::Actions => commands::handle_actions(&catalog, quiet),
        Commands::Log {
            action,
            children,
            room_all,
            recent_all,
        } => {
            let request = LogRequest {
                action,
                children,
                room_all,
                recent_all,
            };
            commands::handle_log(&catalog, &request, mode, quiet)?;
        }
    }

    Ok(())
}
