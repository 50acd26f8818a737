//! Roomlog - a room and child activity logging prototype
//!
//! This library provides the catalog model and the selection engine behind
//! the children picker: per-room and recently-used "select all" aggregates
//! derived from a single selection store, a visibility filter for children
//! who are checked out, and an action-binding session that produces a
//! submission record on finalize.

use thiserror::Error;

pub mod catalog;
pub mod cli;
pub mod commands;
pub mod config;
pub mod output;
pub mod picker;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum RoomlogError {
    /// Catalog error
    #[error("Catalog error: {0}")]
    CatalogError(#[from] catalog::CatalogError),
    /// Picker error
    #[error("Picker error: {0}")]
    PickerError(#[from] picker::PickerError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// JSON serialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
