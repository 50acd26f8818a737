//! Command handlers for the CLI shell
//!
//! Each handler takes the loaded catalog plus flags already resolved by
//! `main` and performs no selection logic of its own; everything goes
//! through the picker session.

pub mod list;
pub mod log;

pub use list::{handle_actions, handle_children, handle_rooms};
pub use log::handle_log;
