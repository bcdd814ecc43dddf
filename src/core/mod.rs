//! Core player logic
//!
//! This module contains:
//! - Playlist resolution from an opened file's folder
//! - The playback state machine and its session
//! - Keyboard command dispatch
//! - Auto-advance detection for the poll loop
//! - Player tunables and the error taxonomy

mod commands;
mod error;
mod playlist;
mod poller;
mod settings;
mod state;

pub use commands::{command_for_keystroke, PlayerCommand};
pub use error::PlayerError;
pub use playlist::Playlist;
pub use settings::PlayerSettings;
pub use state::{Player, TickOutcome};
