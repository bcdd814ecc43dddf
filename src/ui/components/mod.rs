//! UI components

mod overlay;
mod status_line;

pub use overlay::PlayerOverlay;
