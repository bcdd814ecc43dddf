//! Theme module - overlay colors
//!
//! The overlay is always black with white text, regardless of the OS
//! light/dark appearance.

use gpui::{Hsla, rgb};

/// Color scheme for the overlay
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// Window background
    pub bg: Hsla,
    /// Status text color
    pub text: Hsla,
    /// Background while files are dragged over the overlay
    pub drop_highlight: Hsla,
}

impl Theme {
    pub fn overlay() -> Self {
        Self {
            bg: rgb(0x000000).into(),
            text: rgb(0xffffff).into(),
            drop_highlight: rgb(0x2d2d2d).into(),
        }
    }
}
