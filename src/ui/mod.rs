//! UI module - GPUI views and components
//!
//! This module contains all UI-related code:
//! - `components/` - the overlay view and its status line
//! - `theme` - overlay colors

pub mod components;
pub mod theme;

pub use theme::Theme;
