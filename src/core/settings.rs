//! Player tunables
//!
//! There is no settings file; these are compiled-in defaults that the
//! application registers as a GPUI global and tests override directly.

use gpui::Global;
use std::time::Duration;

/// Prompt shown before any file has been opened
pub const IDLE_PROMPT: &str = "Drop MP3 onto app icon or use 'Open With'...";

/// Timing and layout parameters for the overlay player
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerSettings {
    /// Seconds moved by skip back / skip forward
    pub skip_seconds: f64,
    /// Period of the auto-advance poll
    pub poll_interval: Duration,
    /// A stopped track within this many seconds of its end counts as finished
    pub end_tolerance: f64,
    /// Overlay width in logical pixels
    pub overlay_width: f32,
    /// Overlay height in logical pixels
    pub overlay_height: f32,
    /// Distance between the top of the primary display and the overlay
    pub overlay_top_margin: f32,
    /// Status text size
    pub font_size: f32,
    /// Status text font (monospaced)
    pub font_family: &'static str,
    pub idle_prompt: &'static str,
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self {
            skip_seconds: 3.0,
            poll_interval: Duration::from_millis(100),
            end_tolerance: 0.1,
            overlay_width: 450.0,
            overlay_height: 30.0,
            overlay_top_margin: 30.0,
            font_size: 16.0,
            font_family: "Menlo",
            idle_prompt: IDLE_PROMPT,
        }
    }
}

impl Global for PlayerSettings {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = PlayerSettings::default();
        assert_eq!(settings.skip_seconds, 3.0);
        assert_eq!(settings.poll_interval, Duration::from_millis(100));
        assert_eq!(settings.end_tolerance, 0.1);
        assert_eq!((settings.overlay_width, settings.overlay_height), (450.0, 30.0));
        assert_eq!(settings.idle_prompt, IDLE_PROMPT);
    }
}
