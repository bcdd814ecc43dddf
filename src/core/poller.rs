//! Auto-advance detection
//!
//! The output's own end-of-track signal can be missed right at the track
//! boundary, so the player also polls: a stopped, unpaused track whose
//! position is within the end tolerance of its duration counts as finished.

/// What the audio output reported at one poll tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutputSnapshot {
    pub is_playing: bool,
    /// Current position in seconds
    pub position: f64,
    /// Track length in seconds, if known
    pub duration: Option<f64>,
}

/// Decide whether the current track should advance on this tick
pub fn should_auto_advance(snapshot: &OutputSnapshot, is_paused: bool, end_tolerance: f64) -> bool {
    if snapshot.is_playing || is_paused {
        return false;
    }
    match snapshot.duration {
        Some(duration) => snapshot.position >= duration - end_tolerance,
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(is_playing: bool, position: f64, duration: Option<f64>) -> OutputSnapshot {
        OutputSnapshot {
            is_playing,
            position,
            duration,
        }
    }

    #[test]
    fn test_stopped_at_end_advances() {
        assert!(should_auto_advance(&snapshot(false, 180.0, Some(180.0)), false, 0.1));
        assert!(should_auto_advance(&snapshot(false, 179.95, Some(180.0)), false, 0.1));
    }

    #[test]
    fn test_paused_never_advances() {
        assert!(!should_auto_advance(&snapshot(false, 180.0, Some(180.0)), true, 0.1));
    }

    #[test]
    fn test_playing_never_advances() {
        assert!(!should_auto_advance(&snapshot(true, 180.0, Some(180.0)), false, 0.1));
    }

    #[test]
    fn test_stopped_mid_track_does_not_advance() {
        assert!(!should_auto_advance(&snapshot(false, 42.0, Some(180.0)), false, 0.1));
    }

    #[test]
    fn test_unknown_duration_does_not_advance() {
        assert!(!should_auto_advance(&snapshot(false, 180.0, None), false, 0.1));
    }
}
