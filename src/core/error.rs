//! Error types for playlist resolution and playback control

use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong while opening files or driving playback.
///
/// None of these are fatal to the process; the caller decides what to do
/// (the only exit path is a missing file passed on the command line).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PlayerError {
    /// The open-file target does not exist
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// The opened file is not part of its folder's MP3 listing
    #[error("MP3 not in folder: {}", .0.display())]
    FileNotInPlaylist(PathBuf),

    /// The containing directory could not be listed
    #[error("Could not read directory {}: {reason}", path.display())]
    DirectoryRead { path: PathBuf, reason: String },

    /// The audio output could not open a playlist entry
    #[error("Error loading {}: {reason}", path.display())]
    EngineLoad { path: PathBuf, reason: String },

    /// A transport command arrived with nothing loaded
    #[error("No active track")]
    NoActiveTrack,
}

impl PlayerError {
    /// Whether this error is routine enough to log at debug level
    pub fn is_benign(&self) -> bool {
        matches!(self, PlayerError::NoActiveTrack)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_include_path() {
        let err = PlayerError::FileNotFound(PathBuf::from("/music/missing.mp3"));
        assert_eq!(err.to_string(), "File not found: /music/missing.mp3");

        let err = PlayerError::EngineLoad {
            path: PathBuf::from("/music/bad.mp3"),
            reason: "corrupt frame".to_string(),
        };
        assert!(err.to_string().contains("bad.mp3"));
        assert!(err.to_string().contains("corrupt frame"));
    }

    #[test]
    fn test_only_no_active_track_is_benign() {
        assert!(PlayerError::NoActiveTrack.is_benign());
        assert!(!PlayerError::FileNotInPlaylist(PathBuf::from("a.txt")).is_benign());
    }
}
