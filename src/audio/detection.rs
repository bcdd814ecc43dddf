use std::path::Path;

/// Extension accepted into a playlist (compared case-insensitively)
pub const MP3_EXTENSION: &str = ".mp3";

/// Check if a file name ends with `.mp3`, ignoring case
pub fn is_mp3_name(name: &str) -> bool {
    name.to_lowercase().ends_with(MP3_EXTENSION)
}

/// Check if a path's final component names an MP3 file
pub fn is_mp3_file(path: &Path) -> bool {
    path.file_name()
        .map(|n| is_mp3_name(&n.to_string_lossy()))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recognizes_mp3_any_case() {
        assert!(is_mp3_file(Path::new("song.mp3")));
        assert!(is_mp3_file(Path::new("SONG.MP3")));
        assert!(is_mp3_file(Path::new("/music/Mixed.Mp3")));
    }

    #[test]
    fn test_rejects_other_formats() {
        assert!(!is_mp3_file(Path::new("song.flac")));
        assert!(!is_mp3_file(Path::new("song.mp3.txt")));
        assert!(!is_mp3_file(Path::new("mp3")));
        assert!(!is_mp3_file(Path::new("/")));
    }
}
