//! Application-wide actions
//!
//! Actions that can be triggered from menus or keyboard shortcuts, and the
//! queue that hands OS open-file events over to the overlay.

use gpui::actions;
use std::path::PathBuf;
use std::sync::Mutex;

actions!(player, [Quit, ShowLogs]);

/// Static storage for files opened via Finder ("Open With", dock drops)
///
/// macOS delivers these outside of any view, so the path is stored here
/// and the overlay drains it on its poll tick.
pub static PENDING_OPEN_FILES: Mutex<Vec<PathBuf>> = Mutex::new(Vec::new());

/// Add a path to be opened (called from the on_open_urls callback)
pub fn push_pending_file(path: PathBuf) {
    if let Ok(mut paths) = PENDING_OPEN_FILES.lock() {
        paths.push(path);
    }
}

/// Take all pending paths (clears the queue)
pub fn take_pending_files() -> Vec<PathBuf> {
    if let Ok(mut paths) = PENDING_OPEN_FILES.lock() {
        std::mem::take(&mut *paths)
    } else {
        Vec::new()
    }
}

/// Convert a `file://` URL from the OS into a filesystem path
///
/// Returns None for other schemes or undecodable URLs.
pub fn path_from_url(url: &str) -> Option<PathBuf> {
    let encoded = url.strip_prefix("file://")?;
    // Some senders include a host ("file://localhost/...")
    let encoded = encoded.strip_prefix("localhost").unwrap_or(encoded);
    let decoded = urlencoding::decode(encoded).ok()?;
    if decoded.is_empty() {
        return None;
    }
    Some(PathBuf::from(decoded.into_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_from_url_decodes_spaces() {
        assert_eq!(
            path_from_url("file:///Users/me/Music/My%20Album/01%20Intro.mp3"),
            Some(PathBuf::from("/Users/me/Music/My Album/01 Intro.mp3"))
        );
    }

    #[test]
    fn test_path_from_url_with_localhost() {
        assert_eq!(
            path_from_url("file://localhost/tmp/song.mp3"),
            Some(PathBuf::from("/tmp/song.mp3"))
        );
    }

    #[test]
    fn test_path_from_url_rejects_other_schemes() {
        assert_eq!(path_from_url("https://example.com/song.mp3"), None);
        assert_eq!(path_from_url("file://"), None);
    }

    #[test]
    fn test_pending_queue_drains() {
        push_pending_file(PathBuf::from("/music/one.mp3"));
        push_pending_file(PathBuf::from("/music/two.mp3"));

        let taken = take_pending_files();
        assert!(taken.contains(&PathBuf::from("/music/one.mp3")));
        assert!(taken.contains(&PathBuf::from("/music/two.mp3")));
        assert!(!take_pending_files().contains(&PathBuf::from("/music/one.mp3")));
    }
}
