//! Playlist resolution
//!
//! Builds the ordered track list for the folder containing an opened file.
//! The folder is listed once at open time; later changes on disk are not
//! picked up until another file is opened.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::audio::{is_mp3_file, is_mp3_name};
use crate::core::PlayerError;

/// Ordered MP3 file names from one directory snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playlist {
    folder: PathBuf,
    tracks: Vec<String>,
}

impl Playlist {
    /// Resolve the playlist around `path` and locate `path` in it
    ///
    /// Returns the playlist and the index of the opened file.
    pub fn resolve(path: &Path) -> Result<(Self, usize), PlayerError> {
        if !path.exists() {
            return Err(PlayerError::FileNotFound(path.to_path_buf()));
        }
        if path.is_dir() || !is_mp3_file(path) {
            return Err(PlayerError::FileNotInPlaylist(path.to_path_buf()));
        }

        let folder = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };

        let playlist = Self::scan(&folder)?;

        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| PlayerError::FileNotInPlaylist(path.to_path_buf()))?;

        let index = playlist
            .index_of(file_name)
            .ok_or_else(|| PlayerError::FileNotInPlaylist(path.to_path_buf()))?;

        log::info!(
            "Resolved playlist in {}: {} tracks, opened #{}",
            playlist.folder.display(),
            playlist.len(),
            index
        );

        log::debug!("Tracks: {:?}", playlist.tracks());

        Ok((playlist, index))
    }

    /// List the MP3 entries directly inside `folder`, sorted by name
    pub fn scan(folder: &Path) -> Result<Self, PlayerError> {
        let mut tracks = Vec::new();

        for entry in WalkDir::new(folder)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
        {
            let entry = match entry {
                Ok(entry) => entry,
                // Only the folder itself being unreadable is fatal
                Err(e) if e.depth() == 0 => {
                    return Err(PlayerError::DirectoryRead {
                        path: folder.to_path_buf(),
                        reason: e.to_string(),
                    });
                }
                Err(e) => {
                    log::debug!("Skipping unreadable entry: {}", e);
                    continue;
                }
            };

            if entry.file_type().is_dir() {
                continue;
            }

            match entry.file_name().to_str() {
                Some(name) if is_mp3_name(name) => tracks.push(name.to_string()),
                Some(_) => {}
                None => log::debug!("Skipping non UTF-8 file name: {:?}", entry.file_name()),
            }
        }

        // Byte-wise ordering, independent of locale
        tracks.sort();

        Ok(Self {
            folder: folder.to_path_buf(),
            tracks,
        })
    }

    pub fn folder(&self) -> &Path {
        &self.folder
    }

    pub fn tracks(&self) -> &[String] {
        &self.tracks
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Index of the last track, None when empty
    pub fn last_index(&self) -> Option<usize> {
        self.tracks.len().checked_sub(1)
    }

    pub fn name(&self, index: usize) -> Option<&str> {
        self.tracks.get(index).map(String::as_str)
    }

    /// Full path of the track at `index`
    pub fn path_of(&self, index: usize) -> Option<PathBuf> {
        self.name(index).map(|name| self.folder.join(name))
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.tracks.iter().position(|t| t == name)
    }
}
