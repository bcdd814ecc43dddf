//! Playback state machine
//!
//! [`Player`] owns the audio output, the playlist session and the overlay
//! status line. It is only touched from the UI loop (key handlers, file-open
//! handling and the poll tick all run there), so it needs no locking.
//!
//! States:
//! - Idle: no playlist has been opened
//! - Playing(index, position)
//! - Paused(index, position)

use std::path::Path;

use crate::audio::AudioOutput;
use crate::core::poller::{should_auto_advance, OutputSnapshot};
use crate::core::{PlayerCommand, PlayerError, PlayerSettings, Playlist};

/// Glyph shown while playing (the action a space press will take)
pub const PAUSE_GLYPH: &str = "⏸";
/// Glyph shown while paused
pub const PLAY_GLYPH: &str = "▶";

/// Observable playback state
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlaybackStatus {
    Idle,
    Playing { index: usize, position: f64 },
    Paused { index: usize, position: f64 },
}

/// The opened folder's playlist plus the playback position within it
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub playlist: Playlist,
    /// Always a valid index into `playlist`
    pub current_index: usize,
    /// Position in seconds as of the last load or pause
    pub current_position: f64,
    pub is_paused: bool,
}

impl Session {
    fn current_name(&self) -> &str {
        self.playlist.name(self.current_index).unwrap_or_default()
    }
}

/// What a poll tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Nothing changed
    Idle,
    /// The output reported a natural finish and the next track was loaded
    NaturalFinish,
    /// The position check detected the end and the next track was loaded
    AutoAdvance,
}

/// Playback state machine over an [`AudioOutput`]
pub struct Player<O: AudioOutput> {
    output: O,
    settings: PlayerSettings,
    session: Option<Session>,
    status_line: String,
}

impl<O: AudioOutput> Player<O> {
    pub fn new(output: O, settings: PlayerSettings) -> Self {
        let status_line = settings.idle_prompt.to_string();
        Self {
            output,
            settings,
            session: None,
            status_line,
        }
    }

    pub fn settings(&self) -> &PlayerSettings {
        &self.settings
    }

    #[cfg(test)]
    pub fn output(&self) -> &O {
        &self.output
    }

    #[cfg(test)]
    pub fn output_mut(&mut self) -> &mut O {
        &mut self.output
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// The one-line text the overlay should display
    pub fn status_line(&self) -> &str {
        &self.status_line
    }

    pub fn status(&self) -> PlaybackStatus {
        match &self.session {
            None => PlaybackStatus::Idle,
            Some(s) if s.is_paused => PlaybackStatus::Paused {
                index: s.current_index,
                position: s.current_position,
            },
            Some(s) => PlaybackStatus::Playing {
                index: s.current_index,
                position: s.current_position,
            },
        }
    }

    /// Handle an open-file event: resolve the folder's playlist and play `path`
    ///
    /// On failure the previous session (if any) is kept.
    pub fn open_file(&mut self, path: &Path) -> Result<(), PlayerError> {
        let (playlist, index) = Playlist::resolve(path)?;
        let index = load_track(&mut self.output, &playlist, index, 0.0)?;

        let session = Session {
            playlist,
            current_index: index,
            current_position: 0.0,
            is_paused: false,
        };
        self.status_line = format!("{} {}", PAUSE_GLYPH, session.current_name());
        self.session = Some(session);
        Ok(())
    }

    /// Load track `index` (wrapped to the playlist length) and play from `start`
    ///
    /// If the output cannot open the track, the session keeps its previous
    /// index and position.
    pub fn load(&mut self, index: usize, start: f64) -> Result<(), PlayerError> {
        let session = self.session.as_mut().ok_or(PlayerError::NoActiveTrack)?;
        let index = load_track(&mut self.output, &session.playlist, index, start)?;

        session.current_index = index;
        session.current_position = start;
        session.is_paused = false;
        self.status_line = format!("{} {}", PAUSE_GLYPH, session.current_name());
        Ok(())
    }

    pub fn toggle_pause(&mut self) -> Result<(), PlayerError> {
        let position = self.playback_position();
        let session = self.session.as_mut().ok_or(PlayerError::NoActiveTrack)?;

        if session.is_paused {
            self.output.play();
            session.is_paused = false;
            self.status_line = format!("{} {}", PAUSE_GLYPH, session.current_name());
        } else {
            session.current_position = position;
            self.output.pause();
            session.is_paused = true;
            self.status_line = format!("{} {}", PLAY_GLYPH, session.current_name());
        }
        Ok(())
    }

    pub fn restart(&mut self) -> Result<(), PlayerError> {
        let index = self.current_index()?;
        self.load(index, 0.0)
    }

    /// Reload the current track `skip_seconds` earlier, clamped at 0
    pub fn skip_back(&mut self) -> Result<(), PlayerError> {
        let index = self.current_index()?;
        let position = (self.playback_position() - self.settings.skip_seconds).max(0.0);
        self.load(index, position)
    }

    /// Reload the current track `skip_seconds` later
    ///
    /// Not clamped to the track length; the output decides what seeking past
    /// the end means.
    pub fn skip_forward(&mut self) -> Result<(), PlayerError> {
        let index = self.current_index()?;
        let position = self.playback_position() + self.settings.skip_seconds;
        self.load(index, position)
    }

    /// Previous track from its start, stopping at the first track
    pub fn prev_track(&mut self) -> Result<(), PlayerError> {
        let index = self.current_index()?;
        self.load(index.saturating_sub(1), 0.0)
    }

    /// Next track from its start, stopping at the last track
    pub fn next_track(&mut self) -> Result<(), PlayerError> {
        let session = self.session.as_ref().ok_or(PlayerError::NoActiveTrack)?;
        let last = session.playlist.last_index().ok_or(PlayerError::NoActiveTrack)?;
        let index = (session.current_index + 1).min(last);
        self.load(index, 0.0)
    }

    pub fn apply(&mut self, command: PlayerCommand) -> Result<(), PlayerError> {
        match command {
            PlayerCommand::TogglePause => self.toggle_pause(),
            PlayerCommand::Restart => self.restart(),
            PlayerCommand::SkipBack => self.skip_back(),
            PlayerCommand::SkipForward => self.skip_forward(),
            PlayerCommand::PrevTrack => self.prev_track(),
            PlayerCommand::NextTrack => self.next_track(),
        }
    }

    /// Handle the output's end-of-track report
    ///
    /// Returns true if the next track was loaded.
    pub fn on_natural_finish(&mut self, success: bool) -> Result<bool, PlayerError> {
        let advance = success && self.session.as_ref().is_some_and(|s| !s.is_paused);
        if advance {
            self.next_track()?;
        }
        Ok(advance)
    }

    /// One auto-advance poll
    ///
    /// A natural finish reported by the output wins; the position check only
    /// runs when there was none, so a single track end advances once.
    pub fn tick(&mut self) -> Result<TickOutcome, PlayerError> {
        let Some(session) = &self.session else {
            return Ok(TickOutcome::Idle);
        };
        let is_paused = session.is_paused;

        if let Some(success) = self.output.take_finished() {
            return Ok(if self.on_natural_finish(success)? {
                TickOutcome::NaturalFinish
            } else {
                TickOutcome::Idle
            });
        }

        let snapshot = OutputSnapshot {
            is_playing: self.output.is_playing(),
            position: self.output.position(),
            duration: self.output.duration(),
        };
        if should_auto_advance(&snapshot, is_paused, self.settings.end_tolerance) {
            self.next_track()?;
            return Ok(TickOutcome::AutoAdvance);
        }

        Ok(TickOutcome::Idle)
    }

    /// Stop playback and release the output handle
    pub fn shutdown(&mut self) {
        self.output.release();
        self.session = None;
    }

    /// Position of the loaded track, or the session's last known position
    /// when a failed load left no track behind
    fn playback_position(&self) -> f64 {
        match &self.session {
            Some(session) if !self.output.has_track() => session.current_position,
            _ => self.output.position(),
        }
    }

    fn current_index(&self) -> Result<usize, PlayerError> {
        self.session
            .as_ref()
            .map(|s| s.current_index)
            .ok_or(PlayerError::NoActiveTrack)
    }
}

/// Release the old handle, then load, seek and start `playlist[index]`
///
/// Returns the wrapped index that was loaded.
fn load_track<O: AudioOutput>(
    output: &mut O,
    playlist: &Playlist,
    index: usize,
    start: f64,
) -> Result<usize, PlayerError> {
    if playlist.is_empty() {
        return Err(PlayerError::NoActiveTrack);
    }
    let index = index % playlist.len();
    let path = playlist.path_of(index).ok_or(PlayerError::NoActiveTrack)?;

    output.release();
    output.load(&path)?;
    output.seek(start);
    output.play();

    log::info!("Playing #{} {} from {:.1}s", index, path.display(), start);
    Ok(index)
}
