//! Audio output engine
//!
//! The player drives audio through the [`AudioOutput`] trait so the state
//! machine can be exercised without a sound device. [`RodioOutput`] is the
//! real implementation: one output stream for the life of the app and one
//! `Sink` per loaded track.
//!
//! All methods are called from the UI loop. Decoding and mixing happen on
//! rodio's own audio thread and are opaque to the caller.

use rodio::{Decoder, OutputStream, OutputStreamBuilder, Sink, Source};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Duration;

use super::metadata::probe_duration;
use crate::core::PlayerError;

/// Operations the playback state machine needs from an audio backend
///
/// At most one track handle exists at a time. `load` acquires a new one
/// and `release` drops it; callers release before loading.
pub trait AudioOutput {
    /// Drop the current track handle, stopping its output
    fn release(&mut self);

    /// Open `path` as the current track, paused at position 0
    fn load(&mut self, path: &Path) -> Result<(), PlayerError>;

    /// Move the current track to `position` seconds
    fn seek(&mut self, position: f64);

    fn play(&mut self);

    fn pause(&mut self);

    /// True while a track handle is held
    fn has_track(&self) -> bool;

    /// Current position in seconds (0 when nothing is loaded)
    fn position(&self) -> f64;

    /// Length of the current track in seconds, if known
    fn duration(&self) -> Option<f64>;

    /// True while the current track is producing audio
    fn is_playing(&self) -> bool;

    /// Report a natural end of the current track, once per handle
    ///
    /// `Some(true)` means the track played through to its end.
    fn take_finished(&mut self) -> Option<bool>;
}

/// How to handle a seek the decoder refused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SeekFailure {
    /// The target is at or past the end: stop so the finish is reported
    StopAtEnd,
    /// Leave the track playing where the decoder is
    KeepPlaying,
}

/// Seek offset for `position`, None when no seek is needed
fn seek_target(position: f64) -> Option<Duration> {
    if !position.is_finite() || position <= 0.0 {
        return None;
    }
    Some(Duration::from_secs_f64(position))
}

fn on_seek_failure(position: f64, duration: Option<f64>) -> SeekFailure {
    match duration {
        Some(duration) if position >= duration => SeekFailure::StopAtEnd,
        _ => SeekFailure::KeepPlaying,
    }
}

/// One loaded track
struct TrackHandle {
    sink: Sink,
    duration: Option<f64>,
    finish_reported: bool,
}

/// [`AudioOutput`] backed by rodio on the default output device
pub struct RodioOutput {
    /// Opened lazily on the first load so the app starts without a device
    stream: Option<OutputStream>,
    track: Option<TrackHandle>,
}

impl RodioOutput {
    pub fn new() -> Self {
        Self {
            stream: None,
            track: None,
        }
    }

    fn ensure_stream(&mut self) -> Result<&OutputStream, String> {
        if self.stream.is_none() {
            let mut stream = OutputStreamBuilder::open_default_stream()
                .map_err(|e| format!("No audio output device: {}", e))?;
            stream.log_on_drop(false);
            log::info!("Opened default audio output stream");
            self.stream = Some(stream);
        }
        self.stream
            .as_ref()
            .ok_or_else(|| "Audio output stream unavailable".to_string())
    }
}

impl Default for RodioOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioOutput for RodioOutput {
    fn release(&mut self) {
        if let Some(track) = self.track.take() {
            track.sink.stop();
        }
    }

    fn load(&mut self, path: &Path) -> Result<(), PlayerError> {
        self.release();

        let load_error = |reason: String| PlayerError::EngineLoad {
            path: path.to_path_buf(),
            reason,
        };

        let file = File::open(path).map_err(|e| load_error(e.to_string()))?;
        let byte_len = file.metadata().map(|m| m.len()).ok();

        let mut builder = Decoder::builder()
            .with_data(BufReader::new(file))
            .with_hint("mp3")
            .with_seekable(true);
        if let Some(len) = byte_len {
            builder = builder.with_byte_len(len);
        }
        let source = builder.build().map_err(|e| load_error(e.to_string()))?;

        let duration = source
            .total_duration()
            .map(|d| d.as_secs_f64())
            .or_else(|| probe_duration(path));

        let sink = {
            let stream = self.ensure_stream().map_err(load_error)?;
            Sink::connect_new(stream.mixer())
        };
        sink.pause();
        sink.append(source);

        log::debug!("Loaded {} (duration {:?})", path.display(), duration);

        self.track = Some(TrackHandle {
            sink,
            duration,
            finish_reported: false,
        });
        Ok(())
    }

    fn seek(&mut self, position: f64) {
        let Some(track) = &self.track else {
            return;
        };
        let Some(target) = seek_target(position) else {
            return;
        };

        if let Err(e) = track.sink.try_seek(target) {
            match on_seek_failure(position, track.duration) {
                SeekFailure::StopAtEnd => {
                    log::debug!("Seek to {:.1}s is past the end, stopping", position);
                    track.sink.stop();
                }
                SeekFailure::KeepPlaying => log::warn!("Seek to {:.1}s failed: {}", position, e),
            }
        }
    }

    fn play(&mut self) {
        if let Some(track) = &self.track {
            track.sink.play();
        }
    }

    fn pause(&mut self) {
        if let Some(track) = &self.track {
            track.sink.pause();
        }
    }

    fn has_track(&self) -> bool {
        self.track.is_some()
    }

    fn position(&self) -> f64 {
        self.track
            .as_ref()
            .map(|t| t.sink.get_pos().as_secs_f64())
            .unwrap_or(0.0)
    }

    fn duration(&self) -> Option<f64> {
        self.track.as_ref().and_then(|t| t.duration)
    }

    fn is_playing(&self) -> bool {
        self.track
            .as_ref()
            .map(|t| !t.sink.is_paused() && !t.sink.empty())
            .unwrap_or(false)
    }

    fn take_finished(&mut self) -> Option<bool> {
        let track = self.track.as_mut()?;
        if track.finish_reported || track.sink.is_paused() || !track.sink.empty() {
            return None;
        }
        track.finish_reported = true;
        Some(true)
    }
}
