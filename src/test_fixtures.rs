//! Test fixtures for player tests
//!
//! Provides a scripted audio output that records every call the state
//! machine makes, plus helpers for building playlist folders on disk.

#![cfg(test)]

use std::collections::HashSet;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::audio::AudioOutput;
use crate::core::PlayerError;

/// Create empty files named `names` inside `dir`
pub fn create_folder(dir: &Path, names: &[&str]) {
    for name in names {
        let mut file = File::create(dir.join(name)).expect("Failed to create fixture file");
        file.write_all(b"fixture").expect("Failed to write fixture file");
    }
}

/// One call made on a [`FakeOutput`]
#[derive(Debug, Clone, PartialEq)]
pub enum OutputCall {
    Release,
    Load(PathBuf),
    Seek(f64),
    Play,
    Pause,
}

/// Audio output double with scriptable position, duration and failures
#[derive(Debug, Default)]
pub struct FakeOutput {
    pub calls: Vec<OutputCall>,
    pub loaded: Option<PathBuf>,
    pub position: f64,
    /// Duration reported for every loaded track
    pub track_duration: Option<f64>,
    pub playing: bool,
    /// Value handed out by the next `take_finished`
    pub finished: Option<bool>,
    /// Paths whose load fails with `EngineLoad`
    pub failing: HashSet<PathBuf>,
}

impl FakeOutput {
    pub fn new() -> Self {
        Self {
            track_duration: Some(180.0),
            ..Default::default()
        }
    }

    /// Number of `load` calls recorded so far
    pub fn load_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, OutputCall::Load(_)))
            .count()
    }

    /// File name of the currently loaded track
    pub fn loaded_name(&self) -> Option<String> {
        self.loaded
            .as_ref()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().to_string())
    }

    /// Simulate the track reaching its end on its own
    pub fn finish_track(&mut self) {
        self.playing = false;
        self.position = self.track_duration.unwrap_or(0.0);
        self.finished = Some(true);
    }
}

impl AudioOutput for FakeOutput {
    fn release(&mut self) {
        self.calls.push(OutputCall::Release);
        self.loaded = None;
        self.playing = false;
        self.position = 0.0;
        self.finished = None;
    }

    fn load(&mut self, path: &Path) -> Result<(), PlayerError> {
        self.calls.push(OutputCall::Load(path.to_path_buf()));
        if self.failing.contains(path) {
            return Err(PlayerError::EngineLoad {
                path: path.to_path_buf(),
                reason: "scripted failure".to_string(),
            });
        }
        self.loaded = Some(path.to_path_buf());
        self.position = 0.0;
        Ok(())
    }

    fn seek(&mut self, position: f64) {
        self.calls.push(OutputCall::Seek(position));
        if self.loaded.is_some() {
            self.position = position;
        }
    }

    fn play(&mut self) {
        self.calls.push(OutputCall::Play);
        self.playing = self.loaded.is_some();
    }

    fn pause(&mut self) {
        self.calls.push(OutputCall::Pause);
        self.playing = false;
    }

    fn has_track(&self) -> bool {
        self.loaded.is_some()
    }

    fn position(&self) -> f64 {
        self.position
    }

    fn duration(&self) -> Option<f64> {
        self.loaded.as_ref().and(self.track_duration)
    }

    fn is_playing(&self) -> bool {
        self.playing
    }

    fn take_finished(&mut self) -> Option<bool> {
        self.finished.take()
    }
}
