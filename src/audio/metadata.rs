use std::fs::File;
use std::path::Path;
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;

/// Probe the length of an audio file in seconds
///
/// Returns None when the container does not declare a frame count (common
/// for VBR MP3s without a Xing header) or the file cannot be probed.
pub fn probe_duration(path: &Path) -> Option<f64> {
    let file = File::open(path).ok()?;
    let mss = MediaSourceStream::new(Box::new(file), Default::default());

    let mut hint = Hint::new();
    if let Some(ext) = path.extension() {
        hint.with_extension(&ext.to_string_lossy());
    }

    let probed = symphonia::default::get_probe()
        .format(&hint, mss, &FormatOptions::default(), &MetadataOptions::default())
        .map_err(|e| log::debug!("Could not probe {}: {}", path.display(), e))
        .ok()?;

    let track = probed.format.default_track()?;
    let sample_rate = track.codec_params.sample_rate? as f64;
    let n_frames = track.codec_params.n_frames?;

    if sample_rate <= 0.0 {
        return None;
    }
    Some(n_frames as f64 / sample_rate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_probe_missing_file() {
        assert_eq!(probe_duration(Path::new("/nonexistent/song.mp3")), None);
    }

    #[test]
    fn test_probe_garbage_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("garbage.mp3");
        std::fs::write(&path, b"definitely not an mpeg stream").unwrap();
        assert_eq!(probe_duration(&path), None);
    }
}
