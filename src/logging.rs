//! Logging configuration for MP3 Player
//!
//! Logs are written to both the terminal and a file at:
//! `~/Library/Logs/MP3-Player/mp3-player.log`

use log::LevelFilter;
use simplelog::{
    ColorChoice, CombinedLogger, Config, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

const LOG_FILE_NAME: &str = "mp3-player.log";
/// Rotate the log once it grows past this many bytes
const MAX_LOG_SIZE: u64 = 10 * 1024 * 1024;

/// Get the log directory path
/// On macOS: ~/Library/Logs/MP3-Player/
pub fn get_log_directory() -> Option<PathBuf> {
    if cfg!(target_os = "macos") {
        dirs::home_dir().map(|h| h.join("Library").join("Logs").join("MP3-Player"))
    } else {
        // Fallback for other platforms
        dirs::data_local_dir().map(|d| d.join("MP3-Player").join("logs"))
    }
}

/// Get the current log file path
pub fn get_log_file_path() -> Option<PathBuf> {
    get_log_directory().map(|d| d.join(LOG_FILE_NAME))
}

/// Move an oversized log aside so each session starts small
fn rotate_if_large(log_path: &Path) {
    if let Ok(metadata) = fs::metadata(log_path)
        && metadata.len() > MAX_LOG_SIZE
    {
        let _ = fs::rename(log_path, log_path.with_extension("log.old"));
    }
}

fn log_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_thread_level(LevelFilter::Off) // no thread IDs
        .set_target_level(LevelFilter::Off) // no module paths
        .build()
}

/// Initialize the logging system
///
/// Sets up combined logging to:
/// - Terminal (info and above, for development)
/// - File (debug and above, for bug reports)
///
/// Returns the path to the log file on success.
pub fn init_logging() -> Option<PathBuf> {
    let Some(log_path) = get_log_file_path() else {
        eprintln!("Warning: Could not determine log directory");
        init_terminal_only();
        return None;
    };

    // Create log directory if it doesn't exist
    if let Some(log_dir) = log_path.parent()
        && let Err(e) = fs::create_dir_all(log_dir)
    {
        eprintln!("Warning: Could not create log directory: {}", e);
        init_terminal_only();
        return None;
    }

    rotate_if_large(&log_path);

    // Append to the previous sessions' log
    let log_file = match OpenOptions::new().create(true).append(true).open(&log_path) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Warning: Could not open log file: {}", e);
            init_terminal_only();
            return None;
        }
    };

    let config = log_config();
    let loggers: Vec<Box<dyn SharedLogger>> = vec![
        // Terminal: info and above
        TermLogger::new(LevelFilter::Info, config.clone(), TerminalMode::Mixed, ColorChoice::Auto),
        // File: debug and above, includes every key press and load
        WriteLogger::new(LevelFilter::Debug, config, log_file),
    ];

    if CombinedLogger::init(loggers).is_err() {
        eprintln!("Warning: Logger already initialized");
    }

    // Session start marker
    log::info!("=== MP3 Player session started ===");
    log::info!("Log file: {}", log_path.display());

    Some(log_path)
}

/// Initialize terminal-only logging (fallback if file logging fails)
fn init_terminal_only() {
    let term_logger = TermLogger::new(LevelFilter::Info, log_config(), TerminalMode::Mixed, ColorChoice::Auto);
    let _ = CombinedLogger::init(vec![term_logger]);
}

/// Open the log directory in Finder (bound to "Show Logs")
pub fn open_log_directory() -> Result<(), String> {
    let log_dir = get_log_directory().ok_or("Could not determine log directory")?;
    if !log_dir.exists() {
        return Err("Log directory does not exist".to_string());
    }
    std::process::Command::new("open")
        .arg(&log_dir)
        .spawn()
        .map_err(|e| format!("Failed to open log directory: {}", e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_log_file_path_is_inside_log_directory() {
        let dir = get_log_directory().unwrap();
        let file = get_log_file_path().unwrap();

        assert!(dir.to_string_lossy().contains("MP3-Player"));
        assert!(file.starts_with(&dir));
        assert!(file.to_string_lossy().ends_with(LOG_FILE_NAME));
    }

    #[test]
    fn test_rotate_moves_large_log() {
        let temp_dir = TempDir::new().unwrap();
        let log_path = temp_dir.path().join(LOG_FILE_NAME);
        let file = fs::File::create(&log_path).unwrap();
        file.set_len(MAX_LOG_SIZE + 1).unwrap();

        rotate_if_large(&log_path);
        assert!(!log_path.exists());
        assert!(temp_dir.path().join("mp3-player.log.old").exists());
    }

    #[test]
    fn test_rotate_keeps_small_log() {
        let temp_dir = TempDir::new().unwrap();
        let log_path = temp_dir.path().join(LOG_FILE_NAME);
        fs::write(&log_path, "short").unwrap();

        rotate_if_large(&log_path);
        assert!(log_path.exists());
    }
}
