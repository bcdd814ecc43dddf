// Audio module - MP3 detection, duration probing and the output engine

pub mod detection;
pub mod engine;
pub mod metadata;

pub use detection::{is_mp3_file, is_mp3_name};
pub use engine::{AudioOutput, RodioOutput};
