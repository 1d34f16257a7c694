use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Centralized spinner creation utilities
pub struct ProgressUtils;

impl ProgressUtils {
    /// Spinner shown while a lyrics lookup is in flight
    pub fn create_lookup_spinner(message: String) -> ProgressBar {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} [{elapsed_precise}] {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.set_message(message);
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    }

    /// A spinner that never draws, for quiet and JSON output
    pub fn create_hidden() -> ProgressBar {
        ProgressBar::hidden()
    }
}

/// Common spinner messages
pub struct ProgressMessages;

impl ProgressMessages {
    pub fn searching_for(song: &str, artist: Option<&str>) -> String {
        match artist {
            Some(artist) => format!("🔍 Searching: {} - {}", artist, song),
            None => format!("🔍 Searching: {}", song),
        }
    }
}
