use async_trait::async_trait;
use serde::Serialize;

/// What the user asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRequest {
    pub song: String,
    pub artist: Option<String>,
}

impl LookupRequest {
    pub fn new<S: Into<String>>(song: S, artist: Option<S>) -> Self {
        Self {
            song: song.into(),
            artist: artist
                .map(Into::into)
                .map(|artist: String| artist.trim().to_string())
                .filter(|artist| !artist.is_empty()),
        }
    }

    /// Free-text query sent to the provider search endpoint.
    pub fn search_query(&self) -> String {
        match &self.artist {
            Some(artist) => format!("{} {}", self.song, artist).trim().to_string(),
            None => self.song.trim().to_string(),
        }
    }
}

/// Raw lyrics and the song metadata they were found under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FoundLyrics {
    pub title: String,
    pub artist: String,
    pub url: String,
    pub text: String,
}

/// Result of a single lookup. Failures carry a human-readable message only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    Found(FoundLyrics),
    NotFound,
    Failed(String),
}

impl LookupOutcome {
    pub fn label(&self) -> &'static str {
        match self {
            LookupOutcome::Found(_) => "found",
            LookupOutcome::NotFound => "not-found",
            LookupOutcome::Failed(_) => "failed",
        }
    }
}

#[async_trait]
pub trait LyricsSource: Send + Sync {
    async fn lookup(&self, request: &LookupRequest) -> LookupOutcome;
}
