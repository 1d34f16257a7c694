use rand::Rng;
use serde::Serialize;
use tracing::{debug, info};

use crate::core::services::{FoundLyrics, LookupOutcome, LookupRequest, LyricsSource};
use crate::core::text::{mask_words, normalize, ExclusionSet, MaskMode};
use crate::error::LyricsError;

/// Everything that controls which words get hidden.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaskOptions {
    pub additions: Vec<String>,
    pub removals: Vec<String>,
    pub count: usize,
    pub mode: MaskMode,
}

impl MaskOptions {
    pub fn exclusions(&self) -> ExclusionSet {
        ExclusionSet::build(&self.additions, &self.removals)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizRequest {
    pub lookup: LookupRequest,
    pub options: MaskOptions,
}

impl QuizRequest {
    pub fn new(song: &str, artist: Option<&str>, options: MaskOptions) -> Result<Self, LyricsError> {
        let song = song.trim();
        if song.is_empty() {
            return Err(LyricsError::MissingSong);
        }

        Ok(Self {
            lookup: LookupRequest::new(song, artist),
            options,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Quiz {
    pub title: String,
    pub artist: String,
    pub url: String,
    pub masked_text: String,
    pub reveal_list: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizOutcome {
    Ready(Quiz),
    NotFound,
    Failed(String),
}

/// Look the song up, strip boilerplate and mask it.
///
/// A lookup that fails or finds nothing ends the request without any
/// partial output.
pub async fn build_quiz<S, R>(source: &S, request: &QuizRequest, rng: &mut R) -> QuizOutcome
where
    S: LyricsSource + ?Sized,
    R: Rng + ?Sized,
{
    let outcome = source.lookup(&request.lookup).await;
    debug!("Lookup for '{}' finished: {}", request.lookup.song, outcome.label());

    let found = match outcome {
        LookupOutcome::Found(found) => found,
        LookupOutcome::NotFound => return QuizOutcome::NotFound,
        LookupOutcome::Failed(message) => return QuizOutcome::Failed(message),
    };

    info!("Found lyrics: {} - {}", found.artist, found.title);
    QuizOutcome::Ready(prepare_quiz(found, &request.options, true, rng))
}

/// Turn already-fetched lyrics into a quiz.
pub fn prepare_quiz<R>(found: FoundLyrics, options: &MaskOptions, clean: bool, rng: &mut R) -> Quiz
where
    R: Rng + ?Sized,
{
    let text = if clean { normalize(&found.text) } else { found.text };
    debug!("Lyrics text is {} bytes after cleanup", text.len());

    let masked = mask_words(&text, &options.exclusions(), options.count, options.mode, rng);

    Quiz {
        title: found.title,
        artist: found.artist,
        url: found.url,
        masked_text: masked.masked_text,
        reveal_list: masked.reveal_list,
    }
}
