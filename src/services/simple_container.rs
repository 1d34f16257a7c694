use std::sync::Arc;

use crate::config::Config;
use crate::core::quiz::MaskOptions;
use crate::core::services::{GeniusClient, LyricsSource};
use crate::core::text::{parse_word_list, MaskMode};
use crate::error::Result;

pub struct SimpleServices {
    config: Arc<Config>,
}

impl SimpleServices {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    pub fn config(&self) -> Arc<Config> {
        self.config.clone()
    }

    /// The configured lyrics provider. Fails when no access token is set.
    pub fn create_lyrics_source(&self) -> Result<Box<dyn LyricsSource>> {
        let client = GeniusClient::new(&self.config.genius_settings())?;
        Ok(Box::new(client))
    }

    /// Per-request mask options layered over the configured defaults.
    ///
    /// `add` and `remove` are comma-separated word lists; they extend the
    /// configured extra/removed exclusions rather than replacing them.
    pub fn mask_options(
        &self,
        add: &str,
        remove: &str,
        count: Option<usize>,
        mode: Option<MaskMode>,
    ) -> MaskOptions {
        let mut additions = self.config.extra_exclusions.clone();
        additions.extend(parse_word_list(add));

        let mut removals = self.config.removed_exclusions.clone();
        removals.extend(parse_word_list(remove));

        MaskOptions {
            additions,
            removals,
            count: count.unwrap_or(self.config.default_mask_count),
            mode: mode.unwrap_or(self.config.mask_mode),
        }
    }
}
