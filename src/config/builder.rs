use crate::config::env::{EnvParser, EnvVars};
use crate::config::validation::{ConfigValidator, MAX_MASK_COUNT, MIN_MASK_COUNT};
use crate::config::Config;
use crate::core::text::MaskMode;
use crate::error::{ClozeError, Result};

/// Configuration builder with validation and type safety
#[derive(Default)]
pub struct ConfigBuilder {
    genius_access_token: Option<Option<String>>,
    genius_api_url: Option<String>,
    default_mask_count: Option<usize>,
    mask_mode: Option<MaskMode>,
    extra_exclusions: Option<Vec<String>>,
    removed_exclusions: Option<Vec<String>>,
}

impl ConfigBuilder {
    /// Create a new configuration builder
    #[cfg(test)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration, typically the file layer
    pub fn from_config(config: Config) -> Self {
        Self {
            genius_access_token: Some(config.genius_access_token),
            genius_api_url: Some(config.genius_api_url),
            default_mask_count: Some(config.default_mask_count),
            mask_mode: Some(config.mask_mode),
            extra_exclusions: Some(config.extra_exclusions),
            removed_exclusions: Some(config.removed_exclusions),
        }
    }

    pub fn genius_access_token<S: Into<String>>(mut self, token: Option<S>) -> Self {
        self.genius_access_token = Some(token.map(Into::into));
        self
    }

    /// Set Genius API URL with validation
    pub fn genius_api_url<S: Into<String>>(mut self, url: S) -> Result<Self> {
        let url = url.into();
        ConfigValidator::validate_url(&url, "Genius API")?;
        self.genius_api_url = Some(url);
        Ok(self)
    }

    /// Set default mask count with validation
    pub fn default_mask_count(mut self, count: usize) -> Result<Self> {
        ConfigValidator::validate_mask_count(count)?;
        self.default_mask_count = Some(count);
        Ok(self)
    }

    pub fn mask_mode(mut self, mode: MaskMode) -> Self {
        self.mask_mode = Some(mode);
        self
    }

    pub fn extra_exclusions(mut self, words: Vec<String>) -> Self {
        self.extra_exclusions = Some(words);
        self
    }

    pub fn removed_exclusions(mut self, words: Vec<String>) -> Self {
        self.removed_exclusions = Some(words);
        self
    }

    /// Load values from environment variables with validation
    pub fn load_from_env(mut self) -> Result<Self> {
        if let Some(token) = EnvParser::parse_first_string(&[
            EnvVars::GENIUS_ACCESS_TOKEN,
            EnvVars::BARE_GENIUS_ACCESS_TOKEN,
        ])? {
            self = self.genius_access_token(Some(token));
        }

        if let Some(url) = EnvParser::parse_string(EnvVars::GENIUS_API_URL, None)? {
            self = self.genius_api_url(url)?;
        }

        if let Some(count) = EnvParser::parse_usize(EnvVars::DEFAULT_MASK_COUNT, MIN_MASK_COUNT, MAX_MASK_COUNT)? {
            self = self.default_mask_count(count)?;
        }

        if let Some(mode) = EnvParser::parse_string(EnvVars::MASK_MODE, None)? {
            let mode = mode.parse::<MaskMode>().map_err(|e| {
                ClozeError::Validation(format!("Invalid value in {}: {}", EnvVars::MASK_MODE, e))
            })?;
            self = self.mask_mode(mode);
        }

        if let Some(words) = EnvParser::parse_list(EnvVars::EXTRA_EXCLUSIONS)? {
            self = self.extra_exclusions(words);
        }

        if let Some(words) = EnvParser::parse_list(EnvVars::REMOVED_EXCLUSIONS)? {
            self = self.removed_exclusions(words);
        }

        Ok(self)
    }

    /// Build the configuration with defaults
    pub fn build(self) -> Result<Config> {
        let defaults = Config::default();

        let config = Config {
            genius_access_token: self.genius_access_token.unwrap_or(defaults.genius_access_token),
            genius_api_url: self.genius_api_url.unwrap_or(defaults.genius_api_url),
            default_mask_count: self.default_mask_count.unwrap_or(defaults.default_mask_count),
            mask_mode: self.mask_mode.unwrap_or(defaults.mask_mode),
            extra_exclusions: self.extra_exclusions.unwrap_or(defaults.extra_exclusions),
            removed_exclusions: self.removed_exclusions.unwrap_or(defaults.removed_exclusions),
        };

        // Final validation
        config.validate()?;

        Ok(config)
    }
}

impl Config {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        ConfigValidator::validate_url(&self.genius_api_url, "Genius API")?;
        ConfigValidator::validate_mask_count(self.default_mask_count)?;
        Ok(())
    }
}
