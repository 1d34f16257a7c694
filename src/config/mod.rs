use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::core::services::genius::{GeniusSettings, DEFAULT_API_URL};
use crate::core::text::MaskMode;
use crate::error::{ConfigError, Result};

pub mod builder;
pub mod env;
pub mod validation;

pub use builder::ConfigBuilder;

pub const DEFAULT_MASK_COUNT: usize = 10;

fn default_genius_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_mask_count() -> usize {
    DEFAULT_MASK_COUNT
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Genius API access token
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genius_access_token: Option<String>,

    /// Genius API base URL
    #[serde(default = "default_genius_api_url")]
    pub genius_api_url: String,

    /// Number of words to mask when `--count` is not given
    #[serde(default = "default_mask_count")]
    pub default_mask_count: usize,

    /// How masked words are sampled
    #[serde(default)]
    pub mask_mode: MaskMode,

    /// Words added to the built-in exclusion list
    #[serde(default)]
    pub extra_exclusions: Vec<String>,

    /// Words removed from the built-in exclusion list
    #[serde(default)]
    pub removed_exclusions: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            genius_access_token: None,
            genius_api_url: default_genius_api_url(),
            default_mask_count: DEFAULT_MASK_COUNT,
            mask_mode: MaskMode::default(),
            extra_exclusions: Vec::new(),
            removed_exclusions: Vec::new(),
        }
    }
}

impl Config {
    /// Defaults, then the config file, then `.env` and the process environment.
    pub fn load(config_path: Option<&str>) -> Result<Self> {
        // Try to load .env file if it exists
        dotenvy::dotenv().ok();

        let config_file = Self::resolve_path(config_path)?;
        let file_config = Self::load_file(&config_file)?;

        // Seed a config file on first run. Only the file layer is written, so
        // credentials from the environment never end up on disk.
        if !config_file.exists() {
            if let Err(e) = file_config.save(&config_file) {
                warn!("Could not write default config to {}: {}", config_file.display(), e);
            }
        }

        ConfigBuilder::from_config(file_config).load_from_env()?.build()
    }

    /// Only the file layer: defaults when the file is missing.
    pub fn load_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn resolve_path(config_path: Option<&str>) -> Result<PathBuf> {
        match config_path {
            Some(path) => Ok(PathBuf::from(path)),
            None => Self::default_config_path(),
        }
    }

    fn default_config_path() -> Result<PathBuf> {
        let project_dirs =
            ProjectDirs::from("dev", "lyricloze", "lyricloze").ok_or(ConfigError::NoProjectDirs)?;

        Ok(project_dirs.config_dir().join("config.toml"))
    }

    pub fn genius_settings(&self) -> GeniusSettings {
        GeniusSettings {
            api_url: self.genius_api_url.clone(),
            access_token: self.genius_access_token.clone(),
        }
    }

    pub fn has_access_token(&self) -> bool {
        self.genius_access_token
            .as_deref()
            .is_some_and(|token| !token.trim().is_empty())
    }
}
