use anyhow::Result;
use clap::{Args, Subcommand};

use crate::config::Config as AppConfig;
use crate::core::text::{parse_word_list, MaskMode};

/// Keys accepted by `config get` and `config set`
pub const CONFIG_KEYS: &[(&str, &str)] = &[
    ("genius_api_url", "Genius API base URL"),
    ("default_mask_count", "Words to mask when --count is not given (1-20)"),
    ("mask_mode", "Sampling mode: occurrences or distinct"),
    ("extra_exclusions", "Comma-separated words added to the exclusion list"),
    ("removed_exclusions", "Comma-separated words removed from the exclusion list"),
];

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommands,
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Configuration key
        key: String,

        /// Configuration value
        value: String,
    },

    /// Get a configuration value
    Get {
        /// Configuration key
        key: String,
    },

    /// Show configuration file path
    Path,

    /// List all available configuration keys
    Keys,
}

pub async fn execute(args: ConfigArgs, config: &AppConfig, config_path: Option<&str>) -> Result<()> {
    match args.command {
        ConfigCommands::Show => {
            println!("Current configuration:");
            println!("  genius_access_token: {}", token_status(config));
            println!("  genius_api_url: {}", config.genius_api_url);
            println!("  default_mask_count: {}", config.default_mask_count);
            println!("  mask_mode: {}", config.mask_mode.as_str());
            println!("  extra_exclusions: {}", config.extra_exclusions.join(", "));
            println!("  removed_exclusions: {}", config.removed_exclusions.join(", "));
        }

        ConfigCommands::Set { key, value } => {
            let path = AppConfig::resolve_path(config_path)?;
            // Edit the file layer only, so environment overrides are not persisted
            let mut file_config = AppConfig::load_file(&path)?;
            apply(&mut file_config, &key, &value)?;
            file_config.validate()?;
            file_config.save(&path)?;
            println!("Configuration updated: {} = {}", key, value);
        }

        ConfigCommands::Get { key } => {
            println!("{}", get(config, &key)?);
        }

        ConfigCommands::Path => {
            println!("{}", AppConfig::resolve_path(config_path)?.display());
        }

        ConfigCommands::Keys => {
            println!("Available configuration keys:");
            for (key, description) in CONFIG_KEYS {
                println!("  {:<20} {}", key, description);
            }
        }
    }

    Ok(())
}

fn token_status(config: &AppConfig) -> &'static str {
    if config.has_access_token() {
        "set"
    } else {
        "not set (export GENIUS_ACCESS_TOKEN)"
    }
}

fn get(config: &AppConfig, key: &str) -> Result<String> {
    let value = match key {
        "genius_access_token" => token_status(config).to_string(),
        "genius_api_url" => config.genius_api_url.clone(),
        "default_mask_count" => config.default_mask_count.to_string(),
        "mask_mode" => config.mask_mode.as_str().to_string(),
        "extra_exclusions" => config.extra_exclusions.join(", "),
        "removed_exclusions" => config.removed_exclusions.join(", "),
        _ => anyhow::bail!("Unknown configuration key: {}", key),
    };
    Ok(value)
}

fn apply(config: &mut AppConfig, key: &str, value: &str) -> Result<()> {
    match key {
        "genius_api_url" => config.genius_api_url = value.trim().to_string(),
        "default_mask_count" => config.default_mask_count = value.trim().parse()?,
        "mask_mode" => {
            config.mask_mode = value.parse::<MaskMode>().map_err(anyhow::Error::msg)?;
        }
        "extra_exclusions" => config.extra_exclusions = parse_word_list(value),
        "removed_exclusions" => config.removed_exclusions = parse_word_list(value),
        "genius_access_token" => {
            anyhow::bail!("Refusing to store the access token; set GENIUS_ACCESS_TOKEN in the environment or .env instead")
        }
        _ => anyhow::bail!("Unknown configuration key: {}", key),
    }
    Ok(())
}
