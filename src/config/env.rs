use std::env;

use crate::core::text::parse_word_list;
use crate::error::{ClozeError, Result};

/// Environment variable configuration constants
pub struct EnvVars;

impl EnvVars {
    pub const GENIUS_ACCESS_TOKEN: &'static str = "LYRICLOZE_GENIUS_ACCESS_TOKEN";
    pub const GENIUS_API_URL: &'static str = "LYRICLOZE_GENIUS_API_URL";
    pub const DEFAULT_MASK_COUNT: &'static str = "LYRICLOZE_DEFAULT_MASK_COUNT";
    pub const MASK_MODE: &'static str = "LYRICLOZE_MASK_MODE";
    pub const EXTRA_EXCLUSIONS: &'static str = "LYRICLOZE_EXTRA_EXCLUSIONS";
    pub const REMOVED_EXCLUSIONS: &'static str = "LYRICLOZE_REMOVED_EXCLUSIONS";

    // Unprefixed name most Genius tooling reads the token from
    pub const BARE_GENIUS_ACCESS_TOKEN: &'static str = "GENIUS_ACCESS_TOKEN";
}

/// Environment variable parsing utilities with validation
pub struct EnvParser;

impl EnvParser {
    /// Parse environment variable as string with validation
    pub fn parse_string(var_name: &str, validator: Option<fn(&str) -> Result<()>>) -> Result<Option<String>> {
        match env::var(var_name) {
            Ok(value) => {
                let trimmed = value.trim().to_string();
                if trimmed.is_empty() {
                    return Ok(None);
                }

                if let Some(validate_fn) = validator {
                    validate_fn(&trimmed)?;
                }

                Ok(Some(trimmed))
            }
            Err(env::VarError::NotPresent) => Ok(None),
            Err(env::VarError::NotUnicode(_)) => Err(ClozeError::Validation(format!(
                "Environment variable {} contains invalid UTF-8",
                var_name
            ))),
        }
    }

    /// First of `var_names` that is set and non-blank
    pub fn parse_first_string(var_names: &[&str]) -> Result<Option<String>> {
        for var_name in var_names {
            if let Some(value) = Self::parse_string(var_name, None)? {
                return Ok(Some(value));
            }
        }
        Ok(None)
    }

    /// Parse environment variable as usize with range validation
    pub fn parse_usize(var_name: &str, min: usize, max: usize) -> Result<Option<usize>> {
        if let Some(value_str) = Self::parse_string(var_name, None)? {
            let value = value_str.parse::<usize>().map_err(|_| {
                ClozeError::Validation(format!(
                    "Invalid number in {}: '{}'. Must be a positive integer",
                    var_name, value_str
                ))
            })?;

            if value < min || value > max {
                return Err(ClozeError::Validation(format!(
                    "Value in {} must be between {} and {}, got {}",
                    var_name, min, max, value
                )));
            }

            Ok(Some(value))
        } else {
            Ok(None)
        }
    }

    /// Parse a comma-separated word list; blank entries are dropped
    pub fn parse_list(var_name: &str) -> Result<Option<Vec<String>>> {
        Ok(Self::parse_string(var_name, None)?.map(|value| parse_word_list(&value)))
    }
}
