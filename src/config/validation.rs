use url::Url;
use crate::error::{ClozeError, Result};

pub const MIN_MASK_COUNT: usize = 1;
pub const MAX_MASK_COUNT: usize = 20;

/// Centralized configuration validation utilities
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate an http(s) URL string
    pub fn validate_url(url: &str, field_name: &str) -> Result<()> {
        let parsed = Url::parse(url).map_err(|e| {
            ClozeError::Validation(format!("Invalid {} URL '{}': {}", field_name, url, e))
        })?;

        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(ClozeError::Validation(format!(
                "{} URL must use http or https, got: {}",
                field_name, url
            )));
        }
        Ok(())
    }

    /// Validate numeric range
    pub fn validate_range<T>(value: T, min: T, max: T, field_name: &str) -> Result<()>
    where
        T: PartialOrd + std::fmt::Display + Copy,
    {
        if value < min || value > max {
            return Err(ClozeError::Validation(format!(
                "{} must be between {} and {}, got {}",
                field_name, min, max, value
            )));
        }
        Ok(())
    }

    pub fn validate_mask_count(count: usize) -> Result<()> {
        Self::validate_range(count, MIN_MASK_COUNT, MAX_MASK_COUNT, "mask count")
    }
}
