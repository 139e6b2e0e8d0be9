//! Configuration validation framework

use crate::{ConfigError, ConfigResult};

/// Trait for validating configuration values
pub trait Validate {
    /// Validate this configuration object
    ///
    /// # Errors
    /// Returns validation errors if the configuration is invalid
    fn validate(&self) -> ConfigResult<()>;
}

/// Validate a value is within an inclusive range
///
/// # Errors
/// Returns `ConfigError::OutOfRange` if value is outside the specified range
pub fn validate_range(value: u64, min: u64, max: u64, field_name: &str) -> ConfigResult<()> {
    if value < min || value > max {
        Err(ConfigError::OutOfRange {
            field: field_name.to_string(),
            value,
            min,
            max,
        })
    } else {
        Ok(())
    }
}

/// Validate a ratio lies in the half-open interval `[0, 1)`
///
/// # Errors
/// Returns `ConfigError::InvalidValue` for NaN, infinities, negatives and values `>= 1`
pub fn validate_ratio(value: f64, field_name: &str) -> ConfigResult<()> {
    if value.is_finite() && (0.0..1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::InvalidValue {
            field: field_name.to_string(),
            message: format!("{value} is not in [0, 1)"),
        })
    }
}

/// Validate a string is one of the accepted choices (case-sensitive)
///
/// # Errors
/// Returns `ConfigError::InvalidValue` listing the accepted choices
pub fn validate_one_of(value: &str, choices: &[&str], field_name: &str) -> ConfigResult<()> {
    if choices.contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::InvalidValue {
            field: field_name.to_string(),
            message: format!("'{value}' is not one of {}", choices.join(", ")),
        })
    }
}

/// Validate a string is not empty
///
/// # Errors
/// Returns `ConfigError::MissingField` if the string is empty or whitespace-only
pub fn validate_non_empty(value: &str, field_name: &str) -> ConfigResult<()> {
    if value.trim().is_empty() {
        Err(ConfigError::MissingField {
            field: field_name.to_string(),
        })
    } else {
        Ok(())
    }
}
