//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use super::Settings;
use crate::utils::errors::{CharityConnectError, Result};

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_store_config(&settings.store)?;
    validate_identity_config(&settings.identity)?;
    validate_donation_config(&settings.donation)?;
    validate_logging_config(&settings.logging)?;

    Ok(())
}

/// Validate document store configuration
fn validate_store_config(config: &super::StoreConfig) -> Result<()> {
    if config.url.is_empty() {
        return Err(CharityConnectError::Config(
            "Store URL is required".to_string(),
        ));
    }

    if config.prefix.is_empty() {
        return Err(CharityConnectError::Config(
            "Store key prefix is required".to_string(),
        ));
    }

    Ok(())
}

/// Validate identity configuration
fn validate_identity_config(config: &super::IdentityConfig) -> Result<()> {
    if config.fallback_participant_id.is_empty() {
        return Err(CharityConnectError::Config(
            "Fallback participant id is required".to_string(),
        ));
    }

    Ok(())
}

/// Validate donation handoff configuration
fn validate_donation_config(config: &super::DonationConfig) -> Result<()> {
    if config.route.is_empty() {
        return Err(CharityConnectError::Config(
            "Donation route is required".to_string(),
        ));
    }

    if !config.route.starts_with('/') {
        return Err(CharityConnectError::Config(
            "Donation route must be an absolute path".to_string(),
        ));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(CharityConnectError::Config(
            "Log level is required".to_string(),
        ));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(CharityConnectError::Config(format!(
            "Invalid log level: {}. Valid levels: {:?}",
            config.level, valid_levels
        )));
    }

    Ok(())
}
