//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging
//! utilities for embedding applications.

use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;
use crate::utils::errors::Result;

/// Initialize logging based on configuration
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let file_appender = tracing_appender::rolling::daily(&config.file_path, "charityconnect.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.level))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stdout))
        .with(tracing_subscriber::fmt::layer().with_writer(non_blocking))
        .init();

    info!("Logging initialized with level: {}", config.level);
    Ok(())
}

/// Log registration outcomes with structured data
pub fn log_registration(participant_id: &str, event_id: &str, success: bool) {
    if success {
        info!(
            participant_id = participant_id,
            event_id = event_id,
            "Registration completed"
        );
    } else {
        warn!(
            participant_id = participant_id,
            event_id = event_id,
            "Registration failed, store may be partially updated"
        );
    }
}

/// Log a directory refresh
pub fn log_directory_refresh(event_count: usize, request_count: usize) {
    info!(
        event_count = event_count,
        request_count = request_count,
        "Directory refreshed"
    );
}
