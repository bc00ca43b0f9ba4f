//! Donation flow handoff
//!
//! Payment processing is out of scope; this service only hands control to the
//! external donation flow. No state is mutated.

use tracing::info;

use crate::config::DonationConfig;

/// Boundary trigger for the external donation flow
#[derive(Debug, Clone)]
pub struct DonationHandoff {
    config: DonationConfig,
}

impl DonationHandoff {
    /// Create a new handoff instance
    pub fn new(config: DonationConfig) -> Self {
        Self { config }
    }

    /// Route of the external donation flow the presentation layer should
    /// navigate to
    pub fn trigger(&self) -> &str {
        info!(route = %self.config.route, "Handing off to external donation flow");
        &self.config.route
    }
}
