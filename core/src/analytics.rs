//! Port adapters that forward analytics events and critical errors to `tracing`.

use crate::error::StakingError;
use crate::ports::{Analytics, ErrorReporter};

#[derive(Debug, Default, Clone, Copy)]
pub struct TracingAnalytics;

impl Analytics for TracingAnalytics {
    fn track(&self, event: &str, properties: serde_json::Value) {
        tracing::info!(target: "analytics", event, %properties, "track");
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl ErrorReporter for TracingReporter {
    fn critical(&self, error: &StakingError) {
        tracing::error!(target: "critical", error = %error, "delegation failed");
    }
}
