//! Shared fixtures for the integration tests.

use std::sync::Arc;

use beacon_agents::InsuranceAgent;
use beacon_core::InsuranceConfig;
use beacon_observability::AppMetrics;

pub fn test_agent() -> InsuranceAgent {
    InsuranceAgent::new(Arc::new(InsuranceConfig::default()), AppMetrics::shared())
}
