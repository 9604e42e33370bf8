//! Adapter Registry
//!
//! Configuration-driven selection of port implementations and aggregated
//! health reporting across every adapter the application wires up.
//!
//! # Usage
//!
//! ```rust,ignore
//! use core_kernel::registry::{AdapterSource, RegistryHealthReport};
//!
//! let source: AdapterSource = "postgres".parse()?;
//! let results = vec![countries.health_check().await, contacts.health_check().await];
//! let report = RegistryHealthReport::from_results(results);
//! assert!(report.is_operational());
//! ```

use std::collections::HashMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::ports::{AdapterHealth, HealthCheckResult};

/// Source configuration for the application's adapters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdapterSource {
    /// Use the internal database adapters
    #[default]
    Internal,

    /// Use seeded in-memory adapters (local development and tests)
    Mock,
}

impl FromStr for AdapterSource {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "internal" | "postgres" | "database" => Ok(AdapterSource::Internal),
            "mock" | "memory" => Ok(AdapterSource::Mock),
            other => Err(CoreError::configuration(format!(
                "Unknown adapter source '{}'",
                other
            ))),
        }
    }
}

/// Result of health checks across all registered adapters
#[derive(Debug, Clone, Serialize)]
pub struct RegistryHealthReport {
    /// Overall health status
    pub overall_status: AdapterHealth,

    /// Health results by adapter
    pub adapter_health: HashMap<String, HealthCheckResult>,

    /// Number of healthy adapters
    pub healthy_count: usize,

    /// Number of unhealthy adapters
    pub unhealthy_count: usize,

    /// Total number of registered adapters
    pub total_count: usize,
}

impl RegistryHealthReport {
    /// Aggregates individual adapter results into one report
    ///
    /// The overall status is healthy only when every adapter is healthy,
    /// unhealthy when none are, and degraded otherwise. An empty set of
    /// results reports `Unknown`.
    pub fn from_results(results: Vec<HealthCheckResult>) -> Self {
        let total_count = results.len();
        let healthy_count = results
            .iter()
            .filter(|r| r.status == AdapterHealth::Healthy)
            .count();
        let unhealthy_count = results
            .iter()
            .filter(|r| r.status == AdapterHealth::Unhealthy)
            .count();

        let overall_status = if total_count == 0 {
            AdapterHealth::Unknown
        } else if healthy_count == total_count {
            AdapterHealth::Healthy
        } else if healthy_count == 0 && unhealthy_count == total_count {
            AdapterHealth::Unhealthy
        } else {
            AdapterHealth::Degraded
        };

        let adapter_health = results
            .into_iter()
            .map(|r| (r.adapter_id.clone(), r))
            .collect();

        Self {
            overall_status,
            adapter_health,
            healthy_count,
            unhealthy_count,
            total_count,
        }
    }

    /// Returns true if all adapters are healthy
    pub fn is_fully_healthy(&self) -> bool {
        self.overall_status == AdapterHealth::Healthy
    }

    /// Returns true if the system is at least partially operational
    pub fn is_operational(&self) -> bool {
        matches!(
            self.overall_status,
            AdapterHealth::Healthy | AdapterHealth::Degraded
        )
    }
}
