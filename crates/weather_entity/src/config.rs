//! Host configuration
//!
//! The slice of host configuration weather integrations read: the
//! configured location name (used when an integration tracks the home
//! location) and the unit system.

use serde::{Deserialize, Serialize};

/// Unit system the host is configured for
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitSystem {
    #[default]
    Metric,
    Imperial,
}

impl UnitSystem {
    /// Whether this is the metric system
    #[must_use]
    pub const fn is_metric(self) -> bool {
        matches!(self, Self::Metric)
    }
}

/// Host configuration consumed by weather integrations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HostConfig {
    /// Display name of the configured home location.
    #[serde(default = "default_location_name")]
    pub location_name: String,

    /// Unit system for display conversion.
    #[serde(default)]
    pub unit_system: UnitSystem,
}

fn default_location_name() -> String {
    "Home".to_string()
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            location_name: default_location_name(),
            unit_system: UnitSystem::default(),
        }
    }
}
