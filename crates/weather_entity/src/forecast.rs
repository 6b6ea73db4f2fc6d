//! Forecast horizons and sparse forecast records
//!
//! A [`ForecastRecord`] carries only the fields the provider actually
//! reported for a time bucket; absent data is absent, never a null. The
//! record is keyed by the host vocabulary in [`crate::attributes`].

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::attributes::{ATTR_FORECAST_CONDITION, ATTR_FORECAST_TIME};

/// The two forecast horizons an entity can expose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ForecastHorizon {
    /// One record per day.
    Daily,
    /// One record per hour.
    Hourly,
}

impl ForecastHorizon {
    /// Unique-id suffix historically used to distinguish a separate
    /// hourly entity variant. Empty for the daily horizon.
    #[must_use]
    pub const fn unique_id_suffix(self) -> &'static str {
        match self {
            Self::Daily => "",
            Self::Hourly => "-hourly",
        }
    }

    /// Channel label used in subscription and logging contexts.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Hourly => "hourly",
        }
    }

    /// Both horizons, in notification order.
    pub const ALL: [Self; 2] = [Self::Daily, Self::Hourly];
}

impl std::fmt::Display for ForecastHorizon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One host-schema forecast record for a single time bucket
///
/// Sparse by contract: a field is present iff the provider reported a
/// non-null value for it. Records compare equal field-by-field, which the
/// tests rely on.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ForecastRecord(Map<String, Value>);

impl ForecastRecord {
    /// Create an empty record
    #[must_use]
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Set a field. Null values are refused to keep the record sparse.
    pub fn insert(&mut self, field: impl Into<String>, value: Value) {
        if !value.is_null() {
            self.0.insert(field.into(), value);
        }
    }

    /// Get a raw field value
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Whether the record carries a field
    #[must_use]
    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    /// Number of populated fields
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no field is populated
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over populated `(field, value)` pairs
    pub fn fields(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// The condition field, if present and a string
    #[must_use]
    pub fn condition(&self) -> Option<&str> {
        self.0.get(ATTR_FORECAST_CONDITION).and_then(Value::as_str)
    }

    /// The forecast time, parsed if present
    ///
    /// Accepts RFC 3339 as well as the bare `YYYY-MM-DDTHH:MM` form some
    /// providers emit; bare timestamps are taken as UTC.
    #[must_use]
    pub fn datetime(&self) -> Option<DateTime<Utc>> {
        let raw = self.0.get(ATTR_FORECAST_TIME)?.as_str()?;
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(dt.with_timezone(&Utc));
        }
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M") {
            return Some(dt.and_utc());
        }
        NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
            .ok()
            .map(|dt| dt.and_utc())
    }

    /// A numeric field as `f64`, if present and numeric
    #[must_use]
    pub fn number(&self, field: &str) -> Option<f64> {
        self.0.get(field).and_then(Value::as_f64)
    }
}

impl FromIterator<(String, Value)> for ForecastRecord {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        let mut record = Self::new();
        for (field, value) in iter {
            record.insert(field, value);
        }
        record
    }
}
