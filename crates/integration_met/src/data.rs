//! Coordinator snapshot for Met.no data

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use weather_entity::ForecastHorizon;

/// The polling coordinator's cached view of Met.no data
///
/// All fields carry the provider's own names; translation to the host
/// schema happens in [`crate::weather`]. The coordinator replaces the
/// whole value on every refresh, so a snapshot handle is immutable until
/// replaced. Forecast sequences are chronologically ordered by the
/// coordinator; this crate never re-sorts them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MetWeatherData {
    /// Instantaneous readings keyed by provider field name.
    #[serde(default)]
    pub current_weather_data: Map<String, Value>,

    /// One entry per day.
    #[serde(default)]
    pub daily_forecast: Vec<Map<String, Value>>,

    /// One entry per hour.
    #[serde(default)]
    pub hourly_forecast: Vec<Map<String, Value>>,
}

impl MetWeatherData {
    /// The forecast sequence for a horizon
    #[must_use]
    pub fn forecast(&self, horizon: ForecastHorizon) -> &[Map<String, Value>] {
        match horizon {
            ForecastHorizon::Daily => &self.daily_forecast,
            ForecastHorizon::Hourly => &self.hourly_forecast,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn default_snapshot_is_empty() {
        let data = MetWeatherData::default();
        assert!(data.current_weather_data.is_empty());
        assert!(data.forecast(ForecastHorizon::Daily).is_empty());
        assert!(data.forecast(ForecastHorizon::Hourly).is_empty());
    }

    #[test]
    fn horizon_selects_the_matching_sequence() {
        let mut daily_entry = Map::new();
        daily_entry.insert("time".to_string(), json!("2024-01-01T00:00:00Z"));

        let data = MetWeatherData {
            daily_forecast: vec![daily_entry],
            ..Default::default()
        };

        assert_eq!(data.forecast(ForecastHorizon::Daily).len(), 1);
        assert!(data.forecast(ForecastHorizon::Hourly).is_empty());
    }

    #[test]
    fn deserializes_with_missing_sections() {
        let data: MetWeatherData = serde_json::from_str("{}").expect("deserialize");
        assert!(data.current_weather_data.is_empty());
    }
}
