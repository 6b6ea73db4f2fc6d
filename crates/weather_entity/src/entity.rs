//! The weather entity interface
//!
//! Integrations implement [`WeatherEntity`] to expose their provider's data
//! through the host schema. Every attribute query is value-or-missing; a
//! missing reading is `None`, never an error. Forecast operations return
//! `None` when the entity does not serve that horizon at all.

use async_trait::async_trait;
use bitflags::bitflags;
#[cfg(test)]
use mockall::automock;

use crate::forecast::ForecastRecord;

bitflags! {
    /// Forecast horizons an entity declares support for.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct WeatherEntityFeature: u8 {
        const FORECAST_DAILY = 0b0001;
        const FORECAST_HOURLY = 0b0010;
    }
}

/// Unit labels for the values an entity reports
///
/// Values are reported in the integration's native units; the host's unit
/// subsystem converts for display. These labels describe the native set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeatherUnits {
    pub temperature: &'static str,
    pub pressure: &'static str,
    pub wind_speed: &'static str,
    pub precipitation: &'static str,
}

impl WeatherUnits {
    /// Metric unit set (°C, hPa, km/h, mm)
    #[must_use]
    pub const fn metric() -> Self {
        Self {
            temperature: "°C",
            pressure: "hPa",
            wind_speed: "km/h",
            precipitation: "mm",
        }
    }

    /// Imperial unit set (°F, inHg, mph, in)
    #[must_use]
    pub const fn imperial() -> Self {
        Self {
            temperature: "°F",
            pressure: "inHg",
            wind_speed: "mph",
            precipitation: "in",
        }
    }
}

/// How a device entry was created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceEntryType {
    /// The entry represents a service, not physical hardware.
    Service,
}

/// Static descriptive metadata for the device backing an entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceInfo {
    pub name: &'static str,
    pub entry_type: DeviceEntryType,
    /// Identifying key, typically the integration domain.
    pub identifier: &'static str,
    pub manufacturer: &'static str,
    pub model: &'static str,
    pub configuration_url: &'static str,
}

/// A weather entity as seen by the host framework
///
/// Attribute queries are synchronous reads over the integration's cached
/// snapshot; forecast retrieval is async because the host drives it from
/// its event loop.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait WeatherEntity: Send + Sync {
    /// Stable identifier, unique per (domain, platform).
    fn unique_id(&self) -> String;

    /// Human-readable entity name.
    fn display_name(&self) -> String;

    /// Data source attribution shown alongside the entity.
    fn attribution(&self) -> Option<&'static str> {
        None
    }

    /// Forecast horizons this entity serves.
    fn supported_features(&self) -> WeatherEntityFeature;

    /// Native unit set for reported values.
    fn native_units(&self) -> WeatherUnits;

    /// Descriptive metadata for the backing device or service.
    fn device_info(&self) -> DeviceInfo;

    /// Current condition, normalized to a canonical condition name where
    /// the integration recognizes the provider code.
    fn condition(&self) -> Option<String> {
        None
    }

    fn native_temperature(&self) -> Option<f64> {
        None
    }

    fn native_pressure(&self) -> Option<f64> {
        None
    }

    fn humidity(&self) -> Option<f64> {
        None
    }

    fn native_wind_speed(&self) -> Option<f64> {
        None
    }

    fn wind_bearing(&self) -> Option<f64> {
        None
    }

    fn native_wind_gust_speed(&self) -> Option<f64> {
        None
    }

    fn cloud_coverage(&self) -> Option<f64> {
        None
    }

    /// Daily forecast, or `None` if the horizon is unavailable.
    async fn forecast_daily(&self) -> Option<Vec<ForecastRecord>> {
        None
    }

    /// Hourly forecast, or `None` if the horizon is unavailable.
    async fn forecast_hourly(&self) -> Option<Vec<ForecastRecord>> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn _assert_object_safe(_: &dyn WeatherEntity) {}

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn WeatherEntity>();
    }

    #[test]
    fn feature_flags_combine() {
        let both = WeatherEntityFeature::FORECAST_DAILY | WeatherEntityFeature::FORECAST_HOURLY;
        assert!(both.contains(WeatherEntityFeature::FORECAST_DAILY));
        assert!(both.contains(WeatherEntityFeature::FORECAST_HOURLY));

        let daily_only = WeatherEntityFeature::FORECAST_DAILY;
        assert!(!daily_only.contains(WeatherEntityFeature::FORECAST_HOURLY));
    }

    #[test]
    fn metric_units() {
        let units = WeatherUnits::metric();
        assert_eq!(units.temperature, "°C");
        assert_eq!(units.pressure, "hPa");
        assert_eq!(units.wind_speed, "km/h");
        assert_eq!(units.precipitation, "mm");
    }

    #[test]
    fn imperial_units() {
        let units = WeatherUnits::imperial();
        assert_eq!(units.temperature, "°F");
        assert_eq!(units.precipitation, "in");
    }

    #[tokio::test]
    async fn mocked_entity_defaults() {
        let mut mock = MockWeatherEntity::new();
        mock.expect_unique_id().return_const("home".to_string());
        mock.expect_condition().return_const(None::<String>);
        mock.expect_forecast_daily().returning(|| None);

        assert_eq!(mock.unique_id(), "home");
        assert_eq!(mock.condition(), None);
        assert!(mock.forecast_daily().await.is_none());
    }
}
