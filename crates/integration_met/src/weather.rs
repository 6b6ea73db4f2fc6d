//! Met.no weather entity adapter
//!
//! Reads the coordinator's cached snapshot, translates provider field
//! names onto the host schema through the static tables in
//! [`crate::consts`], and fans refresh notifications out to forecast
//! subscribers. All transformation is a pure read-and-reshape over the
//! snapshot; the coordinator stays the cache of record.

use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::{Map, Value};
use tokio::sync::broadcast;
use tracing::{debug, info, instrument};

use weather_entity::attributes::{
    ATTR_FORECAST_CONDITION, ATTR_WEATHER_CLOUD_COVERAGE, ATTR_WEATHER_CONDITION,
    ATTR_WEATHER_HUMIDITY, ATTR_WEATHER_PRESSURE, ATTR_WEATHER_TEMPERATURE,
    ATTR_WEATHER_WIND_BEARING, ATTR_WEATHER_WIND_GUST_SPEED, ATTR_WEATHER_WIND_SPEED,
    WEATHER_DOMAIN,
};
use weather_entity::{
    DeviceEntryType, DeviceInfo, EntityRegistry, ForecastHorizon, ForecastRecord, HostConfig,
    ListenerHandle, UpdateCoordinator, WeatherEntity, WeatherEntityFeature, WeatherUnits,
};

use crate::condition::normalize_condition;
use crate::config::MetConfig;
use crate::consts::{
    ATTRIBUTION, CONFIGURATION_URL, DEFAULT_NAME, DOMAIN, FORECAST_MAP, FORECAST_REQUIRED_FIELDS,
    HOME_LOCATION_ID, provider_field,
};
use crate::data::MetWeatherData;

/// Buffered notifications per forecast channel before slow subscribers
/// start lagging.
const FORECAST_CHANNEL_CAPACITY: usize = 8;

/// Compute the stable unique identifier for a configuration
///
/// Home-tracking instances share a fixed sentinel; fixed-location
/// instances derive the id from their coordinates. `hourly` selects the
/// id of the since-removed hourly entity variant, which setup still needs
/// for its one-time registry cleanup.
#[must_use]
pub fn calculate_unique_id(config: &MetConfig, hourly: bool) -> String {
    let suffix = if hourly {
        ForecastHorizon::Hourly.unique_id_suffix()
    } else {
        ""
    };
    if config.track_home {
        return format!("{HOME_LOCATION_ID}{suffix}");
    }
    format!("{}-{}{}", config.latitude, config.longitude, suffix)
}

fn calculate_name(config: &MetConfig, host: &HostConfig) -> String {
    if let Some(name) = &config.name {
        return name.clone();
    }
    if config.track_home {
        return host.location_name.clone();
    }
    DEFAULT_NAME.to_string()
}

/// Reshape provider forecast entries into host-schema records
///
/// Entries missing the required minimum fields are dropped silently;
/// everything else is a sparse copy through the forecast mapping table
/// with the condition normalized. Input order is preserved.
fn reshape_entries(entries: &[Map<String, Value>]) -> Vec<ForecastRecord> {
    let mut records = Vec::with_capacity(entries.len());
    for entry in entries {
        if !FORECAST_REQUIRED_FIELDS
            .iter()
            .all(|field| entry.contains_key(*field))
        {
            continue;
        }

        let mut record = ForecastRecord::new();
        for (host_field, provider_field) in FORECAST_MAP {
            if let Some(value) = entry.get(*provider_field) {
                record.insert(*host_field, value.clone());
            }
        }

        let normalized = record
            .condition()
            .map(|code| normalize_condition(code).to_owned());
        if let Some(normalized) = normalized {
            record.insert(ATTR_FORECAST_CONDITION, Value::String(normalized));
        }

        records.push(record);
    }
    records
}

/// The Met.no weather entity
///
/// Holds a shared reference to the coordinator plus static configuration;
/// all attribute reads go straight to the coordinator's current snapshot.
#[derive(Debug)]
pub struct MetWeather {
    coordinator: Arc<UpdateCoordinator<MetWeatherData>>,
    config: MetConfig,
    name: String,
    unique_id: String,
    is_metric: bool,
    update_tx: broadcast::Sender<()>,
    daily_tx: broadcast::Sender<Vec<ForecastRecord>>,
    hourly_tx: broadcast::Sender<Vec<ForecastRecord>>,
    coordinator_listener: Mutex<Option<ListenerHandle>>,
}

impl MetWeather {
    /// Create the entity and subscribe it to coordinator refreshes
    ///
    /// Refresh notifications hand the forecast fan-out to the Tokio
    /// runtime, so the coordinator must be refreshed from within one.
    pub fn new(
        coordinator: Arc<UpdateCoordinator<MetWeatherData>>,
        config: MetConfig,
        host: &HostConfig,
    ) -> Arc<Self> {
        let (update_tx, _) = broadcast::channel(FORECAST_CHANNEL_CAPACITY);
        let (daily_tx, _) = broadcast::channel(FORECAST_CHANNEL_CAPACITY);
        let (hourly_tx, _) = broadcast::channel(FORECAST_CHANNEL_CAPACITY);

        let entity = Arc::new(Self {
            name: calculate_name(&config, host),
            unique_id: calculate_unique_id(&config, false),
            is_metric: host.unit_system.is_metric(),
            coordinator: Arc::clone(&coordinator),
            config,
            update_tx,
            daily_tx,
            hourly_tx,
            coordinator_listener: Mutex::new(None),
        });

        let weak = Arc::downgrade(&entity);
        let handle = coordinator.add_listener(move || {
            if let Some(entity) = weak.upgrade() {
                entity.handle_coordinator_update();
            }
        });
        *entity.coordinator_listener.lock() = Some(handle);
        entity
    }

    /// The configuration this instance was set up with
    #[must_use]
    pub fn config(&self) -> &MetConfig {
        &self.config
    }

    /// Whether the host runs the metric unit system
    #[must_use]
    pub fn is_metric(&self) -> bool {
        self.is_metric
    }

    /// Subscribe to the default update signal fired on every refresh
    #[must_use]
    pub fn subscribe_updates(&self) -> broadcast::Receiver<()> {
        self.update_tx.subscribe()
    }

    /// Subscribe to one forecast horizon
    ///
    /// Each refresh delivers the freshly reshaped forecast for the
    /// horizon.
    #[must_use]
    pub fn subscribe_forecast(
        &self,
        horizon: ForecastHorizon,
    ) -> broadcast::Receiver<Vec<ForecastRecord>> {
        self.forecast_channel(horizon).subscribe()
    }

    /// Reshape the coordinator's forecast for a horizon
    ///
    /// Recomputed on every call; the coordinator is the cache of record.
    #[must_use]
    pub fn reshape_forecast(&self, horizon: ForecastHorizon) -> Vec<ForecastRecord> {
        let data = self.coordinator.data();
        reshape_entries(data.forecast(horizon))
    }

    fn forecast_channel(&self, horizon: ForecastHorizon) -> &broadcast::Sender<Vec<ForecastRecord>> {
        match horizon {
            ForecastHorizon::Daily => &self.daily_tx,
            ForecastHorizon::Hourly => &self.hourly_tx,
        }
    }

    /// Runs on the coordinator's refresh-notification path. The update
    /// signal goes out inline; reshaping and forecast fan-out move onto
    /// the scheduler so a slow subscriber cannot delay the refresh cycle.
    fn handle_coordinator_update(self: Arc<Self>) {
        let _ = self.update_tx.send(());
        tokio::spawn(async move {
            for horizon in ForecastHorizon::ALL {
                self.publish_forecast(horizon);
            }
        });
    }

    fn publish_forecast(&self, horizon: ForecastHorizon) {
        let records = self.reshape_forecast(horizon);
        debug!(horizon = %horizon, records = records.len(), "notifying forecast subscribers");
        let _ = self.forecast_channel(horizon).send(records);
    }

    fn current_value(&self, attribute: &str) -> Option<Value> {
        let provider_field = provider_field(attribute)?;
        let data = self.coordinator.data();
        let value = data.current_weather_data.get(provider_field)?;
        if value.is_null() { None } else { Some(value.clone()) }
    }

    fn current_number(&self, attribute: &str) -> Option<f64> {
        self.current_value(attribute)?.as_f64()
    }
}

#[async_trait]
impl WeatherEntity for MetWeather {
    fn unique_id(&self) -> String {
        self.unique_id.clone()
    }

    fn display_name(&self) -> String {
        self.name.clone()
    }

    fn attribution(&self) -> Option<&'static str> {
        Some(ATTRIBUTION)
    }

    fn supported_features(&self) -> WeatherEntityFeature {
        WeatherEntityFeature::FORECAST_DAILY | WeatherEntityFeature::FORECAST_HOURLY
    }

    fn native_units(&self) -> WeatherUnits {
        WeatherUnits::metric()
    }

    fn device_info(&self) -> DeviceInfo {
        DeviceInfo {
            name: "Forecast",
            entry_type: DeviceEntryType::Service,
            identifier: DOMAIN,
            manufacturer: "Met.no",
            model: "Forecast",
            configuration_url: CONFIGURATION_URL,
        }
    }

    fn condition(&self) -> Option<String> {
        let value = self.current_value(ATTR_WEATHER_CONDITION)?;
        let code = value.as_str()?;
        Some(normalize_condition(code).to_owned())
    }

    fn native_temperature(&self) -> Option<f64> {
        self.current_number(ATTR_WEATHER_TEMPERATURE)
    }

    fn native_pressure(&self) -> Option<f64> {
        self.current_number(ATTR_WEATHER_PRESSURE)
    }

    fn humidity(&self) -> Option<f64> {
        self.current_number(ATTR_WEATHER_HUMIDITY)
    }

    fn native_wind_speed(&self) -> Option<f64> {
        self.current_number(ATTR_WEATHER_WIND_SPEED)
    }

    fn wind_bearing(&self) -> Option<f64> {
        self.current_number(ATTR_WEATHER_WIND_BEARING)
    }

    fn native_wind_gust_speed(&self) -> Option<f64> {
        self.current_number(ATTR_WEATHER_WIND_GUST_SPEED)
    }

    fn cloud_coverage(&self) -> Option<f64> {
        self.current_number(ATTR_WEATHER_CLOUD_COVERAGE)
    }

    async fn forecast_daily(&self) -> Option<Vec<ForecastRecord>> {
        Some(self.reshape_forecast(ForecastHorizon::Daily))
    }

    async fn forecast_hourly(&self) -> Option<Vec<ForecastRecord>> {
        Some(self.reshape_forecast(ForecastHorizon::Hourly))
    }
}

/// Set up a Met.no weather entity from a config entry
///
/// Removes the registry entry of the since-removed hourly entity variant
/// if one is still present (one-time migration cleanup), then creates,
/// subscribes, and registers the entity.
#[instrument(skip(registry, coordinator, host), fields(track_home = config.track_home))]
pub fn setup_entry(
    registry: &EntityRegistry,
    coordinator: Arc<UpdateCoordinator<MetWeatherData>>,
    config: MetConfig,
    host: &HostConfig,
) -> Arc<MetWeather> {
    let hourly_unique_id = calculate_unique_id(&config, true);
    if let Some(stale) = registry.entity_id_for(WEATHER_DOMAIN, DOMAIN, &hourly_unique_id) {
        info!(entity_id = %stale, "removing stale hourly weather entity");
        registry.remove(&stale);
    }

    let entity = MetWeather::new(coordinator, config, host);
    registry.register(
        WEATHER_DOMAIN,
        DOMAIN,
        &entity.unique_id(),
        &entity.display_name(),
    );
    entity
}
