//! Host schema vocabulary
//!
//! Attribute names, forecast-field names, and canonical condition names
//! shared by every weather integration. Integrations map their provider's
//! native field names onto these; consumers only ever see this vocabulary.

/// Registry domain under which weather entities are filed.
pub const WEATHER_DOMAIN: &str = "weather";

// Current-condition attributes.
pub const ATTR_WEATHER_TEMPERATURE: &str = "temperature";
pub const ATTR_WEATHER_PRESSURE: &str = "pressure";
pub const ATTR_WEATHER_HUMIDITY: &str = "humidity";
pub const ATTR_WEATHER_WIND_SPEED: &str = "wind_speed";
pub const ATTR_WEATHER_WIND_BEARING: &str = "wind_bearing";
pub const ATTR_WEATHER_WIND_GUST_SPEED: &str = "wind_gust_speed";
pub const ATTR_WEATHER_CLOUD_COVERAGE: &str = "cloud_coverage";
pub const ATTR_WEATHER_CONDITION: &str = "condition";

// Forecast-record fields. "native" values are in the integration's native
// units; unit conversion is the host's concern, not the integration's.
pub const ATTR_FORECAST_TIME: &str = "datetime";
pub const ATTR_FORECAST_CONDITION: &str = "condition";
pub const ATTR_FORECAST_NATIVE_TEMP: &str = "native_temperature";
pub const ATTR_FORECAST_NATIVE_TEMP_LOW: &str = "native_templow";
pub const ATTR_FORECAST_NATIVE_PRECIPITATION: &str = "native_precipitation";
pub const ATTR_FORECAST_NATIVE_PRESSURE: &str = "native_pressure";
pub const ATTR_FORECAST_NATIVE_WIND_SPEED: &str = "native_wind_speed";
pub const ATTR_FORECAST_WIND_BEARING: &str = "wind_bearing";

// Canonical condition names. Integrations normalize their provider's
// condition codes to one of these where a grouping exists.
pub const ATTR_CONDITION_CLEAR_NIGHT: &str = "clear-night";
pub const ATTR_CONDITION_CLOUDY: &str = "cloudy";
pub const ATTR_CONDITION_FOG: &str = "fog";
pub const ATTR_CONDITION_LIGHTNING_RAINY: &str = "lightning-rainy";
pub const ATTR_CONDITION_PARTLYCLOUDY: &str = "partlycloudy";
pub const ATTR_CONDITION_POURING: &str = "pouring";
pub const ATTR_CONDITION_RAINY: &str = "rainy";
pub const ATTR_CONDITION_SNOWY: &str = "snowy";
pub const ATTR_CONDITION_SNOWY_RAINY: &str = "snowy-rainy";
pub const ATTR_CONDITION_SUNNY: &str = "sunny";

/// All canonical condition names, in no particular order.
pub const CONDITION_NAMES: &[&str] = &[
    ATTR_CONDITION_CLEAR_NIGHT,
    ATTR_CONDITION_CLOUDY,
    ATTR_CONDITION_FOG,
    ATTR_CONDITION_LIGHTNING_RAINY,
    ATTR_CONDITION_PARTLYCLOUDY,
    ATTR_CONDITION_POURING,
    ATTR_CONDITION_RAINY,
    ATTR_CONDITION_SNOWY,
    ATTR_CONDITION_SNOWY_RAINY,
    ATTR_CONDITION_SUNNY,
];
