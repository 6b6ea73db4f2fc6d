//! Static mapping tables and integration constants
//!
//! All tables are defined at load time and never mutated. Provider field
//! names follow the Met.no locationforecast vocabulary as the coordinator
//! caches it: instantaneous readings under their raw names, symbol codes
//! with a `_day`/`_night` variant suffix only for the sky-state family
//! (clear sky, fair, partly cloudy).

use weather_entity::attributes::{
    ATTR_CONDITION_CLEAR_NIGHT, ATTR_CONDITION_CLOUDY, ATTR_CONDITION_FOG,
    ATTR_CONDITION_LIGHTNING_RAINY, ATTR_CONDITION_PARTLYCLOUDY, ATTR_CONDITION_POURING,
    ATTR_CONDITION_RAINY, ATTR_CONDITION_SNOWY, ATTR_CONDITION_SNOWY_RAINY, ATTR_CONDITION_SUNNY,
    ATTR_FORECAST_CONDITION, ATTR_FORECAST_NATIVE_PRECIPITATION, ATTR_FORECAST_NATIVE_PRESSURE,
    ATTR_FORECAST_NATIVE_TEMP, ATTR_FORECAST_NATIVE_TEMP_LOW, ATTR_FORECAST_NATIVE_WIND_SPEED,
    ATTR_FORECAST_TIME, ATTR_FORECAST_WIND_BEARING, ATTR_WEATHER_CLOUD_COVERAGE,
    ATTR_WEATHER_CONDITION, ATTR_WEATHER_HUMIDITY, ATTR_WEATHER_PRESSURE,
    ATTR_WEATHER_TEMPERATURE, ATTR_WEATHER_WIND_BEARING, ATTR_WEATHER_WIND_GUST_SPEED,
    ATTR_WEATHER_WIND_SPEED,
};

/// Integration domain, also the platform key in the entity registry.
pub const DOMAIN: &str = "met";

/// Entity name used when neither an explicit name nor home tracking applies.
pub const DEFAULT_NAME: &str = "Met.no";

/// Unique-id sentinel for instances tracking the home location.
pub const HOME_LOCATION_ID: &str = "home";

pub const ATTRIBUTION: &str = "Weather forecast from met.no, delivered by the Norwegian \
                               Meteorological Institute.";

pub const CONFIGURATION_URL: &str = "https://www.met.no/en";

/// Host attribute name → provider field name, instantaneous readings.
pub static ATTR_MAP: &[(&str, &str)] = &[
    (ATTR_WEATHER_CLOUD_COVERAGE, "cloud_area_fraction"),
    (ATTR_WEATHER_CONDITION, "symbol_code"),
    (ATTR_WEATHER_HUMIDITY, "relative_humidity"),
    (ATTR_WEATHER_PRESSURE, "air_pressure_at_sea_level"),
    (ATTR_WEATHER_TEMPERATURE, "air_temperature"),
    (ATTR_WEATHER_WIND_BEARING, "wind_from_direction"),
    (ATTR_WEATHER_WIND_GUST_SPEED, "wind_speed_of_gust"),
    (ATTR_WEATHER_WIND_SPEED, "wind_speed"),
];

/// Host forecast-field name → provider field name, applied per forecast
/// entry.
pub static FORECAST_MAP: &[(&str, &str)] = &[
    (ATTR_FORECAST_CONDITION, "symbol_code"),
    (ATTR_FORECAST_NATIVE_PRECIPITATION, "precipitation_amount"),
    (ATTR_FORECAST_NATIVE_PRESSURE, "air_pressure_at_sea_level"),
    (ATTR_FORECAST_NATIVE_TEMP, "air_temperature_max"),
    (ATTR_FORECAST_NATIVE_TEMP_LOW, "air_temperature_min"),
    (ATTR_FORECAST_NATIVE_WIND_SPEED, "wind_speed"),
    (ATTR_FORECAST_TIME, "time"),
    (ATTR_FORECAST_WIND_BEARING, "wind_from_direction"),
];

/// Provider fields a forecast entry must carry to be usable at all.
/// Entries missing either are dropped, not reported as errors.
pub const FORECAST_REQUIRED_FIELDS: &[&str] = &["air_temperature_max", "time"];

/// Canonical condition name → provider symbol codes it subsumes.
///
/// Declaration order is the tie-break: were a code ever listed in two
/// groups, the first declared group would win. Lookup is a linear scan;
/// the table is small and static.
pub static CONDITIONS_MAP: &[(&str, &[&str])] = &[
    (ATTR_CONDITION_CLEAR_NIGHT, &["clearsky_night"]),
    (ATTR_CONDITION_CLOUDY, &["cloudy"]),
    (ATTR_CONDITION_FOG, &["fog"]),
    (
        ATTR_CONDITION_LIGHTNING_RAINY,
        &[
            "heavyrainandthunder",
            "heavyrainshowersandthunder",
            "heavysleetandthunder",
            "heavysleetshowersandthunder",
            "heavysnowandthunder",
            "heavysnowshowersandthunder",
            "lightrainandthunder",
            "lightrainshowersandthunder",
            "lightsleetandthunder",
            "lightsnowandthunder",
            "lightssleetshowersandthunder",
            "lightssnowshowersandthunder",
            "rainandthunder",
            "rainshowersandthunder",
            "sleetandthunder",
            "sleetshowersandthunder",
            "snowandthunder",
            "snowshowersandthunder",
        ],
    ),
    (
        ATTR_CONDITION_PARTLYCLOUDY,
        &[
            "fair_day",
            "fair_night",
            "partlycloudy_day",
            "partlycloudy_night",
        ],
    ),
    (ATTR_CONDITION_POURING, &["heavyrain", "heavyrainshowers"]),
    (
        ATTR_CONDITION_RAINY,
        &["lightrain", "lightrainshowers", "rain", "rainshowers"],
    ),
    (
        ATTR_CONDITION_SNOWY,
        &[
            "heavysnow",
            "heavysnowshowers",
            "lightsnow",
            "lightsnowshowers",
            "snow",
            "snowshowers",
        ],
    ),
    (
        ATTR_CONDITION_SNOWY_RAINY,
        &[
            "heavysleet",
            "heavysleetshowers",
            "lightsleet",
            "lightsleetshowers",
            "sleet",
            "sleetshowers",
        ],
    ),
    (ATTR_CONDITION_SUNNY, &["clearsky_day"]),
];

/// Provider field backing a host attribute, if the attribute is mapped.
#[must_use]
pub fn provider_field(attribute: &str) -> Option<&'static str> {
    ATTR_MAP
        .iter()
        .find(|(host, _)| *host == attribute)
        .map(|(_, provider)| *provider)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn attr_map_covers_every_current_condition_attribute() {
        let hosts: Vec<&str> = ATTR_MAP.iter().map(|(host, _)| *host).collect();
        for attribute in [
            ATTR_WEATHER_TEMPERATURE,
            ATTR_WEATHER_PRESSURE,
            ATTR_WEATHER_HUMIDITY,
            ATTR_WEATHER_WIND_SPEED,
            ATTR_WEATHER_WIND_BEARING,
            ATTR_WEATHER_WIND_GUST_SPEED,
            ATTR_WEATHER_CLOUD_COVERAGE,
            ATTR_WEATHER_CONDITION,
        ] {
            assert!(hosts.contains(&attribute), "unmapped attribute {attribute}");
        }
    }

    #[test]
    fn mapping_tables_have_unique_keys() {
        let mut seen = HashSet::new();
        for (host, _) in ATTR_MAP {
            assert!(seen.insert(host), "duplicate ATTR_MAP key {host}");
        }
        seen.clear();
        for (host, _) in FORECAST_MAP {
            assert!(seen.insert(host), "duplicate FORECAST_MAP key {host}");
        }
    }

    #[test]
    fn forecast_map_includes_required_targets() {
        let providers: Vec<&str> = FORECAST_MAP.iter().map(|(_, provider)| *provider).collect();
        for required in FORECAST_REQUIRED_FIELDS {
            assert!(providers.contains(required));
        }
    }

    #[test]
    fn no_symbol_code_is_in_two_groups() {
        // Declaration order would break the tie silently; make sure the
        // question never comes up with the shipped table.
        let mut seen = HashSet::new();
        for (group, codes) in CONDITIONS_MAP {
            for code in *codes {
                assert!(seen.insert(code), "{code} appears twice (group {group})");
            }
        }
    }

    #[test]
    fn provider_field_lookup() {
        assert_eq!(
            provider_field(ATTR_WEATHER_TEMPERATURE),
            Some("air_temperature")
        );
        assert_eq!(provider_field(ATTR_WEATHER_CONDITION), Some("symbol_code"));
        assert_eq!(provider_field("uv_index"), None);
    }
}
