//! Met.no integration configuration

use serde::{Deserialize, Serialize};

use weather_entity::{Coordinates, InvalidCoordinates};

/// Per-instance configuration
///
/// An instance either tracks the host's home location or points at fixed
/// coordinates; the unique identifier and the display name both derive
/// from this.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetConfig {
    /// Explicit entity name. Falls back to the host's location name when
    /// tracking home, or to the integration default otherwise.
    #[serde(default)]
    pub name: Option<String>,

    /// Follow the host's configured home location.
    #[serde(default)]
    pub track_home: bool,

    #[serde(default)]
    pub latitude: f64,

    #[serde(default)]
    pub longitude: f64,
}

impl MetConfig {
    /// Configuration tracking the host's home location
    #[must_use]
    pub fn for_home() -> Self {
        Self {
            track_home: true,
            ..Self::default()
        }
    }

    /// Configuration for a fixed location
    ///
    /// # Errors
    ///
    /// Returns [`InvalidCoordinates`] when the coordinates are out of
    /// range.
    pub fn for_location(latitude: f64, longitude: f64) -> Result<Self, InvalidCoordinates> {
        Coordinates::new(latitude, longitude)?;
        Ok(Self {
            latitude,
            longitude,
            ..Self::default()
        })
    }

    /// Validate the configured coordinates
    ///
    /// Home-tracking instances carry no coordinates of their own and are
    /// always valid.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidCoordinates`] when fixed coordinates are out of
    /// range.
    pub fn validate(&self) -> Result<(), InvalidCoordinates> {
        if self.track_home {
            return Ok(());
        }
        Coordinates::new(self.latitude, self.longitude).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn for_home_sets_the_flag() {
        let config = MetConfig::for_home();
        assert!(config.track_home);
        assert!(config.name.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn for_location_validates() {
        assert!(MetConfig::for_location(59.91, 10.75).is_ok());
        assert!(MetConfig::for_location(95.0, 10.75).is_err());
        assert!(MetConfig::for_location(59.91, 200.0).is_err());
    }

    #[test]
    fn validate_checks_fixed_coordinates() {
        let config = MetConfig {
            latitude: 120.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn deserializes_sparse_input() {
        let config: MetConfig = serde_json::from_str(r#"{"track_home": true}"#).expect("parse");
        assert!(config.track_home);
        assert_eq!(config.name, None);
    }

    #[test]
    fn deserializes_full_input() {
        let config: MetConfig = serde_json::from_str(
            r#"{"name": "Cabin", "track_home": false, "latitude": 61.1, "longitude": 8.5}"#,
        )
        .expect("parse");
        assert_eq!(config.name.as_deref(), Some("Cabin"));
        assert!((config.latitude - 61.1).abs() < f64::EPSILON);
    }
}
