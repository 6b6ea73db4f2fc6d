//! Geographic coordinates value object

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Error returned when coordinates are out of range
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("invalid coordinates: latitude must be -90 to 90, longitude must be -180 to 180")]
pub struct InvalidCoordinates;

/// A validated latitude/longitude pair
///
/// # Examples
///
/// ```
/// use weather_entity::Coordinates;
///
/// let oslo = Coordinates::new(59.91, 10.75).expect("valid coordinates");
/// assert!((oslo.latitude() - 59.91).abs() < f64::EPSILON);
///
/// assert!(Coordinates::new(91.0, 0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    latitude: f64,
    longitude: f64,
}

impl Coordinates {
    /// Create a new coordinate pair with validation
    ///
    /// # Errors
    ///
    /// Returns [`InvalidCoordinates`] if latitude is not in [-90, 90]
    /// or longitude is not in [-180, 180].
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, InvalidCoordinates> {
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(InvalidCoordinates);
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Create a coordinate pair without validation (for trusted sources)
    #[must_use]
    pub const fn new_unchecked(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Get the latitude
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Get the longitude
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}, {:.6}", self.latitude, self.longitude)
    }
}
