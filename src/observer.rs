//! # Observer Location
//!
//! The engine only reads coordinates; range checks happen here, at the edge
//! where user input or configuration turns into a [`GeoCoordinate`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Reasons a latitude/longitude pair is rejected.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum CoordinateError {
    #[error("latitude {0} is outside -90..=90")]
    LatitudeOutOfRange(f64),

    #[error("longitude {0} is outside -180..=180")]
    LongitudeOutOfRange(f64),

    #[error("coordinate is not a finite number")]
    NotFinite,
}

/// Geographic position of the observer, in degrees (north and east positive).
///
/// # Example
/// ```
/// use moon_clock_lib::observer::GeoCoordinate;
///
/// let boston = GeoCoordinate::new(42.36, -71.06).unwrap();
/// assert_eq!(boston.lat, 42.36);
/// assert!(GeoCoordinate::new(91.0, 0.0).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeoCoordinate {
    pub lat: f64,
    pub lng: f64,
}

impl GeoCoordinate {
    /// Build a coordinate, rejecting values outside the valid ranges.
    pub fn new(lat: f64, lng: f64) -> Result<Self, CoordinateError> {
        let coordinate = Self { lat, lng };
        coordinate.validate()?;
        Ok(coordinate)
    }

    /// Check an already-built coordinate (e.g. one deserialized from config).
    pub fn validate(&self) -> Result<(), CoordinateError> {
        if !self.lat.is_finite() || !self.lng.is_finite() {
            return Err(CoordinateError::NotFinite);
        }
        if !(-90.0..=90.0).contains(&self.lat) {
            return Err(CoordinateError::LatitudeOutOfRange(self.lat));
        }
        if !(-180.0..=180.0).contains(&self.lng) {
            return Err(CoordinateError::LongitudeOutOfRange(self.lng));
        }
        Ok(())
    }
}
