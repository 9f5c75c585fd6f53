//! # Astronomical Constants
//!
//! Fixed physical and orbital values shared by every calculation in the engine.
//! The table is built once by the caller and handed to each function by
//! reference, so tests can substitute their own values without touching any
//! global state.

use serde::Serialize;

/// Read-only table of lunar constants.
///
/// Distances are in kilometres, periods in days, epochs in Julian Days.
///
/// # Example
/// ```
/// use moon_clock_lib::constants::AstronomicalConstants;
///
/// let constants = AstronomicalConstants::default();
/// assert_eq!(constants.j2000_epoch, 2_451_545.0);
/// assert!(constants.synodic_month > constants.sidereal_month);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct AstronomicalConstants {
    /// Mean new moon to new moon period
    pub synodic_month: f64,
    /// Orbital period relative to the fixed stars
    pub sidereal_month: f64,
    /// Mean Earth-Moon distance
    pub mean_distance_km: f64,
    /// Closest approach (extreme perigee)
    pub perigee_km: f64,
    /// Farthest distance (extreme apogee)
    pub apogee_km: f64,
    /// Mean lunar radius
    pub lunar_radius_km: f64,
    /// JD of 2000-01-01 in the day-count convention used by [`crate::julian`]
    pub j2000_epoch: f64,
    /// Reference new moon, 2000-01-06 18:14 UT
    pub new_moon_epoch: f64,
    /// Mean orbital eccentricity
    pub eccentricity: f64,
}

impl AstronomicalConstants {
    /// Standard values used throughout the application.
    pub const STANDARD: Self = Self {
        synodic_month: 29.530_588_853,
        sidereal_month: 27.321_661,
        mean_distance_km: 384_400.0,
        perigee_km: 363_104.0,
        apogee_km: 405_696.0,
        lunar_radius_km: 1_737.4,
        j2000_epoch: 2_451_545.0,
        new_moon_epoch: 2_451_550.1,
        eccentricity: 0.0549,
    };

    /// Length of one phase bucket (an eighth of the synodic month).
    pub fn phase_length_days(&self) -> f64 {
        self.synodic_month / 8.0
    }
}

impl Default for AstronomicalConstants {
    fn default() -> Self {
        Self::STANDARD
    }
}
