//! Moon phase, illumination & low-precision distance model.
//!
//! Accuracy: phase bucket good to within a few hours of the true octant
//! boundary; illumination is a cosine proxy of the lit fraction, not a
//! terminator calculation; distance is a single eccentricity term, so it
//! tracks the real perigee/apogee cycle only loosely.

use chrono::NaiveDate;
use core::f64::consts::TAU;
use log::{debug, trace};
use serde::Serialize;

use crate::constants::AstronomicalConstants;
use crate::julian::{date_to_julian_day, floored_mod};
use crate::phases::{phase_by_index, MoonPhaseDescriptor};

/// Everything the phase model reports for one date.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PhaseResult {
    pub phase: &'static MoonPhaseDescriptor,
    /// Index 0 – 7 into the phase catalog (0 = new, 4 = full).
    pub phase_index: usize,
    /// Lit part of the disk, 0 – 100.
    pub illumination_percent: u8,
    /// Days since the last new moon, rounded to 0.1.
    pub age_days: f64,
    /// Geocentric distance, whole kilometres.
    pub distance_km: i64,
    pub next_phase: &'static MoonPhaseDescriptor,
    /// Days until the next phase bucket starts, rounded to 0.1.
    pub days_to_next_phase: f64,
    /// Position in the synodic cycle, `[0, 2π)`.
    pub phase_angle_radians: f64,
    /// Apparent diameter in arcseconds.
    pub angular_size_arcsec: f64,
}

/// Compute the phase for a calendar date.
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use moon_clock_lib::{constants::AstronomicalConstants, lunar::calculate_moon_phase};
///
/// let constants = AstronomicalConstants::default();
/// let date = NaiveDate::from_ymd_opt(2000, 1, 21).unwrap();
/// let result = calculate_moon_phase(date, &constants);
/// assert_eq!(result.phase.name, "Full Moon");
/// ```
pub fn calculate_moon_phase(date: NaiveDate, constants: &AstronomicalConstants) -> PhaseResult {
    moon_phase_at_julian_day(date_to_julian_day(date), constants)
}

/// Phase model evaluated at an arbitrary (possibly fractional) Julian Day.
pub fn moon_phase_at_julian_day(jd: f64, constants: &AstronomicalConstants) -> PhaseResult {
    let synodic = constants.synodic_month;

    // ---------- 1. Position in the synodic cycle ----------------------------
    // Floored so dates before the reference new moon still land in [0, P).
    let days_since_new_moon = floored_mod(jd - constants.new_moon_epoch, synodic);
    let cycle_fraction = days_since_new_moon / synodic;
    let phase_angle = floored_mod(cycle_fraction * TAU, TAU);

    // ---------- 2. Illumination (cosine proxy) ------------------------------
    let illumination = ((1.0 - phase_angle.cos()) * 50.0).clamp(0.0, 100.0).round() as u8;

    // ---------- 3. Phase bucket ---------------------------------------------
    // Floor: bucket k spans [k·P/8, (k+1)·P/8).
    let phase_index = ((cycle_fraction * 8.0).floor() as usize) % 8;
    let next_phase_index = (phase_index + 1) % 8;

    // ---------- 4. Distance (single eccentricity term) ----------------------
    let anomaly = (jd - constants.j2000_epoch) / 365.25 * TAU;
    let distance = constants.mean_distance_km * (1.0 - constants.eccentricity * anomaly.cos());

    // ---------- 5. Countdown to next bucket ---------------------------------
    let phase_length = constants.phase_length_days();
    let days_to_next = phase_length - floored_mod(days_since_new_moon, phase_length);

    trace!(
        "jd={jd} days_since_new_moon={days_since_new_moon:.4} anomaly={anomaly:.4} distance={distance:.1}"
    );

    let result = PhaseResult {
        phase: phase_by_index(phase_index),
        phase_index,
        illumination_percent: illumination,
        age_days: round_tenth(days_since_new_moon),
        distance_km: distance.round() as i64,
        next_phase: phase_by_index(next_phase_index),
        days_to_next_phase: round_tenth(days_to_next),
        phase_angle_radians: phase_angle,
        angular_size_arcsec: angular_size(distance, constants),
    };

    debug!(
        "{} ({}% lit, age {} d, {} km)",
        result.phase.name, result.illumination_percent, result.age_days, result.distance_km
    );

    result
}

/// Apparent angular diameter of the Moon, in arcseconds, at `distance_km`.
pub fn angular_size(distance_km: f64, constants: &AstronomicalConstants) -> f64 {
    2.0 * (constants.lunar_radius_km / distance_km).atan().to_degrees() * 3600.0
}

fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_reference_new_moon() {
        let c = AstronomicalConstants::default();
        let result = calculate_moon_phase(ymd(2000, 1, 6), &c);
        // 0.1 d before the epoch: last sliver of the previous cycle
        assert!(
            result.phase_index == 7 || result.phase_index == 0,
            "index {}",
            result.phase_index
        );
        assert!(result.illumination_percent <= 1);
        assert_eq!(result.next_phase.name, "New Moon");
        assert!((result.age_days - 29.4).abs() < 0.11);
    }

    #[test]
    fn test_full_moon_two_weeks_later() {
        let c = AstronomicalConstants::default();
        let result = calculate_moon_phase(ymd(2000, 1, 21), &c);
        assert_eq!(result.phase_index, 4);
        assert!(result.illumination_percent >= 99);
    }

    #[test]
    fn test_epoch_exact_is_new() {
        let c = AstronomicalConstants::default();
        let result = moon_phase_at_julian_day(c.new_moon_epoch, &c);
        assert_eq!(result.phase_index, 0);
        assert_eq!(result.illumination_percent, 0);
        assert_eq!(result.age_days, 0.0);
        assert_eq!(result.phase_angle_radians, 0.0);
        assert!((result.days_to_next_phase - 3.7).abs() < 1e-9);
    }

    #[test]
    fn test_bucket_boundary_rounds_down() {
        let c = AstronomicalConstants::default();
        let just_before = c.new_moon_epoch + c.phase_length_days() * 2.0 - 1e-6;
        let at = c.new_moon_epoch + c.phase_length_days() * 2.0 + 1e-6;
        assert_eq!(moon_phase_at_julian_day(just_before, &c).phase_index, 1);
        assert_eq!(moon_phase_at_julian_day(at, &c).phase_index, 2);
    }

    #[test]
    fn test_dates_before_epoch_stay_in_range() {
        let c = AstronomicalConstants::default();
        let result = calculate_moon_phase(ymd(1066, 10, 14), &c);
        assert!(result.age_days >= 0.0 && result.age_days <= c.synodic_month);
        assert!(result.phase_index < 8);
        assert!((0.0..TAU).contains(&result.phase_angle_radians));
    }

    #[test]
    fn test_angular_size_at_mean_distance() {
        let c = AstronomicalConstants::default();
        let arcsec = angular_size(c.mean_distance_km, &c);
        // Roughly 31 arcminutes
        assert!((1860.0..1870.0).contains(&arcsec), "{arcsec}");
        assert!(angular_size(c.perigee_km, &c) > angular_size(c.apogee_km, &c));
    }

    #[test]
    fn test_round_tenth() {
        assert_eq!(round_tenth(3.6913), 3.7);
        assert_eq!(round_tenth(0.04), 0.0);
    }
}
