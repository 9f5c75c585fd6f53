//! # Moonrise, Moonset and Best Viewing
//!
//! Closed-form estimate of the local clock times, not a horizon-crossing
//! search. Moonrise drifts through the day with lunar age (about 50 minutes
//! later each day) and is nudged for longitude, latitude and season:
//!
//! ```text
//! rise = 6 h + age/P · 24 h − lng/15 + 2·sin(lat) + 0.5·sin(2π·doy/365)
//! set  = rise + 12.4 h
//! best = (rise + set) / 2
//! ```
//!
//! Every value is wrapped into `[0, 24)` with a floored modulo. Polar
//! latitudes are not special-cased.

use chrono::NaiveDate;
use core::f64::consts::TAU;
use serde::Serialize;

use crate::constants::AstronomicalConstants;
use crate::julian::{day_of_year, floored_mod};
use crate::lunar::calculate_moon_phase;

/// Mean time the Moon spends above the horizon, hours.
const HOURS_ABOVE_HORIZON: f64 = 12.4;

/// Approximate moonrise at zero age, zero longitude and latitude.
const BASE_RISE_HOUR: f64 = 6.0;

/// Local clock times, both formatted and raw.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimesResult {
    pub rise_local: String,
    pub set_local: String,
    pub best_viewing_local: String,
    pub rise_raw_hours: f64,
    pub set_raw_hours: f64,
    pub best_viewing_raw_hours: f64,
}

/// Estimate rise/set/best-viewing times for a date and location.
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use moon_clock_lib::{constants::AstronomicalConstants, moon_times::calculate_moon_times};
///
/// let constants = AstronomicalConstants::default();
/// let date = NaiveDate::from_ymd_opt(2024, 6, 21).unwrap();
/// let times = calculate_moon_times(date, 51.48, 0.0, &constants);
/// assert!((0.0..24.0).contains(&times.rise_raw_hours));
/// assert!(times.rise_local.ends_with("AM") || times.rise_local.ends_with("PM"));
/// ```
pub fn calculate_moon_times(
    date: NaiveDate,
    lat: f64,
    lng: f64,
    constants: &AstronomicalConstants,
) -> TimesResult {
    let age_days = calculate_moon_phase(date, constants).age_days;

    let base_time = BASE_RISE_HOUR + (age_days / constants.synodic_month) * 24.0;
    let time_zone_offset = lng / 15.0;
    let latitude_adj = lat.to_radians().sin() * 2.0;
    let seasonal_adj = (f64::from(day_of_year(date)) / 365.0 * TAU).sin() * 0.5;

    let rise = floored_mod(
        base_time - time_zone_offset + latitude_adj + seasonal_adj,
        24.0,
    );
    let set = floored_mod(rise + HOURS_ABOVE_HORIZON, 24.0);
    let best = floored_mod((rise + set) / 2.0, 24.0);

    TimesResult {
        rise_local: format_clock_time(rise),
        set_local: format_clock_time(set),
        best_viewing_local: format_clock_time(best),
        rise_raw_hours: rise,
        set_raw_hours: set,
        best_viewing_raw_hours: best,
    }
}

/// Format fractional hours `[0, 24)` as a 12-hour clock string, e.g. `"7:05 PM"`.
///
/// Minutes are truncated, not rounded.
pub fn format_clock_time(hours: f64) -> String {
    let whole = hours.floor();
    let minutes = (((hours - whole) * 60.0).floor() as u32).min(59);
    let hour = whole as u32;

    let period = if hour < 12 { "AM" } else { "PM" };
    let display_hour = match hour {
        0 => 12,
        h if h > 12 => h - 12,
        h => h,
    };

    format!("{display_hour}:{minutes:02} {period}")
}
