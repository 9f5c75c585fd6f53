//! # Calendar and Angle Helpers
//!
//! Calendar date → Julian Day Number conversion plus the floored-modulo
//! helpers every other module uses to keep angles and clock hours in range.
//!
//! Dates are [`chrono::NaiveDate`] values: a definite proleptic Gregorian day
//! with no time-of-day component. Callers that hold a `DateTime` should pass
//! its *local* date so the result does not flicker at the UTC day boundary.

use chrono::{Datelike, NaiveDate};

/// Convert a calendar date to its Julian Day Number.
///
/// Uses the integer day-count form (no fractional day), so
/// `2000-01-01` maps to exactly `2451545`.
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use moon_clock_lib::julian::date_to_julian_day;
///
/// let j2000 = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
/// assert_eq!(date_to_julian_day(j2000), 2_451_545.0);
/// ```
pub fn date_to_julian_day(date: NaiveDate) -> f64 {
    let year = i64::from(date.year());
    let month = i64::from(date.month());
    let day = i64::from(date.day());

    // Shift to a March-based year so the leap day falls at the end
    let a = (14 - month).div_euclid(12);
    let y = year + 4800 - a;
    let m = month + 12 * a - 3;

    let jdn = day + (153 * m + 2).div_euclid(5) + 365 * y + y.div_euclid(4) - y.div_euclid(100)
        + y.div_euclid(400)
        - 32045;

    jdn as f64
}

/// Whole days since "January 0" of the date's year (Jan 1 → 1).
pub fn day_of_year(date: NaiveDate) -> u32 {
    date.ordinal()
}

/// Remainder that is always in `[0, n)` for a positive `n`.
///
/// `rem_euclid` can return exactly `n` when a tiny negative input rounds up,
/// which would break half-open range checks downstream.
pub fn floored_mod(x: f64, n: f64) -> f64 {
    let r = x.rem_euclid(n);
    if r >= n {
        0.0
    } else {
        r
    }
}

/// Normalize an angle in degrees to `[0, 360)`.
pub fn normalize_degrees(deg: f64) -> f64 {
    floored_mod(deg, 360.0)
}
