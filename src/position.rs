//! Topocentric sky position of the Moon (altitude/azimuth).
//!
//! Low-order model: only the mean lunar longitude `L` feeds the output, and
//! it is used directly as both right ascension and (via `asin(sin L)`) the
//! declination proxy. No obliquity, parallax, nutation or refraction.
//! The mean elongation, anomalies and argument of latitude are still
//! evaluated so they are available alongside `L`.

use chrono::NaiveDate;
use log::trace;
use serde::Serialize;

use crate::constants::AstronomicalConstants;
use crate::julian::{date_to_julian_day, normalize_degrees};

/// Mean lunar elements at `T` Julian centuries since J2000, degrees in `[0, 360)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MeanElements {
    /// Mean longitude
    pub l: f64,
    /// Mean elongation
    pub d: f64,
    /// Sun's mean anomaly
    pub m: f64,
    /// Moon's mean anomaly
    pub m_prime: f64,
    /// Mean argument of latitude
    pub f: f64,
}

/// Where the Moon sits in the observer's sky.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PositionResult {
    /// -90 – 90
    pub altitude_deg: f64,
    /// 0 – 360, clockwise from north
    pub azimuth_deg: f64,
    pub right_ascension_deg: f64,
    pub declination_deg: f64,
}

impl PositionResult {
    pub fn is_above_horizon(&self) -> bool {
        self.altitude_deg > 0.0
    }
}

pub fn mean_elements(t: f64) -> MeanElements {
    MeanElements {
        l: normalize_degrees(218.316_447_7 + 481_267.881_234_21 * t),
        d: normalize_degrees(297.850_192_1 + 445_267.111_403_4 * t),
        m: normalize_degrees(357.529_109_2 + 35_999.050_290_9 * t),
        m_prime: normalize_degrees(134.963_396_4 + 477_198.867_505_5 * t),
        f: normalize_degrees(93.272_095_0 + 483_202.017_523_3 * t),
    }
}

/// Sky position for a calendar date at `lat`/`lng` (degrees).
///
/// Coordinates are not validated here; see [`crate::observer::GeoCoordinate`].
pub fn calculate_lunar_position(
    date: NaiveDate,
    lat: f64,
    lng: f64,
    constants: &AstronomicalConstants,
) -> PositionResult {
    calculate_lunar_position_at(date_to_julian_day(date), lat, lng, constants)
}

/// Same as [`calculate_lunar_position`] for an arbitrary Julian Day.
pub fn calculate_lunar_position_at(
    jd: f64,
    lat: f64,
    lng: f64,
    constants: &AstronomicalConstants,
) -> PositionResult {
    let days = jd - constants.j2000_epoch;
    let t = days / 36_525.0;

    let elements = mean_elements(t);
    trace!("mean elements at T={t:.8}: {elements:?}");

    let l_rad = elements.l.to_radians();
    let lat_rad = lat.to_radians();

    // Sidereal time → hour angle
    let gmst = 280.460_618_37 + 360.985_647_366_29 * days;
    let lst = normalize_degrees(gmst + lng).to_radians();
    let hour_angle = lst - l_rad;

    let sin_alt =
        lat_rad.sin() * l_rad.sin() + lat_rad.cos() * l_rad.cos() * hour_angle.cos();
    let altitude = sin_alt.clamp(-1.0, 1.0).asin().to_degrees();

    let azimuth = normalize_degrees(
        (-hour_angle.sin())
            .atan2(lat_rad.cos() * l_rad.tan() - lat_rad.sin() * hour_angle.cos())
            .to_degrees(),
    );

    PositionResult {
        altitude_deg: altitude,
        azimuth_deg: azimuth,
        right_ascension_deg: elements.l,
        declination_deg: l_rad.sin().clamp(-1.0, 1.0).asin().to_degrees(),
    }
}

/// 16-point compass label for an azimuth in degrees.
pub fn compass_point(azimuth_deg: f64) -> &'static str {
    const POINTS: [&str; 16] = [
        "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW",
        "NW", "NNW",
    ];
    let sector = ((normalize_degrees(azimuth_deg) + 11.25) / 22.5).floor() as usize % 16;
    POINTS[sector]
}
