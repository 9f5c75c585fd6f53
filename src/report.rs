//! # Moon Report & Calendar
//!
//! Bundles the three engine results for one date and observer, and builds
//! day-by-day phase listings for the calendar view.

use chrono::NaiveDate;
use log::debug;
use serde::Serialize;

use crate::constants::AstronomicalConstants;
use crate::lunar::{calculate_moon_phase, PhaseResult};
use crate::moon_times::{calculate_moon_times, TimesResult};
use crate::observer::GeoCoordinate;
use crate::position::{calculate_lunar_position, PositionResult};

const NEW_MOON_INDEX: usize = 0;
const FULL_MOON_INDEX: usize = 4;

/// Everything shown on the main panel for one date and place.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoonReport {
    pub date: NaiveDate,
    pub observer: GeoCoordinate,
    pub phase: PhaseResult,
    pub position: PositionResult,
    pub times: TimesResult,
    /// Start of the next Full Moon bucket after `date`
    pub next_full_moon: Option<NaiveDate>,
    /// Start of the next New Moon bucket after `date`
    pub next_new_moon: Option<NaiveDate>,
}

impl MoonReport {
    /// Run the phase, position and rise/set models for `date` at `observer`.
    ///
    /// # Example
    /// ```
    /// use chrono::NaiveDate;
    /// use moon_clock_lib::{AstronomicalConstants, GeoCoordinate, MoonReport};
    ///
    /// let constants = AstronomicalConstants::default();
    /// let here = GeoCoordinate::new(48.85, 2.35).unwrap();
    /// let date = NaiveDate::from_ymd_opt(2024, 1, 26).unwrap();
    ///
    /// let report = MoonReport::compute(date, here, &constants);
    /// assert_eq!(report.phase.phase.name, "Full Moon");
    /// assert_eq!(report.phase.illumination_percent, 100);
    /// ```
    pub fn compute(
        date: NaiveDate,
        observer: GeoCoordinate,
        constants: &AstronomicalConstants,
    ) -> Self {
        debug!(
            "computing report for {date} at ({:.4}, {:.4})",
            observer.lat, observer.lng
        );
        MoonReport {
            date,
            observer,
            phase: calculate_moon_phase(date, constants),
            position: calculate_lunar_position(date, observer.lat, observer.lng, constants),
            times: calculate_moon_times(date, observer.lat, observer.lng, constants),
            next_full_moon: next_occurrence(date, FULL_MOON_INDEX, constants),
            next_new_moon: next_occurrence(date, NEW_MOON_INDEX, constants),
        }
    }
}

/// One row of the lunar calendar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub phase_index: usize,
    pub glyph: &'static str,
    pub illumination_percent: u8,
}

/// Phase summary for `days` consecutive dates starting at `start`.
///
/// Stops early if the calendar runs past the last representable date.
pub fn month_calendar(
    start: NaiveDate,
    days: u32,
    constants: &AstronomicalConstants,
) -> Vec<CalendarDay> {
    start
        .iter_days()
        .take(days as usize)
        .map(|date| {
            let phase = calculate_moon_phase(date, constants);
            CalendarDay {
                date,
                phase_index: phase.phase_index,
                glyph: phase.phase.glyph,
                illumination_percent: phase.illumination_percent,
            }
        })
        .collect()
}

/// First date after `start` on which the phase bucket `phase_index` begins.
///
/// `phase_index` wraps modulo 8. Searches two synodic months ahead, which
/// always contains the start of every bucket; `None` only when the search
/// runs off the end of the calendar.
pub fn next_occurrence(
    start: NaiveDate,
    phase_index: usize,
    constants: &AstronomicalConstants,
) -> Option<NaiveDate> {
    let target = phase_index % 8;
    let horizon = (constants.synodic_month * 2.0).ceil() as usize;

    let mut previous = calculate_moon_phase(start, constants).phase_index;
    for date in start.iter_days().skip(1).take(horizon) {
        let current = calculate_moon_phase(date, constants).phase_index;
        if current == target && previous != target {
            return Some(date);
        }
        previous = current;
    }
    None
}
