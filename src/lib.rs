//! # Moon Tracker Core Library
//!
//! This library provides the astronomical calculation engine behind the moon tracker:
//! pure functions that turn a calendar date and an observer location into lunar phase,
//! illumination, distance, sky position and rise/set times.
//!
//! ## Design Philosophy
//!
//! ### Pure Calculations
//! - **No hidden state**: every function takes its inputs and an
//!   [`AstronomicalConstants`] table by reference and returns a fresh value
//! - **Total functions**: no engine call fails; far past/future dates and polar
//!   latitudes simply give less accurate numbers
//! - **Thread-friendly**: results and constants are plain data, safe to share
//!
//! ### Approximation Level
//! The models are closed-form approximations meant for an informational display,
//! not navigation:
//! - **Phase**: mean synodic month from a reference new moon, cosine illumination
//! - **Distance**: single eccentricity term
//! - **Position**: mean lunar longitude only, no obliquity, parallax or refraction
//! - **Rise/Set**: age-driven estimate with longitude, latitude and season nudges
//!
//! ### Dates
//! Inputs are [`chrono::NaiveDate`] values. Pass the observer's *local* calendar
//! date (the local-noon convention) so results do not flip at the UTC day boundary.
//!
//! ## Data Flow
//! 1. [`julian`]: calendar date → Julian Day Number
//! 2. [`lunar`]: Julian Day → phase, illumination, age, distance
//! 3. [`position`] / [`moon_times`]: sky position and clock times for an observer
//! 4. [`report`] / [`renderer`]: bundle and format for display

pub mod config;
pub mod constants;
pub mod julian;
pub mod lunar;
pub mod moon_times;
pub mod observer;
pub mod phases;
pub mod position;
pub mod renderer;
pub mod report;

pub use constants::AstronomicalConstants;
pub use lunar::{calculate_moon_phase, PhaseResult};
pub use moon_times::{calculate_moon_times, TimesResult};
pub use observer::GeoCoordinate;
pub use phases::{MoonPhaseDescriptor, MOON_PHASES};
pub use position::{calculate_lunar_position, PositionResult};
pub use report::MoonReport;
