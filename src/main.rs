//! # Moon Tracker Application Entry Point
//!
//! This binary wires configuration, command-line overrides and the calculation
//! engine together and prints the result to the terminal.
//!
//! ```text
//! moon-tracker [--date YYYY-MM-DD] [--lat DEG --lng DEG] [--config PATH] [--json] [--calendar]
//! ```
//!
//! Diagnostics go to stderr through `env_logger` (set `RUST_LOG=debug` for detail);
//! the report itself goes to stdout.

use anyhow::{anyhow, bail, Context};
use chrono::{Local, NaiveDate};
use log::{debug, info};
use std::env;

use moon_clock_lib::config::{Config, CONFIG_FILE};
use moon_clock_lib::renderer::{draw_ascii, render_calendar};
use moon_clock_lib::report::month_calendar;
use moon_clock_lib::{AstronomicalConstants, GeoCoordinate, MoonReport};

/// Parsed command-line options
#[derive(Debug, Default, PartialEq)]
struct Options {
    date: Option<NaiveDate>,
    lat: Option<f64>,
    lng: Option<f64>,
    config_path: Option<String>,
    json: bool,
    calendar: bool,
}

/// Parse arguments (without the program name)
fn parse_args<I: IntoIterator<Item = String>>(args: I) -> anyhow::Result<Options> {
    let mut options = Options::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--date" => {
                let value = next_value(&mut args, "--date")?;
                let date = NaiveDate::parse_from_str(&value, "%Y-%m-%d")
                    .with_context(|| format!("invalid --date '{value}', expected YYYY-MM-DD"))?;
                options.date = Some(date);
            }
            "--lat" => {
                let value = next_value(&mut args, "--lat")?;
                options.lat = Some(
                    value
                        .parse()
                        .with_context(|| format!("invalid --lat '{value}'"))?,
                );
            }
            "--lng" => {
                let value = next_value(&mut args, "--lng")?;
                options.lng = Some(
                    value
                        .parse()
                        .with_context(|| format!("invalid --lng '{value}'"))?,
                );
            }
            "--config" => options.config_path = Some(next_value(&mut args, "--config")?),
            "--json" => options.json = true,
            "--calendar" => options.calendar = true,
            other => bail!("unknown argument '{other}'"),
        }
    }

    Ok(options)
}

fn next_value<I: Iterator<Item = String>>(args: &mut I, flag: &str) -> anyhow::Result<String> {
    args.next().ok_or_else(|| anyhow!("{flag} requires a value"))
}

/// Resolve the observer from config, with command-line overrides on top
fn resolve_observer(options: &Options, config: &Config) -> anyhow::Result<GeoCoordinate> {
    let lat = options.lat.unwrap_or(config.observer.latitude);
    let lng = options.lng.unwrap_or(config.observer.longitude);
    GeoCoordinate::new(lat, lng).context("observer location rejected")
}

/// Main application entry point.
fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let options = parse_args(env::args().skip(1))?;
    debug!("options: {options:?}");

    let config = match &options.config_path {
        Some(path) => Config::try_load_from_path(path)
            .with_context(|| format!("could not load config from {path}"))?,
        None => Config::load_from_path(CONFIG_FILE),
    };

    let observer = resolve_observer(&options, &config)?;
    // Local calendar date keeps the report stable through the day
    let date = options.date.unwrap_or_else(|| Local::now().date_naive());
    let constants = AstronomicalConstants::default();

    if options.calendar {
        info!(
            "Listing {} days from {date}",
            config.display.calendar_days
        );
        let days = month_calendar(date, config.display.calendar_days, &constants);
        if options.json {
            println!("{}", serde_json::to_string_pretty(&days)?);
        } else {
            print!("{}", render_calendar(&days));
        }
        return Ok(());
    }

    let report = MoonReport::compute(date, observer, &constants);
    if options.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        draw_ascii(&report, &config);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_all_flags() {
        let options = parse_args(args(&[
            "--date", "2024-02-29", "--lat", "-33.9", "--lng", "151.2", "--json", "--calendar",
        ]))
        .unwrap();
        assert_eq!(options.date, NaiveDate::from_ymd_opt(2024, 2, 29));
        assert_eq!(options.lat, Some(-33.9));
        assert_eq!(options.lng, Some(151.2));
        assert!(options.json);
        assert!(options.calendar);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(parse_args(args(&["--date", "2024-02-30"])).is_err());
        assert!(parse_args(args(&["--lat"])).is_err());
        assert!(parse_args(args(&["--lng", "east"])).is_err());
        assert!(parse_args(args(&["--stdout"])).is_err());
    }

    #[test]
    fn test_overrides_take_precedence() {
        let config = Config::default();
        let options = Options {
            lat: Some(10.0),
            ..Options::default()
        };
        let observer = resolve_observer(&options, &config).unwrap();
        assert_eq!(observer.lat, 10.0);
        assert_eq!(observer.lng, config.observer.longitude);
    }

    #[test]
    fn test_out_of_range_override_rejected() {
        let options = Options {
            lng: Some(200.0),
            ..Options::default()
        };
        assert!(resolve_observer(&options, &Config::default()).is_err());
    }
}
