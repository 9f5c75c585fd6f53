//! # Moon Report Rendering
//!
//! Turns engine results into plain-text panels for the terminal. All
//! formatting lives here so the calculation modules stay free of display
//! concerns.

use crate::config::{Config, DisplayConfig};
use crate::position::compass_point;
use crate::report::{CalendarDay, MoonReport};
use std::fmt::Write;

/// Format a distance in kilometres with thousands separators
fn format_distance(km: i64) -> String {
    let digits = km.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if km < 0 {
        grouped.insert(0, '-');
    }
    format!("{grouped} km")
}

/// Horizontal bar for the lit fraction, e.g. `[#####.....]`
fn illumination_bar(percent: u8, width: usize) -> String {
    let filled = (usize::from(percent.min(100)) * width + 50) / 100;
    format!("[{}{}]", "#".repeat(filled), ".".repeat(width - filled))
}

/// Format a signed angle with one decimal and a degree sign
fn format_angle(deg: f64) -> String {
    format!("{deg:+.1}°")
}

/// Build the main report panel.
pub fn render_report(report: &MoonReport, place: &str, display: &DisplayConfig) -> String {
    let phase = &report.phase;
    let position = &report.position;
    let times = &report.times;

    // Writing to a String cannot fail
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Moon over {place} on {} ({:.2}, {:.2})",
        report.date.format("%A, %B %-d %Y"),
        report.observer.lat,
        report.observer.lng
    );
    let _ = writeln!(out, "{}", "─".repeat(48));
    let _ = writeln!(out, "{} {}", phase.phase.glyph, phase.phase.name);
    let _ = writeln!(out, "  {}", phase.phase.description);
    if display.show_photography_note {
        let _ = writeln!(out, "  Photo tip: {}", phase.phase.photography_note);
    }
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "Illumination   {} {:>3}%",
        illumination_bar(phase.illumination_percent, display.bar_width),
        phase.illumination_percent
    );
    let _ = writeln!(out, "Age            {:.1} days", phase.age_days);
    let _ = writeln!(out, "Distance       {}", format_distance(phase.distance_km));
    let _ = writeln!(
        out,
        "Angular size   {:.1}′",
        phase.angular_size_arcsec / 60.0
    );
    let _ = writeln!(
        out,
        "Next phase     {} {} in {:.1} days",
        phase.next_phase.glyph, phase.next_phase.name, phase.days_to_next_phase
    );
    for (label, date) in [
        ("Next new moon ", report.next_new_moon),
        ("Next full moon", report.next_full_moon),
    ] {
        if let Some(date) = date {
            let _ = writeln!(out, "{label} {}", date.format("%a %b %-d"));
        }
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "Moonrise       {}", times.rise_local);
    let _ = writeln!(out, "Moonset        {}", times.set_local);
    let _ = writeln!(out, "Best viewing   {}", times.best_viewing_local);
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "Altitude       {}{}",
        format_angle(position.altitude_deg),
        if position.is_above_horizon() {
            ""
        } else {
            " (below horizon)"
        }
    );
    let _ = writeln!(
        out,
        "Azimuth        {:.1}° {}",
        position.azimuth_deg,
        compass_point(position.azimuth_deg)
    );
    let _ = writeln!(
        out,
        "RA / Dec       {:.1}° / {}",
        position.right_ascension_deg,
        format_angle(position.declination_deg)
    );

    out
}

/// Build a day-per-line calendar listing.
pub fn render_calendar(days: &[CalendarDay]) -> String {
    let mut out = String::new();
    for day in days {
        let _ = writeln!(
            out,
            "{}  {}  {:>3}%  {}",
            day.date.format("%a %Y-%m-%d"),
            day.glyph,
            day.illumination_percent,
            illumination_bar(day.illumination_percent, 10)
        );
    }
    out
}

/// Print the report to stdout for terminal use.
pub fn draw_ascii(report: &MoonReport, config: &Config) {
    print!(
        "{}",
        render_report(report, &config.observer.name, &config.display)
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::AstronomicalConstants;
    use crate::observer::GeoCoordinate;
    use crate::report::month_calendar;
    use chrono::NaiveDate;

    #[test]
    fn test_format_distance() {
        assert_eq!(format_distance(384_400), "384,400 km");
        assert_eq!(format_distance(999), "999 km");
        assert_eq!(format_distance(1_000), "1,000 km");
        assert_eq!(format_distance(-363_104), "-363,104 km");
    }

    #[test]
    fn test_illumination_bar() {
        assert_eq!(illumination_bar(0, 10), "[..........]");
        assert_eq!(illumination_bar(50, 10), "[#####.....]");
        assert_eq!(illumination_bar(100, 4), "[####]");
        assert_eq!(illumination_bar(255, 4), "[####]");
    }

    #[test]
    fn test_format_angle() {
        assert_eq!(format_angle(12.345), "+12.3°");
        assert_eq!(format_angle(-0.06), "-0.1°");
    }

    #[test]
    fn test_render_report_sections() {
        let constants = AstronomicalConstants::default();
        let here = GeoCoordinate::new(51.4779, -0.0015).unwrap();
        let date = NaiveDate::from_ymd_opt(2000, 1, 21).unwrap();
        let report = MoonReport::compute(date, here, &constants);

        let mut display = DisplayConfig::default();
        let text = render_report(&report, "Greenwich", &display);
        assert!(text.starts_with("Moon over Greenwich on Friday, January 21 2000"));
        assert!(text.contains("🌕 Full Moon"));
        assert!(text.contains("Photo tip:"));
        assert!(text.contains(&report.times.rise_local));
        assert!(text.contains("Next phase     🌖 Waning Gibbous"));
        assert!(text.contains("Next new moon  Sat Feb 5"));
        assert!(text.contains("Next full moon Sun Feb 20"));

        display.show_photography_note = false;
        let text = render_report(&report, "Greenwich", &display);
        assert!(!text.contains("Photo tip:"));
    }

    #[test]
    fn test_render_calendar_one_line_per_day() {
        let constants = AstronomicalConstants::default();
        let start = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let days = month_calendar(start, 7, &constants);
        let text = render_calendar(&days);
        assert_eq!(text.lines().count(), 7);
        assert!(text.starts_with("Fri 2024-03-01"));
    }
}
