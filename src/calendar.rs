//! Parsing of the raw request fields: calendar date, clock time and coordinates.

use chrono::{Datelike, NaiveDate, NaiveTime};

use crate::error::{Result, YantraError};
use crate::types::Location;

pub fn parse_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|_| YantraError::InvalidDate {
        input: input.to_string(),
    })
}

pub fn day_of_year(date: NaiveDate) -> i32 {
    date.ordinal() as i32
}

pub fn date_to_day_of_year(input: &str) -> Result<i32> {
    parse_date(input).map(day_of_year)
}

/// A parsed clock reading: decimal hours for the solar maths and the
/// wall-clock minute used to localize it in a timezone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClockTime {
    pub hours: f64,
    pub time: NaiveTime,
}

/// Accepts `HH:MM` (24-hour) or decimal hours such as `13.5`.
pub fn parse_clock(input: &str) -> Result<ClockTime> {
    let s = input.trim();
    let invalid = |reason| YantraError::InvalidTime {
        input: input.to_string(),
        reason,
    };

    if let Some((h, m)) = s.split_once(':') {
        let hour: u32 = h.trim().parse().map_err(|_| invalid("hour is not a number"))?;
        let minute: u32 = m.trim().parse().map_err(|_| invalid("minute is not a number"))?;
        let time = NaiveTime::from_hms_opt(hour, minute, 0)
            .ok_or_else(|| invalid("hour must be 0-23 and minute 0-59"))?;
        return Ok(ClockTime {
            hours: hour as f64 + minute as f64 / 60.0,
            time,
        });
    }

    let hours: f64 = s
        .parse()
        .map_err(|_| invalid("expected HH:MM or decimal hours"))?;
    if !(0.0..24.0).contains(&hours) {
        return Err(invalid("decimal hours must be between 0 and 24"));
    }
    let time =
        clock_to_time(hours).ok_or_else(|| invalid("decimal hours must be between 0 and 24"))?;
    Ok(ClockTime { hours, time })
}

pub fn parse_clock_time(input: &str) -> Result<f64> {
    parse_clock(input).map(|c| c.hours)
}

/// Whole hour and minute of a decimal clock reading, minutes truncated.
pub fn clock_to_time(clock_hours: f64) -> Option<NaiveTime> {
    let hour = clock_hours.trunc();
    let minute = ((clock_hours - hour) * 60.0).trunc();
    NaiveTime::from_hms_opt(hour as u32, minute as u32, 0)
}

pub fn parse_coordinate(input: &str) -> Result<f64> {
    input
        .trim()
        .parse::<f64>()
        .map_err(|_| YantraError::UnparseableCoordinate {
            input: input.to_string(),
        })
}

pub fn parse_location(latitude: &str, longitude: &str) -> Result<Location> {
    Location::new(parse_coordinate(latitude)?, parse_coordinate(longitude)?)
}
