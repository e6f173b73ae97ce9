use chrono::{NaiveDate, NaiveDateTime};
use log::debug;
use serde::Serialize;

use crate::angles;
use crate::calendar::{day_of_year, parse_clock, parse_date};
use crate::config::ObserverConfig;
use crate::error::Result;
use crate::instruments;
use crate::offset::{resolve_utc_offset, OffsetResolver};
use crate::sun_events;
use crate::types::{InstrumentReadings, Location, SolarContext, SunEvent};

/// Zone used when the caller has none, e.g. coordinate lookup found nothing.
pub const DEFAULT_ZONE: &str = "UTC";

/// Raw, unvalidated request fields.
#[derive(Debug, Clone, Copy)]
pub struct ObservationRequest<'a> {
    pub location: Location,
    pub date: &'a str,
    pub clock_time: Option<&'a str>,
    /// Literal signed offset in hours or a timezone name.
    pub utc_offset: Option<&'a str>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Observation {
    pub location: Location,
    pub date: NaiveDate,
    pub clock_hours: f64,
    pub solar: SolarContext,
    pub sun_events: SunEvent,
    pub instruments: InstrumentReadings,
}

pub fn observe(
    location: Location,
    date: NaiveDate,
    clock_hours: f64,
    utc_offset_hours: f64,
) -> Observation {
    let solar = angles::solar_context(
        day_of_year(date),
        location.longitude,
        utc_offset_hours,
        clock_hours,
    );
    debug!(
        "day {} decl {:.2}° eot {:.2} min tc {:.2} min lst {:.4} h",
        solar.day_of_year,
        solar.declination_deg,
        solar.equation_of_time_min,
        solar.time_correction_min,
        solar.local_solar_time_hours
    );

    let sun_events = sun_events::sunrise_sunset(
        location.latitude,
        solar.declination_deg,
        solar.time_correction_min,
    );
    let instruments = instruments::compute_all(
        location.latitude,
        solar.declination_deg,
        solar.local_solar_time_hours,
    );

    Observation {
        location,
        date,
        clock_hours,
        solar,
        sun_events,
        instruments,
    }
}

pub fn observe_request(
    request: &ObservationRequest<'_>,
    resolver: &dyn OffsetResolver,
    config: &ObserverConfig,
) -> Result<Observation> {
    let date = parse_date(request.date)?;
    let clock = parse_clock(request.clock_time.unwrap_or(config.default_clock_time.as_str()))?;
    let offset = resolve_utc_offset(
        request.utc_offset.unwrap_or(DEFAULT_ZONE),
        NaiveDateTime::new(date, clock.time),
        resolver,
        config.offset_fallback,
    )?;
    Ok(observe(request.location, date, clock.hours, offset))
}
