pub mod angles;
pub mod calendar;
pub mod config;
pub mod error;
pub mod instruments;
pub mod observation;
pub mod offset;
pub mod sun_events;
pub mod types;

pub use angles::{
    deg_to_rad, equation_of_time, hour_angle, local_solar_time, local_standard_meridian,
    rad_to_deg, round_to, shadow_length, solar_altitude, solar_context, solar_declination,
    time_correction, DEGREES_PER_HOUR, EARTH_AXIAL_TILT, MINUTES_PER_DEGREE,
};

pub use calendar::{
    date_to_day_of_year, day_of_year, parse_clock, parse_clock_time, parse_coordinate, parse_date,
    parse_location, ClockTime,
};

pub use config::ObserverConfig;
pub use error::{Result, YantraError};

pub use instruments::{
    compute_all, compute_reading, InstrumentDefinition, InstrumentKind, CATALOG,
};

pub use observation::{observe, observe_request, Observation, ObservationRequest};

pub use offset::{
    parse_literal_offset, resolve_utc_offset, IanaOffsetResolver, OffsetFallback, OffsetResolver,
};

pub use sun_events::{hours_to_hm, sunrise_sunset, NO_RISE_SET};

pub use types::{
    CompositeReading, Dimension, InstrumentReading, InstrumentReadings, Location, Reading,
    Shadow, SolarContext, SunEvent,
};
