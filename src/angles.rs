use crate::types::{Shadow, SolarContext};

pub const EARTH_AXIAL_TILT: f64 = 23.45;
pub const DEGREES_PER_HOUR: f64 = 15.0;
pub const MINUTES_PER_DEGREE: f64 = 4.0;

pub fn deg_to_rad(deg: f64) -> f64 {
    deg * (std::f64::consts::PI / 180.0)
}

pub fn rad_to_deg(rad: f64) -> f64 {
    rad * (180.0 / std::f64::consts::PI)
}

pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

pub fn solar_declination(n: i32) -> f64 {
    EARTH_AXIAL_TILT * deg_to_rad((360.0 / 365.0) * (284 + n) as f64).sin()
}

/// Equation of time in minutes, from the B = 360/365 (n - 81) approximation.
pub fn equation_of_time(n: i32) -> f64 {
    let b = deg_to_rad((360.0 / 365.0) * (n - 81) as f64);
    9.87 * (2.0 * b).sin() - 7.53 * b.cos() - 1.5 * b.sin()
}

pub fn local_standard_meridian(utc_offset_hours: f64) -> f64 {
    DEGREES_PER_HOUR * utc_offset_hours
}

/// Minutes to add to clock time to get local solar time.
pub fn time_correction(longitude: f64, standard_meridian: f64, eot: f64) -> f64 {
    MINUTES_PER_DEGREE * (longitude - standard_meridian) + eot
}

pub fn local_solar_time(clock_hours: f64, time_correction_min: f64) -> f64 {
    clock_hours + time_correction_min / 60.0
}

pub fn hour_angle(local_solar_time: f64) -> f64 {
    DEGREES_PER_HOUR * (local_solar_time - 12.0)
}

pub fn solar_altitude(latitude: f64, declination: f64, hour_angle: f64) -> f64 {
    let lat_rad = deg_to_rad(latitude);
    let dec_rad = deg_to_rad(declination);
    let ha_rad = deg_to_rad(hour_angle);
    let sin_alt =
        lat_rad.sin() * dec_rad.sin() + lat_rad.cos() * dec_rad.cos() * ha_rad.cos();
    rad_to_deg(sin_alt.clamp(-1.0, 1.0).asin())
}

pub fn shadow_length(dimension: f64, altitude: f64) -> Shadow {
    if altitude <= 0.0 {
        return Shadow::NoShadow;
    }
    Shadow::Length(round_to(dimension / deg_to_rad(altitude).tan(), 2))
}

pub fn solar_context(
    day_of_year: i32,
    longitude: f64,
    utc_offset_hours: f64,
    clock_hours: f64,
) -> SolarContext {
    let decl = solar_declination(day_of_year);
    let eot = equation_of_time(day_of_year);
    let lstm = local_standard_meridian(utc_offset_hours);
    let tc = time_correction(longitude, lstm, eot);
    SolarContext {
        day_of_year,
        declination_deg: decl,
        equation_of_time_min: eot,
        utc_offset_hours,
        local_standard_meridian_deg: lstm,
        time_correction_min: tc,
        local_solar_time_hours: local_solar_time(clock_hours, tc),
    }
}
