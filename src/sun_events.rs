use log::debug;
use serde::ser::{SerializeStruct, Serializer};
use serde::Serialize;

use crate::angles;
use crate::types::SunEvent;

pub const NO_RISE_SET: &str = "Sun does not rise/set";

pub fn sunrise_sunset(latitude: f64, declination: f64, time_correction_min: f64) -> SunEvent {
    let lat_rad = angles::deg_to_rad(latitude);
    let decl_rad = angles::deg_to_rad(declination);
    let cos_h = -lat_rad.tan() * decl_rad.tan();

    // arccos undefined: polar day or polar night.
    if !(-1.0..=1.0).contains(&cos_h) {
        debug!(
            "no sunrise/sunset at latitude {latitude} with declination {declination:.2}"
        );
        return SunEvent::Polar;
    }

    let half_day_hours = angles::rad_to_deg(cos_h.acos()) / angles::DEGREES_PER_HOUR;
    let sunrise_solar = 12.0 - half_day_hours;
    let sunset_solar = 12.0 + half_day_hours;
    let correction_hours = time_correction_min / 60.0;
    SunEvent::Daily {
        sunrise_solar,
        sunset_solar,
        sunrise_local: sunrise_solar - correction_hours,
        sunset_local: sunset_solar - correction_hours,
    }
}

/// Formats decimal hours as `HH:MM`, truncating both components.
pub fn hours_to_hm(hours: f64) -> String {
    let h = hours.trunc();
    let m = ((hours - h) * 60.0).trunc();
    format!("{:02}:{:02}", h as i32, m as i32)
}

impl SunEvent {
    pub fn is_polar(&self) -> bool {
        matches!(self, SunEvent::Polar)
    }

    pub fn sunrise_hm(&self) -> Option<String> {
        match self {
            SunEvent::Daily { sunrise_local, .. } => Some(hours_to_hm(*sunrise_local)),
            SunEvent::Polar => None,
        }
    }

    pub fn sunset_hm(&self) -> Option<String> {
        match self {
            SunEvent::Daily { sunset_local, .. } => Some(hours_to_hm(*sunset_local)),
            SunEvent::Polar => None,
        }
    }
}

impl Serialize for SunEvent {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let sunrise = self.sunrise_hm().unwrap_or_else(|| NO_RISE_SET.to_string());
        let sunset = self.sunset_hm().unwrap_or_else(|| NO_RISE_SET.to_string());
        let mut s = serializer.serialize_struct("SunEvent", 2)?;
        s.serialize_field("sunrise_local", &sunrise)?;
        s.serialize_field("sunset_local", &sunset)?;
        s.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncates_rather_than_rounds() {
        assert_eq!(hours_to_hm(5.999), "05:59");
        assert_eq!(hours_to_hm(18.5), "18:30");
        assert_eq!(hours_to_hm(0.0), "00:00");
    }
}
