use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};

use crate::angles::round_to;
use crate::error::{Result, YantraError};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

impl Location {
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(YantraError::InvalidLatitude { value: latitude });
        }
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(YantraError::InvalidLongitude { value: longitude });
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }
}

/// Solar quantities shared by every calculator for one request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SolarContext {
    pub day_of_year: i32,
    pub declination_deg: f64,
    pub equation_of_time_min: f64,
    pub utc_offset_hours: f64,
    pub local_standard_meridian_deg: f64,
    pub time_correction_min: f64,
    pub local_solar_time_hours: f64,
}

/// Shadow cast forward by an instrument, or none when the sun is at or
/// below the horizon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shadow {
    Length(f64),
    NoShadow,
}

impl Shadow {
    pub const SENTINEL: &'static str = "no-shadow";

    pub fn length(&self) -> Option<f64> {
        match self {
            Shadow::Length(l) => Some(*l),
            Shadow::NoShadow => None,
        }
    }

    pub fn is_cast(&self) -> bool {
        matches!(self, Shadow::Length(_))
    }
}

impl Serialize for Shadow {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Shadow::Length(l) => serializer.serialize_f64(*l),
            Shadow::NoShadow => serializer.serialize_str(Self::SENTINEL),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dimension {
    pub name: &'static str,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InstrumentReading {
    pub instrument: &'static str,
    pub solar_altitude_deg: f64,
    pub hour_angle_deg: f64,
    pub shadow_length: Shadow,
    pub dimensions: &'static [Dimension],
}

impl InstrumentReading {
    pub fn dimension(&self, name: &str) -> Option<f64> {
        self.dimensions
            .iter()
            .find(|d| d.name == name)
            .map(|d| d.value)
    }
}

impl Serialize for InstrumentReading {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(4 + self.dimensions.len()))?;
        map.serialize_entry("instrument", self.instrument)?;
        map.serialize_entry("solar_altitude_deg", &round_to(self.solar_altitude_deg, 2))?;
        map.serialize_entry("hour_angle_deg", &round_to(self.hour_angle_deg, 2))?;
        map.serialize_entry("shadow_length", &self.shadow_length)?;
        for d in self.dimensions {
            map.serialize_entry(d.name, &d.value)?;
        }
        map.end()
    }
}

/// Readings of other instruments bundled under one heading; holds copies,
/// never computes geometry of its own.
#[derive(Debug, Clone, PartialEq)]
pub struct CompositeReading {
    pub instrument: &'static str,
    pub components: Vec<(&'static str, InstrumentReading)>,
}

impl CompositeReading {
    pub fn component(&self, key: &str) -> Option<&InstrumentReading> {
        self.components
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, r)| r)
    }
}

impl Serialize for CompositeReading {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1 + self.components.len()))?;
        map.serialize_entry("instrument", self.instrument)?;
        for (key, reading) in &self.components {
            map.serialize_entry(key, reading)?;
        }
        map.end()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Reading {
    Simple(InstrumentReading),
    Composite(CompositeReading),
}

impl Reading {
    pub fn as_simple(&self) -> Option<&InstrumentReading> {
        match self {
            Reading::Simple(r) => Some(r),
            Reading::Composite(_) => None,
        }
    }

    pub fn as_composite(&self) -> Option<&CompositeReading> {
        match self {
            Reading::Simple(_) => None,
            Reading::Composite(c) => Some(c),
        }
    }
}

/// Every catalog reading keyed by instrument identifier, in catalog order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InstrumentReadings {
    pub entries: Vec<(&'static str, Reading)>,
}

impl InstrumentReadings {
    pub fn get(&self, key: &str) -> Option<&Reading> {
        self.entries.iter().find(|(k, _)| *k == key).map(|(_, r)| r)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(k, _)| *k)
    }

    pub fn simple(&self) -> impl Iterator<Item = (&'static str, &InstrumentReading)> + '_ {
        self.entries
            .iter()
            .filter_map(|(k, r)| r.as_simple().map(|s| (*k, s)))
    }

    pub fn composites(&self) -> impl Iterator<Item = (&'static str, &CompositeReading)> + '_ {
        self.entries
            .iter()
            .filter_map(|(k, r)| r.as_composite().map(|c| (*k, c)))
    }
}

impl Serialize for InstrumentReadings {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, reading) in &self.entries {
            map.serialize_entry(key, reading)?;
        }
        map.end()
    }
}

/// Sunrise and sunset, in both solar-time and clock-time hours.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SunEvent {
    Daily {
        sunrise_solar: f64,
        sunset_solar: f64,
        sunrise_local: f64,
        sunset_local: f64,
    },
    /// Polar day or polar night: the sun neither rises nor sets.
    Polar,
}
