//! The yantra catalog.
//!
//! Every simple instrument is the same gnomon-and-shadow computation with a
//! different characteristic dimension, so the catalog is a table of
//! [`InstrumentDefinition`]s driven through [`compute_reading`]. Composites
//! only bundle readings of members already in the table.

use crate::angles;
use crate::types::{CompositeReading, Dimension, InstrumentReading, InstrumentReadings, Reading};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InstrumentKind {
    /// Shadow computed from the first dimension.
    Simple { dimensions: &'static [Dimension] },
    Composite { members: &'static [&'static str] },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InstrumentDefinition {
    pub key: &'static str,
    pub name: &'static str,
    pub kind: InstrumentKind,
}

impl InstrumentDefinition {
    /// Dimension the shadow is cast from; `None` for composites.
    pub fn characteristic_dimension(&self) -> Option<f64> {
        match self.kind {
            InstrumentKind::Simple { dimensions } => dimensions.first().map(|d| d.value),
            InstrumentKind::Composite { .. } => None,
        }
    }

    pub fn is_composite(&self) -> bool {
        matches!(self.kind, InstrumentKind::Composite { .. })
    }
}

const fn simple(
    key: &'static str,
    name: &'static str,
    dimensions: &'static [Dimension],
) -> InstrumentDefinition {
    InstrumentDefinition {
        key,
        name,
        kind: InstrumentKind::Simple { dimensions },
    }
}

const fn composite(
    key: &'static str,
    name: &'static str,
    members: &'static [&'static str],
) -> InstrumentDefinition {
    InstrumentDefinition {
        key,
        name,
        kind: InstrumentKind::Composite { members },
    }
}

macro_rules! dim {
    ($name:literal, $value:literal) => {
        Dimension {
            name: $name,
            value: $value,
        }
    };
}

const SAMRAT_PAIR: &[&str] = &["Samrat", "DhruvaProthaChakra"];

pub const CATALOG: &[InstrumentDefinition] = &[
    simple("Samrat", "Samrat Yantra", &[dim!("gnomon_height", 10.0)]),
    simple("JaiPrakash", "Jai Prakash Yantra", &[dim!("base_radius", 12.0)]),
    simple("Rama", "Rama Yantra", &[dim!("vertical_radius", 10.0)]),
    simple("Digamsa", "Digamsa Yantra", &[dim!("gnomon_height", 8.0)]),
    simple(
        "DhruvaProthaChakra",
        "Dhruva-Protha-Chakra Yantra",
        &[dim!("radius", 15.0)],
    ),
    composite("YantraSamrat", "Yantra-Samrat", SAMRAT_PAIR),
    simple(
        "GolayantraChakra",
        "Golayantra Chakra Yantra",
        &[dim!("radius", 14.0)],
    ),
    simple("Bhitti", "Bhitti Yantra", &[dim!("height", 8.0)]),
    simple(
        "DakshinottaraBhitti",
        "Dakshinottara Bhitti Yantra",
        &[dim!("height", 9.0)],
    ),
    simple("Rasivalaya", "Rasivalaya Yantra", &[dim!("radius", 16.0)]),
    simple("NadiValaya", "Nadi Valaya Yantra", &[dim!("radius", 13.0)]),
    simple(
        "Palaka",
        "Palaka Yantra",
        &[dim!("height", 12.0), dim!("width", 7.0)],
    ),
    simple("Chaapa", "Chaapa Yantra", &[dim!("length", 14.0)]),
    // Not in the historical source table; added to round the catalog out to thirteen.
    simple("Unnatamsa", "Unnatamsa Yantra", &[dim!("radius", 12.0)]),
    composite("SamratDhruvaPair", "Samrat-Dhruva Pair", SAMRAT_PAIR),
];

pub fn find(key: &str) -> Option<&'static InstrumentDefinition> {
    CATALOG.iter().find(|d| d.key == key)
}

pub fn simple_count() -> usize {
    CATALOG.iter().filter(|d| !d.is_composite()).count()
}

pub fn composite_count() -> usize {
    CATALOG.iter().filter(|d| d.is_composite()).count()
}

/// Reading for a simple instrument. Composites yield `None`.
pub fn compute_reading(
    def: &InstrumentDefinition,
    latitude: f64,
    declination: f64,
    solar_time: f64,
) -> Option<InstrumentReading> {
    let InstrumentKind::Simple { dimensions } = def.kind else {
        return None;
    };
    let characteristic = dimensions.first()?.value;
    let ha = angles::hour_angle(solar_time);
    let alt = angles::solar_altitude(latitude, declination, ha);
    Some(InstrumentReading {
        instrument: def.name,
        solar_altitude_deg: alt,
        hour_angle_deg: ha,
        shadow_length: angles::shadow_length(characteristic, alt),
        dimensions,
    })
}

fn bundle(
    def: &InstrumentDefinition,
    members: &[&'static str],
    simple: &[(&'static str, InstrumentReading)],
) -> CompositeReading {
    let components = members
        .iter()
        .filter_map(|member| {
            simple
                .iter()
                .find(|(k, _)| k == member)
                .map(|(k, r)| (*k, r.clone()))
        })
        .collect::<Vec<_>>();
    debug_assert_eq!(
        components.len(),
        members.len(),
        "composite {} names a member missing from the catalog",
        def.key
    );
    CompositeReading {
        instrument: def.name,
        components,
    }
}

pub fn compute_all(latitude: f64, declination: f64, solar_time: f64) -> InstrumentReadings {
    let simple: Vec<(&'static str, InstrumentReading)> = CATALOG
        .iter()
        .filter_map(|def| {
            compute_reading(def, latitude, declination, solar_time).map(|r| (def.key, r))
        })
        .collect();

    let entries = CATALOG
        .iter()
        .filter_map(|def| match def.kind {
            InstrumentKind::Simple { .. } => simple
                .iter()
                .find(|(k, _)| *k == def.key)
                .map(|(k, r)| (*k, Reading::Simple(r.clone()))),
            InstrumentKind::Composite { members } => {
                Some((def.key, Reading::Composite(bundle(def, members, &simple))))
            }
        })
        .collect();

    InstrumentReadings { entries }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_unique() {
        for (i, a) in CATALOG.iter().enumerate() {
            for b in &CATALOG[i + 1..] {
                assert_ne!(a.key, b.key);
            }
        }
    }

    #[test]
    #[should_panic(expected = "missing from the catalog")]
    fn bundle_rejects_unknown_member() {
        let def = find("YantraSamrat").unwrap();
        let simple: Vec<_> = CATALOG
            .iter()
            .filter_map(|d| compute_reading(d, 28.6, 23.4, 12.0).map(|r| (d.key, r)))
            .collect();
        bundle(def, &["Samrat", "Samratt"], &simple);
    }

    #[test]
    fn composite_members_are_simple_entries() {
        for def in CATALOG {
            if let InstrumentKind::Composite { members } = def.kind {
                for m in members {
                    let member = find(m).unwrap();
                    assert!(!member.is_composite(), "{} -> {}", def.key, m);
                }
            }
        }
    }
}
