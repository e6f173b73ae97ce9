//! UTC offset resolution.
//!
//! A caller supplies either a literal signed offset (`+5.5`, `-4`) or a
//! timezone name. Names go through an [`OffsetResolver`]; what happens when
//! that fails is decided by [`OffsetFallback`].

use chrono::{NaiveDateTime, Offset, TimeZone};
use chrono_tz::Tz;
use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::{Result, YantraError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OffsetFallback {
    /// Log a warning and use UTC+0.
    #[default]
    Utc,
    /// Surface [`YantraError::OffsetResolution`].
    Fail,
}

pub trait OffsetResolver {
    /// Offset in hours for `zone` at the given wall-clock date and time.
    fn resolve(&self, zone: &str, local: NaiveDateTime) -> Result<f64>;
}

/// Looks zones up in the compiled-in IANA tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct IanaOffsetResolver;

impl OffsetResolver for IanaOffsetResolver {
    fn resolve(&self, zone: &str, local: NaiveDateTime) -> Result<f64> {
        let failure = |reason: String| YantraError::OffsetResolution {
            zone: zone.to_string(),
            reason,
        };

        let tz: Tz = zone
            .trim()
            .parse()
            .map_err(|_| failure("unknown timezone".to_string()))?;
        let zoned = tz
            .from_local_datetime(&local)
            .single()
            .ok_or_else(|| failure(format!("{local} is ambiguous or skipped")))?;
        Ok(zoned.offset().fix().local_minus_utc() as f64 / 3600.0)
    }
}

/// Parses `+h` / `-h` literals. Anything else, including a signed string
/// that is not a number, returns `None`.
pub fn parse_literal_offset(input: &str) -> Option<f64> {
    let s = input.trim();
    if !s.starts_with(['+', '-']) {
        return None;
    }
    s.parse::<f64>().ok().filter(|h| h.is_finite())
}

pub fn resolve_utc_offset(
    input: &str,
    local: NaiveDateTime,
    resolver: &dyn OffsetResolver,
    fallback: OffsetFallback,
) -> Result<f64> {
    if let Some(hours) = parse_literal_offset(input) {
        return Ok(hours);
    }
    match resolver.resolve(input, local) {
        Ok(hours) => Ok(hours),
        Err(e) => match fallback {
            OffsetFallback::Utc => {
                warn!("{e}; falling back to UTC+0");
                Ok(0.0)
            }
            OffsetFallback::Fail => Err(e),
        },
    }
}
