use thiserror::Error;

pub type Result<T> = std::result::Result<T, YantraError>;

/// Input failures surfaced to the caller before any computation runs.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum YantraError {
    #[error("invalid date {input:?} (expected a real calendar date as YYYY-MM-DD)")]
    InvalidDate { input: String },

    #[error("invalid time {input:?}: {reason}")]
    InvalidTime { input: String, reason: &'static str },

    #[error("invalid latitude {value}° (must be between -90° and +90°)")]
    InvalidLatitude { value: f64 },

    #[error("invalid longitude {value}° (must be between -180° and +180°)")]
    InvalidLongitude { value: f64 },

    #[error("coordinate {input:?} is not a number")]
    UnparseableCoordinate { input: String },

    /// Only raised under `OffsetFallback::Fail`.
    #[error("could not resolve UTC offset for {zone:?}: {reason}")]
    OffsetResolution { zone: String, reason: String },
}

impl YantraError {
    pub fn is_coordinate_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidLatitude { .. }
                | Self::InvalidLongitude { .. }
                | Self::UnparseableCoordinate { .. }
        )
    }
}
