use serde::{Deserialize, Serialize};

use crate::offset::OffsetFallback;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObserverConfig {
    pub offset_fallback: OffsetFallback,
    pub default_clock_time: String,
}

impl Default for ObserverConfig {
    fn default() -> Self {
        Self {
            offset_fallback: OffsetFallback::Utc,
            default_clock_time: "12:00".to_string(),
        }
    }
}

impl ObserverConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }
}
