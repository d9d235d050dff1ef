//! Fallback values applied when a business or service leaves a field unset.
//!
//! ```toml
//! default_opening = "09:00"
//! default_closing = "18:00"
//! default_duration_minutes = 60
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use slot_engine::{OperatingHours, TimeOfDay};

use crate::error::{BookingError, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BookingConfig {
    pub default_opening: TimeOfDay,
    pub default_closing: TimeOfDay,
    pub default_duration_minutes: i64,
}

const DEFAULT_OPENING: TimeOfDay = TimeOfDay::hm(9, 0);
const DEFAULT_CLOSING: TimeOfDay = TimeOfDay::hm(18, 0);
const DEFAULT_DURATION_MINUTES: i64 = 60;

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            default_opening: DEFAULT_OPENING,
            default_closing: DEFAULT_CLOSING,
            default_duration_minutes: DEFAULT_DURATION_MINUTES,
        }
    }
}

impl BookingConfig {
    /// Parse and validate a TOML document. Missing keys keep their defaults.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: BookingConfig =
            toml::from_str(s).map_err(|e| BookingError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| BookingError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_toml_str(&raw)
    }

    /// # Errors
    /// Returns `BookingError::Config` if the default hours are reversed or the
    /// default duration is not positive.
    pub fn validate(&self) -> Result<()> {
        self.default_hours()
            .map_err(|e| BookingError::Config(e.to_string()))?;
        if self.default_duration_minutes <= 0 {
            return Err(BookingError::Config(format!(
                "default_duration_minutes must be positive, got {}",
                self.default_duration_minutes
            )));
        }
        Ok(())
    }

    pub fn default_hours(&self) -> slot_engine::error::Result<OperatingHours> {
        OperatingHours::new(self.default_opening, self.default_closing)
    }
}
