// Package config provides the trailing window lengths.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::counter::Tier;

use super::ConfigError;

pub const DEFAULT_MINUTE: Duration = Duration::from_secs(60);
pub const DEFAULT_HOUR: Duration = Duration::from_secs(60 * 60);
pub const DEFAULT_DAY: Duration = Duration::from_secs(24 * 60 * 60);

/// Length of each trailing window, measured from registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct TierWindows {
    #[serde(with = "humantime_serde")]
    pub minute: Duration,
    #[serde(with = "humantime_serde")]
    pub hour: Duration,
    #[serde(with = "humantime_serde")]
    pub day: Duration,
}

impl TierWindows {
    /// Windows must be non-zero and strictly ascending.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.minute.is_zero() || self.minute >= self.hour || self.hour >= self.day {
            return Err(ConfigError::Windows {
                minute: self.minute,
                hour: self.hour,
                day: self.day,
            });
        }
        Ok(())
    }

    /// Delay scheduled when an event enters `tier`.
    ///
    /// Each segment is measured from the previous transition's actual fire
    /// time: 1m, then 59m, then 23h with the default windows.
    pub fn segment(&self, tier: Tier) -> Duration {
        match tier {
            Tier::Minute => self.minute,
            Tier::Hour => self.hour.saturating_sub(self.minute),
            Tier::Day => self.day.saturating_sub(self.hour),
        }
    }
}

impl Default for TierWindows {
    fn default() -> Self {
        Self {
            minute: DEFAULT_MINUTE,
            hour: DEFAULT_HOUR,
            day: DEFAULT_DAY,
        }
    }
}
