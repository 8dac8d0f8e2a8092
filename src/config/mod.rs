// Configuration loading and management.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

pub mod windows;

pub use windows::TierWindows;

pub const PROD: &str = "prod";
#[allow(dead_code)]
pub const DEV: &str = "dev";
#[allow(dead_code)]
pub const TEST: &str = "test";

/// Default bound on in-flight lifecycle jobs.
pub const DEFAULT_MAX_PENDING: usize = 1 << 22;
/// Largest `max_pending` the scheduler's slot semaphore can hold.
pub const MAX_PENDING_LIMIT: usize = tokio::sync::Semaphore::MAX_PERMITS;
pub const DEFAULT_TELEMETRY_INTERVAL: Duration = Duration::from_secs(5);

/// Invalid configuration values.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("windows must be non-zero and ascending, got minute={minute:?} hour={hour:?} day={day:?}")]
    Windows {
        minute: Duration,
        hour: Duration,
        day: Duration,
    },
    #[error("scheduler.max_pending must be within 1..={}", MAX_PENDING_LIMIT)]
    MaxPending,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    #[serde(rename = "counter")]
    pub counter: CounterBox,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CounterBox {
    pub env: String,
    pub logs: Option<Logs>,
    pub windows: Option<TierWindows>,
    pub scheduler: Option<SchedulerSettings>,
    pub telemetry: Option<Telemetry>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Logs {
    pub level: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct SchedulerSettings {
    /// Worker threads, 0 means one per available core.
    #[serde(default)]
    pub workers: usize,
    #[serde(rename = "max_pending", default = "default_max_pending")]
    pub max_pending: usize,
}

impl Default for SchedulerSettings {
    fn default() -> Self {
        Self {
            workers: 0,
            max_pending: DEFAULT_MAX_PENDING,
        }
    }
}

fn default_max_pending() -> usize {
    DEFAULT_MAX_PENDING
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Telemetry {
    pub enabled: bool,
    #[serde(default, with = "humantime_serde")]
    pub interval: Option<Duration>,
}

// Config trait
pub trait ConfigTrait {
    fn logs(&self) -> Option<&Logs>;
    fn is_prod(&self) -> bool;
    #[allow(dead_code)]
    fn is_dev(&self) -> bool;
    #[allow(dead_code)]
    fn is_test(&self) -> bool;
    fn windows(&self) -> TierWindows;
    fn scheduler(&self) -> SchedulerSettings;
    fn telemetry(&self) -> Option<&Telemetry>;
}

impl ConfigTrait for Config {
    fn logs(&self) -> Option<&Logs> {
        self.counter.logs.as_ref()
    }

    fn is_prod(&self) -> bool {
        self.counter.env == PROD
    }

    fn is_dev(&self) -> bool {
        self.counter.env == DEV
    }

    fn is_test(&self) -> bool {
        self.counter.env == TEST
    }

    fn windows(&self) -> TierWindows {
        self.counter.windows.unwrap_or_default()
    }

    fn scheduler(&self) -> SchedulerSettings {
        self.counter.scheduler.unwrap_or_default()
    }

    fn telemetry(&self) -> Option<&Telemetry> {
        self.counter.telemetry.as_ref()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            counter: CounterBox {
                env: PROD.to_string(),
                logs: Some(Logs {
                    level: Some("info".to_string()),
                }),
                windows: Some(TierWindows::default()),
                scheduler: Some(SchedulerSettings::default()),
                telemetry: Some(Telemetry {
                    enabled: true,
                    interval: Some(DEFAULT_TELEMETRY_INTERVAL),
                }),
            },
        }
    }
}

impl Config {
    /// Loads configuration from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let abs_path = path
            .canonicalize()
            .with_context(|| format!("failed to resolve absolute config filepath: {:?}", path))?;

        let data = std::fs::read_to_string(&abs_path)
            .with_context(|| format!("read config yaml file {:?}", abs_path))?;

        Self::from_yaml(&data).with_context(|| format!("load config from {:?}", abs_path))
    }

    /// Parses and validates configuration from a YAML document.
    pub fn from_yaml(data: &str) -> Result<Self> {
        let cfg: Config = serde_yaml::from_str(data).context("unmarshal config yaml")?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Checks values serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.windows().validate()?;
        let max_pending = self.scheduler().max_pending;
        if max_pending == 0 || max_pending > MAX_PENDING_LIMIT {
            return Err(ConfigError::MaxPending);
        }
        Ok(())
    }
}

mod test_config;
#[allow(dead_code)]
pub use test_config::new_test_config;
