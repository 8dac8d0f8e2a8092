//! Structured logging setup.

use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

use crate::config::{Config, ConfigTrait};

const DEFAULT_LEVEL: &str = "info";

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` wins over `logs.level`. Production gets JSON lines, every
/// other env a pretty console format. Returns `false` if a subscriber was
/// already installed.
pub fn configure(cfg: &Config) -> bool {
    let log_level = cfg
        .logs()
        .and_then(|logs| logs.level.as_deref())
        .unwrap_or(DEFAULT_LEVEL);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    if cfg.is_prod() {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json())
            .try_init()
            .is_ok()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().pretty())
            .try_init()
            .is_ok()
    }
}
