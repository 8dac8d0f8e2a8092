use super::{Config, CounterBox, SchedulerSettings, TierWindows};
use std::time::Duration;

/// Creates a new test configuration.
///
/// Production window lengths with a small scheduler; tests that need
/// shorter windows override `windows` directly.
pub fn new_test_config() -> Config {
    Config {
        counter: CounterBox {
            env: super::TEST.to_string(),
            logs: Some(super::Logs {
                level: Some("debug".to_string()),
            }),
            windows: Some(TierWindows::default()),
            scheduler: Some(SchedulerSettings {
                workers: 2,
                max_pending: 100_000,
            }),
            telemetry: Some(super::Telemetry {
                enabled: false,
                interval: Some(Duration::from_millis(100)),
            }),
        },
    }
}
