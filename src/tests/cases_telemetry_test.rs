// Scenario tests for the telemetry logger and logging setup.

use std::time::Duration;
use tokio_util::sync::CancellationToken;

use crate::api::EventCounter;
use crate::config::new_test_config;
use crate::logger;
use crate::support::{advance, counter_on_current_runtime};

/// The logger drains stats on every tick and stops on cancellation.
#[tokio::test(start_paused = true)]
async fn test_logger_resets_stats_until_cancelled() {
    let (counter, _scheduler) = counter_on_current_runtime(64);
    let token = CancellationToken::new();
    counter.spawn_telemetry(
        &tokio::runtime::Handle::current(),
        token.clone(),
        Duration::from_secs(1),
    );

    assert!(counter.register_event());
    assert!(counter.register_event());

    advance(Duration::from_millis(1_500)).await;
    assert_eq!(counter.stats().reset().registered, 0);

    token.cancel();
    advance(Duration::from_millis(10)).await;

    assert!(counter.register_event());
    advance(Duration::from_secs(5)).await;
    assert_eq!(counter.stats().reset().registered, 1);
}

/// Installing the subscriber twice is harmless.
#[test]
fn test_logger_configure_is_idempotent() {
    let cfg = new_test_config();
    logger::configure(&cfg);
    assert!(!logger::configure(&cfg));
}
