// Package telemetry provides the periodic stats logger.

use std::sync::Weak;
use std::time::Duration;
use tokio::time::interval;
use tokio_util::sync::CancellationToken;

use crate::lifecycle::Core;
use crate::metrics;

/// Logs and publishes lifecycle stats every `each` until cancelled or until
/// every counter handle sharing `core` is gone.
pub(crate) async fn logger(shutdown_token: CancellationToken, core: Weak<Core>, each: Duration) {
    let mut ticker = interval(each);

    loop {
        tokio::select! {
            _ = shutdown_token.cancelled() => {
                tracing::debug!(component = "telemetry", "logger stopped");
                return;
            }
            _ = ticker.tick() => {
                let Some(core) = core.upgrade() else {
                    tracing::debug!(component = "telemetry", "counter dropped, logger stopped");
                    return;
                };
                let delta = core.stats.reset();
                let per_minute = core.counters.per_minute();
                let per_hour = core.counters.per_hour();
                let per_day = core.counters.per_day();
                drop(core);

                metrics::add_lifecycle_stat_counters(
                    delta.registered,
                    delta.rejected,
                    delta.transitions,
                    delta.dropped,
                    delta.expired,
                );
                metrics::set_window_counts(per_minute, per_hour, per_day);

                tracing::info!(
                    component = "telemetry",
                    per_minute,
                    per_hour,
                    per_day,
                    registered = delta.registered,
                    rejected = delta.rejected,
                    transitions = delta.transitions,
                    dropped = delta.dropped,
                    expired = delta.expired,
                    "event counter stats"
                );
            }
        }
    }
}
