// Metric name constants
pub const EVENTS_REGISTERED: &str = "events_registered";
pub const EVENTS_REJECTED: &str = "events_rejected";
pub const EVENTS_TRANSITIONED: &str = "events_transitioned";
pub const EVENTS_DROPPED: &str = "events_dropped";
pub const EVENTS_EXPIRED: &str = "events_expired";

pub const EVENTS_PER_MINUTE: &str = "events_per_minute";
pub const EVENTS_PER_HOUR: &str = "events_per_hour";
pub const EVENTS_PER_DAY: &str = "events_per_day";

/// Adds lifecycle statistics.
pub fn add_lifecycle_stat_counters(
    registered: i64,
    rejected: i64,
    transitions: i64,
    dropped: i64,
    expired: i64,
) {
    metrics::counter!(EVENTS_REGISTERED).increment(registered.max(0) as u64);
    metrics::counter!(EVENTS_REJECTED).increment(rejected.max(0) as u64);
    metrics::counter!(EVENTS_TRANSITIONED).increment(transitions.max(0) as u64);
    metrics::counter!(EVENTS_DROPPED).increment(dropped.max(0) as u64);
    metrics::counter!(EVENTS_EXPIRED).increment(expired.max(0) as u64);
}

/// Sets live window counts.
pub fn set_window_counts(per_minute: u64, per_hour: u64, per_day: u64) {
    // Use gauge for absolute values
    metrics::gauge!(EVENTS_PER_MINUTE).set(per_minute as f64);
    metrics::gauge!(EVENTS_PER_HOUR).set(per_hour as f64);
    metrics::gauge!(EVENTS_PER_DAY).set(per_day as f64);
}
