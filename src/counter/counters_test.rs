#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::counter::{Tier, TierCounters};

    #[test]
    fn test_new_counters_are_zero() {
        let counters = TierCounters::new();
        for tier in Tier::ALL {
            assert_eq!(counters.read(tier), 0);
        }
        assert_eq!(counters.per_day(), 0);
    }

    #[test]
    fn test_increment_and_decrement_return_updated_value() {
        let counters = TierCounters::new();
        assert_eq!(counters.increment(Tier::Hour), 1);
        assert_eq!(counters.increment(Tier::Hour), 2);
        assert_eq!(counters.decrement(Tier::Hour), 1);
        assert_eq!(counters.read(Tier::Hour), 1);
        assert_eq!(counters.read(Tier::Minute), 0);
        assert_eq!(counters.read(Tier::Day), 0);
    }

    #[test]
    fn test_derived_windows_sum_lower_tiers() {
        let counters = TierCounters::new();
        counters.increment(Tier::Minute);
        counters.increment(Tier::Hour);
        counters.increment(Tier::Hour);
        counters.increment(Tier::Day);

        assert_eq!(counters.per_minute(), 1);
        assert_eq!(counters.per_hour(), 3);
        assert_eq!(counters.per_day(), 4);
    }

    #[test]
    fn test_tier_chain_ends_at_day() {
        assert_eq!(Tier::Minute.next(), Some(Tier::Hour));
        assert_eq!(Tier::Hour.next(), Some(Tier::Day));
        assert_eq!(Tier::Day.next(), None);
        assert!(Tier::Minute < Tier::Hour && Tier::Hour < Tier::Day);
        assert_eq!(Tier::Day.to_string(), "day");
    }

    #[test]
    fn test_concurrent_increments_are_not_lost() {
        let counters = Arc::new(TierCounters::new());
        let mut handles = vec![];
        for _ in 0..8 {
            let counters = counters.clone();
            handles.push(std::thread::spawn(move || {
                for _ in 0..10_000 {
                    counters.increment(Tier::Minute);
                }
            }));
        }
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(counters.read(Tier::Minute), 80_000);
    }

    #[test]
    fn test_concurrent_migrations_keep_day_total() {
        let counters = Arc::new(TierCounters::new());
        for _ in 0..1_000 {
            counters.increment(Tier::Minute);
        }

        let mut handles = vec![];
        for _ in 0..4 {
            let counters = counters.clone();
            handles.push(std::thread::spawn(move || {
                for _ in 0..250 {
                    counters.decrement(Tier::Minute);
                    counters.increment(Tier::Hour);
                }
            }));
        }
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(counters.read(Tier::Minute), 0);
        assert_eq!(counters.read(Tier::Hour), 1_000);
        assert_eq!(counters.per_day(), 1_000);
    }
}
