use std::sync::Arc;

use dashmap::DashMap;

use super::clock::{Clock, SystemClock};
use super::model::{Counter, CounterId};

/// In-memory counter registry.
///
/// Backed by a sharded `DashMap`: every mutation runs under the write lock of
/// the key's shard, so read-modify-write on one id is linearizable while ids
/// in other shards proceed in parallel. Construct once at startup and share
/// via `Arc`.
pub struct CounterStore {
    counters: DashMap<String, Counter>,
    clock: Arc<dyn Clock>,
}

impl Default for CounterStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CounterStore {
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            counters: DashMap::new(),
            clock,
        }
    }

    /// Return the counter for `id`, creating it at zero on first access.
    pub fn get_or_create(&self, id: &CounterId) -> Counter {
        if let Some(existing) = self.counters.get(id.as_str()) {
            return existing.value().clone();
        }

        let mut created = false;
        let entry = self
            .counters
            .entry(id.as_str().to_owned())
            .or_insert_with(|| {
                created = true;
                Counter::fresh(self.clock.now())
            });
        if created {
            tracing::debug!(id = %id, "counter created");
        }
        entry.value().clone()
    }

    /// Create-on-miss, then `count += 1` and restamp, as one step.
    pub fn increment(&self, id: &CounterId) -> Counter {
        let mut entry = self
            .counters
            .entry(id.as_str().to_owned())
            .or_insert_with(|| Counter::fresh(self.clock.now()));
        entry.click(self.clock.now());
        entry.value().clone()
    }

    /// Remove `id`. Returns whether it existed.
    pub fn delete(&self, id: &CounterId) -> bool {
        let existed = self.counters.remove(id.as_str()).is_some();
        tracing::debug!(id = %id, existed, "counter delete");
        existed
    }

    /// Snapshot of all counters. Order is unspecified; never inserts.
    pub fn list_all(&self) -> Vec<(String, Counter)> {
        self.counters
            .iter()
            .map(|r| (r.key().clone(), r.value().clone()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.counters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counters.is_empty()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::expect_used)]

    use std::sync::Mutex;

    use chrono::{DateTime, Duration, TimeZone, Utc};

    use super::*;

    /// Clock that advances 1ms per reading unless rewound by hand.
    struct StepClock(Mutex<DateTime<Utc>>);

    impl StepClock {
        fn starting_at(t: DateTime<Utc>) -> Self {
            Self(Mutex::new(t))
        }

        fn set(&self, t: DateTime<Utc>) {
            *self.0.lock().unwrap() = t;
        }
    }

    impl Clock for StepClock {
        fn now(&self) -> DateTime<Utc> {
            let mut t = self.0.lock().unwrap();
            let now = *t;
            *t = now + Duration::milliseconds(1);
            now
        }
    }

    fn id(s: &str) -> CounterId {
        CounterId::new(s).unwrap()
    }

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap()
    }

    #[test]
    fn get_or_create_is_idempotent() {
        let clock = Arc::new(StepClock::starting_at(t0()));
        let store = CounterStore::with_clock(clock);

        let first = store.get_or_create(&id("a"));
        assert_eq!(first.count, 0);
        assert_eq!(first.last_click, t0());

        let again = store.get_or_create(&id("a"));
        assert_eq!(again, first);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn increment_on_unknown_id_creates_then_counts() {
        let store = CounterStore::new();
        let c = store.increment(&id("fresh"));
        assert_eq!(c.count, 1);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn last_click_moves_forward_and_survives_clock_rewind() {
        let clock = Arc::new(StepClock::starting_at(t0()));
        let store = CounterStore::with_clock(clock.clone());

        let created = store.get_or_create(&id("a"));
        let bumped = store.increment(&id("a"));
        assert!(bumped.last_click > created.last_click);

        clock.set(t0() - Duration::hours(1));
        let rewound = store.increment(&id("a"));
        assert_eq!(rewound.count, 2);
        assert_eq!(rewound.last_click, bumped.last_click);
    }

    #[test]
    fn delete_reports_presence_and_does_not_tombstone() {
        let store = CounterStore::new();
        for _ in 0..3 {
            store.increment(&id("a"));
        }
        assert!(store.delete(&id("a")));
        assert!(store.is_empty());
        assert!(!store.delete(&id("a")));
        assert_eq!(store.get_or_create(&id("a")).count, 0);
    }

    #[test]
    fn list_all_does_not_create() {
        let store = CounterStore::new();
        assert!(store.list_all().is_empty());
        assert!(store.is_empty());
    }
}
