//! Counter store behavior under sequential and concurrent use.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::collections::BTreeSet;
use std::sync::{Arc, Barrier};
use std::thread;

use delphi_core::{CounterId, CounterStore};

fn id(s: &str) -> CounterId {
    CounterId::new(s).unwrap()
}

#[test]
fn fresh_id_starts_at_zero() {
    let store = CounterStore::new();
    for name in ["a", "b", "room-1"] {
        assert!(store.list_all().iter().all(|(k, _)| k != name));
        assert_eq!(store.get_or_create(&id(name)).count, 0);
    }
}

#[test]
fn sequential_increments_count_exactly() {
    let store = CounterStore::new();
    let key = id("seq");
    for n in 1..=25u64 {
        assert_eq!(store.increment(&key).count, n);
    }
    assert_eq!(store.get_or_create(&key).count, 25);
}

#[test]
fn concurrent_increments_are_not_lost() {
    for k in [2usize, 10, 100] {
        let store = Arc::new(CounterStore::new());
        let key = id(&format!("hot-{k}"));
        let start = Arc::new(Barrier::new(k));

        let handles: Vec<_> = (0..k)
            .map(|_| {
                let store = Arc::clone(&store);
                let key = key.clone();
                let start = Arc::clone(&start);
                thread::spawn(move || {
                    start.wait();
                    store.increment(&key);
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }

        assert_eq!(store.get_or_create(&key).count, k as u64, "k={k}");
        assert_eq!(store.len(), 1, "k={k}");
    }
}

#[test]
fn concurrent_first_access_creates_once() {
    let store = Arc::new(CounterStore::new());
    let key = id("race");
    let start = Arc::new(Barrier::new(16));

    let handles: Vec<_> = (0..16)
        .map(|i| {
            let store = Arc::clone(&store);
            let key = key.clone();
            let start = Arc::clone(&start);
            thread::spawn(move || {
                start.wait();
                if i % 2 == 0 {
                    store.get_or_create(&key);
                } else {
                    store.increment(&key);
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }

    assert_eq!(store.get_or_create(&key).count, 8);
}

#[test]
fn independent_keys_do_not_interfere() {
    let store = Arc::new(CounterStore::new());
    thread::scope(|s| {
        for t in 0..8 {
            let store = &store;
            s.spawn(move || {
                let key = id(&format!("k{t}"));
                for _ in 0..50 {
                    store.increment(&key);
                }
            });
        }
    });

    let snapshot = store.list_all();
    assert_eq!(snapshot.len(), 8);
    assert!(snapshot.iter().all(|(_, c)| c.count == 50));
}

#[test]
fn delete_then_access_starts_fresh() {
    let store = CounterStore::new();
    let key = id("room");
    store.increment(&key);
    store.increment(&key);

    assert!(store.delete(&key));
    assert_eq!(store.get_or_create(&key).count, 0);
}

#[test]
fn delete_absent_keeps_size() {
    let store = CounterStore::new();
    store.get_or_create(&id("a"));
    store.get_or_create(&id("b"));

    assert!(!store.delete(&id("ghost")));
    assert_eq!(store.len(), 2);
}

#[test]
fn list_reflects_deletes() {
    let store = CounterStore::new();
    for name in ["c", "a", "b"] {
        store.get_or_create(&id(name));
    }
    store.delete(&id("b"));

    let ids: BTreeSet<String> = store.list_all().into_iter().map(|(k, _)| k).collect();
    assert_eq!(ids, BTreeSet::from(["a".to_string(), "c".to_string()]));
}

#[test]
fn listing_during_increments_sees_whole_counters() {
    let store = Arc::new(CounterStore::new());
    let key = id("busy");
    store.get_or_create(&key);

    thread::scope(|s| {
        let writer_store = Arc::clone(&store);
        let writer_key = key.clone();
        s.spawn(move || {
            for _ in 0..500 {
                writer_store.increment(&writer_key);
            }
        });

        let mut last = 0;
        for _ in 0..200 {
            for (_, c) in store.list_all() {
                assert!(c.count >= last, "count went backwards");
                last = c.count;
            }
        }
    });

    assert_eq!(store.get_or_create(&key).count, 500);
}
