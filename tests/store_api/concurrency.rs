//! Concurrency Tests
//!
//! Tests for thread safety:
//! - Concurrent creates of distinct keys (no lost inserts)
//! - Concurrent reads of pre-populated keys
//! - Concurrent updates and deletes of distinct keys
//! - Racing creates of one key (single winner)
//! - Readers running alongside a writer

use crate::*;
use std::sync::{Arc, Barrier};
use std::thread;

const NUM_THREADS: usize = 100;

fn populated_store() -> Arc<RwLockStore<u64, u64>> {
    init_tracing();
    let store = Arc::new(StoreOptions::new().name("concurrency").open());
    for i in 0..NUM_THREADS as u64 {
        store.create(i, i).unwrap();
    }
    store
}

fn run_on_all<F>(f: F)
where
    F: Fn(u64) + Send + Sync + 'static,
{
    let f = Arc::new(f);
    let barrier = Arc::new(Barrier::new(NUM_THREADS));
    let handles: Vec<_> = (0..NUM_THREADS as u64)
        .map(|i| {
            let f = Arc::clone(&f);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                f(i);
            })
        })
        .collect();

    for h in handles {
        h.join().unwrap();
    }
}

#[test]
fn concurrent_creates_distinct_keys() {
    let store: Arc<RwLockStore<u64, u64>> = Arc::new(StoreOptions::new().open());

    let s = Arc::clone(&store);
    run_on_all(move |i| s.create(i, i * 10).unwrap());

    assert_eq!(store.len(), NUM_THREADS);
    for i in 0..NUM_THREADS as u64 {
        assert_eq!(store.get(&i).unwrap(), i * 10);
    }
}

#[test]
fn concurrent_gets_prepopulated_keys() {
    let store = populated_store();

    let s = Arc::clone(&store);
    run_on_all(move |i| {
        for _ in 0..100 {
            assert_eq!(s.get(&i).unwrap(), i);
        }
    });
}

#[test]
fn concurrent_updates_distinct_keys() {
    let store = populated_store();

    let s = Arc::clone(&store);
    run_on_all(move |i| s.update(i, i + 1).unwrap());

    for i in 0..NUM_THREADS as u64 {
        assert_eq!(store.get(&i).unwrap(), i + 1);
    }
}

#[test]
fn concurrent_deletes_distinct_keys() {
    let store = populated_store();

    let s = Arc::clone(&store);
    run_on_all(move |i| s.delete(&i).unwrap());

    assert!(store.is_empty());
}

#[test]
fn concurrent_creates_same_key_single_winner() {
    let store = Arc::new(create_store());

    let s = Arc::clone(&store);
    let wins = Arc::new(parking_lot::Mutex::new(Vec::new()));
    let w = Arc::clone(&wins);
    run_on_all(move |i| match s.create("contended".to_string(), i.to_string()) {
        Ok(()) => w.lock().push(i),
        Err(e) => assert!(e.is_already_exists()),
    });

    let wins = wins.lock();
    assert_eq!(wins.len(), 1);
    assert_eq!(
        store.get(&"contended".to_string()).unwrap(),
        wins[0].to_string()
    );
}

#[test]
fn dynamic_concurrent_creates_distinct_keys() {
    let store = Arc::new(create_dynamic_store());

    let s = Arc::clone(&store);
    run_on_all(move |i| s.create(Value::Int(i as i64), Value::Int(i as i64)).unwrap());

    assert_eq!(store.len(), NUM_THREADS);
    for i in 0..NUM_THREADS as i64 {
        assert_eq!(store.get(&Value::Int(i)).unwrap(), Value::Int(i));
    }
}

/// Readers never observe a half-applied state while a writer cycles a key
/// through create/update/delete.
#[test]
fn readers_alongside_writer() {
    const CYCLES: u64 = 500;
    const READERS: usize = 8;

    let store: Arc<RwLockStore<String, u64>> = Arc::new(StoreOptions::new().open());
    let barrier = Arc::new(Barrier::new(READERS + 1));

    let writer = {
        let store = Arc::clone(&store);
        let barrier = Arc::clone(&barrier);
        thread::spawn(move || {
            barrier.wait();
            for c in 0..CYCLES {
                store.create("k".to_string(), c * 2).unwrap();
                store.update("k".to_string(), c * 2 + 1).unwrap();
                store.delete(&"k".to_string()).unwrap();
            }
        })
    };

    let readers: Vec<_> = (0..READERS)
        .map(|_| {
            let store = Arc::clone(&store);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                for _ in 0..CYCLES {
                    match store.get(&"k".to_string()) {
                        Ok(v) => assert!(v < CYCLES * 2),
                        Err(e) => assert!(e.is_not_found()),
                    }
                }
            })
        })
        .collect();

    writer.join().unwrap();
    for r in readers {
        r.join().unwrap();
    }
    assert!(store.is_empty());
}
