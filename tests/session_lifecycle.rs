//! Reuse-flag lifecycle across process restarts and concurrent requests

mod common;

use common::FixtureDir;
use graphex::{FileFlagStore, FlagStore, OpenFlagStore, SearchMode, SessionState};
use std::sync::Arc;
use std::thread;

#[test]
fn test_startup_discards_previous_run() {
    let fixtures = FixtureDir::new();
    let path = fixtures.file("rerun_state.txt", "true");

    let state = SessionState::open(&path).unwrap();
    assert!(state.read());

    state.initialize().unwrap();
    assert!(!state.read());
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "false");
}

#[test]
fn test_match_run_cycle() {
    let fixtures = FixtureDir::new();
    let path = fixtures.path("Outputs").join("rerun_state.txt");

    let state = SessionState::open(&path).unwrap();
    state.initialize().unwrap();
    assert_eq!(state.search_mode(), SearchMode::Full);
    assert_eq!(state.search_mode().matcher_flag(), None);

    assert!(state.record_match_outcome(true).unwrap());
    assert_eq!(state.search_mode(), SearchMode::ReusePrevious);
    assert_eq!(state.search_mode().matcher_flag(), Some("reuse"));

    // a failed refinement keeps reusing the earlier matches
    assert!(state.record_match_outcome(false).unwrap());

    state.reset().unwrap();
    assert_eq!(state.search_mode(), SearchMode::Full);
    assert!(!state.record_match_outcome(false).unwrap());
}

#[test]
fn test_value_survives_reopen() {
    let fixtures = FixtureDir::new();
    let path = fixtures.path("rerun_state.txt");

    let first = SessionState::open(&path).unwrap();
    assert!(first.toggle().unwrap());
    drop(first);

    let second = SessionState::open(&path).unwrap();
    assert!(second.read());
    assert!(!second.toggle().unwrap());
}

#[test]
fn test_garbage_file_reads_false() {
    let fixtures = FixtureDir::new();
    let path = fixtures.file("rerun_state.txt", "yes please\n");

    let state = SessionState::open(&path).unwrap();
    assert!(!state.read());
    assert_eq!(state.search_mode(), SearchMode::Full);
}

#[test]
fn test_states_sharing_a_file_see_each_other() {
    let fixtures = FixtureDir::new();
    let path = fixtures.path("rerun_state.txt");

    let a = SessionState::open(&path).unwrap();
    let b = SessionState::open(&path).unwrap();
    a.write(true).unwrap();
    assert!(b.read());
    b.reset().unwrap();
    assert!(!a.read());
}

#[test]
fn test_concurrent_writers_leave_a_valid_value() {
    let fixtures = FixtureDir::new();
    let path = fixtures.path("rerun_state.txt");
    let store = Arc::new(FileFlagStore::open(&path).unwrap());
    let state = SessionState::new(store.clone());

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let state = state.clone();
            thread::spawn(move || {
                for _ in 0..25 {
                    state.write(i % 2 == 0).unwrap();
                    let _ = state.read();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let stored = store.load().unwrap().expect("flag written");
    assert!(stored == "true" || stored == "false", "torn value: {:?}", stored);
}
