/*!
 * Session Tests
 * End-to-end tick flow, control-surface actions, and workload ingestion
 */

use pretty_assertions::assert_eq;
use schedsim::{Algorithm, Pid, ProcessStatus, Session};
use std::io::Write;

#[test]
fn tick_persists_the_scheduled_order() {
    let session = Session::new();
    session.spawn("low".to_string(), ProcessStatus::Running, 20.0, 16.0, 2);
    session.spawn("high".to_string(), ProcessStatus::Running, 20.0, 16.0, 9);
    session.spawn("mid".to_string(), ProcessStatus::Running, 20.0, 16.0, 5);
    session.scheduler().set_algorithm(Algorithm::Priority);

    session.tick();

    let priorities: Vec<u8> = session.registry().list().iter().map(|p| p.priority).collect();
    assert_eq!(priorities, vec![9, 5, 2]);
}

#[test]
fn promotion_lands_in_the_registry() {
    let session = Session::new();
    let pid = session.spawn("waiter".to_string(), ProcessStatus::Waiting, 20.0, 16.0, 5);
    session.scheduler().set_algorithm(Algorithm::Priority);

    session.tick();

    assert_eq!(
        session.registry().find(pid).unwrap().status,
        ProcessStatus::Running
    );
}

#[test]
fn allocation_lags_promotion_by_one_tick() {
    let session = Session::new();
    let pid = session.spawn("waiter".to_string(), ProcessStatus::Waiting, 20.0, 16.0, 5);
    session.scheduler().set_algorithm(Algorithm::Priority);

    // First tick: the analyzer sees a Waiting process (zero usage), then
    // the scheduler promotes it
    session.tick();
    assert_eq!(session.registry().find(pid).unwrap().current_cpu, None);
    assert_eq!(session.analyzer().cpu_usage(), vec![0.0]);

    // Second tick: the now-Running process draws its allocation
    session.tick();
    assert_eq!(
        session.registry().find(pid).unwrap().current_cpu,
        Some(20.0)
    );
    assert_eq!(session.analyzer().cpu_usage(), vec![0.0, 20.0]);
}

#[test]
fn every_tick_appends_one_sample_per_history() {
    let session = Session::new();
    session.seed_default_workload();

    for _ in 0..3 {
        session.tick();
    }

    assert_eq!(session.analyzer().cpu_usage().len(), 3);
    assert_eq!(session.analyzer().memory_usage().len(), 3);
    assert_eq!(session.network().usage().len(), 3);
}

#[test]
fn empty_session_ticks_are_harmless() {
    let session = Session::new();

    session.tick();

    assert!(session.registry().is_empty());
    assert_eq!(session.analyzer().cpu_usage(), vec![0.0]);
    assert_eq!(session.analyzer().memory_usage(), vec![0.0]);
}

#[test]
fn kill_and_set_status_pass_through() {
    let session = Session::new();
    let pid = session.spawn("doomed".to_string(), ProcessStatus::Running, 10.0, 8.0, 5);

    assert!(session.set_status(pid, ProcessStatus::Stopped));
    assert!(session.kill(pid));
    assert!(!session.kill(pid));
    assert!(!session.set_status(pid, ProcessStatus::Running));
}

#[test]
fn workload_loading_skips_bad_records() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{
            "processes": [
                {{"pid": 2001, "name": "db", "status": "Running",
                  "cpu_usage": 30, "memory_usage": 128, "priority": 8}},
                {{"pid": 2002, "name": "broken", "status": "Hibernating",
                  "cpu_usage": 30, "memory_usage": 128, "priority": 8}},
                {{"pid": 2003, "name": "cache", "status": "Waiting",
                  "cpu_usage": 10, "memory_usage": 64, "priority": 4}}
            ]
        }}"#
    )
    .unwrap();

    let session = Session::new();
    assert_eq!(session.load_workload(file.path()), 2);

    let pids: Vec<Pid> = session.registry().list().iter().map(|p| p.pid).collect();
    assert_eq!(pids, vec![2001, 2003]);

    // Freshly spawned pids stay clear of loaded ones
    let pid = session.spawn("new".to_string(), ProcessStatus::Waiting, 5.0, 8.0, 5);
    assert!(pid > 2003);
}

#[test]
fn missing_workload_file_loads_nothing() {
    let session = Session::new();
    assert_eq!(session.load_workload("/nonexistent/workload.json"), 0);
    assert!(session.registry().is_empty());
}

#[test]
fn round_robin_cycle_returns_to_the_initial_order() {
    let session = Session::new();
    session.spawn("a".to_string(), ProcessStatus::Running, 10.0, 8.0, 5);
    session.spawn("b".to_string(), ProcessStatus::Running, 10.0, 8.0, 5);
    session.spawn("c".to_string(), ProcessStatus::Running, 10.0, 8.0, 5);
    let initial: Vec<Pid> = session.registry().list().iter().map(|p| p.pid).collect();

    for _ in 0..3 {
        session.tick();
    }

    let after: Vec<Pid> = session.registry().list().iter().map(|p| p.pid).collect();
    assert_eq!(after, initial);
}
