/*!
 * Workload Loader
 * Bulk ingestion of simulated processes from JSON workload files
 */

use super::types::{ProcessRecord, ProcessStatus};
use crate::core::errors::{LoadResult, RecordError};
use crate::core::types::{validate_priority, Pid, Priority};
use serde::Deserialize;
use std::path::Path;
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use tracing::warn;

/// Raw workload entry as it appears on disk
#[derive(Debug, Clone, Deserialize)]
struct RawRecord {
    pid: Pid,
    name: String,
    status: String,
    cpu_usage: f64,
    memory_usage: f64,
    priority: Priority,
    /// Seconds since the Unix epoch; load-time instant when absent
    start_time: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct WorkloadFile {
    processes: Vec<RawRecord>,
}

/// Validate one raw entry into a process record
fn validate(raw: RawRecord) -> Result<ProcessRecord, RecordError> {
    let status = ProcessStatus::from_str(&raw.status)
        .map_err(|_| RecordError::UnknownStatus(raw.status.clone()))?;
    let priority =
        validate_priority(raw.priority).map_err(|_| RecordError::InvalidPriority(raw.priority))?;
    if !(0.0..=100.0).contains(&raw.cpu_usage) {
        return Err(RecordError::InvalidCpu(raw.cpu_usage));
    }
    if raw.memory_usage < 0.0 {
        return Err(RecordError::InvalidMemory(raw.memory_usage));
    }
    let start_time = match raw.start_time {
        Some(secs) if secs.is_finite() && secs >= 0.0 => UNIX_EPOCH + Duration::from_secs_f64(secs),
        Some(secs) => return Err(RecordError::InvalidStartTime(secs)),
        None => SystemTime::now(),
    };
    Ok(ProcessRecord::new(
        raw.pid,
        raw.name,
        status,
        raw.cpu_usage,
        raw.memory_usage,
        priority,
    )
    .with_start_time(start_time))
}

/// Parse a workload document
///
/// Invalid entries are skipped per-record; only an unparseable document
/// is an error.
pub fn parse_workload(contents: &str) -> LoadResult<Vec<ProcessRecord>> {
    let file: WorkloadFile = serde_json::from_str(contents)?;
    let mut records = Vec::with_capacity(file.processes.len());
    for raw in file.processes {
        let pid = raw.pid;
        match validate(raw) {
            Ok(record) => records.push(record),
            Err(err) => warn!(pid, %err, "skipping invalid workload entry"),
        }
    }
    Ok(records)
}

/// Load a workload file from disk
pub fn load_workload(path: impl AsRef<Path>) -> LoadResult<Vec<ProcessRecord>> {
    let contents = std::fs::read_to_string(path)?;
    parse_workload(&contents)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_complete_workload() {
        let doc = r#"{
            "processes": [
                {"pid": 1001, "name": "System", "status": "Running",
                 "cpu_usage": 25, "memory_usage": 40, "priority": 10},
                {"pid": 1002, "name": "Browser", "status": "Waiting",
                 "cpu_usage": 35, "memory_usage": 60, "priority": 7,
                 "start_time": 1700000000.5}
            ]
        }"#;

        let records = parse_workload(doc).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].pid, 1001);
        assert_eq!(records[0].status, ProcessStatus::Running);
        assert_eq!(records[0].current_cpu, None);
        assert_eq!(
            records[1].start_time,
            UNIX_EPOCH + Duration::from_secs_f64(1700000000.5)
        );
    }

    #[test]
    fn test_invalid_entries_are_skipped_not_fatal() {
        let doc = r#"{
            "processes": [
                {"pid": 1, "name": "ok", "status": "Running",
                 "cpu_usage": 10, "memory_usage": 5, "priority": 5},
                {"pid": 2, "name": "bad status", "status": "Zombie",
                 "cpu_usage": 10, "memory_usage": 5, "priority": 5},
                {"pid": 3, "name": "bad priority", "status": "Running",
                 "cpu_usage": 10, "memory_usage": 5, "priority": 99},
                {"pid": 4, "name": "bad cpu", "status": "Running",
                 "cpu_usage": 150, "memory_usage": 5, "priority": 5},
                {"pid": 5, "name": "bad memory", "status": "Running",
                 "cpu_usage": 10, "memory_usage": -1, "priority": 5},
                {"pid": 6, "name": "bad start", "status": "Running",
                 "cpu_usage": 10, "memory_usage": 5, "priority": 5,
                 "start_time": -3.0}
            ]
        }"#;

        let records = parse_workload(doc).unwrap();
        let pids: Vec<Pid> = records.iter().map(|p| p.pid).collect();
        assert_eq!(pids, vec![1]);
    }

    #[test]
    fn test_unparseable_document_is_an_error() {
        assert!(parse_workload("not json").is_err());
        assert!(parse_workload(r#"{"workload": []}"#).is_err());
    }

    #[test]
    fn test_validation_errors() {
        let raw = RawRecord {
            pid: 9,
            name: "x".to_string(),
            status: "running".to_string(),
            cpu_usage: 10.0,
            memory_usage: 5.0,
            priority: 0,
            start_time: None,
        };
        assert_eq!(validate(raw).unwrap_err(), RecordError::InvalidPriority(0));
    }
}
