/*!
 * schedsim - Demo Driver
 *
 * Stands in for the dashboard collaborators: loads a workload, drives
 * the tick loop, switches algorithms, and logs what the presentation
 * layer would chart.
 */

use schedsim::{init_tracing, Algorithm, Session};
use std::error::Error;
use tracing::info;

fn main() -> Result<(), Box<dyn Error>> {
    init_tracing();

    info!("schedsim starting");

    let session = Session::new();

    // Workload path from argv, conventional location otherwise
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "data/dummy_processes.json".to_string());
    if session.load_workload(&path) == 0 {
        info!(path = %path, "no workload loaded, seeding defaults");
        session.seed_default_workload();
    }

    let plan = [
        (Algorithm::RoundRobin, 4),
        (Algorithm::Priority, 4),
        (Algorithm::Fcfs, 4),
    ];

    for (algorithm, ticks) in plan {
        session.scheduler().set_algorithm(algorithm);
        for _ in 0..ticks {
            session.tick();
            let stats = session.stats();
            info!(
                algorithm = stats.algorithm.as_str(),
                total = stats.total_processes,
                running = stats.running,
                waiting = stats.waiting,
                avg_waiting_secs = stats.avg_waiting_secs,
                cpu = session.analyzer().latest_cpu().unwrap_or(0.0),
                memory = session.analyzer().latest_memory().unwrap_or(0.0),
                network = session.network().latest().unwrap_or(0),
                "tick complete"
            );
            std::thread::sleep(std::time::Duration::from_millis(250));
        }
    }

    // Final per-process allocation table
    for p in session.registry().list() {
        info!(
            pid = p.pid,
            name = %p.name,
            status = p.status.as_str(),
            priority = p.priority,
            cpu_share = p.current_cpu.unwrap_or(0.0),
            "process"
        );
    }

    info!("schedsim finished");
    Ok(())
}
