//! Seeded runs must be reproducible; unseeded runs must report the seed they used.

use chrono::NaiveDate;
use seat_occupancy_simulator::{SimulationConfig, SimulationOrchestrator, SimulationOutput};

fn config(seed: Option<u64>) -> SimulationConfig {
    SimulationConfig {
        start_date: NaiveDate::from_ymd_opt(2025, 5, 2).unwrap(),
        end_date: NaiveDate::from_ymd_opt(2025, 5, 5).unwrap(),
        seed,
        ..Default::default()
    }
}

fn run(seed: Option<u64>) -> SimulationOutput {
    SimulationOrchestrator::new(config(seed)).unwrap().run().unwrap()
}

#[test]
fn test_same_seed_same_logs() {
    let first = run(Some(2024));
    let second = run(Some(2024));

    assert_eq!(first.seed, 2024);
    assert_eq!(first.logs, second.logs);
    assert_eq!(first.seat_info(), second.seat_info());
    assert_eq!(first.statistics.total_visitors, second.statistics.total_visitors);
}

#[test]
fn test_different_seeds_diverge() {
    let first = run(Some(1));
    let second = run(Some(2));

    assert_ne!(first.logs.people_log, second.logs.people_log);
}

#[test]
fn test_unseeded_run_reports_reproducible_seed() {
    let orchestrator = SimulationOrchestrator::new(config(None)).unwrap();
    let seed = orchestrator.seed();
    let output = orchestrator.run().unwrap();

    assert_eq!(output.seed, seed);
    assert_eq!(output.statistics.seed, seed);

    let replay = run(Some(seed));
    assert_eq!(output.logs, replay.logs);
}
