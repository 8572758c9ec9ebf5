//! Statistics collection and reporting
//!
//! This module contains the run counters and the plain-text summary printed at the
//! end of a run.

use crate::events::EventLogs;
use crate::simulation::Allocation;
use crate::types::{AnomalyKind, DayType};
use crate::visitor::Visit;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Counters for one simulation run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimulationStatistics {
    // Calendar
    /// Number of days simulated
    pub days_simulated: usize,
    /// Days that used weekend/holiday demand
    pub weekend_or_holiday_days: usize,
    /// Seats in the roster
    pub total_seats: usize,

    // Arrivals
    /// Visitor draws requested by the demand plan
    pub draws_requested: usize,
    /// Draws discarded for falling outside operating hours
    pub draws_rejected: usize,
    /// Visitors that entered the simulation
    pub total_visitors: usize,
    /// Dine-in visitors
    pub dine_in_visitors: usize,
    /// Takeout visitors
    pub takeout_visitors: usize,

    // Seating
    /// Dine-in visitors that got a seat
    pub seated_visitors: usize,
    /// Dine-in visitors that had to wait
    pub waiting_visitors: usize,

    // Anomalies
    /// Long stay labels
    pub long_stays: usize,
    /// Short stay labels
    pub short_stays: usize,

    // Rows
    /// People log rows
    pub people_rows: usize,
    /// Seat status rows
    pub seat_status_rows: usize,
    /// Wait log rows
    pub wait_rows: usize,
    /// Anomaly log rows
    pub anomaly_rows: usize,

    /// Seed the run used
    pub seed: u64,
    /// Wall-clock duration of the run
    pub simulation_duration: Duration,
}

impl SimulationStatistics {
    /// Create statistics for a roster of `total_seats`
    pub fn new(total_seats: usize, seed: u64) -> Self {
        Self { total_seats, seed, ..Default::default() }
    }

    /// Count a simulated day and its planned draws
    pub fn record_day(&mut self, day_type: DayType, draws: u32) {
        self.days_simulated += 1;
        if day_type.is_weekend_or_holiday() {
            self.weekend_or_holiday_days += 1;
        }
        self.draws_requested += draws as usize;
    }

    /// Count a draw discarded outside operating hours
    pub fn record_rejected_draw(&mut self) {
        self.draws_rejected += 1;
    }

    /// Count a processed visit and its seating outcome
    pub fn record_visit(&mut self, visit: &Visit, allocation: Option<&Allocation>) {
        self.total_visitors += 1;

        if !visit.is_dine_in() {
            self.takeout_visitors += 1;
            return;
        }

        self.dine_in_visitors += 1;
        match allocation {
            Some(Allocation::Seated { .. }) => self.seated_visitors += 1,
            Some(Allocation::Waiting { .. }) => self.waiting_visitors += 1,
            None => {}
        }
    }

    /// Take row and anomaly counts from the finished logs
    pub fn record_logs(&mut self, logs: &EventLogs) {
        self.people_rows = logs.people_log.len();
        self.seat_status_rows = logs.seat_status.len();
        self.wait_rows = logs.wait_log.len();
        self.anomaly_rows = logs.anomaly_log.len();
        self.long_stays = logs.anomaly_log.iter().filter(|row| row.kind == AnomalyKind::LongStay).count();
        self.short_stays = logs.anomaly_log.iter().filter(|row| row.kind == AnomalyKind::ShortStay).count();
    }

    /// Set the wall-clock duration
    pub fn set_simulation_duration(&mut self, duration: Duration) {
        self.simulation_duration = duration;
    }

    /// Share of dine-in visitors among all visitors
    pub fn dine_in_percentage(&self) -> f64 {
        percentage(self.dine_in_visitors, self.total_visitors)
    }

    /// Share of takeout visitors among all visitors
    pub fn takeout_percentage(&self) -> f64 {
        percentage(self.takeout_visitors, self.total_visitors)
    }

    /// Share of dine-in visitors that got a seat
    pub fn seating_rate(&self) -> f64 {
        percentage(self.seated_visitors, self.dine_in_visitors)
    }

    /// Share of draws discarded outside operating hours
    pub fn rejection_rate(&self) -> f64 {
        percentage(self.draws_rejected, self.draws_requested)
    }

    /// Average visitors per simulated day
    pub fn average_visitors_per_day(&self) -> f64 {
        if self.days_simulated == 0 {
            0.0
        } else {
            self.total_visitors as f64 / self.days_simulated as f64
        }
    }

    /// Rows across all four event streams
    pub fn total_rows(&self) -> usize {
        self.people_rows + self.seat_status_rows + self.wait_rows + self.anomaly_rows
    }

    /// Multi-line summary report
    pub fn generate_summary_report(&self) -> String {
        let mut report = String::new();

        report.push_str("=== Simulation Summary Report ===\n\n");
        report.push_str(&format!("Seed: {}\n", self.seed));
        report.push_str(&format!(
            "Simulation Duration: {:.2} seconds\n",
            self.simulation_duration.as_secs_f64()
        ));
        report.push_str(&format!(
            "Days Simulated: {} ({} weekend/holiday)\n",
            self.days_simulated, self.weekend_or_holiday_days
        ));
        report.push_str(&format!("Seats: {}\n\n", self.total_seats));

        report.push_str("Visitors:\n");
        report.push_str(&format!(
            "  - Total: {} (avg {:.1}/day)\n",
            self.total_visitors,
            self.average_visitors_per_day()
        ));
        report.push_str(&format!(
            "  - Dine-in: {} ({:.1}%)\n",
            self.dine_in_visitors,
            self.dine_in_percentage()
        ));
        report.push_str(&format!(
            "  - Takeout: {} ({:.1}%)\n",
            self.takeout_visitors,
            self.takeout_percentage()
        ));
        report.push_str(&format!(
            "  - Rejected draws: {} ({:.1}% of {})\n\n",
            self.draws_rejected,
            self.rejection_rate(),
            self.draws_requested
        ));

        report.push_str("Seating:\n");
        report.push_str(&format!(
            "  - Seated: {} ({:.1}% of dine-in)\n",
            self.seated_visitors,
            self.seating_rate()
        ));
        report.push_str(&format!("  - Waiting: {}\n\n", self.waiting_visitors));

        report.push_str("Anomalies:\n");
        report.push_str(&format!("  - Long stays: {}\n", self.long_stays));
        report.push_str(&format!("  - Short stays: {}\n\n", self.short_stays));

        report.push_str("Rows:\n");
        report.push_str(&format!("  - people_log: {}\n", self.people_rows));
        report.push_str(&format!("  - seat_status: {}\n", self.seat_status_rows));
        report.push_str(&format!("  - wait_log: {}\n", self.wait_rows));
        report.push_str(&format!("  - anomaly_log: {}\n", self.anomaly_rows));

        report
    }

    /// One-line summary suitable for logging
    pub fn generate_compact_summary(&self) -> String {
        format!(
            "Simulation: {} days, {} visitors ({} dine-in, {} takeout), {} seated, {} waiting, {} anomalies",
            self.days_simulated,
            self.total_visitors,
            self.dine_in_visitors,
            self.takeout_visitors,
            self.seated_visitors,
            self.waiting_visitors,
            self.anomaly_rows
        )
    }
}

fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}

impl fmt::Display for SimulationStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.generate_summary_report())
    }
}
