//! Simulation orchestration and control
//!
//! This module contains the simulation orchestrator, the calendar and operating
//! hours, seat allocation, statistics collection, logging and error handling.
//!
//! # Overview
//!
//! - **SimulationOrchestrator**: drives a run day by day and returns its output
//! - **DemandCalendar**: day types and daily visitor counts
//! - **OperatingHours**: admission window and last-order cutoff
//! - **SeatAllocator**: first-fit seating against per-seat reservation histories
//! - **RunContext**: seat histories plus the person and group counters of a run
//! - **SimulationStatistics**: run counters and the summary report
//! - **SimulationError**: error handling for simulation operations
//!
//! # Usage Example
//!
//! ```rust
//! use seat_occupancy_simulator::simulation::*;
//! use seat_occupancy_simulator::types::*;
//! use chrono::NaiveDate;
//!
//! let day = NaiveDate::from_ymd_opt(2025, 4, 14).unwrap();
//! let config = SimulationConfig {
//!     start_date: day,
//!     end_date: day,
//!     seed: Some(7),
//!     ..Default::default()
//! };
//!
//! let output = SimulationOrchestrator::new(config).unwrap().run().unwrap();
//! assert_eq!(output.seed, 7);
//! assert_eq!(output.statistics.days_simulated, 1);
//! ```

pub mod allocator;
pub mod calendar;
pub mod context;
pub mod error;
pub mod logging;
pub mod orchestrator;
pub mod statistics;
pub mod time_manager;

// Re-export all public types for convenience
pub use allocator::*;
pub use calendar::*;
pub use context::*;
pub use error::*;
pub use logging::*;
pub use orchestrator::*;
pub use statistics::*;
pub use time_manager::*;
