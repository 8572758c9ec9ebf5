//! Seat Occupancy Simulator
//!
//! A discrete-event simulator that generates synthetic visitor and seat-occupancy
//! datasets for a small food-service venue with a fixed roster of capacity-typed
//! seats.
//!
//! # Overview
//!
//! For every day in a date range the simulator draws a daily visitor count, samples
//! each visitor's demographics and arrival time, classifies the visit as dine-in or
//! takeout, and seats dine-in parties first-fit against per-seat reservation
//! histories. The run produces four event streams (people, seat status, wait and
//! anomaly logs) plus the seat roster.
//!
//! ## Key Features
//!
//! - **Calendar-driven demand**: weekday and weekend/holiday visitor ranges
//! - **Age-conditioned arrivals**: hourly weights per age bracket
//! - **Operating rules**: opening hours and a takeout-only last-order window
//! - **First-fit seating**: strict half-open overlap checks per seat
//! - **Reproducible runs**: a single seeded RNG, with the seed always reported
//! - **JSONL or CSV output**: one file per dataset
//!
//! ## Quick Start
//!
//! ```rust
//! use seat_occupancy_simulator::*;
//! use chrono::NaiveDate;
//!
//! let day = NaiveDate::from_ymd_opt(2025, 5, 1).unwrap();
//! let config = SimulationConfig {
//!     start_date: day,
//!     end_date: day,
//!     seed: Some(42),
//!     ..Default::default()
//! };
//!
//! let output = SimulationOrchestrator::new(config)?.run()?;
//! println!("{}", output.statistics.generate_compact_summary());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Module Organization
//!
//! - [`types`]: Core types, identifiers, and configuration
//! - [`facility`]: Seats, reservations and the seat registry
//! - [`visitor`]: Visits and the arrival sampler
//! - [`events`]: Event log rows and their composition
//! - [`simulation`]: Simulation orchestration and control
//! - [`output`]: JSONL and CSV dataset writers
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐    ┌─────────────┐    ┌─────────────┐
//! │  Calendar   │───►│   Arrival   │───►│    Seat     │
//! │  & Demand   │    │   Sampler   │    │  Allocator  │
//! └─────────────┘    └─────────────┘    └─────────────┘
//!                                              │
//!                                              ▼
//! ┌─────────────┐    ┌─────────────┐    ┌─────────────┐
//! │   Output    │◄───│  Event Log  │◄───│   Anomaly   │
//! │   Writers   │    │  Composer   │    │ Classifier  │
//! └─────────────┘    └─────────────┘    └─────────────┘
//! ```
#![warn(missing_docs, missing_debug_implementations, unreachable_pub)]

// Module declarations
pub mod events;
pub mod facility;
pub mod output;
pub mod simulation;
pub mod types;
pub mod visitor;

// Core types and identifiers
pub use types::{
    AgeGroup, ConfigError, ConfigValidationError, DayType, Gender, GroupId, OutputFormat, PersonId,
    SeatId, SimulationConfig, VisitKind, Zone,
};

// Facility types
pub use facility::{Reservation, Seat, SeatRegistry};

// Visitor types
pub use visitor::{ArrivalSampler, PartyRequest, Visit};

// Event types
pub use events::{
    AnomalyLogEntry, EventComposer, EventLogs, PeopleLogEntry, SeatInfoEntry, SeatStatusEntry,
    WaitLogEntry,
};

// Simulation types
pub use simulation::{
    Allocation, DemandCalendar, OperatingHours, RunContext, SeatAllocator, SimulationError,
    SimulationOrchestrator, SimulationOutput, SimulationResult, SimulationStatistics,
};

// Output
pub use output::write_simulation_output;
