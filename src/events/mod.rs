//! Event log rows and their composition
//!
//! This module defines the dataset rows and derives them from simulated visits.
//!
//! # Overview
//!
//! - **PeopleLogEntry**, **SeatStatusEntry**, **WaitLogEntry**, **AnomalyLogEntry**:
//!   rows of the four event streams
//! - **SeatInfoEntry**: a row of the seat roster dataset
//! - **EventComposer**: appends the rows for one visit and its seating outcome
//! - **AnomalyClassifier**: long and short stay labels
//!
//! # Usage Example
//!
//! ```rust
//! use seat_occupancy_simulator::events::*;
//! use seat_occupancy_simulator::types::*;
//! use seat_occupancy_simulator::visitor::Visit;
//! use chrono::NaiveDate;
//!
//! let entry = NaiveDate::from_ymd_opt(2025, 4, 14).unwrap().and_hms_opt(12, 0, 0).unwrap();
//! let visit = Visit::takeout(PersonId(1), AgeGroup::Thirties, Gender::Female, entry, 6);
//!
//! let mut logs = EventLogs::new();
//! EventComposer::new().record(&visit, None, &mut logs).unwrap();
//! assert_eq!(logs.people_log.len(), 2);
//! ```

pub mod anomaly;
pub mod composer;
pub mod records;

// Re-export all public types for convenience
pub use anomaly::{classify_stay, AnomalyClassifier};
pub use composer::{EventComposer, EventLogs};
pub use records::*;
