//! Visitor modeling and arrival sampling
//!
//! This module contains the visit records and the sampler that generates them.
//!
//! # Overview
//!
//! - **ArrivalSampler**: draws demographics, arrival time and visit kind per visitor
//! - **ArrivalDraw**: an accepted draw before identifiers are assigned
//! - **Visit**: a visitor with its person identifier
//! - **PartyRequest**: party size and zone preference of a dine-in visit
//!
//! # Usage Example
//!
//! ```rust
//! use seat_occupancy_simulator::visitor::*;
//! use seat_occupancy_simulator::types::*;
//! use chrono::NaiveDate;
//! use rand::SeedableRng;
//!
//! let sampler = ArrivalSampler::from_config(&SimulationConfig::default()).unwrap();
//! let mut rng = rand::rngs::StdRng::seed_from_u64(1);
//! let date = NaiveDate::from_ymd_opt(2025, 4, 14).unwrap();
//!
//! if let Some(draw) = sampler.sample(date, DayType::Weekday, &mut rng) {
//!     let visit = draw.into_visit(PersonId(1));
//!     assert!(visit.exit_time() > visit.entry_time);
//! }
//! ```

pub mod generator;
pub mod visit;

// Re-export all public types for convenience
pub use generator::ArrivalSampler;
pub use visit::{ArrivalDraw, PartyRequest, Visit};
