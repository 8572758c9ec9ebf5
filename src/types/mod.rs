//! Core types and identifiers for the seat occupancy simulator
//!
//! This module contains fundamental types, identifiers, and configuration structures
//! used throughout the simulation system.
//!
//! # Overview
//!
//! - **Identifiers**: counter-based person and group ids, roster-based seat ids
//! - **Enums**: age brackets, zones, visit kinds and the labels written to the logs
//! - **Configuration**: simulation configuration with validation and CLI support
//!
//! # Usage Example
//!
//! ```rust
//! use seat_occupancy_simulator::types::*;
//!
//! let config = SimulationConfig {
//!     seed: Some(7),
//!     ..Default::default()
//! };
//! assert!(config.validate().is_ok());
//!
//! let zone: Zone = "large".parse().unwrap();
//! assert_eq!(zone, Zone::FourSeat);
//! ```

pub mod config;
pub mod enums;
pub mod identifiers;

// Re-export all public types for convenience
pub use config::*;
pub use enums::*;
pub use identifiers::*;
