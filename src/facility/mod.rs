//! Seat roster and occupancy history
//!
//! This module manages the venue's seats and the reservations booked against them.
//!
//! # Overview
//!
//! - **Seat**: a capacity-typed table in a zone, immutable for the run
//! - **Reservation**: a half-open `[entry, exit)` interval held by one party
//! - **SeatRegistry**: the ordered roster plus each seat's append-only history
//!
//! # Usage Example
//!
//! ```rust
//! use seat_occupancy_simulator::facility::*;
//! use seat_occupancy_simulator::types::*;
//! use chrono::NaiveDate;
//!
//! let mut registry = SeatRegistry::new(vec![
//!     Seat::new(SeatId::new("S1"), 4, Zone::FourSeat),
//!     Seat::new(SeatId::new("S2"), 2, Zone::TwoSeat),
//! ]);
//!
//! let ten = NaiveDate::from_ymd_opt(2025, 4, 14).unwrap().and_hms_opt(10, 0, 0).unwrap();
//! let booking = Reservation::for_minutes(ten, 40);
//! let seat_id = SeatId::new("S1");
//!
//! assert!(!registry.has_conflict(&seat_id, &booking));
//! registry.reserve(&seat_id, booking);
//! assert!(registry.has_conflict(&seat_id, &booking));
//! ```

pub mod registry;
pub mod seat;

// Re-export all public types for convenience
pub use registry::SeatRegistry;
pub use seat::{Reservation, Seat};
