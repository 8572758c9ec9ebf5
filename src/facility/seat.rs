//! Seats and reservations
//!
//! This module contains the Seat struct describing one capacity-typed table in the
//! venue roster, and the Reservation interval recorded against a seat when a party
//! is assigned to it.

use crate::types::{SeatId, Zone};
use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A seat (table) in the venue roster
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seat {
    /// Roster label of the seat
    pub seat_id: SeatId,
    /// Largest party the seat serves
    pub capacity: u8,
    /// Zone the seat belongs to
    pub zone: Zone,
}

impl Seat {
    /// Create a new seat
    pub fn new(seat_id: SeatId, capacity: u8, zone: Zone) -> Self {
        Self { seat_id, capacity, zone }
    }

    /// Check if a party of `party_size` fits at this seat
    pub fn can_seat(&self, party_size: u8) -> bool {
        party_size <= self.capacity
    }

    /// Check if this seat can take a party that prefers `zone`
    pub fn serves(&self, zone: Zone, party_size: u8) -> bool {
        self.zone == zone && self.can_seat(party_size)
    }
}

/// Time interval during which a seat is held by one party
///
/// The interval is half-open: a party leaving at 10:40 and another arriving at
/// 10:40 do not conflict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    /// When the party sits down
    pub entry_time: NaiveDateTime,
    /// When the party leaves
    pub exit_time: NaiveDateTime,
}

impl Reservation {
    /// Create a reservation for `[entry_time, exit_time)`
    pub fn new(entry_time: NaiveDateTime, exit_time: NaiveDateTime) -> Self {
        Self { entry_time, exit_time }
    }

    /// Create a reservation lasting `minutes` from `entry_time`
    pub fn for_minutes(entry_time: NaiveDateTime, minutes: u32) -> Self {
        Self::new(entry_time, entry_time + Duration::minutes(i64::from(minutes)))
    }

    /// Strict overlap test; touching endpoints do not overlap
    pub fn overlaps(&self, other: &Reservation) -> bool {
        self.entry_time < other.exit_time && self.exit_time > other.entry_time
    }

    /// Length of the reservation
    pub fn duration(&self) -> Duration {
        self.exit_time - self.entry_time
    }
}
