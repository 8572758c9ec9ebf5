//! Identifier types for the seat occupancy simulator
//!
//! Person and group identifiers are plain counters handed out by the run
//! context, so they serialize as bare integers. Seat identifiers come from the
//! configured roster and serialize as their label (`S1`, `S2`, ...).

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Unique identifier for a simulated visitor
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonId(pub u64);

impl PersonId {
    /// Raw counter value
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier assigned to a dine-in party when it is seated
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroupId(pub u64);

impl GroupId {
    /// Raw counter value
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a seat in the venue roster
///
/// Ordering is "natural": a trailing number compares numerically, so `S2`
/// sorts before `S10`. The allocator relies on this order when it scans
/// candidates.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeatId(pub String);

impl SeatId {
    /// Create a seat identifier from its label
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// The seat label
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn split_numeric_suffix(&self) -> (&str, Option<u64>) {
        let digits_start = self
            .0
            .char_indices()
            .rev()
            .take_while(|(_, c)| c.is_ascii_digit())
            .last()
            .map(|(idx, _)| idx);

        match digits_start {
            Some(idx) => (&self.0[..idx], self.0[idx..].parse().ok()),
            None => (&self.0, None),
        }
    }
}

impl fmt::Display for SeatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Ord for SeatId {
    fn cmp(&self, other: &Self) -> Ordering {
        let (prefix_a, number_a) = self.split_numeric_suffix();
        let (prefix_b, number_b) = other.split_numeric_suffix();

        prefix_a
            .cmp(prefix_b)
            .then_with(|| number_a.cmp(&number_b))
            .then_with(|| self.0.cmp(&other.0))
    }
}

impl PartialOrd for SeatId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
