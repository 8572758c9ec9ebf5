//! Per-run mutable state
//!
//! The RunContext owns everything that changes while a run progresses: the seat
//! registry with its reservation histories and the person and group counters.
//! Nothing here is global, so two runs never share state.

use crate::facility::{Seat, SeatRegistry};
use crate::types::{GroupId, PersonId};

/// Mutable state of a single simulation run
#[derive(Debug, Clone)]
pub struct RunContext {
    seats: SeatRegistry,
    next_person_id: u64,
    next_group_id: u64,
}

impl RunContext {
    /// Create a fresh context for a roster; both counters start at 1
    pub fn new(seats: Vec<Seat>) -> Self {
        Self::from_registry(SeatRegistry::new(seats))
    }

    /// Create a fresh context around an existing registry
    pub fn from_registry(seats: SeatRegistry) -> Self {
        Self { seats, next_person_id: 1, next_group_id: 1 }
    }

    /// Issue the next person identifier
    pub fn next_person_id(&mut self) -> PersonId {
        let id = PersonId(self.next_person_id);
        self.next_person_id += 1;
        id
    }

    /// Issue the next group identifier
    pub fn next_group_id(&mut self) -> GroupId {
        let id = GroupId(self.next_group_id);
        self.next_group_id += 1;
        id
    }

    /// Number of person identifiers issued so far
    pub fn persons_issued(&self) -> u64 {
        self.next_person_id - 1
    }

    /// Number of group identifiers issued so far
    pub fn groups_issued(&self) -> u64 {
        self.next_group_id - 1
    }

    /// Seat roster and reservation histories
    pub fn registry(&self) -> &SeatRegistry {
        &self.seats
    }

    /// Mutable access for the allocator
    pub fn registry_mut(&mut self) -> &mut SeatRegistry {
        &mut self.seats
    }

    /// Consume the context, keeping the final reservation histories
    pub fn into_registry(self) -> SeatRegistry {
        self.seats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{SeatId, Zone};

    #[test]
    fn test_counters_start_at_one_and_increase() {
        let mut context = RunContext::new(vec![Seat::new(SeatId::new("S1"), 2, Zone::TwoSeat)]);

        assert_eq!(context.persons_issued(), 0);
        assert_eq!(context.next_person_id(), PersonId(1));
        assert_eq!(context.next_person_id(), PersonId(2));
        assert_eq!(context.persons_issued(), 2);

        // Group counter is independent of the person counter
        assert_eq!(context.next_group_id(), GroupId(1));
        assert_eq!(context.groups_issued(), 1);
    }

    #[test]
    fn test_contexts_do_not_share_counters() {
        let mut first = RunContext::new(Vec::new());
        let mut second = RunContext::new(Vec::new());

        first.next_person_id();
        first.next_person_id();

        assert_eq!(second.next_person_id(), PersonId(1));
    }
}
