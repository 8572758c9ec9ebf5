//! Seat allocation
//!
//! First-fit assignment of dine-in parties to seats. Candidates are the seats in
//! the preferred zone that can hold the party, scanned in seat-identifier order;
//! the first one whose history has no overlapping reservation wins. When none is
//! free the party waits instead. There is no retry against other zones or times.

use crate::facility::{Reservation, Seat};
use crate::simulation::{RunContext, SimulationError, SimulationResult};
use crate::types::{venue_rules, GroupId};
use crate::visitor::PartyRequest;
use rand::Rng;
use tracing::{debug, instrument};

/// Outcome of a seating attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Allocation {
    /// The party got a seat and a group identifier
    Seated {
        /// Assigned seat
        seat: Seat,
        /// Group identifier of the party
        group_id: GroupId,
    },
    /// No candidate seat was free for the whole interval
    Waiting {
        /// Minutes the party waits before giving up
        wait_minutes: u32,
    },
}

impl Allocation {
    /// Whether the party got a seat
    pub fn is_seated(&self) -> bool {
        matches!(self, Allocation::Seated { .. })
    }
}

/// First-fit seat allocator
#[derive(Debug, Clone, Copy)]
pub struct SeatAllocator {
    wait_minutes: (u32, u32),
}

impl SeatAllocator {
    /// Create an allocator with the venue's wait range
    pub fn new() -> Self {
        Self { wait_minutes: venue_rules::WAIT_MINUTES }
    }

    /// Create an allocator with a custom inclusive wait range
    pub fn with_wait_range(min: u32, max: u32) -> Self {
        Self { wait_minutes: (min, max) }
    }

    /// Try to seat `party` for `reservation`
    ///
    /// On success the reservation is appended to the seat's history and the next
    /// group identifier is issued. The RNG is only consulted for a wait.
    #[instrument(skip(self, context, rng), fields(zone = %party.zone_preference, size = party.party_size))]
    pub fn allocate<R: Rng + ?Sized>(
        &self,
        reservation: Reservation,
        party: PartyRequest,
        context: &mut RunContext,
        rng: &mut R,
    ) -> SimulationResult<Allocation> {
        let free_seat = {
            let registry = context.registry();
            registry
                .candidates(party.zone_preference, party.party_size)
                .find(|seat| !registry.has_conflict(&seat.seat_id, &reservation))
                .cloned()
        };

        match free_seat {
            Some(seat) => {
                let group_id = seat_party(&seat, reservation, context)?;
                debug!("Seated group {} at {}", group_id, seat.seat_id);
                Ok(Allocation::Seated { seat, group_id })
            }
            None => {
                let (min, max) = self.wait_minutes;
                let wait_minutes = rng.gen_range(min..=max);
                debug!("No seat free, party waits {} minutes", wait_minutes);
                Ok(Allocation::Waiting { wait_minutes })
            }
        }
    }
}

/// Book `seat` and issue the party's group id
///
/// The seat must belong to the context's roster.
fn seat_party(seat: &Seat, reservation: Reservation, context: &mut RunContext) -> SimulationResult<GroupId> {
    if !context.registry_mut().reserve(&seat.seat_id, reservation) {
        return Err(SimulationError::event_generation_error(format!(
            "seat {} is not in the roster",
            seat.seat_id
        )));
    }
    Ok(context.next_group_id())
}

impl Default for SeatAllocator {
    fn default() -> Self {
        Self::new()
    }
}
