//! Seat registry and reservation history
//!
//! This module contains the SeatRegistry struct: the immutable roster of seats in
//! a fixed scan order, an index for lookups by seat id, and the append-only
//! reservation history of every seat.

use crate::facility::seat::{Reservation, Seat};
use crate::types::{SeatId, Zone};
use std::collections::HashMap;

/// The venue roster together with each seat's reservation history
#[derive(Debug, Clone)]
pub struct SeatRegistry {
    /// Seats in ascending identifier order
    seats: Vec<Seat>,
    /// Reservation history, parallel to `seats`
    reservations: Vec<Vec<Reservation>>,
    /// Quick lookup map from seat ID to index
    seat_index: HashMap<SeatId, usize>,
}

impl SeatRegistry {
    /// Create a registry from a roster; seats are ordered by identifier
    pub fn new(mut seats: Vec<Seat>) -> Self {
        seats.sort_by(|a, b| a.seat_id.cmp(&b.seat_id));

        let seat_index =
            seats.iter().enumerate().map(|(idx, seat)| (seat.seat_id.clone(), idx)).collect();
        let reservations = vec![Vec::new(); seats.len()];

        Self { seats, reservations, seat_index }
    }

    /// All seats in scan order
    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }

    /// Number of seats in the roster
    pub fn seat_count(&self) -> usize {
        self.seats.len()
    }

    /// Get a seat by ID
    pub fn get_seat(&self, seat_id: &SeatId) -> Option<&Seat> {
        self.seat_index.get(seat_id).map(|&idx| &self.seats[idx])
    }

    /// Seats that can take a party of `party_size` preferring `zone`, in scan order
    pub fn candidates(&self, zone: Zone, party_size: u8) -> impl Iterator<Item = &Seat> + '_ {
        self.seats.iter().filter(move |seat| seat.serves(zone, party_size))
    }

    /// Whether `reservation` overlaps anything already booked on `seat_id`
    ///
    /// Unknown seats have no history and therefore never conflict.
    pub fn has_conflict(&self, seat_id: &SeatId, reservation: &Reservation) -> bool {
        self.reservations(seat_id).iter().any(|existing| reservation.overlaps(existing))
    }

    /// Append a reservation to a seat's history
    ///
    /// Returns `false` if the seat is not in the roster.
    pub fn reserve(&mut self, seat_id: &SeatId, reservation: Reservation) -> bool {
        match self.seat_index.get(seat_id) {
            Some(&idx) => {
                self.reservations[idx].push(reservation);
                true
            }
            None => false,
        }
    }

    /// Reservation history of a seat, in booking order
    pub fn reservations(&self, seat_id: &SeatId) -> &[Reservation] {
        self.seat_index
            .get(seat_id)
            .map(|&idx| self.reservations[idx].as_slice())
            .unwrap_or(&[])
    }

    /// Seats paired with their histories, in scan order
    pub fn histories(&self) -> impl Iterator<Item = (&Seat, &[Reservation])> + '_ {
        self.seats.iter().zip(self.reservations.iter().map(Vec::as_slice))
    }

    /// Total number of reservations across all seats
    pub fn total_reservations(&self) -> usize {
        self.reservations.iter().map(Vec::len).sum()
    }

    /// Number of seats in a zone
    pub fn seats_in_zone(&self, zone: Zone) -> usize {
        self.seats.iter().filter(|seat| seat.zone == zone).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};

    fn at(hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 4, 14).unwrap().and_hms_opt(hour, minute, 0).unwrap()
    }

    fn roster() -> Vec<Seat> {
        vec![
            Seat::new(SeatId::new("S10"), 2, Zone::TwoSeat),
            Seat::new(SeatId::new("S2"), 4, Zone::FourSeat),
            Seat::new(SeatId::new("S1"), 4, Zone::FourSeat),
            Seat::new(SeatId::new("S5"), 2, Zone::TwoSeat),
        ]
    }

    #[test]
    fn test_registry_orders_seats_by_id() {
        let registry = SeatRegistry::new(roster());

        let ids: Vec<&str> = registry.seats().iter().map(|s| s.seat_id.as_str()).collect();
        assert_eq!(ids, vec!["S1", "S2", "S5", "S10"]);
        assert_eq!(registry.seat_count(), 4);
        assert_eq!(registry.seats_in_zone(Zone::TwoSeat), 2);
    }

    #[test]
    fn test_candidates_filter_by_zone_and_capacity() {
        let registry = SeatRegistry::new(roster());

        let large: Vec<&str> =
            registry.candidates(Zone::FourSeat, 3).map(|s| s.seat_id.as_str()).collect();
        assert_eq!(large, vec!["S1", "S2"]);

        let small: Vec<&str> =
            registry.candidates(Zone::TwoSeat, 2).map(|s| s.seat_id.as_str()).collect();
        assert_eq!(small, vec!["S5", "S10"]);

        // A party of three never fits a two-seat table
        assert_eq!(registry.candidates(Zone::TwoSeat, 3).count(), 0);
    }

    #[test]
    fn test_reserve_and_conflict_detection() {
        let mut registry = SeatRegistry::new(roster());
        let s1 = SeatId::new("S1");

        assert!(registry.reserve(&s1, Reservation::new(at(10, 0), at(10, 40))));

        assert!(registry.has_conflict(&s1, &Reservation::new(at(10, 20), at(11, 0))));
        assert!(!registry.has_conflict(&s1, &Reservation::new(at(10, 40), at(11, 0))));
        assert!(!registry.has_conflict(&SeatId::new("S2"), &Reservation::new(at(10, 20), at(11, 0))));

        assert_eq!(registry.reservations(&s1).len(), 1);
        assert_eq!(registry.total_reservations(), 1);
    }

    #[test]
    fn test_reserve_unknown_seat() {
        let mut registry = SeatRegistry::new(roster());
        let ghost = SeatId::new("S99");

        assert!(!registry.reserve(&ghost, Reservation::new(at(10, 0), at(10, 40))));
        assert!(registry.reservations(&ghost).is_empty());
        assert!(registry.get_seat(&ghost).is_none());
    }

    #[test]
    fn test_histories_are_append_only_in_booking_order() {
        let mut registry = SeatRegistry::new(roster());
        let s5 = SeatId::new("S5");

        registry.reserve(&s5, Reservation::new(at(15, 0), at(15, 30)));
        registry.reserve(&s5, Reservation::new(at(9, 0), at(9, 30)));

        let history = registry.reservations(&s5);
        assert_eq!(history[0].entry_time, at(15, 0));
        assert_eq!(history[1].entry_time, at(9, 0));

        let booked: usize = registry.histories().map(|(_, h)| h.len()).sum();
        assert_eq!(booked, 2);
    }
}
