//! Visit records
//!
//! This module contains the visitor draw produced by the arrival sampler and the
//! Visit it becomes once the run context gives it a person identifier.

use crate::facility::Reservation;
use crate::types::{AgeGroup, Gender, PersonId, VisitKind, Zone};
use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Seating request of a dine-in party
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartyRequest {
    /// Number of guests in the party
    pub party_size: u8,
    /// Zone the party wants to sit in
    pub zone_preference: Zone,
}

impl PartyRequest {
    /// Create a new seating request
    pub fn new(party_size: u8, zone_preference: Zone) -> Self {
        Self { party_size, zone_preference }
    }
}

/// One accepted arrival drawn by the sampler, before identifiers are assigned
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArrivalDraw {
    /// Age bracket
    pub age_group: AgeGroup,
    /// Gender
    pub gender: Gender,
    /// Arrival timestamp
    pub entry_time: NaiveDateTime,
    /// Dine-in or takeout
    pub kind: VisitKind,
    /// Intended visit length in minutes
    pub duration_minutes: u32,
    /// Seating request, dine-in only
    pub party: Option<PartyRequest>,
}

impl ArrivalDraw {
    /// Attach a person identifier
    pub fn into_visit(self, person_id: PersonId) -> Visit {
        Visit {
            person_id,
            age_group: self.age_group,
            gender: self.gender,
            entry_time: self.entry_time,
            kind: self.kind,
            duration_minutes: self.duration_minutes,
            party: self.party,
        }
    }
}

/// A simulated visitor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Visit {
    /// Unique person identifier
    pub person_id: PersonId,
    /// Age bracket
    pub age_group: AgeGroup,
    /// Gender
    pub gender: Gender,
    /// Arrival timestamp
    pub entry_time: NaiveDateTime,
    /// Dine-in or takeout
    pub kind: VisitKind,
    /// Intended visit length in minutes
    pub duration_minutes: u32,
    /// Seating request, dine-in only
    pub party: Option<PartyRequest>,
}

impl Visit {
    /// Create a dine-in visit
    pub fn dine_in(
        person_id: PersonId,
        age_group: AgeGroup,
        gender: Gender,
        entry_time: NaiveDateTime,
        duration_minutes: u32,
        party: PartyRequest,
    ) -> Self {
        Self {
            person_id,
            age_group,
            gender,
            entry_time,
            kind: VisitKind::DineIn,
            duration_minutes,
            party: Some(party),
        }
    }

    /// Create a takeout visit
    pub fn takeout(
        person_id: PersonId,
        age_group: AgeGroup,
        gender: Gender,
        entry_time: NaiveDateTime,
        duration_minutes: u32,
    ) -> Self {
        Self {
            person_id,
            age_group,
            gender,
            entry_time,
            kind: VisitKind::Takeout,
            duration_minutes,
            party: None,
        }
    }

    /// Whether the visitor needs a seat
    pub fn is_dine_in(&self) -> bool {
        self.kind == VisitKind::DineIn
    }

    /// When the visitor leaves if nothing gets in the way
    pub fn exit_time(&self) -> NaiveDateTime {
        self.entry_time + Duration::minutes(i64::from(self.duration_minutes))
    }

    /// Midpoint of the stay, floored to the minute
    pub fn stay_time(&self) -> NaiveDateTime {
        self.entry_time + Duration::minutes(i64::from(self.duration_minutes / 2))
    }

    /// Interval the visitor would occupy a seat for
    pub fn reservation(&self) -> Reservation {
        Reservation::new(self.entry_time, self.exit_time())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 4, 14).unwrap().and_hms_opt(hour, minute, 0).unwrap()
    }

    #[test]
    fn test_dine_in_visit_times() {
        let visit = Visit::dine_in(
            PersonId(1),
            AgeGroup::Thirties,
            Gender::Male,
            at(10, 0),
            45,
            PartyRequest::new(2, Zone::TwoSeat),
        );

        assert!(visit.is_dine_in());
        assert_eq!(visit.exit_time(), at(10, 45));
        // 45 / 2 floors to 22
        assert_eq!(visit.stay_time(), at(10, 22));
        assert_eq!(visit.reservation(), Reservation::new(at(10, 0), at(10, 45)));
    }

    #[test]
    fn test_takeout_visit() {
        let visit = Visit::takeout(PersonId(2), AgeGroup::Teen, Gender::Female, at(21, 55), 8);

        assert!(!visit.is_dine_in());
        assert!(visit.party.is_none());
        assert_eq!(visit.exit_time(), at(22, 3));
    }

    #[test]
    fn test_arrival_draw_into_visit() {
        let draw = ArrivalDraw {
            age_group: AgeGroup::Fifties,
            gender: Gender::Female,
            entry_time: at(12, 5),
            kind: VisitKind::DineIn,
            duration_minutes: 60,
            party: Some(PartyRequest::new(4, Zone::FourSeat)),
        };

        let visit = draw.clone().into_visit(PersonId(17));
        assert_eq!(visit.person_id, PersonId(17));
        assert_eq!(visit.entry_time, draw.entry_time);
        assert_eq!(visit.party, draw.party);
    }
}
