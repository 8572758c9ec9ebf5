//! Event log composition
//!
//! This module turns each visit and its seating outcome into rows of the people,
//! seat status, wait and anomaly logs. Rows are appended in generation order and
//! never re-sorted.

use crate::events::anomaly::AnomalyClassifier;
use crate::events::records::{AnomalyLogEntry, PeopleLogEntry, SeatStatusEntry, WaitLogEntry};
use crate::simulation::{Allocation, SimulationError, SimulationResult};
use crate::types::{venue_rules, PeopleEventType, PersonId, Zone};
use crate::visitor::{PartyRequest, Visit};
use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// The four event streams of a run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventLogs {
    /// Visitor movement rows
    pub people_log: Vec<PeopleLogEntry>,
    /// One row per seating
    pub seat_status: Vec<SeatStatusEntry>,
    /// One row per unseated dine-in visit
    pub wait_log: Vec<WaitLogEntry>,
    /// Long and short stay labels
    pub anomaly_log: Vec<AnomalyLogEntry>,
}

impl EventLogs {
    /// Create empty logs
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of rows across all streams
    pub fn total_rows(&self) -> usize {
        self.people_log.len() + self.seat_status.len() + self.wait_log.len() + self.anomaly_log.len()
    }

    /// Whether nothing has been recorded yet
    pub fn is_empty(&self) -> bool {
        self.total_rows() == 0
    }

    /// People log rows of one visitor, in recorded order
    pub fn people_rows_for(&self, person_id: PersonId) -> Vec<&PeopleLogEntry> {
        self.people_log.iter().filter(|row| row.person_id == person_id).collect()
    }
}

/// Writes visit outcomes into [`EventLogs`]
#[derive(Debug, Clone, Copy, Default)]
pub struct EventComposer {
    classifier: AnomalyClassifier,
}

impl EventComposer {
    /// Create a composer with the venue anomaly thresholds
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a composer with a custom classifier
    pub fn with_classifier(classifier: AnomalyClassifier) -> Self {
        Self { classifier }
    }

    /// Record one visit
    ///
    /// Takeout visits carry no allocation; dine-in visits must carry one.
    pub fn record(
        &self,
        visit: &Visit,
        allocation: Option<&Allocation>,
        logs: &mut EventLogs,
    ) -> SimulationResult<()> {
        match (visit.party, allocation) {
            (None, None) => {
                self.record_takeout(visit, logs);
                Ok(())
            }
            (Some(party), Some(allocation)) => {
                self.record_dine_in(visit, party, allocation, logs);
                Ok(())
            }
            (None, Some(_)) => Err(SimulationError::event_generation_error(format!(
                "takeout visit {} cannot hold a seat",
                visit.person_id
            ))),
            (Some(_), None) => Err(SimulationError::event_generation_error(format!(
                "dine-in visit {} has no seating outcome",
                visit.person_id
            ))),
        }
    }

    fn record_takeout(&self, visit: &Visit, logs: &mut EventLogs) {
        let duration = Some(visit.duration_minutes);
        logs.people_log.push(people_row(visit, visit.entry_time, PeopleEventType::Enter, None, duration));
        logs.people_log.push(people_row(visit, visit.exit_time(), PeopleEventType::Exit, None, duration));
    }

    fn record_dine_in(&self, visit: &Visit, party: PartyRequest, allocation: &Allocation, logs: &mut EventLogs) {
        let zone = Some(party.zone_preference);
        logs.people_log.push(people_row(visit, visit.entry_time, PeopleEventType::Enter, zone, None));

        match allocation {
            Allocation::Seated { seat, group_id } => {
                logs.seat_status.push(SeatStatusEntry {
                    seat_id: seat.seat_id.clone(),
                    timestamp: visit.entry_time,
                    is_occupied: true,
                    person_id: visit.person_id,
                    zone: seat.zone,
                    capacity: seat.capacity,
                    current_count: party.party_size,
                    group_id: *group_id,
                });

                let duration = Some(visit.duration_minutes);
                logs.people_log.push(people_row(visit, visit.stay_time(), PeopleEventType::Stay, zone, duration));
                logs.people_log.push(people_row(visit, visit.exit_time(), PeopleEventType::Exit, zone, duration));
            }
            Allocation::Waiting { wait_minutes } => {
                logs.people_log.push(people_row(visit, visit.entry_time, PeopleEventType::Wait, zone, None));
                logs.wait_log.push(WaitLogEntry {
                    person_id: visit.person_id,
                    start_time: visit.entry_time,
                    end_time: visit.entry_time + Duration::minutes(i64::from(*wait_minutes)),
                    wait_duration: *wait_minutes,
                    reason: venue_rules::WAIT_REASON.to_string(),
                });
            }
        }

        // Labels follow the intended stay, seated or not
        if let Some((kind, severity)) = self.classifier.classify(visit.duration_minutes) {
            logs.anomaly_log.push(AnomalyLogEntry {
                person_id: visit.person_id,
                timestamp: visit.entry_time,
                zone: party.zone_preference,
                kind,
                severity,
            });
        }
    }
}

fn people_row(
    visit: &Visit,
    timestamp: NaiveDateTime,
    event_type: PeopleEventType,
    zone: Option<Zone>,
    duration: Option<u32>,
) -> PeopleLogEntry {
    PeopleLogEntry {
        person_id: visit.person_id,
        timestamp,
        event_type,
        zone,
        age_group: visit.age_group,
        gender: visit.gender,
        duration,
        person_type: visit.kind,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facility::Seat;
    use crate::types::{AgeGroup, AnomalyKind, Gender, GroupId, SeatId, Severity};
    use chrono::NaiveDate;

    fn at(hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 4, 14).unwrap().and_hms_opt(hour, minute, 0).unwrap()
    }

    fn dine_in(person: u64, duration: u32) -> Visit {
        Visit::dine_in(
            PersonId(person),
            AgeGroup::Twenties,
            Gender::Male,
            at(10, 0),
            duration,
            PartyRequest::new(3, Zone::FourSeat),
        )
    }

    fn event_types(logs: &EventLogs, person: u64) -> Vec<PeopleEventType> {
        logs.people_rows_for(PersonId(person)).iter().map(|row| row.event_type).collect()
    }

    #[test]
    fn test_takeout_rows() {
        let mut logs = EventLogs::new();
        let visit = Visit::takeout(PersonId(1), AgeGroup::Teen, Gender::Female, at(21, 40), 5);

        EventComposer::new().record(&visit, None, &mut logs).unwrap();

        assert_eq!(event_types(&logs, 1), vec![PeopleEventType::Enter, PeopleEventType::Exit]);
        assert!(logs.people_log.iter().all(|row| row.zone.is_none() && row.duration == Some(5)));
        assert_eq!(logs.people_log[1].timestamp, at(21, 45));
        assert!(logs.seat_status.is_empty() && logs.wait_log.is_empty() && logs.anomaly_log.is_empty());
    }

    #[test]
    fn test_seated_rows() {
        let mut logs = EventLogs::new();
        let visit = dine_in(2, 45);
        let allocation = Allocation::Seated {
            seat: Seat::new(SeatId::new("S1"), 4, Zone::FourSeat),
            group_id: GroupId(7),
        };

        EventComposer::new().record(&visit, Some(&allocation), &mut logs).unwrap();

        assert_eq!(
            event_types(&logs, 2),
            vec![PeopleEventType::Enter, PeopleEventType::Stay, PeopleEventType::Exit]
        );
        let rows = logs.people_rows_for(PersonId(2));
        assert_eq!(rows[0].duration, None);
        assert_eq!(rows[1].timestamp, at(10, 22));
        assert_eq!(rows[2].timestamp, at(10, 45));
        assert_eq!(rows[2].duration, Some(45));

        assert_eq!(logs.seat_status.len(), 1);
        assert_eq!(logs.seat_status[0].group_id, GroupId(7));
        assert_eq!(logs.seat_status[0].current_count, 3);
        assert!(logs.wait_log.is_empty());
        assert!(logs.anomaly_log.is_empty());
    }

    #[test]
    fn test_waiting_rows_keep_anomaly_label() {
        let mut logs = EventLogs::new();
        let visit = dine_in(3, 100);

        EventComposer::new()
            .record(&visit, Some(&Allocation::Waiting { wait_minutes: 12 }), &mut logs)
            .unwrap();

        assert_eq!(event_types(&logs, 3), vec![PeopleEventType::Enter, PeopleEventType::Wait]);
        assert_eq!(logs.wait_log[0].end_time, at(10, 12));
        assert_eq!(logs.wait_log[0].reason, "No available seats");
        assert!(logs.seat_status.is_empty());

        assert_eq!(logs.anomaly_log.len(), 1);
        assert_eq!(logs.anomaly_log[0].kind, AnomalyKind::LongStay);
        assert_eq!(logs.anomaly_log[0].severity, Severity::High);
        assert_eq!(logs.anomaly_log[0].timestamp, at(10, 0));
    }

    #[test]
    fn test_mismatched_outcome_is_an_error() {
        let mut logs = EventLogs::new();
        let composer = EventComposer::new();

        assert!(composer.record(&dine_in(4, 30), None, &mut logs).is_err());

        let takeout = Visit::takeout(PersonId(5), AgeGroup::Teen, Gender::Male, at(11, 0), 3);
        let waiting = Allocation::Waiting { wait_minutes: 5 };
        assert!(composer.record(&takeout, Some(&waiting), &mut logs).is_err());
        assert!(logs.is_empty());
    }
}
