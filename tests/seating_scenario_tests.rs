//! Hand-built visits pushed through the orchestrator to check seating decisions
//! and the rows they produce.

use chrono::{NaiveDate, NaiveDateTime};
use seat_occupancy_simulator::types::{venue_rules, AgeGroup, Gender, PeopleEventType};
use seat_occupancy_simulator::{
    Allocation, GroupId, PartyRequest, PersonId, Seat, SeatId, SimulationConfig, SimulationOrchestrator,
    Visit, Zone,
};

fn at(hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 4, 14)
        .unwrap()
        .and_hms_opt(hour, minute, 0)
        .unwrap()
}

fn two_seat_venue() -> SimulationOrchestrator {
    let day = NaiveDate::from_ymd_opt(2025, 4, 14).unwrap();
    let config = SimulationConfig {
        start_date: day,
        end_date: day,
        seats: vec![
            Seat::new(SeatId::new("S1"), 4, Zone::FourSeat),
            Seat::new(SeatId::new("S2"), 2, Zone::TwoSeat),
        ],
        seed: Some(11),
        ..Default::default()
    };
    SimulationOrchestrator::new(config).unwrap()
}

fn party(person: u64, start: NaiveDateTime, minutes: u32, size: u8, zone: Zone) -> Visit {
    Visit::dine_in(
        PersonId(person),
        AgeGroup::Thirties,
        Gender::Female,
        start,
        minutes,
        PartyRequest::new(size, zone),
    )
}

fn seat_of(allocation: &Allocation) -> Option<&str> {
    match allocation {
        Allocation::Seated { seat, .. } => Some(seat.seat_id.as_str()),
        Allocation::Waiting { .. } => None,
    }
}

/// Overlapping party waits, the next party fits once the first one has left
#[test]
fn test_overlap_waits_then_seat_frees_up() {
    let mut sim = two_seat_venue();

    let first = sim.process_visit(&party(1, at(10, 0), 40, 3, Zone::FourSeat)).unwrap().unwrap();
    assert_eq!(seat_of(&first), Some("S1"));

    let second = sim.process_visit(&party(2, at(10, 20), 40, 2, Zone::FourSeat)).unwrap().unwrap();
    assert!(!second.is_seated());

    let third = sim.process_visit(&party(3, at(10, 45), 25, 4, Zone::FourSeat)).unwrap().unwrap();
    assert_eq!(seat_of(&third), Some("S1"));

    let logs = sim.logs();
    assert_eq!(logs.seat_status.len(), 2);
    assert_eq!(logs.seat_status[0].group_id, GroupId(1));
    assert_eq!(logs.seat_status[1].group_id, GroupId(2));
    assert_eq!(logs.seat_status[1].person_id, PersonId(3));
    assert_eq!(logs.seat_status[1].current_count, 4);

    assert_eq!(logs.wait_log.len(), 1);
    let wait = &logs.wait_log[0];
    assert_eq!(wait.person_id, PersonId(2));
    assert_eq!(wait.reason, "No available seats");
    assert_eq!(wait.start_time, at(10, 20));
    let (min_wait, max_wait) = venue_rules::WAIT_MINUTES;
    assert!((min_wait..=max_wait).contains(&wait.wait_duration));
    assert_eq!(
        (wait.end_time - wait.start_time).num_minutes(),
        i64::from(wait.wait_duration)
    );

    let waiting_rows: Vec<_> = logs.people_rows_for(PersonId(2)).iter().map(|row| row.event_type).collect();
    assert_eq!(waiting_rows, vec![PeopleEventType::Enter, PeopleEventType::Wait]);
}

/// A reservation ending exactly when the next one starts does not conflict
#[test]
fn test_touching_intervals_share_a_seat() {
    let mut sim = two_seat_venue();

    sim.process_visit(&party(1, at(12, 0), 30, 2, Zone::TwoSeat)).unwrap();
    let next = sim.process_visit(&party(2, at(12, 30), 30, 1, Zone::TwoSeat)).unwrap().unwrap();

    assert_eq!(seat_of(&next), Some("S2"));
    assert_eq!(sim.context().registry().reservations(&SeatId::new("S2")).len(), 2);
}

/// Parties larger than any seat in the preferred zone always wait
#[test]
fn test_party_too_large_for_zone_waits() {
    let mut sim = two_seat_venue();

    let outcome = sim.process_visit(&party(1, at(11, 0), 30, 3, Zone::TwoSeat)).unwrap().unwrap();

    assert!(!outcome.is_seated());
    assert!(sim.logs().seat_status.is_empty());
    assert_eq!(sim.context().groups_issued(), 0);
}

/// Preference is never relaxed to the other zone
#[test]
fn test_no_fallback_to_other_zone() {
    let mut sim = two_seat_venue();

    sim.process_visit(&party(1, at(13, 0), 60, 2, Zone::TwoSeat)).unwrap();
    let outcome = sim.process_visit(&party(2, at(13, 10), 30, 2, Zone::TwoSeat)).unwrap().unwrap();

    // S1 is free and large enough but belongs to the other zone
    assert!(!outcome.is_seated());
    assert!(sim.context().registry().reservations(&SeatId::new("S1")).is_empty());
}

/// Takeout visits never touch the seat histories
#[test]
fn test_takeout_is_not_seated() {
    let mut sim = two_seat_venue();
    let visit = Visit::takeout(PersonId(1), AgeGroup::Teen, Gender::Male, at(21, 45), 4);

    let outcome = sim.process_visit(&visit).unwrap();

    assert!(outcome.is_none());
    assert_eq!(sim.context().registry().total_reservations(), 0);

    let rows = sim.logs().people_rows_for(PersonId(1));
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|row| row.zone.is_none() && row.duration == Some(4)));
    assert_eq!(rows[1].timestamp, at(21, 49));
}

/// Seated rows carry the midpoint stay and the exit time
#[test]
fn test_seated_row_timestamps() {
    let mut sim = two_seat_venue();

    sim.process_visit(&party(1, at(18, 0), 45, 2, Zone::FourSeat)).unwrap();

    let rows = sim.logs().people_rows_for(PersonId(1));
    let timestamps: Vec<_> = rows.iter().map(|row| (row.event_type, row.timestamp)).collect();
    assert_eq!(
        timestamps,
        vec![
            (PeopleEventType::Enter, at(18, 0)),
            (PeopleEventType::Stay, at(18, 22)),
            (PeopleEventType::Exit, at(18, 45)),
        ]
    );
    assert_eq!(rows[0].duration, None);
    assert_eq!(rows[1].duration, Some(45));
    assert!(rows.iter().all(|row| row.zone == Some(Zone::FourSeat)));
}

/// Long and short stays are labelled even when the party waits
#[test]
fn test_anomaly_labels_follow_intended_stay() {
    let mut sim = two_seat_venue();

    sim.process_visit(&party(1, at(10, 0), 100, 2, Zone::FourSeat)).unwrap();
    sim.process_visit(&party(2, at(10, 30), 15, 2, Zone::FourSeat)).unwrap();
    sim.process_visit(&party(3, at(15, 0), 50, 2, Zone::FourSeat)).unwrap();

    let anomalies = &sim.logs().anomaly_log;
    let ids: Vec<_> = anomalies.iter().map(|row| row.person_id).collect();
    assert_eq!(ids, vec![PersonId(1), PersonId(2)]);
    assert_eq!(anomalies[0].kind.to_string(), "long_stay");
    assert_eq!(anomalies[0].severity.to_string(), "High");
    assert_eq!(anomalies[1].kind.to_string(), "short_stay");
    assert_eq!(anomalies[1].severity.to_string(), "Medium");
    assert_eq!(sim.logs().wait_log[0].person_id, PersonId(2));
}
