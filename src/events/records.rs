//! Output rows of the four event streams plus the seat roster
//!
//! Field names are the dataset column names. Timestamps serialize as
//! `YYYY-MM-DD HH:MM:SS`; optional columns serialize as JSON `null` or an empty
//! CSV cell.

use crate::facility::Seat;
use crate::types::{
    AgeGroup, AnomalyKind, Gender, GroupId, PeopleEventType, PersonId, SeatId, Severity, VisitKind,
    Zone,
};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Serde helpers for the dataset timestamp format
pub mod timestamp_format {
    use chrono::NaiveDateTime;
    use serde::{de, Deserialize, Deserializer, Serializer};

    /// Timestamp layout used in every dataset
    pub const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

    /// Serialize a timestamp
    pub fn serialize<S: Serializer>(timestamp: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&timestamp.format(FORMAT))
    }

    /// Deserialize a timestamp
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&raw, FORMAT).map_err(de::Error::custom)
    }
}

/// Occupancy flag written as `1`/`0`
mod occupancy_flag {
    use serde::{Deserialize, Deserializer, Serializer};

    pub(super) fn serialize<S: Serializer>(occupied: &bool, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(u8::from(*occupied))
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        Ok(u8::deserialize(deserializer)? != 0)
    }
}

/// A row type written as its own dataset
pub trait DatasetRow: Serialize {
    /// File stem of the dataset
    const DATASET: &'static str;
    /// Column names, in serialization order
    const COLUMNS: &'static [&'static str];
}

/// One row of the people log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeopleLogEntry {
    /// Visitor
    pub person_id: PersonId,
    /// When the event happened
    #[serde(with = "timestamp_format")]
    pub timestamp: NaiveDateTime,
    /// enter, stay, wait or exit
    pub event_type: PeopleEventType,
    /// Preferred zone; null for takeout
    pub zone: Option<Zone>,
    /// Age bracket
    pub age_group: AgeGroup,
    /// Gender
    pub gender: Gender,
    /// Visit length in minutes where known for the row
    pub duration: Option<u32>,
    /// dine-in or takeout
    pub person_type: VisitKind,
}

/// One row of the seat status log, written when a party is seated
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatStatusEntry {
    /// Assigned seat
    pub seat_id: SeatId,
    /// Seating time
    #[serde(with = "timestamp_format")]
    pub timestamp: NaiveDateTime,
    /// Always set; the log only records seatings
    #[serde(with = "occupancy_flag")]
    pub is_occupied: bool,
    /// Visitor who booked the seat
    pub person_id: PersonId,
    /// Zone of the seat
    pub zone: Zone,
    /// Seat capacity
    pub capacity: u8,
    /// Party size
    pub current_count: u8,
    /// Group of the seated party
    pub group_id: GroupId,
}

/// One row of the wait log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaitLogEntry {
    /// Visitor who could not be seated
    pub person_id: PersonId,
    /// Arrival
    #[serde(with = "timestamp_format")]
    pub start_time: NaiveDateTime,
    /// Arrival plus the wait
    #[serde(with = "timestamp_format")]
    pub end_time: NaiveDateTime,
    /// Wait in minutes
    pub wait_duration: u32,
    /// Why the visitor waited
    pub reason: String,
}

/// One row of the anomaly log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnomalyLogEntry {
    /// Flagged visitor
    pub person_id: PersonId,
    /// Arrival of the flagged visit
    #[serde(with = "timestamp_format")]
    pub timestamp: NaiveDateTime,
    /// Preferred zone of the visit
    pub zone: Zone,
    /// long_stay or short_stay
    #[serde(rename = "type")]
    pub kind: AnomalyKind,
    /// High or Medium
    pub severity: Severity,
}

/// One row of the seat roster dataset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatInfoEntry {
    /// Seat label
    pub seat_id: SeatId,
    /// Seat capacity
    pub capacity: u8,
    /// Seat zone
    pub zone: Zone,
}

impl From<&Seat> for SeatInfoEntry {
    fn from(seat: &Seat) -> Self {
        Self { seat_id: seat.seat_id.clone(), capacity: seat.capacity, zone: seat.zone }
    }
}

impl DatasetRow for PeopleLogEntry {
    const DATASET: &'static str = "people_log";
    const COLUMNS: &'static [&'static str] =
        &["person_id", "timestamp", "event_type", "zone", "age_group", "gender", "duration", "person_type"];
}

impl DatasetRow for SeatStatusEntry {
    const DATASET: &'static str = "seat_status";
    const COLUMNS: &'static [&'static str] =
        &["seat_id", "timestamp", "is_occupied", "person_id", "zone", "capacity", "current_count", "group_id"];
}

impl DatasetRow for WaitLogEntry {
    const DATASET: &'static str = "wait_log";
    const COLUMNS: &'static [&'static str] = &["person_id", "start_time", "end_time", "wait_duration", "reason"];
}

impl DatasetRow for AnomalyLogEntry {
    const DATASET: &'static str = "anomaly_log";
    const COLUMNS: &'static [&'static str] = &["person_id", "timestamp", "zone", "type", "severity"];
}

impl DatasetRow for SeatInfoEntry {
    const DATASET: &'static str = "seat_info";
    const COLUMNS: &'static [&'static str] = &["seat_id", "capacity", "zone"];
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use serde_json::json;

    fn at(hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 4, 14).unwrap().and_hms_opt(hour, minute, 0).unwrap()
    }

    #[test]
    fn test_people_row_columns() {
        let row = PeopleLogEntry {
            person_id: PersonId(3),
            timestamp: at(21, 45),
            event_type: PeopleEventType::Enter,
            zone: None,
            age_group: AgeGroup::SixtyPlus,
            gender: Gender::Female,
            duration: Some(4),
            person_type: VisitKind::Takeout,
        };

        assert_eq!(
            serde_json::to_value(&row).unwrap(),
            json!({
                "person_id": 3,
                "timestamp": "2025-04-14 21:45:00",
                "event_type": "enter",
                "zone": null,
                "age_group": "60+",
                "gender": "F",
                "duration": 4,
                "person_type": "takeout",
            })
        );
    }

    #[test]
    fn test_seat_status_flag_is_numeric() {
        let row = SeatStatusEntry {
            seat_id: SeatId::new("S4"),
            timestamp: at(10, 0),
            is_occupied: true,
            person_id: PersonId(1),
            zone: Zone::FourSeat,
            capacity: 4,
            current_count: 3,
            group_id: GroupId(1),
        };

        let value = serde_json::to_value(&row).unwrap();
        assert_eq!(value["is_occupied"], json!(1));
        assert_eq!(value["zone"], json!("four_seat"));
        assert_eq!(value["group_id"], json!(1));

        let back: SeatStatusEntry = serde_json::from_value(value).unwrap();
        assert_eq!(back, row);
    }

    #[test]
    fn test_anomaly_type_column() {
        let row = AnomalyLogEntry {
            person_id: PersonId(9),
            timestamp: at(12, 30),
            zone: Zone::TwoSeat,
            kind: AnomalyKind::ShortStay,
            severity: Severity::Medium,
        };

        let value = serde_json::to_value(&row).unwrap();
        assert_eq!(value["type"], json!("short_stay"));
        assert_eq!(value["severity"], json!("Medium"));
        assert!(value.get("kind").is_none());
    }

    #[test]
    fn test_bad_timestamp_is_rejected() {
        let raw = json!({
            "person_id": 1,
            "start_time": "2025-04-14T10:00:00",
            "end_time": "2025-04-14 10:10:00",
            "wait_duration": 10,
            "reason": "No available seats",
        });
        assert!(serde_json::from_value::<WaitLogEntry>(raw).is_err());
    }

    #[test]
    fn test_columns_match_serialized_fields() {
        let row = WaitLogEntry {
            person_id: PersonId(2),
            start_time: at(10, 20),
            end_time: at(10, 35),
            wait_duration: 15,
            reason: "No available seats".to_string(),
        };

        let value = serde_json::to_value(&row).unwrap();
        let mut keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
        let mut expected = WaitLogEntry::COLUMNS.to_vec();
        keys.sort_unstable();
        expected.sort_unstable();
        assert_eq!(keys, expected);
    }
}
