//! Enumeration types for the seat occupancy simulator
//!
//! This module contains the enumerations shared by the sampler, the allocator and
//! the event logs. Serialized names are the exact labels the downstream feature
//! engineering reads (`dine-in`, `four_seat`, `long_stay`, ...).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Age bracket of a simulated visitor
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AgeGroup {
    /// Teenagers
    #[serde(rename = "teen")]
    Teen,
    /// Visitors in their twenties
    #[serde(rename = "20s")]
    Twenties,
    /// Visitors in their thirties
    #[serde(rename = "30s")]
    Thirties,
    /// Visitors in their forties
    #[serde(rename = "40s")]
    Forties,
    /// Visitors in their fifties
    #[serde(rename = "50s")]
    Fifties,
    /// Visitors aged sixty and over
    #[serde(rename = "60+")]
    SixtyPlus,
}

impl AgeGroup {
    /// All brackets in sampling order
    pub const ALL: [AgeGroup; 6] = [
        AgeGroup::Teen,
        AgeGroup::Twenties,
        AgeGroup::Thirties,
        AgeGroup::Forties,
        AgeGroup::Fifties,
        AgeGroup::SixtyPlus,
    ];

    /// Label used in the event logs
    pub fn label(self) -> &'static str {
        match self {
            AgeGroup::Teen => "teen",
            AgeGroup::Twenties => "20s",
            AgeGroup::Thirties => "30s",
            AgeGroup::Forties => "40s",
            AgeGroup::Fifties => "50s",
            AgeGroup::SixtyPlus => "60+",
        }
    }
}

impl fmt::Display for AgeGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for AgeGroup {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "teen" | "teens" => Ok(AgeGroup::Teen),
            "20s" => Ok(AgeGroup::Twenties),
            "30s" => Ok(AgeGroup::Thirties),
            "40s" => Ok(AgeGroup::Forties),
            "50s" => Ok(AgeGroup::Fifties),
            "60+" | "60s" => Ok(AgeGroup::SixtyPlus),
            _ => Err(format!("Unknown age group: {}", s)),
        }
    }
}

/// Gender of a simulated visitor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    /// Male
    #[serde(rename = "M")]
    Male,
    /// Female
    #[serde(rename = "F")]
    Female,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => write!(f, "M"),
            Gender::Female => write!(f, "F"),
        }
    }
}

/// Whether a visitor eats in or takes out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VisitKind {
    /// Party that needs a seat
    #[serde(rename = "dine-in")]
    DineIn,
    /// Short counter visit, never seated
    #[serde(rename = "takeout")]
    Takeout,
}

impl fmt::Display for VisitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VisitKind::DineIn => write!(f, "dine-in"),
            VisitKind::Takeout => write!(f, "takeout"),
        }
    }
}

/// Seating zone a seat belongs to and a dine-in party prefers
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Zone {
    /// Large tables for up to four guests
    #[serde(rename = "four_seat", alias = "large")]
    FourSeat,
    /// Small tables for up to two guests
    #[serde(rename = "two_seat", alias = "small")]
    TwoSeat,
}

impl Zone {
    /// Both zone tags, in preference-sampling order
    pub const ALL: [Zone; 2] = [Zone::FourSeat, Zone::TwoSeat];

    /// Label used in the event logs
    pub fn label(self) -> &'static str {
        match self {
            Zone::FourSeat => "four_seat",
            Zone::TwoSeat => "two_seat",
        }
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Zone {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "four_seat" | "four-seat" | "large" => Ok(Zone::FourSeat),
            "two_seat" | "two-seat" | "small" => Ok(Zone::TwoSeat),
            _ => Err(format!("Unknown zone: {}", s)),
        }
    }
}

/// Demand class of a calendar day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayType {
    /// Monday to Friday, not a holiday
    Weekday,
    /// Saturday, Sunday or a configured holiday
    WeekendOrHoliday,
}

impl DayType {
    /// Whether this day uses the busier weekend demand parameters
    pub fn is_weekend_or_holiday(self) -> bool {
        matches!(self, DayType::WeekendOrHoliday)
    }
}

impl fmt::Display for DayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DayType::Weekday => write!(f, "Weekday"),
            DayType::WeekendOrHoliday => write!(f, "Weekend/Holiday"),
        }
    }
}

/// Lifecycle step recorded in the people log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PeopleEventType {
    /// Visitor walks in
    Enter,
    /// Midpoint of a seated stay
    Stay,
    /// Dine-in visitor could not be seated
    Wait,
    /// Visitor leaves
    Exit,
}

impl fmt::Display for PeopleEventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PeopleEventType::Enter => write!(f, "enter"),
            PeopleEventType::Stay => write!(f, "stay"),
            PeopleEventType::Wait => write!(f, "wait"),
            PeopleEventType::Exit => write!(f, "exit"),
        }
    }
}

/// Kind of outlier visit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnomalyKind {
    /// Stay of 90 minutes or more
    LongStay,
    /// Stay shorter than 20 minutes
    ShortStay,
}

impl fmt::Display for AnomalyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnomalyKind::LongStay => write!(f, "long_stay"),
            AnomalyKind::ShortStay => write!(f, "short_stay"),
        }
    }
}

/// Severity attached to an anomaly record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    /// Medium severity
    Medium,
    /// High severity
    High,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Medium => write!(f, "Medium"),
            Severity::High => write!(f, "High"),
        }
    }
}

/// Output formats for the generated datasets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OutputFormat {
    /// One JSON object per line
    Json,
    /// Comma-separated values with a header row
    Csv,
}

impl OutputFormat {
    /// File extension used for dataset files
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Json => "jsonl",
            OutputFormat::Csv => "csv",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Csv => write!(f, "csv"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" | "jsonl" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(format!("Unknown output format: {}", s)),
        }
    }
}
