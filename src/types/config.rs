//! Configuration structures for the seat occupancy simulator
//!
//! This module contains the simulation configuration structure, its layered
//! loading (defaults, JSON file, command line) and the validation that rejects
//! a bad configuration before any output is produced.

use super::{AgeGroup, OutputFormat, SeatId, Zone};
use crate::facility::Seat;
use chrono::NaiveDate;
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::fs;
use std::path::Path;

/// Business rules of the venue
pub mod venue_rules {
    /// Hour the venue opens
    pub const OPEN_HOUR: u32 = 9;

    /// Hour the venue closes (22:00 exactly is still open)
    pub const CLOSE_HOUR: u32 = 22;

    /// Last-order hour; arrivals from 21:30 on are takeout only
    pub const LAST_ORDER_HOUR: u32 = 21;

    /// Last-order minute
    pub const LAST_ORDER_MINUTE: u32 = 30;

    /// First hour covered by the hourly arrival weights
    pub const FIRST_ARRIVAL_HOUR: u32 = 9;

    /// Number of hourly arrival buckets (hours 9 through 21)
    pub const HOURLY_BUCKETS: usize = 13;

    /// Takeout visit length in minutes (inclusive)
    pub const TAKEOUT_MINUTES: (u32, u32) = (2, 8);

    /// Dine-in stay length in minutes (inclusive)
    pub const DINE_IN_MINUTES: (u32, u32) = (15, 120);

    /// Dine-in party size (inclusive)
    pub const PARTY_SIZE: (u8, u8) = (1, 4);

    /// Wait length in minutes for a party that could not be seated (inclusive)
    pub const WAIT_MINUTES: (u32, u32) = (5, 20);

    /// Stays of at least this many minutes are long-stay anomalies
    pub const LONG_STAY_MINUTES: u32 = 90;

    /// Stays shorter than this many minutes are short-stay anomalies
    pub const SHORT_STAY_MINUTES: u32 = 20;

    /// Reason recorded on every wait log row
    pub const WAIT_REASON: &str = "No available seats";
}

/// Command line arguments structure
#[derive(Debug, Clone, Parser)]
#[command(
    name = "seat-occupancy-simulator",
    version = "0.1.0",
    about = "Seat Occupancy Simulator - Generates venue arrival, seating, wait and anomaly logs",
    long_about = "Simulates customer arrivals, seat assignment and queueing in a small venue and writes labeled event logs (people, seat status, waits, anomalies) for downstream wait-time modeling.

EXAMPLES:
    # Run the reference scenario
    seat-occupancy-simulator

    # Reproducible run written as CSV
    seat-occupancy-simulator --seed 42 --output-format csv --output-dir out

    # Use a configuration file
    seat-occupancy-simulator --config venue.json

    # Generate configuration template
    seat-occupancy-simulator --print-config > venue.json

    # Validate configuration without running
    seat-occupancy-simulator --config venue.json --dry-run

CONFIGURATION:
    Configuration can be provided via:
    1. Command line arguments (highest priority)
    2. Configuration file (--config flag)
    3. Default values (lowest priority)

    Supported configuration file formats: JSON (.json)"
)]
pub struct CliArgs {
    /// Configuration file path (JSON format)
    #[arg(
        short,
        long,
        help = "Configuration file path (JSON format)",
        long_help = "Path to a JSON configuration file. CLI arguments will override file settings."
    )]
    pub config: Option<String>,

    /// First simulated day
    #[arg(long, help = "First simulated day (YYYY-MM-DD)")]
    pub start_date: Option<NaiveDate>,

    /// Last simulated day (inclusive)
    #[arg(long, help = "Last simulated day, inclusive (YYYY-MM-DD)")]
    pub end_date: Option<NaiveDate>,

    /// Random seed for reproducible results
    #[arg(long, help = "Random seed for reproducible results")]
    pub seed: Option<u64>,

    /// Directory the datasets are written to
    #[arg(long, help = "Output directory for the generated datasets")]
    pub output_dir: Option<String>,

    /// Output format for generated datasets
    #[arg(
        long,
        help = "Output format (json or csv)",
        long_help = "Output format for generated datasets. Supported formats: json (JSON Lines), csv. Default: json"
    )]
    pub output_format: Option<String>,

    /// Write logs to daily rolling files in this directory
    #[arg(long, help = "Directory for rolling log files")]
    pub log_dir: Option<String>,

    /// Enable verbose logging
    #[arg(short, long, help = "Enable verbose logging")]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(short, long, help = "Enable debug logging")]
    pub debug: bool,

    /// Dry run mode - validate configuration without running simulation
    #[arg(long, help = "Validate configuration without running simulation")]
    pub dry_run: bool,

    /// Print default configuration and exit
    #[arg(long, help = "Print default configuration in JSON format and exit")]
    pub print_config: bool,
}

/// Configuration file structure (allows partial configuration)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigFile {
    /// First simulated day
    pub start_date: Option<NaiveDate>,
    /// Last simulated day (inclusive)
    pub end_date: Option<NaiveDate>,
    /// Days treated like weekends
    pub holidays: Option<BTreeSet<NaiveDate>>,
    /// Seat roster
    pub seats: Option<Vec<Seat>>,
    /// Population weight per age bracket
    pub age_group_weights: Option<BTreeMap<AgeGroup, f64>>,
    /// Hourly arrival weights per age bracket
    pub hourly_weights: Option<BTreeMap<AgeGroup, Vec<f64>>>,
    /// Minimum visitors on a weekday
    pub weekday_min_visitors: Option<u32>,
    /// Maximum visitors on a weekday
    pub weekday_max_visitors: Option<u32>,
    /// Minimum visitors on a weekend or holiday
    pub weekend_min_visitors: Option<u32>,
    /// Maximum visitors on a weekend or holiday
    pub weekend_max_visitors: Option<u32>,
    /// Takeout probability on weekdays
    pub weekday_takeout_probability: Option<f64>,
    /// Takeout probability on weekends and holidays
    pub weekend_takeout_probability: Option<f64>,
    /// Random seed for reproducible results
    pub seed: Option<u64>,
    /// Output directory
    pub output_dir: Option<String>,
    /// Output format
    pub output_format: Option<String>,
}

/// Configuration for a simulation run
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SimulationConfig {
    /// First simulated day
    pub start_date: NaiveDate,

    /// Last simulated day (inclusive)
    pub end_date: NaiveDate,

    /// Days treated like weekends
    pub holidays: BTreeSet<NaiveDate>,

    /// Seat roster
    pub seats: Vec<Seat>,

    /// Population weight per age bracket
    pub age_group_weights: BTreeMap<AgeGroup, f64>,

    /// Hourly arrival weights per age bracket, one bucket per hour from 9 to 21
    pub hourly_weights: BTreeMap<AgeGroup, Vec<f64>>,

    /// Minimum visitors on a weekday
    pub weekday_min_visitors: u32,

    /// Maximum visitors on a weekday
    pub weekday_max_visitors: u32,

    /// Minimum visitors on a weekend or holiday
    pub weekend_min_visitors: u32,

    /// Maximum visitors on a weekend or holiday
    pub weekend_max_visitors: u32,

    /// Takeout probability on weekdays (0.0-1.0)
    pub weekday_takeout_probability: f64,

    /// Takeout probability on weekends and holidays (0.0-1.0)
    pub weekend_takeout_probability: f64,

    /// Random seed for reproducible results
    pub seed: Option<u64>,

    /// Output directory
    pub output_dir: String,

    /// Output format for the datasets
    pub output_format: String,
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    /// Configuration file read error
    #[error("Failed to read configuration file: {0}")]
    ReadError(#[from] std::io::Error),

    /// JSON parsing error
    #[error("Failed to parse JSON configuration: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Unsupported configuration file format
    #[error("Unsupported configuration file format: {0} (supported: .json)")]
    UnsupportedFormat(String),
}

/// Validation errors for simulation configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    /// End date lies before the start date
    #[error("Invalid date range: end ({end}) is before start ({start})")]
    InvalidDateRange {
        /// First simulated day
        start: NaiveDate,
        /// Last simulated day
        end: NaiveDate,
    },

    /// The seat roster is empty
    #[error("Seat roster must contain at least one seat")]
    EmptySeatRoster,

    /// Two seats share an identifier
    #[error("Duplicate seat identifier: {0}")]
    DuplicateSeatId(String),

    /// A seat cannot hold anyone
    #[error("Seat {seat_id} has invalid capacity {capacity} (must be greater than 0)")]
    InvalidSeatCapacity {
        /// Offending seat
        seat_id: String,
        /// Configured capacity
        capacity: u8,
    },

    /// Visitor count range is inverted
    #[error("Invalid {day_type} visitor range: min ({min}) must be <= max ({max})")]
    InvalidVisitorRange {
        /// Which day type the range belongs to
        day_type: String,
        /// Lower bound
        min: u32,
        /// Upper bound
        max: u32,
    },

    /// Probability value is out of range
    #[error("Invalid probability for {field}: {value} (must be between 0.0 and 1.0)")]
    InvalidProbability {
        /// Name of the field with the invalid probability
        field: String,
        /// The invalid value
        value: f64,
    },

    /// A weight vector is missing entries or has too many
    #[error("Invalid weight count for {field}: expected {expected}, got {actual}")]
    InvalidWeightCount {
        /// Name of the weight vector
        field: String,
        /// Required number of weights
        expected: usize,
        /// Number of weights found
        actual: usize,
    },

    /// A weight is negative or not finite
    #[error("Invalid weight for {field} at position {index}: {value} (must be finite and >= 0)")]
    InvalidWeight {
        /// Name of the weight vector
        field: String,
        /// Position of the bad weight
        index: usize,
        /// The invalid weight
        value: f64,
    },

    /// Every weight in a vector is zero
    #[error("Weights for {field} must not all be zero")]
    ZeroWeightSum {
        /// Name of the weight vector
        field: String,
    },

    /// Output format is not recognized
    #[error("Unsupported output format: {0} (supported: json, csv)")]
    UnsupportedOutputFormat(String),
}

impl Default for SimulationConfig {
    fn default() -> Self {
        let hourly_weights = BTreeMap::from([
            (AgeGroup::Teen, vec![1.0, 1.0, 2.0, 3.0, 5.0, 6.0, 6.0, 5.0, 4.0, 3.0, 2.0, 1.0, 1.0]),
            (AgeGroup::Twenties, vec![2.0, 3.0, 5.0, 7.0, 8.0, 7.0, 6.0, 6.0, 7.0, 6.0, 5.0, 3.0, 2.0]),
            (AgeGroup::Thirties, vec![3.0, 4.0, 5.0, 7.0, 7.0, 6.0, 5.0, 4.0, 5.0, 4.0, 3.0, 2.0, 1.0]),
            (AgeGroup::Forties, vec![6.0, 5.0, 4.0, 4.0, 3.0, 2.0, 2.0, 2.0, 3.0, 2.0, 1.0, 1.0, 1.0]),
            (AgeGroup::Fifties, vec![6.0, 5.0, 4.0, 4.0, 3.0, 2.0, 2.0, 2.0, 3.0, 2.0, 1.0, 1.0, 1.0]),
            (AgeGroup::SixtyPlus, vec![6.0, 5.0, 4.0, 4.0, 3.0, 2.0, 2.0, 2.0, 3.0, 2.0, 1.0, 1.0, 0.0]),
        ]);

        let age_group_weights = BTreeMap::from([
            (AgeGroup::Teen, 10.0),
            (AgeGroup::Twenties, 30.0),
            (AgeGroup::Thirties, 25.0),
            (AgeGroup::Forties, 10.0),
            (AgeGroup::Fifties, 15.0),
            (AgeGroup::SixtyPlus, 10.0),
        ]);

        let mut seats: Vec<Seat> =
            (1..=4).map(|n| Seat::new(SeatId::new(format!("S{}", n)), 4, Zone::FourSeat)).collect();
        seats.extend((5..=9).map(|n| Seat::new(SeatId::new(format!("S{}", n)), 2, Zone::TwoSeat)));

        Self {
            start_date: date(2025, 4, 14),
            end_date: date(2025, 5, 10),
            holidays: BTreeSet::from([date(2025, 5, 1), date(2025, 5, 5), date(2025, 5, 6)]),
            seats,
            age_group_weights,
            hourly_weights,
            weekday_min_visitors: 100,
            weekday_max_visitors: 130,
            weekend_min_visitors: 130,
            weekend_max_visitors: 180,
            weekday_takeout_probability: 0.20,
            weekend_takeout_probability: 0.30,
            seed: None,
            output_dir: "output".to_string(),
            output_format: "json".to_string(),
        }
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

impl SimulationConfig {
    /// Create a new configuration from command line arguments and optional config file
    pub fn from_args() -> Result<Self, ConfigError> {
        let args = CliArgs::parse();
        Self::from_cli_args(args)
    }

    /// Create configuration from parsed CLI arguments
    pub fn from_cli_args(args: CliArgs) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(config_path) = &args.config {
            config = Self::from_file(config_path)?;
        }

        // CLI takes precedence over the file
        Self::apply_cli_overrides(&mut config, args);

        Ok(config)
    }

    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }

        let content = fs::read_to_string(path)?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => {
                let config_file: ConfigFile = serde_json::from_str(&content)?;
                Ok(Self::from_config_file(config_file))
            }
            Some(ext) => Err(ConfigError::UnsupportedFormat(ext.to_string())),
            None => Err(ConfigError::UnsupportedFormat("no extension".to_string())),
        }
    }

    /// Create configuration from a config file, merging with defaults
    fn from_config_file(config_file: ConfigFile) -> Self {
        let defaults = Self::default();

        Self {
            start_date: config_file.start_date.unwrap_or(defaults.start_date),
            end_date: config_file.end_date.unwrap_or(defaults.end_date),
            holidays: config_file.holidays.unwrap_or(defaults.holidays),
            seats: config_file.seats.unwrap_or(defaults.seats),
            age_group_weights: config_file.age_group_weights.unwrap_or(defaults.age_group_weights),
            hourly_weights: config_file.hourly_weights.unwrap_or(defaults.hourly_weights),
            weekday_min_visitors: config_file
                .weekday_min_visitors
                .unwrap_or(defaults.weekday_min_visitors),
            weekday_max_visitors: config_file
                .weekday_max_visitors
                .unwrap_or(defaults.weekday_max_visitors),
            weekend_min_visitors: config_file
                .weekend_min_visitors
                .unwrap_or(defaults.weekend_min_visitors),
            weekend_max_visitors: config_file
                .weekend_max_visitors
                .unwrap_or(defaults.weekend_max_visitors),
            weekday_takeout_probability: config_file
                .weekday_takeout_probability
                .unwrap_or(defaults.weekday_takeout_probability),
            weekend_takeout_probability: config_file
                .weekend_takeout_probability
                .unwrap_or(defaults.weekend_takeout_probability),
            seed: config_file.seed.or(defaults.seed),
            output_dir: config_file.output_dir.unwrap_or(defaults.output_dir),
            output_format: config_file.output_format.unwrap_or(defaults.output_format),
        }
    }

    /// Apply CLI argument overrides to configuration
    fn apply_cli_overrides(config: &mut Self, args: CliArgs) {
        if let Some(value) = args.start_date {
            config.start_date = value;
        }
        if let Some(value) = args.end_date {
            config.end_date = value;
        }
        if let Some(value) = args.seed {
            config.seed = Some(value);
        }
        if let Some(value) = args.output_dir {
            config.output_dir = value;
        }
        if let Some(value) = args.output_format {
            config.output_format = value;
        }
    }

    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Print configuration as JSON
    pub fn print_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate the configuration parameters
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.end_date < self.start_date {
            return Err(ConfigValidationError::InvalidDateRange {
                start: self.start_date,
                end: self.end_date,
            });
        }

        self.validate_seats()?;

        if self.weekday_min_visitors > self.weekday_max_visitors {
            return Err(ConfigValidationError::InvalidVisitorRange {
                day_type: "weekday".to_string(),
                min: self.weekday_min_visitors,
                max: self.weekday_max_visitors,
            });
        }
        if self.weekend_min_visitors > self.weekend_max_visitors {
            return Err(ConfigValidationError::InvalidVisitorRange {
                day_type: "weekend/holiday".to_string(),
                min: self.weekend_min_visitors,
                max: self.weekend_max_visitors,
            });
        }

        self.validate_probability("weekday_takeout_probability", self.weekday_takeout_probability)?;
        self.validate_probability("weekend_takeout_probability", self.weekend_takeout_probability)?;

        let age_weights = self.age_weight_vector();
        if self.age_group_weights.len() != AgeGroup::ALL.len() {
            return Err(ConfigValidationError::InvalidWeightCount {
                field: "age_group_weights".to_string(),
                expected: AgeGroup::ALL.len(),
                actual: self.age_group_weights.len(),
            });
        }
        self.validate_weights("age_group_weights", &age_weights)?;

        for group in AgeGroup::ALL {
            let field = format!("hourly_weights.{}", group);
            let weights = self.hourly_weights.get(&group).map(Vec::as_slice).unwrap_or(&[]);
            if weights.len() != venue_rules::HOURLY_BUCKETS {
                return Err(ConfigValidationError::InvalidWeightCount {
                    field,
                    expected: venue_rules::HOURLY_BUCKETS,
                    actual: weights.len(),
                });
            }
            self.validate_weights(&field, weights)?;
        }

        if self.get_output_format().is_err() {
            return Err(ConfigValidationError::UnsupportedOutputFormat(self.output_format.clone()));
        }

        Ok(())
    }

    fn validate_seats(&self) -> Result<(), ConfigValidationError> {
        if self.seats.is_empty() {
            return Err(ConfigValidationError::EmptySeatRoster);
        }

        let mut seen = HashSet::new();
        for seat in &self.seats {
            if !seen.insert(&seat.seat_id) {
                return Err(ConfigValidationError::DuplicateSeatId(seat.seat_id.to_string()));
            }
            if seat.capacity == 0 {
                return Err(ConfigValidationError::InvalidSeatCapacity {
                    seat_id: seat.seat_id.to_string(),
                    capacity: seat.capacity,
                });
            }
        }

        Ok(())
    }

    /// Helper method to validate probability values
    fn validate_probability(&self, field: &str, value: f64) -> Result<(), ConfigValidationError> {
        if !(0.0..=1.0).contains(&value) {
            return Err(ConfigValidationError::InvalidProbability { field: field.to_string(), value });
        }
        Ok(())
    }

    fn validate_weights(&self, field: &str, weights: &[f64]) -> Result<(), ConfigValidationError> {
        for (index, &value) in weights.iter().enumerate() {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigValidationError::InvalidWeight {
                    field: field.to_string(),
                    index,
                    value,
                });
            }
        }

        if weights.iter().all(|&w| w == 0.0) {
            return Err(ConfigValidationError::ZeroWeightSum { field: field.to_string() });
        }

        Ok(())
    }

    /// Age bracket weights in [`AgeGroup::ALL`] order; missing brackets weigh 0
    pub fn age_weight_vector(&self) -> Vec<f64> {
        AgeGroup::ALL
            .iter()
            .map(|group| self.age_group_weights.get(group).copied().unwrap_or(0.0))
            .collect()
    }

    /// Number of simulated days (inclusive range)
    pub fn day_count(&self) -> usize {
        if self.end_date < self.start_date {
            return 0;
        }
        ((self.end_date - self.start_date).num_days() + 1) as usize
    }

    /// Visitor count range for weekdays as a tuple
    pub fn weekday_visitors(&self) -> (u32, u32) {
        (self.weekday_min_visitors, self.weekday_max_visitors)
    }

    /// Visitor count range for weekends and holidays as a tuple
    pub fn weekend_visitors(&self) -> (u32, u32) {
        (self.weekend_min_visitors, self.weekend_max_visitors)
    }

    /// Get the output format as an enum value
    pub fn get_output_format(&self) -> Result<OutputFormat, String> {
        self.output_format.parse()
    }
}
