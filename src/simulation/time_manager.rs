//! Operating hours
//!
//! This module contains the venue's opening-hours and last-order rules.

use crate::simulation::{SimulationError, SimulationResult};
use crate::types::venue_rules;
use chrono::{NaiveDateTime, Timelike};
use tracing::{debug, instrument};

/// Opening hours and last-order cutoff of the venue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperatingHours {
    /// First hour at which visitors are admitted
    open_hour: u32,
    /// Closing hour; only the exact top of this hour is still admitted
    close_hour: u32,
    /// From this hour and minute on, visitors can only take out
    last_order: (u32, u32),
}

impl OperatingHours {
    /// Create the venue's standard hours (09:00-22:00, last order 21:30)
    pub fn new() -> Self {
        Self {
            open_hour: venue_rules::OPEN_HOUR,
            close_hour: venue_rules::CLOSE_HOUR,
            last_order: (venue_rules::LAST_ORDER_HOUR, venue_rules::LAST_ORDER_MINUTE),
        }
    }

    /// Create custom hours
    ///
    /// Hours must be in 0-23 and minutes in 0-59, and the venue must open
    /// before it closes.
    pub fn with_hours(
        open_hour: u32,
        close_hour: u32,
        last_order_hour: u32,
        last_order_minute: u32,
    ) -> SimulationResult<Self> {
        if open_hour > 23 || close_hour > 23 || last_order_hour > 23 || last_order_minute > 59 {
            return Err(SimulationError::configuration_error(format!(
                "invalid operating hours: open {}, close {}, last order {}:{:02}",
                open_hour, close_hour, last_order_hour, last_order_minute
            )));
        }
        if open_hour >= close_hour {
            return Err(SimulationError::configuration_error(format!(
                "opening hour {} must be before closing hour {}",
                open_hour, close_hour
            )));
        }

        Ok(Self { open_hour, close_hour, last_order: (last_order_hour, last_order_minute) })
    }

    /// Check if an arrival at `timestamp` is admitted
    ///
    /// Arrivals before opening are rejected, and so is any arrival in the closing
    /// hour after the top of the hour (22:00 is admitted, 22:01 is not).
    #[instrument(skip(self))]
    pub fn is_open(&self, timestamp: NaiveDateTime) -> bool {
        let hour = timestamp.hour();
        let minute = timestamp.minute();

        let open = hour >= self.open_hour
            && hour <= self.close_hour
            && !(hour == self.close_hour && minute > 0);

        if !open {
            debug!("Arrival at {} is outside operating hours", timestamp);
        }
        open
    }

    /// Check if an arrival at `timestamp` is past the last-order cutoff
    pub fn is_takeout_only(&self, timestamp: NaiveDateTime) -> bool {
        (timestamp.hour(), timestamp.minute()) >= self.last_order
    }

    /// Opening hour
    pub fn open_hour(&self) -> u32 {
        self.open_hour
    }

    /// Closing hour
    pub fn close_hour(&self) -> u32 {
        self.close_hour
    }

    /// Last-order cutoff as hour and minute
    pub fn last_order(&self) -> (u32, u32) {
        self.last_order
    }
}

impl Default for OperatingHours {
    fn default() -> Self {
        Self::new()
    }
}
