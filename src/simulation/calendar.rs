//! Calendar and demand model
//!
//! This module decides which days are simulated, classifies each day as a weekday
//! or a weekend/holiday, and draws the number of visitors expected that day.

use crate::types::{DayType, SimulationConfig};
use chrono::{Datelike, NaiveDate, Weekday};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::{debug, instrument};

/// Demand plan for a single simulated day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayPlan {
    /// Calendar day
    pub date: NaiveDate,
    /// Weekday or weekend/holiday
    pub day_type: DayType,
    /// Number of visitor draws to make for the day
    pub visitor_count: u32,
}

/// Date range, holidays and per-day-type visitor ranges
#[derive(Debug, Clone)]
pub struct DemandCalendar {
    start_date: NaiveDate,
    end_date: NaiveDate,
    holidays: BTreeSet<NaiveDate>,
    weekday_visitors: (u32, u32),
    weekend_visitors: (u32, u32),
}

impl DemandCalendar {
    /// Create a calendar for `[start_date, end_date]`
    pub fn new(
        start_date: NaiveDate,
        end_date: NaiveDate,
        holidays: BTreeSet<NaiveDate>,
        weekday_visitors: (u32, u32),
        weekend_visitors: (u32, u32),
    ) -> Self {
        Self { start_date, end_date, holidays, weekday_visitors, weekend_visitors }
    }

    /// Create the calendar described by a configuration
    pub fn from_config(config: &SimulationConfig) -> Self {
        Self::new(
            config.start_date,
            config.end_date,
            config.holidays.clone(),
            config.weekday_visitors(),
            config.weekend_visitors(),
        )
    }

    /// Classify a day; Saturdays, Sundays and holidays share the weekend demand
    pub fn day_type(&self, date: NaiveDate) -> DayType {
        let is_weekend = matches!(date.weekday(), Weekday::Sat | Weekday::Sun);
        if is_weekend || self.holidays.contains(&date) {
            DayType::WeekendOrHoliday
        } else {
            DayType::Weekday
        }
    }

    /// All days in range, in order
    pub fn dates(&self) -> Vec<NaiveDate> {
        let mut dates = Vec::new();
        let mut current = Some(self.start_date);

        while let Some(date) = current {
            if date > self.end_date {
                break;
            }
            dates.push(date);
            current = date.succ_opt();
        }

        dates
    }

    /// Visitor count range for a day type
    pub fn visitor_range(&self, day_type: DayType) -> (u32, u32) {
        match day_type {
            DayType::Weekday => self.weekday_visitors,
            DayType::WeekendOrHoliday => self.weekend_visitors,
        }
    }

    /// Produce the per-day plan, drawing each day's visitor count uniformly
    #[instrument(skip(self, rng), fields(start = %self.start_date, end = %self.end_date))]
    pub fn plan<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<DayPlan> {
        self.dates()
            .into_iter()
            .map(|date| {
                let day_type = self.day_type(date);
                let (min, max) = self.visitor_range(day_type);
                let visitor_count = rng.gen_range(min..=max);

                debug!("Planned {} visitors for {} ({})", visitor_count, date, day_type);
                DayPlan { date, day_type, visitor_count }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn calendar() -> DemandCalendar {
        DemandCalendar::new(
            date(2025, 4, 28),
            date(2025, 5, 6),
            BTreeSet::from([date(2025, 5, 1), date(2025, 5, 5), date(2025, 5, 6)]),
            (100, 130),
            (130, 180),
        )
    }

    #[test]
    fn test_day_type_classification() {
        let calendar = calendar();

        // 2025-04-28 is a Monday
        assert_eq!(calendar.day_type(date(2025, 4, 28)), DayType::Weekday);
        assert_eq!(calendar.day_type(date(2025, 5, 1)), DayType::WeekendOrHoliday);
        assert_eq!(calendar.day_type(date(2025, 5, 2)), DayType::Weekday);
        assert_eq!(calendar.day_type(date(2025, 5, 3)), DayType::WeekendOrHoliday);
        assert_eq!(calendar.day_type(date(2025, 5, 4)), DayType::WeekendOrHoliday);
        assert_eq!(calendar.day_type(date(2025, 5, 5)), DayType::WeekendOrHoliday);
    }

    #[test]
    fn test_dates_are_inclusive() {
        let dates = calendar().dates();

        assert_eq!(dates.len(), 9);
        assert_eq!(dates.first(), Some(&date(2025, 4, 28)));
        assert_eq!(dates.last(), Some(&date(2025, 5, 6)));
    }

    #[test]
    fn test_single_day_range() {
        let calendar =
            DemandCalendar::new(date(2025, 4, 14), date(2025, 4, 14), BTreeSet::new(), (5, 5), (9, 9));
        let mut rng = StdRng::seed_from_u64(1);

        let plan = calendar.plan(&mut rng);
        assert_eq!(plan.len(), 1);
        assert_eq!(plan[0].visitor_count, 5);
    }

    #[test]
    fn test_plan_counts_within_ranges() {
        let calendar = calendar();
        let mut rng = StdRng::seed_from_u64(42);

        for day in calendar.plan(&mut rng) {
            let (min, max) = calendar.visitor_range(day.day_type);
            assert!(day.visitor_count >= min && day.visitor_count <= max);
            assert_eq!(day.day_type, calendar.day_type(day.date));
        }
    }

    #[test]
    fn test_plan_is_deterministic_for_seed() {
        let calendar = calendar();

        let first = calendar.plan(&mut StdRng::seed_from_u64(9));
        let second = calendar.plan(&mut StdRng::seed_from_u64(9));
        assert_eq!(first, second);
    }
}
