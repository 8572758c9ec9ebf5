//! Arrival sampling
//!
//! This module contains the ArrivalSampler, which turns a day's demand plan into
//! individual visitors: demographics, an arrival time drawn from age-conditioned
//! hourly weights, and a dine-in or takeout classification. It knows nothing about
//! seat state.

use crate::simulation::{OperatingHours, SimulationError, SimulationResult};
use crate::types::{venue_rules, AgeGroup, DayType, Gender, SimulationConfig, VisitKind, Zone};
use crate::visitor::visit::{ArrivalDraw, PartyRequest};
use chrono::NaiveDate;
use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;
use tracing::{debug, info, trace};

/// Demand generator for individual visitors
#[derive(Debug, Clone)]
pub struct ArrivalSampler {
    /// Age bracket distribution, indexed like [`AgeGroup::ALL`]
    age_groups: WeightedIndex<f64>,
    /// Hourly arrival distribution per age bracket, same order as `age_groups`
    hourly: Vec<(AgeGroup, WeightedIndex<f64>)>,
    /// Opening hours and last-order rule
    hours: OperatingHours,
    /// Takeout probability on weekdays
    weekday_takeout_probability: f64,
    /// Takeout probability on weekends and holidays
    weekend_takeout_probability: f64,
}

impl ArrivalSampler {
    /// Build a sampler from a configuration
    ///
    /// Fails if any weight vector cannot back a weighted distribution.
    pub fn from_config(config: &SimulationConfig) -> SimulationResult<Self> {
        let age_groups = WeightedIndex::new(config.age_weight_vector()).map_err(|e| {
            SimulationError::configuration_error(format!("age_group_weights: {}", e))
        })?;

        let mut hourly = Vec::with_capacity(AgeGroup::ALL.len());
        for group in AgeGroup::ALL {
            let weights = config.hourly_weights.get(&group).ok_or_else(|| {
                SimulationError::configuration_error(format!("hourly_weights.{} is missing", group))
            })?;
            if weights.len() != venue_rules::HOURLY_BUCKETS {
                return Err(SimulationError::configuration_error(format!(
                    "hourly_weights.{} has {} buckets, expected {}",
                    group,
                    weights.len(),
                    venue_rules::HOURLY_BUCKETS
                )));
            }

            let distribution = WeightedIndex::new(weights).map_err(|e| {
                SimulationError::configuration_error(format!("hourly_weights.{}: {}", group, e))
            })?;
            hourly.push((group, distribution));
        }

        info!("Arrival sampler ready with {} age brackets", hourly.len());

        Ok(Self {
            age_groups,
            hourly,
            hours: OperatingHours::new(),
            weekday_takeout_probability: config.weekday_takeout_probability,
            weekend_takeout_probability: config.weekend_takeout_probability,
        })
    }

    /// Replace the operating hours used for rejection and last-order rules
    pub fn with_hours(mut self, hours: OperatingHours) -> Self {
        self.hours = hours;
        self
    }

    /// Operating hours in use
    pub fn hours(&self) -> OperatingHours {
        self.hours
    }

    /// Takeout probability for a day type
    pub fn takeout_probability(&self, day_type: DayType) -> f64 {
        match day_type {
            DayType::Weekday => self.weekday_takeout_probability,
            DayType::WeekendOrHoliday => self.weekend_takeout_probability,
        }
    }

    /// Draw one visitor for `date`
    ///
    /// Returns `None` when the drawn arrival time falls outside operating hours;
    /// such a draw produces no visitor at all.
    pub fn sample<R: Rng + ?Sized>(
        &self,
        date: NaiveDate,
        day_type: DayType,
        rng: &mut R,
    ) -> Option<ArrivalDraw> {
        let (age_group, hour_weights) = &self.hourly[self.age_groups.sample(rng)];
        let gender = if rng.gen_bool(0.5) { Gender::Male } else { Gender::Female };

        let hour = venue_rules::FIRST_ARRIVAL_HOUR + hour_weights.sample(rng) as u32;
        let minute = rng.gen_range(0..=59);

        let entry_time = match date.and_hms_opt(hour, minute, 0) {
            Some(entry_time) if self.hours.is_open(entry_time) => entry_time,
            _ => {
                debug!("Rejected arrival draw at {:02}:{:02} on {}", hour, minute, date);
                return None;
            }
        };

        // No coin flip once only takeout is served
        let kind = if self.hours.is_takeout_only(entry_time)
            || rng.gen_bool(self.takeout_probability(day_type))
        {
            VisitKind::Takeout
        } else {
            VisitKind::DineIn
        };

        let draw = match kind {
            VisitKind::Takeout => {
                let (min, max) = venue_rules::TAKEOUT_MINUTES;
                ArrivalDraw {
                    age_group: *age_group,
                    gender,
                    entry_time,
                    kind,
                    duration_minutes: rng.gen_range(min..=max),
                    party: None,
                }
            }
            VisitKind::DineIn => {
                let (min, max) = venue_rules::DINE_IN_MINUTES;
                let duration_minutes = rng.gen_range(min..=max);
                let (min_party, max_party) = venue_rules::PARTY_SIZE;
                let party_size = rng.gen_range(min_party..=max_party);
                let zone_preference = Zone::ALL[rng.gen_range(0..Zone::ALL.len())];

                ArrivalDraw {
                    age_group: *age_group,
                    gender,
                    entry_time,
                    kind,
                    duration_minutes,
                    party: Some(PartyRequest::new(party_size, zone_preference)),
                }
            }
        };

        trace!(
            age_group = %draw.age_group,
            kind = %draw.kind,
            entry = %draw.entry_time,
            "Sampled arrival"
        );
        Some(draw)
    }
}
