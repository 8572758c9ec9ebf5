//! Main simulation orchestrator
//!
//! This module contains the SimulationOrchestrator, which drives a run day by day:
//! plan the calendar, draw visitors, seat dine-in parties, and compose the event
//! logs. Everything runs on one thread with one seeded RNG, so a seed fully
//! determines the output.

use crate::events::{EventComposer, EventLogs, SeatInfoEntry};
use crate::facility::SeatRegistry;
use crate::simulation::{
    Allocation, DayPlan, DemandCalendar, RunContext, SeatAllocator, SimulationError,
    SimulationResult, SimulationStatistics,
};
use crate::types::SimulationConfig;
use crate::visitor::{ArrivalSampler, Visit};
use crate::{perf_span, sim_event};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Instant;
use tracing::{debug, info, instrument};

/// Everything a finished run produced
#[derive(Debug, Clone)]
pub struct SimulationOutput {
    /// The four event streams
    pub logs: EventLogs,
    /// Run counters
    pub statistics: SimulationStatistics,
    /// Roster with the final reservation histories
    pub seats: SeatRegistry,
    /// Seed that reproduces this run
    pub seed: u64,
}

impl SimulationOutput {
    /// Roster rows for the seat info dataset
    pub fn seat_info(&self) -> Vec<SeatInfoEntry> {
        self.seats.seats().iter().map(SeatInfoEntry::from).collect()
    }
}

/// Main simulation orchestrator that coordinates all components
#[derive(Debug)]
pub struct SimulationOrchestrator {
    /// Configuration for the simulation
    config: SimulationConfig,
    /// Days, day types and visitor counts
    calendar: DemandCalendar,
    /// Per-visitor demand generator
    sampler: ArrivalSampler,
    /// First-fit seating
    allocator: SeatAllocator,
    /// Event row builder
    composer: EventComposer,
    /// Seat histories and id counters
    context: RunContext,
    /// Rows recorded so far
    logs: EventLogs,
    /// Run counters
    statistics: SimulationStatistics,
    /// The run's only source of randomness
    rng: StdRng,
    /// Seed behind `rng`
    seed: u64,
}

impl SimulationOrchestrator {
    /// Create an orchestrator for a configuration
    ///
    /// The configuration is validated first; an invalid one fails here, before any
    /// output exists. Without a configured seed one is drawn from entropy and
    /// logged so the run can be replayed.
    #[instrument(skip(config), fields(start = %config.start_date, end = %config.end_date, seats = config.seats.len()))]
    pub fn new(config: SimulationConfig) -> SimulationResult<Self> {
        config.validate()?;

        let seed = match config.seed {
            Some(seed) => {
                info!("Using deterministic seed: {}", seed);
                seed
            }
            None => {
                let seed = rand::random::<u64>();
                info!("Using entropy-based seed: {}", seed);
                seed
            }
        };

        let sampler = ArrivalSampler::from_config(&config)?;
        let calendar = DemandCalendar::from_config(&config);
        let context = RunContext::new(config.seats.clone());
        let statistics = SimulationStatistics::new(context.registry().seat_count(), seed);

        info!(
            "Orchestrator initialized for {} days with {} seats",
            config.day_count(),
            context.registry().seat_count()
        );

        Ok(Self {
            config,
            calendar,
            sampler,
            allocator: SeatAllocator::new(),
            composer: EventComposer::new(),
            context,
            logs: EventLogs::new(),
            statistics,
            rng: StdRng::seed_from_u64(seed),
            seed,
        })
    }

    /// Seed behind this run
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Configuration in use
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Seat histories and id counters
    pub fn context(&self) -> &RunContext {
        &self.context
    }

    /// Rows recorded so far
    pub fn logs(&self) -> &EventLogs {
        &self.logs
    }

    /// Counters so far
    pub fn statistics(&self) -> &SimulationStatistics {
        &self.statistics
    }

    /// Seat one visit (if dine-in) and record its rows
    ///
    /// Returns the seating outcome, or `None` for takeout.
    pub fn process_visit(&mut self, visit: &Visit) -> SimulationResult<Option<Allocation>> {
        let allocation = match visit.party {
            Some(party) => Some(self.allocator.allocate(
                visit.reservation(),
                party,
                &mut self.context,
                &mut self.rng,
            )?),
            None => None,
        };

        self.composer.record(visit, allocation.as_ref(), &mut self.logs)?;
        self.statistics.record_visit(visit, allocation.as_ref());

        debug!(
            person = %visit.person_id,
            kind = %visit.kind,
            entry = %visit.entry_time,
            seated = ?allocation.as_ref().map(Allocation::is_seated),
            "Processed visit"
        );
        Ok(allocation)
    }

    /// Draw and process every visitor of one day
    #[instrument(skip(self, plan), fields(date = %plan.date, day_type = %plan.day_type))]
    pub fn simulate_day(&mut self, plan: DayPlan) -> SimulationResult<()> {
        self.statistics.record_day(plan.day_type, plan.visitor_count);
        let visitors_before = self.statistics.total_visitors;

        for _ in 0..plan.visitor_count {
            let Some(draw) = self.sampler.sample(plan.date, plan.day_type, &mut self.rng) else {
                self.statistics.record_rejected_draw();
                continue;
            };

            let visit = draw.into_visit(self.context.next_person_id());
            self.process_visit(&visit)?;
        }

        let date = plan.date.to_string();
        sim_event!(
            info,
            "Day completed",
            date = date.as_str(),
            weekend_or_holiday = plan.day_type.is_weekend_or_holiday(),
            visitors = self.statistics.total_visitors - visitors_before,
        );
        Ok(())
    }

    /// Simulate every day of the configured range
    #[instrument(skip(self), fields(seed = self.seed))]
    pub fn run(mut self) -> SimulationResult<SimulationOutput> {
        let _span = perf_span!("simulation_run", days = self.config.day_count()).entered();
        let start_time = Instant::now();

        let plan = self.calendar.plan(&mut self.rng);
        if plan.is_empty() {
            return Err(SimulationError::configuration_error("date range contains no days"));
        }

        info!("Starting simulation for {} days", plan.len());
        for day in plan {
            self.simulate_day(day)?;
        }

        self.statistics.record_logs(&self.logs);
        self.statistics.set_simulation_duration(start_time.elapsed());
        info!("{}", self.statistics.generate_compact_summary());

        Ok(SimulationOutput {
            logs: self.logs,
            statistics: self.statistics,
            seats: self.context.into_registry(),
            seed: self.seed,
        })
    }
}
