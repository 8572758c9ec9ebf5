// Seat Occupancy Simulator - Main Entry Point
//
// You can run it via Cargo:
//
// ```console
// $ cargo build --release
// $ ./target/release/seat-occupancy-simulator --seed 42
// ```
//
// Or with a configuration file and CSV output:
//
// ```console
// $ ./target/release/seat-occupancy-simulator --config venue.json --output-format csv --verbose
// ```

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use seat_occupancy_simulator::output::write_simulation_output;
use seat_occupancy_simulator::simulation::{LoggingConfig, LoggingGuard, SimulationOrchestrator};
use seat_occupancy_simulator::types::config::CliArgs;
use seat_occupancy_simulator::types::{SimulationConfig, Zone};
use std::path::Path;
use std::process;
use tracing::{error, info, Level};

fn main() {
    if let Err(e) = run() {
        error!("{:#}", e);
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    // Parse CLI arguments first to check for special flags
    let args = CliArgs::parse();

    if args.print_config {
        let json = SimulationConfig::default()
            .print_json()
            .context("Failed to serialize default configuration")?;
        println!("{}", json);
        return Ok(());
    }

    let _logging = init_logging(&args)?;
    info!("Starting Seat Occupancy Simulator");

    let dry_run = args.dry_run;
    let config = SimulationConfig::from_cli_args(args).context("Failed to load configuration")?;
    config.validate().context("Configuration validation failed")?;
    let format = config.get_output_format().map_err(|e| anyhow!(e))?;

    info!("Configuration loaded and validated successfully");

    if dry_run {
        eprintln!("Configuration validation successful!");
        eprintln!("Dry run mode - simulation will not be executed.");
        print_configuration_summary(&config);
        return Ok(());
    }

    print_startup_banner(&config);

    let orchestrator =
        SimulationOrchestrator::new(config.clone()).context("Failed to initialize simulation")?;
    eprintln!("Using seed {}", orchestrator.seed());

    let output = orchestrator.run().context("Simulation failed")?;

    let paths = write_simulation_output(&output, Path::new(&config.output_dir), format)
        .with_context(|| format!("Failed to write datasets to {}", config.output_dir))?;
    for path in &paths {
        eprintln!("Wrote {}", path.display());
    }

    eprintln!();
    eprintln!("{}", output.statistics.generate_summary_report());

    info!("Seat Occupancy Simulator completed successfully");
    Ok(())
}

/// Initialize logging based on CLI flags
fn init_logging(args: &CliArgs) -> Result<LoggingGuard> {
    let level = if args.debug {
        Level::DEBUG
    } else if args.verbose {
        Level::INFO
    } else {
        // Default: minimal logging for normal users
        Level::WARN
    };

    let mut logging = LoggingConfig::new().with_level(level);
    if args.debug {
        logging = logging.with_span_events();
    }
    if let Some(log_dir) = &args.log_dir {
        logging = logging.with_file_logging(log_dir.clone());
    }

    logging.init().map_err(|e| anyhow!("Failed to initialize logging: {}", e))
}

/// Print startup banner and configuration summary
fn print_startup_banner(config: &SimulationConfig) {
    eprintln!("Seat Occupancy Simulator");
    eprintln!("========================");
    eprintln!("Synthetic visitor and seat occupancy datasets");
    eprintln!();

    print_configuration_summary(config);
}

/// Print configuration summary
fn print_configuration_summary(config: &SimulationConfig) {
    let (weekday_min, weekday_max) = config.weekday_visitors();
    let (weekend_min, weekend_max) = config.weekend_visitors();

    eprintln!("Configuration:");
    eprintln!(
        "  Date Range: {} to {} ({} days)",
        config.start_date,
        config.end_date,
        config.day_count()
    );
    eprintln!("  Holidays: {}", config.holidays.len());
    for zone in Zone::ALL {
        let seats = config.seats.iter().filter(|seat| seat.zone == zone).count();
        eprintln!("  Seats ({}): {}", zone, seats);
    }
    eprintln!("  Weekday Visitors: {} - {}", weekday_min, weekday_max);
    eprintln!("  Weekend/Holiday Visitors: {} - {}", weekend_min, weekend_max);
    eprintln!(
        "  Takeout Probability: {:.0}% weekday, {:.0}% weekend/holiday",
        config.weekday_takeout_probability * 100.0,
        config.weekend_takeout_probability * 100.0
    );
    eprintln!("  Output: {} ({})", config.output_dir, config.output_format);
    if let Some(seed) = config.seed {
        eprintln!("  Random Seed: {}", seed);
    }
    eprintln!();
}
