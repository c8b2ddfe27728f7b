mod driver;
mod stats;
mod traffic;

use std::io;
use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Parser;
use log::info;

use elevator_sim::config::SimConfig;
use elevator_sim::simulation::{LoadTieBreak, SimFleet};
use stats::SimulationStats;
use traffic::{Request, TrafficGenerator};

#[derive(Parser)]
#[command(name = "elevator_sim")]
#[command(about = "Elevator bank simulation with corridor call dispatch")]
struct Cli {
    /// Run randomised traffic instead of the interactive menu
    #[arg(long)]
    headless: bool,

    /// Number of simulation ticks to run in headless mode
    #[arg(long, default_value = "100")]
    ticks: u32,

    /// Seed for reproducible headless traffic
    #[arg(long)]
    seed: Option<u64>,

    /// Probability of a corridor call per tick in headless mode
    #[arg(long, default_value = "0.3")]
    request_rate: f64,

    /// Print fleet status every N ticks in headless mode
    #[arg(long, default_value = "10", value_parser = clap::value_parser!(u32).range(1..))]
    report_every: u32,

    /// TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of floors (overrides the configuration file)
    #[arg(long)]
    floors: Option<usize>,

    /// Number of elevators (overrides the configuration file)
    #[arg(long)]
    elevators: Option<usize>,

    /// Least-loaded tie-break: "last" or "first"
    #[arg(long)]
    tie_break: Option<LoadTieBreak>,
}

impl Cli {
    /// Combine the configuration file with command line overrides
    fn resolve_config(&self) -> Result<SimConfig> {
        let mut config = match &self.config {
            Some(path) => SimConfig::load(path)?,
            None => SimConfig::default(),
        };

        if let Some(floors) = self.floors {
            config.num_floors = floors;
        }
        if let Some(elevators) = self.elevators {
            config.num_elevators = elevators;
        }
        if let Some(tie_break) = self.tie_break {
            config.tie_break = tie_break;
        }

        config.validate()?;
        Ok(config)
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("warn,elevator_sim=info"),
    )
    .init();

    let cli = Cli::parse();
    let config = cli.resolve_config()?;
    let mut fleet = SimFleet::with_config(&config);
    let mut stats = SimulationStats::default();

    if cli.headless {
        if !(0.0..=1.0).contains(&cli.request_rate) {
            bail!("request rate must be between 0 and 1, got {}", cli.request_rate);
        }
        let traffic = TrafficGenerator::new(cli.seed, cli.request_rate);
        run_headless(&mut fleet, &mut stats, traffic, cli.ticks, cli.report_every);
    } else {
        // The user only simulates the hardware here, so wrong input is
        // reported and skipped rather than treated as fatal
        driver::run_interactive(&mut fleet, &mut stats, io::stdin().lock(), io::stdout().lock())?;
    }

    stats.log_summary();
    Ok(())
}

/// Run the simulation in headless mode with generated traffic
fn run_headless(
    fleet: &mut SimFleet,
    stats: &mut SimulationStats,
    mut traffic: TrafficGenerator,
    ticks: u32,
    report_every: u32,
) {
    println!("Running elevator simulation in headless mode...");
    println!(
        "Elevators: {}, Floors: {}, Ticks: {}",
        fleet.len(),
        fleet.num_floors(),
        ticks
    );
    println!();

    println!("Initial state:");
    fleet.print_summary();
    println!();

    for tick in 1..=ticks {
        for request in traffic.generate(fleet.num_floors(), fleet.len()) {
            match request {
                Request::Pickup { floor, direction } => {
                    let dispatch = fleet.dispatch_pickup(floor, direction);
                    stats.record_dispatch(&dispatch);
                }
                Request::SelectFloor { elevator, floor } => {
                    fleet.select_floor(elevator, floor);
                    stats.record_floor_selection();
                }
            }
        }

        let results = fleet.step();
        stats.record_step(&results);

        if tick % report_every == 0 {
            println!("--- After tick {} ---", tick);
            fleet.print_summary();
            println!();
        }
    }

    info!(
        "Pending stops at end of run: {}",
        fleet
            .elevators()
            .iter()
            .map(|e| e.pending_stops.len())
            .sum::<usize>()
    );

    println!("=== Final State ===");
    fleet.print_summary();
    fleet.draw_shafts();
}
