//! Zombie outbreak simulator.
//!
//! Runs one outbreak variant with explicit Euler steps and writes the trace
//! as a text report.
//!
//! Usage: `undead [--variant TAG] [--scenario FILE] [--output PATH] [--no-doomsday]`

mod logging;
mod scenario;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};
use undead_core::Variant;
use undead_observers::report;
use undead_solvers::transient::euler::Status;

use crate::scenario::Scenario;

#[derive(Parser, Debug)]
#[command(name = "undead")]
#[command(about = "Simulate a zombie outbreak and export the population trace")]
struct Args {
    /// Model variant: basic, latent, quarantine, or treatment
    #[arg(long, default_value = "basic")]
    variant: Variant,

    /// TOML scenario file; its variant takes precedence over --variant
    #[arg(long)]
    scenario: Option<PathBuf>,

    /// Path of the text report
    #[arg(long, default_value = "simulation_results.txt")]
    output: PathBuf,

    /// Keep stepping after the susceptible population runs out
    #[arg(long)]
    no_doomsday: bool,

    /// Log solver details
    #[arg(short, long)]
    verbose: bool,

    /// Chart the zombie count once the run finishes (requires the `plot` feature)
    #[arg(long)]
    plot: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init_logging(args.verbose);

    let scenario = match &args.scenario {
        Some(path) => Scenario::load(path)
            .with_context(|| format!("could not load scenario {}", path.display()))?,
        None => Scenario::preset(args.variant),
    };

    info!(
        variant = %scenario.variant,
        total_time = scenario.total_time,
        dt = scenario.dt,
        "starting simulation"
    );
    debug!(parameters = ?scenario.parameters, initial = ?scenario.initial);

    let solution = scenario
        .solve(!args.no_doomsday)
        .with_context(|| format!("{} simulation failed", scenario.variant))?;

    if solution.status == Status::StoppedByRule {
        info!("Doomsday reached! Zombies have taken over.");
    }

    let last = solution.final_state();
    info!(
        status = ?solution.status,
        steps = solution.steps,
        susceptible = last.susceptible,
        infected = last.infected,
        zombies = last.zombies,
        removed = last.removed,
        quarantined = last.quarantined,
        "simulation finished"
    );

    report::save_trace(&args.output, &solution.history).context("could not save report")?;
    info!(path = %args.output.display(), "report written");

    if args.plot {
        show_zombies(&scenario, &solution)?;
    }

    Ok(())
}

#[cfg(feature = "plot")]
fn show_zombies(
    scenario: &Scenario,
    solution: &undead_solvers::transient::euler::Solution<undead_core::Population>,
) -> Result<()> {
    use undead_core::Compartment;
    use undead_observers::{PlotObserver, ShowConfig, series};

    let mut obs = PlotObserver::<1>::new(["Zombies"]);
    for [time, zombies] in
        series::compartment_series_from(&solution.initial, &solution.history, Compartment::Zombies)
    {
        obs.record(time, [Some(zombies)]);
    }

    obs.show(
        ShowConfig::new()
            .title(format!("{} outbreak: zombies over time", scenario.variant))
            .legend(),
    )
    .map_err(|err| anyhow::anyhow!("could not open plot window: {err}"))
}

#[cfg(not(feature = "plot"))]
fn show_zombies(
    _scenario: &Scenario,
    _solution: &undead_solvers::transient::euler::Solution<undead_core::Population>,
) -> Result<()> {
    anyhow::bail!("--plot needs a build with the `plot` feature enabled")
}
