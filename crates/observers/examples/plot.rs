//! Interactive charts of the outbreak variants.
//!
//! # Usage
//!
//! ```text
//! cargo run --example plot --features plot -- compare
//! cargo run --example plot --features plot -- latent
//! cargo run --example plot --features plot -- treatment 0.5
//! ```
//!
//! # Modes
//!
//! - **compare [dt]** — Zombie counts under all four variants on one chart,
//!   starting from 500 susceptibles and 10 zombies.
//!
//! - **<variant> [dt]** — Every compartment of a single variant over 40 time
//!   units. Larger steps (try `0.5` or `2`) show explicit Euler overshooting.

use std::error::Error;

use undead_core::{Outbreak, Parameters, Population, Variant};
use undead_observers::{PlotObserver, ShowConfig};
use undead_solvers::transient::euler::{self, Config, Record};

const TOTAL_TIME: f64 = 40.0;

fn main() -> Result<(), Box<dyn Error>> {
    let mode = std::env::args().nth(1).unwrap_or_else(|| "compare".into());
    let dt = std::env::args()
        .nth(2)
        .as_deref()
        .map(str::parse::<f64>)
        .transpose()
        .unwrap_or_else(|_| {
            eprintln!("Invalid step size, expected a number such as 0.1");
            std::process::exit(1);
        })
        .unwrap_or(0.01);

    if mode == "compare" {
        return compare(dt);
    }

    match mode.parse::<Variant>() {
        Ok(variant) => single(variant, dt),
        Err(err) => {
            eprintln!("{err}");
            eprintln!("Usage: plot [compare|basic|latent|quarantine|treatment] [dt]");
            std::process::exit(1);
        }
    }
}

fn rates() -> Parameters {
    Parameters {
        alpha: 0.005,
        beta: 0.0095,
        delta: 0.0001,
        pi: 0.0001,
        rho: 0.005,
        kappa: 0.002,
        cure: 0.001,
    }
}

fn initial() -> Population {
    Population {
        susceptible: 500.0,
        zombies: 10.0,
        ..Population::default()
    }
}

/// Overlay the zombie count of every variant.
fn compare(dt: f64) -> Result<(), Box<dyn Error>> {
    let config = Config::new(TOTAL_TIME, dt)?;
    let mut obs = PlotObserver::<4>::new(["Basic", "Latent", "Quarantine", "Treatment"]);

    for (slot, variant) in Variant::ALL.into_iter().enumerate() {
        let model = Outbreak::new(rates(), variant)?;
        let mut traces = [None; 4];
        traces[slot] = Some(initial().zombies);
        obs.record(0.0, traces);

        euler::solve(
            &model,
            initial(),
            &config,
            Population::is_doomsday,
            |record: &Record<Population>| {
                let mut traces = [None; 4];
                traces[slot] = Some(record.state.zombies);
                obs.record(record.time, traces);
                None
            },
        )?;
    }

    obs.show(
        ShowConfig::new()
            .title(format!("Zombies by variant (dt={dt})"))
            .legend(),
    )?;

    Ok(())
}

/// Plot every compartment of one variant.
fn single(variant: Variant, dt: f64) -> Result<(), Box<dyn Error>> {
    let config = Config::new(TOTAL_TIME, dt)?;
    let model = Outbreak::new(rates(), variant)?;

    let mut obs = PlotObserver::compartments();
    obs.record_population(0.0, &initial());
    let solution = euler::solve(&model, initial(), &config, Population::is_doomsday, &mut obs)?;

    obs.show(
        ShowConfig::new()
            .title(format!(
                "{variant} outbreak (dt={dt}), {:?} after {} steps",
                solution.status, solution.steps
            ))
            .legend(),
    )?;

    Ok(())
}
