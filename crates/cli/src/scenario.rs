//! Run configurations: a variant, its rates, a starting population, and a
//! time horizon.

use std::{fs, io, path::Path};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use undead_core::{
    Compartment, Observer, Outbreak, ParameterError, Parameters, Population, Variant,
};
use undead_solvers::transient::euler::{self, Action, Config, ConfigError, Record, Solution};

/// Everything needed to run one simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scenario {
    pub variant: Variant,
    #[serde(default)]
    pub parameters: Parameters,
    #[serde(default)]
    pub initial: Population,
    pub total_time: f64,
    pub dt: f64,
}

/// Errors that can occur while loading or running a scenario.
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("failed to read scenario {path}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("invalid scenario: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid parameters: {0}")]
    Parameters(#[from] ParameterError),

    #[error("invalid horizon: {0}")]
    Config(#[from] ConfigError),

    #[error("initial {0} population must be finite")]
    InitialPopulation(Compartment),

    #[error("simulation failed: {0}")]
    Solve(#[from] euler::Error),
}

impl Scenario {
    /// Returns the reference configuration for a variant.
    ///
    /// Every preset starts with 500 susceptibles and 10 zombies and steps with
    /// `dt = 0.01`. The basic preset runs for 20 time units; the others run
    /// for 40 because the infected stage slows the outbreak down.
    #[must_use]
    pub fn preset(variant: Variant) -> Self {
        let base = Parameters {
            alpha: 0.005,
            beta: 0.0095,
            delta: 0.0001,
            pi: 0.0001,
            ..Parameters::default()
        };

        let (parameters, total_time) = match variant {
            Variant::Basic => (base, 20.0),
            Variant::Latent => (Parameters { rho: 0.005, ..base }, 40.0),
            Variant::Quarantine => (
                Parameters {
                    rho: 0.005,
                    kappa: 0.002,
                    ..base
                },
                40.0,
            ),
            Variant::Treatment => (
                Parameters {
                    rho: 0.005,
                    cure: 0.001,
                    ..base
                },
                40.0,
            ),
        };

        Self {
            variant,
            parameters,
            initial: Population {
                susceptible: 500.0,
                zombies: 10.0,
                ..Population::default()
            },
            total_time,
            dt: 0.01,
        }
    }

    /// Parses a scenario from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ScenarioError::Parse`] for malformed TOML, unknown fields, or
    /// an unrecognized variant tag.
    pub fn from_toml_str(text: &str) -> Result<Self, ScenarioError> {
        Ok(toml::from_str(text)?)
    }

    /// Reads and parses a scenario file.
    ///
    /// # Errors
    ///
    /// Returns [`ScenarioError::Read`] if the file cannot be read, or any
    /// error from [`Scenario::from_toml_str`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ScenarioError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ScenarioError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Builds the model described by this scenario.
    ///
    /// # Errors
    ///
    /// Returns [`ScenarioError::Parameters`] if any rate is invalid.
    pub fn model(&self) -> Result<Outbreak, ScenarioError> {
        Ok(Outbreak::new(self.parameters, self.variant)?)
    }

    /// Builds the solver config for this scenario's horizon.
    ///
    /// # Errors
    ///
    /// Returns [`ScenarioError::Config`] if the horizon is invalid.
    pub fn config(&self) -> Result<Config, ScenarioError> {
        Ok(Config::new(self.total_time, self.dt)?)
    }

    /// Checks the rates, horizon, and initial population without running.
    ///
    /// # Errors
    ///
    /// Returns the first problem found.
    pub fn validate(&self) -> Result<(), ScenarioError> {
        self.model()?;
        self.config()?;
        match self.initial.first_non_finite() {
            Some(compartment) => Err(ScenarioError::InitialPopulation(compartment)),
            None => Ok(()),
        }
    }

    /// Runs the scenario to completion.
    ///
    /// With `doomsday` set, the run ends as soon as no susceptibles remain.
    ///
    /// # Errors
    ///
    /// Returns an error if the scenario is invalid or the run diverges.
    pub fn solve(&self, doomsday: bool) -> Result<Solution<Population>, ScenarioError> {
        self.solve_observed(doomsday, ())
    }

    /// Runs the scenario, passing every record to `observer`.
    ///
    /// # Errors
    ///
    /// Returns an error if the scenario is invalid or the run diverges.
    pub fn solve_observed<Obs>(
        &self,
        doomsday: bool,
        observer: Obs,
    ) -> Result<Solution<Population>, ScenarioError>
    where
        Obs: Observer<Record<Population>, Action>,
    {
        self.validate()?;
        let model = self.model()?;
        let config = self.config()?;

        let stop: fn(&Population) -> bool = if doomsday {
            Population::is_doomsday
        } else {
            euler::never
        };

        Ok(euler::solve(&model, self.initial, &config, stop, observer)?)
    }
}
