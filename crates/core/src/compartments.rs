use std::fmt;

#[cfg(feature = "serde-derive")]
use serde::{Deserialize, Serialize};

use crate::{Finite, StepIntegrable};

/// One tracked population subgroup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Compartment {
    Susceptible,
    Infected,
    Zombies,
    Removed,
    Quarantined,
}

impl Compartment {
    /// All compartments, in `S, I, Z, R, Q` order.
    pub const ALL: [Compartment; 5] = [
        Self::Susceptible,
        Self::Infected,
        Self::Zombies,
        Self::Removed,
        Self::Quarantined,
    ];

    /// The single-letter symbol used in reports and plot legends.
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Susceptible => "S",
            Self::Infected => "I",
            Self::Zombies => "Z",
            Self::Removed => "R",
            Self::Quarantined => "Q",
        }
    }
}

impl fmt::Display for Compartment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Susceptible => "susceptible",
            Self::Infected => "infected",
            Self::Zombies => "zombies",
            Self::Removed => "removed",
            Self::Quarantined => "quarantined",
        };
        f.write_str(name)
    }
}

/// The size of every compartment at one instant.
///
/// Values are real-valued and may go negative: explicit Euler with a large
/// step can overshoot zero, and the model never clamps.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde-derive", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde-derive", serde(default, deny_unknown_fields))]
pub struct Population {
    pub susceptible: f64,
    pub infected: f64,
    pub zombies: f64,
    pub removed: f64,
    pub quarantined: f64,
}

impl Population {
    /// Returns the value of a single compartment.
    #[must_use]
    pub fn get(&self, compartment: Compartment) -> f64 {
        match compartment {
            Compartment::Susceptible => self.susceptible,
            Compartment::Infected => self.infected,
            Compartment::Zombies => self.zombies,
            Compartment::Removed => self.removed,
            Compartment::Quarantined => self.quarantined,
        }
    }

    /// Returns the sum of all five compartments.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.susceptible + self.infected + self.zombies + self.removed + self.quarantined
    }

    /// Returns the first compartment holding a NaN or infinite value.
    #[must_use]
    pub fn first_non_finite(&self) -> Option<Compartment> {
        Compartment::ALL
            .into_iter()
            .find(|&c| !self.get(c).is_finite())
    }

    /// Whether the susceptible population has been exhausted.
    ///
    /// This is the default stopping rule for outbreak simulations.
    #[must_use]
    pub fn is_doomsday(&self) -> bool {
        self.susceptible <= 0.0
    }
}

impl Finite for Population {
    fn is_finite(&self) -> bool {
        self.first_non_finite().is_none()
    }
}

impl StepIntegrable<f64> for Population {
    type Derivative = Rates;

    fn step(&self, rates: Rates, dt: f64) -> Self {
        Self {
            susceptible: self.susceptible + rates.d_susceptible * dt,
            infected: self.infected + rates.d_infected * dt,
            zombies: self.zombies + rates.d_zombies * dt,
            removed: self.removed + rates.d_removed * dt,
            quarantined: self.quarantined + rates.d_quarantined * dt,
        }
    }
}

/// Instantaneous rate of change of each compartment.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rates {
    pub d_susceptible: f64,
    pub d_infected: f64,
    pub d_zombies: f64,
    pub d_removed: f64,
    pub d_quarantined: f64,
}

impl Rates {
    /// Net rate of change of the whole population.
    ///
    /// Zero when the equations only move individuals between compartments.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.d_susceptible + self.d_infected + self.d_zombies + self.d_removed + self.d_quarantined
    }
}
