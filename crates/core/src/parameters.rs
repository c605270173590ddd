use std::fmt;

#[cfg(feature = "serde-derive")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Names one of the seven rate constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rate {
    /// α: zombies destroyed by susceptibles.
    Destruction,
    /// β: susceptibles infected by zombies.
    Infection,
    /// δ: removed individuals rising as zombies.
    Resurrection,
    /// π: natural death of susceptibles.
    NaturalDeath,
    /// ρ: infected individuals turning into zombies.
    Latency,
    /// κ: infected individuals and zombies moved into quarantine.
    Quarantine,
    /// c: zombies cured back into susceptibles.
    Cure,
}

impl Rate {
    pub const ALL: [Rate; 7] = [
        Self::Destruction,
        Self::Infection,
        Self::Resurrection,
        Self::NaturalDeath,
        Self::Latency,
        Self::Quarantine,
        Self::Cure,
    ];
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Destruction => "destruction rate (alpha)",
            Self::Infection => "infection rate (beta)",
            Self::Resurrection => "resurrection rate (delta)",
            Self::NaturalDeath => "natural death rate (pi)",
            Self::Latency => "latency rate (rho)",
            Self::Quarantine => "quarantine rate (kappa)",
            Self::Cure => "cure rate (c)",
        };
        f.write_str(name)
    }
}

/// The rate constants of an outbreak model.
///
/// Every variant reads a subset of these (see [`Variant::rates`]); the
/// remaining values are ignored rather than required to be zero.
///
/// [`Variant::rates`]: crate::Variant::rates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde-derive", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde-derive", serde(default, deny_unknown_fields))]
pub struct Parameters {
    pub alpha: f64,
    pub beta: f64,
    pub delta: f64,
    pub pi: f64,
    pub rho: f64,
    pub kappa: f64,
    pub cure: f64,
}

/// Error returned when a rate constant is negative or not finite.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ParameterError {
    #[error("{rate} must be finite and non-negative, got {value}")]
    Invalid { rate: Rate, value: f64 },
}

impl Parameters {
    /// Creates validated parameters.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError::Invalid`] naming the first rate that is
    /// negative, NaN, or infinite.
    #[allow(clippy::too_many_arguments, clippy::many_single_char_names)]
    pub fn new(
        alpha: f64,
        beta: f64,
        delta: f64,
        pi: f64,
        rho: f64,
        kappa: f64,
        cure: f64,
    ) -> Result<Self, ParameterError> {
        let parameters = Self {
            alpha,
            beta,
            delta,
            pi,
            rho,
            kappa,
            cure,
        };
        parameters.validate()?;
        Ok(parameters)
    }

    /// Returns the value of a single rate constant.
    #[must_use]
    pub fn get(&self, rate: Rate) -> f64 {
        match rate {
            Rate::Destruction => self.alpha,
            Rate::Infection => self.beta,
            Rate::Resurrection => self.delta,
            Rate::NaturalDeath => self.pi,
            Rate::Latency => self.rho,
            Rate::Quarantine => self.kappa,
            Rate::Cure => self.cure,
        }
    }

    /// Checks that every rate is finite and non-negative.
    ///
    /// Values deserialized or built with struct literals skip [`Parameters::new`],
    /// so callers should validate them before running a simulation.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError::Invalid`] for the first offending rate.
    pub fn validate(&self) -> Result<(), ParameterError> {
        for rate in Rate::ALL {
            let value = self.get(rate);
            if !value.is_finite() || value < 0.0 {
                return Err(ParameterError::Invalid { rate, value });
            }
        }
        Ok(())
    }
}
