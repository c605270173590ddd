//! Derivative functions for each outbreak variant.
//!
//! With S, I, Z, R, Q the compartments and α, β, δ, π, ρ, κ, c the rates:
//!
//! ```text
//! variant     dS             dI             dZ                 dR            dQ
//! basic       -βSZ - πS      0              βSZ + δR - αSZ     πS + αSZ - δR  0
//! latent      -βSZ - πS      βSZ - ρI       ρI + δR - αSZ      πS + αSZ - δR  0
//! quarantine  -βSZ - πS      βSZ - ρI - κI  ρI + δR - αSZ - κZ πS + αSZ - δR  κI + κZ - δQ
//! treatment   -βSZ - πS + cZ βSZ - ρI       ρI + δR - αSZ - cZ πS + αSZ - δR  0
//! ```
//!
//! Basic, latent, and treatment only move individuals between compartments,
//! so their rates always sum to zero. Quarantine sums to `-δQ`: quarantined
//! individuals leave through resurrection without arriving anywhere.

use std::convert::Infallible;

use tracing::debug;

use crate::{Model, ParameterError, Parameters, Population, Rate, Rates, Variant};

/// Computes the instantaneous rate of change of `population`.
#[must_use]
pub fn derivative(variant: Variant, parameters: &Parameters, population: &Population) -> Rates {
    match variant {
        Variant::Basic => basic(parameters, population),
        Variant::Latent => latent(parameters, population),
        Variant::Quarantine => quarantine(parameters, population),
        Variant::Treatment => treatment(parameters, population),
    }
}

/// Flows shared by every variant.
struct Flows {
    /// Susceptibles bitten by zombies (βSZ).
    bitten: f64,
    /// Zombies destroyed by susceptibles (αSZ).
    destroyed: f64,
    /// Susceptibles dying naturally (πS).
    died: f64,
    /// Removed rising as zombies (δR).
    resurrected: f64,
}

impl Flows {
    fn new(p: &Parameters, x: &Population) -> Self {
        let encounters = x.susceptible * x.zombies;
        Self {
            bitten: p.beta * encounters,
            destroyed: p.alpha * encounters,
            died: p.pi * x.susceptible,
            resurrected: p.delta * x.removed,
        }
    }

    fn d_susceptible(&self) -> f64 {
        -self.bitten - self.died
    }

    fn d_removed(&self) -> f64 {
        self.died + self.destroyed - self.resurrected
    }
}

fn basic(p: &Parameters, x: &Population) -> Rates {
    let f = Flows::new(p, x);
    Rates {
        d_susceptible: f.d_susceptible(),
        d_infected: 0.0,
        d_zombies: f.bitten + f.resurrected - f.destroyed,
        d_removed: f.d_removed(),
        d_quarantined: 0.0,
    }
}

fn latent(p: &Parameters, x: &Population) -> Rates {
    let f = Flows::new(p, x);
    let turned = p.rho * x.infected;
    Rates {
        d_susceptible: f.d_susceptible(),
        d_infected: f.bitten - turned,
        d_zombies: turned + f.resurrected - f.destroyed,
        d_removed: f.d_removed(),
        d_quarantined: 0.0,
    }
}

fn quarantine(p: &Parameters, x: &Population) -> Rates {
    let f = Flows::new(p, x);
    let turned = p.rho * x.infected;
    let isolated_infected = p.kappa * x.infected;
    let isolated_zombies = p.kappa * x.zombies;
    Rates {
        d_susceptible: f.d_susceptible(),
        d_infected: f.bitten - turned - isolated_infected,
        d_zombies: turned + f.resurrected - f.destroyed - isolated_zombies,
        d_removed: f.d_removed(),
        d_quarantined: isolated_infected + isolated_zombies - p.delta * x.quarantined,
    }
}

fn treatment(p: &Parameters, x: &Population) -> Rates {
    let f = Flows::new(p, x);
    let turned = p.rho * x.infected;
    let cured = p.cure * x.zombies;
    Rates {
        d_susceptible: f.d_susceptible() + cured,
        d_infected: f.bitten - turned,
        d_zombies: turned + f.resurrected - f.destroyed - cured,
        d_removed: f.d_removed(),
        d_quarantined: 0.0,
    }
}

/// An outbreak model: a variant together with its rate constants.
///
/// Calling the model with a [`Population`] returns its [`Rates`], which makes
/// it directly usable by the transient solvers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Outbreak {
    parameters: Parameters,
    variant: Variant,
}

impl Outbreak {
    /// Creates a model after validating its parameters.
    ///
    /// Rates the variant does not read are accepted as-is and only logged.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError`] if any rate is negative or non-finite.
    pub fn new(parameters: Parameters, variant: Variant) -> Result<Self, ParameterError> {
        parameters.validate()?;

        for rate in Rate::ALL {
            let value = parameters.get(rate);
            if value != 0.0 && !variant.uses(rate) {
                debug!(%variant, %rate, value, "ignoring rate not used by variant");
            }
        }

        Ok(Self {
            parameters,
            variant,
        })
    }

    #[must_use]
    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    #[must_use]
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Computes the rate of change of `population` under this model.
    #[must_use]
    pub fn rates(&self, population: &Population) -> Rates {
        derivative(self.variant, &self.parameters, population)
    }
}

impl Model for Outbreak {
    type Input = Population;
    type Output = Rates;
    type Error = Infallible;

    fn call(&self, input: &Population) -> Result<Rates, Infallible> {
        Ok(self.rates(input))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn all_rates() -> Parameters {
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

    fn mixed_population() -> Population {
        Population {
            susceptible: 500.0,
            infected: 20.0,
            zombies: 10.0,
            removed: 5.0,
            quarantined: 3.0,
        }
    }

    #[test]
    fn basic_matches_equations() {
        let p = all_rates();
        let x = mixed_population();
        let r = derivative(Variant::Basic, &p, &x);

        let sz = 500.0 * 10.0;
        assert_relative_eq!(r.d_susceptible, -p.beta * sz - p.pi * 500.0);
        assert_relative_eq!(r.d_infected, 0.0);
        assert_relative_eq!(r.d_zombies, p.beta * sz + p.delta * 5.0 - p.alpha * sz);
        assert_relative_eq!(r.d_removed, p.pi * 500.0 + p.alpha * sz - p.delta * 5.0);
        assert_relative_eq!(r.d_quarantined, 0.0);
    }

    #[test]
    fn latent_routes_bites_through_infected() {
        let p = all_rates();
        let x = mixed_population();
        let r = derivative(Variant::Latent, &p, &x);

        let sz = 500.0 * 10.0;
        assert_relative_eq!(r.d_infected, p.beta * sz - p.rho * 20.0);
        assert_relative_eq!(
            r.d_zombies,
            p.rho * 20.0 + p.delta * 5.0 - p.alpha * sz
        );
        assert_relative_eq!(r.d_quarantined, 0.0);
    }

    #[test]
    fn quarantine_isolates_infected_and_zombies() {
        let p = all_rates();
        let x = mixed_population();
        let r = derivative(Variant::Quarantine, &p, &x);

        let sz = 500.0 * 10.0;
        assert_relative_eq!(r.d_infected, p.beta * sz - p.rho * 20.0 - p.kappa * 20.0);
        assert_relative_eq!(
            r.d_zombies,
            p.rho * 20.0 + p.delta * 5.0 - p.alpha * sz - p.kappa * 10.0
        );
        assert_relative_eq!(
            r.d_quarantined,
            p.kappa * 20.0 + p.kappa * 10.0 - p.delta * 3.0
        );
    }

    #[test]
    fn treatment_cures_zombies_back_to_susceptible() {
        let p = all_rates();
        let x = mixed_population();
        let r = derivative(Variant::Treatment, &p, &x);

        let sz = 500.0 * 10.0;
        assert_relative_eq!(r.d_susceptible, -p.beta * sz - p.pi * 500.0 + p.cure * 10.0);
        assert_relative_eq!(
            r.d_zombies,
            p.rho * 20.0 + p.delta * 5.0 - p.alpha * sz - p.cure * 10.0
        );
        assert_relative_eq!(r.d_quarantined, 0.0);
    }

    #[test]
    fn zero_rates_give_zero_derivative() {
        let x = mixed_population();
        for variant in Variant::ALL {
            assert_eq!(
                derivative(variant, &Parameters::default(), &x),
                Rates::default()
            );
        }
    }

    #[test]
    fn conserving_variants_sum_to_zero() {
        let p = all_rates();
        let x = mixed_population();
        for variant in [Variant::Basic, Variant::Latent, Variant::Treatment] {
            let total = derivative(variant, &p, &x).total();
            assert_relative_eq!(total, 0.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn quarantine_loses_resurrected_quarantined() {
        let p = all_rates();
        let x = mixed_population();

        let total = derivative(Variant::Quarantine, &p, &x).total();
        assert_relative_eq!(total, -p.delta * x.quarantined, epsilon = 1e-9);

        let no_resurrection = Parameters { delta: 0.0, ..p };
        let total = derivative(Variant::Quarantine, &no_resurrection, &x).total();
        assert_relative_eq!(total, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn does_not_mutate_inputs() {
        let p = all_rates();
        let x = mixed_population();
        let _ = derivative(Variant::Quarantine, &p, &x);
        assert_eq!(x, mixed_population());
        assert_eq!(p, all_rates());
    }

    #[test]
    fn outbreak_model_calls_derivative() {
        let model = Outbreak::new(all_rates(), Variant::Treatment).expect("valid parameters");
        let x = mixed_population();

        let Ok(rates) = model.call(&x);

        assert_eq!(rates, derivative(Variant::Treatment, &all_rates(), &x));
        assert_eq!(model.variant(), Variant::Treatment);
    }

    #[test]
    fn outbreak_rejects_invalid_parameters() {
        let parameters = Parameters {
            beta: -1.0,
            ..all_rates()
        };
        assert!(Outbreak::new(parameters, Variant::Basic).is_err());
    }
}
