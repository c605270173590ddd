//! Forward Euler solver for transient models.
//!
//! The solver steps a model's state forward with a fixed step size:
//!
//! ```text
//! state_{n+1} = state_n + derivative(state_n) * dt
//! time_{n+1}  = (n + 1) * dt
//! ```
//!
//! The model maps a state to its time derivative, so any [`Model`] whose input
//! is [`StepIntegrable`] with the model output as its derivative can be
//! solved. Each run checks every new state with [`Finite`] and fails with
//! [`Error::NumericDivergence`] rather than carrying NaN or infinity forward.
//!
//! # Stopping
//!
//! Every run takes a stopping rule, a predicate over the newest state. When it
//! holds, the run ends after emitting that state's record. Outbreak runs
//! normally pass [`Population::is_doomsday`]; pass [`never`] to always run
//! the full horizon.
//!
//! # Example
//!
//! ```ignore
//! use undead_core::{Outbreak, Population};
//! use undead_solvers::transient::euler;
//!
//! let config = euler::Config::new(20.0, 0.01)?;
//! let solution = euler::solve_unobserved(&model, initial, &config, Population::is_doomsday)?;
//!
//! for record in &solution.history {
//!     println!("t={}: {:?}", record.time, record.state);
//! }
//! ```
//!
//! [`Population::is_doomsday`]: undead_core::Population::is_doomsday

mod action;
mod config;
mod error;
mod record;
mod solution;
mod trajectory;

#[cfg(test)]
mod tests;

pub use action::Action;
pub use config::{Config, ConfigError, MAX_STEPS};
pub use error::Error;
pub use record::Record;
pub use solution::{Solution, Status};
pub use trajectory::Trajectory;

use tracing::{debug, info};
use undead_core::{Finite, Model, Observer, StepIntegrable};

/// Advances `state` by one step of size `dt`.
///
/// Evaluates the model at `state` and returns `state + derivative * dt`. The
/// input state is left untouched.
///
/// # Errors
///
/// Returns [`Error::Model`] if the model call fails.
pub fn step<M>(model: &M, state: &M::Input, dt: f64) -> Result<M::Input, Error>
where
    M: Model,
    M::Input: StepIntegrable<f64, Derivative = M::Output>,
{
    let derivative = model.call(state).map_err(Error::model)?;
    Ok(state.step(derivative, dt))
}

/// Creates a lazy run starting from `initial`.
///
/// See [`Trajectory`] for the iteration and replay semantics.
pub fn trajectory<'a, M, F>(
    model: &'a M,
    initial: M::Input,
    config: &Config,
    stop: F,
) -> Trajectory<'a, M, F>
where
    M: Model,
    M::Input: StepIntegrable<f64, Derivative = M::Output> + Finite + Clone,
    F: FnMut(&M::Input) -> bool,
{
    Trajectory::new(model, initial, config, stop)
}

/// Upper bound on the records reserved before a run starts.
///
/// Longer runs grow the history as they go, so a run that stops early never
/// holds memory for the whole horizon.
const HISTORY_RESERVE: usize = 4096;

/// Integrates a model using forward Euler.
///
/// # Algorithm
///
/// For each step `1..=config.steps()`:
///
/// - Evaluate the model at the current state to get its derivative.
/// - Step the state forward: `state + derivative * dt`.
/// - Fail if any value of the new state is non-finite.
/// - Record the new state and emit the record to the observer.
/// - Stop if the observer returns [`Action::StopEarly`] or the stopping rule
///   holds for the new state.
///
/// # Observer
///
/// The observer receives each [`Record`] right after it is produced. Returning
/// [`Action::StopEarly`] ends the run with [`Status::StoppedByObserver`].
///
/// # Errors
///
/// Returns an error if the model fails or the state diverges.
pub fn solve<M, F, Obs>(
    model: &M,
    initial: M::Input,
    config: &Config,
    stop: F,
    mut observer: Obs,
) -> Result<Solution<M::Input>, Error>
where
    M: Model,
    M::Input: StepIntegrable<f64, Derivative = M::Output> + Finite + Clone,
    F: FnMut(&M::Input) -> bool,
    Obs: Observer<Record<M::Input>, Action>,
{
    debug!(
        steps = config.steps(),
        dt = config.dt(),
        total_time = config.total_time(),
        "starting euler run"
    );

    let mut run = trajectory(model, initial.clone(), config, stop);
    let mut history = Vec::with_capacity(config.steps().min(HISTORY_RESERVE));
    let mut status = Status::Complete;

    for record in run.by_ref() {
        let record = record?;
        let action = observer.observe(&record);
        history.push(record);

        if let Some(Action::StopEarly) = action {
            status = Status::StoppedByObserver;
            break;
        }
    }

    if status == Status::Complete && run.stopped_by_rule() {
        status = Status::StoppedByRule;
    }

    let steps = history.len();
    match status {
        Status::Complete => debug!(steps, "euler run complete"),
        Status::StoppedByRule => info!(
            steps,
            horizon_steps = config.steps(),
            time = config.time_at(steps),
            "stopping rule reached"
        ),
        Status::StoppedByObserver => debug!(steps, "euler run stopped by observer"),
    }

    Ok(Solution {
        status,
        initial,
        history,
        steps,
    })
}

/// Integrates a model using forward Euler without observation.
///
/// This is a convenience wrapper around [`solve`] that discards records as
/// they are emitted (they are still collected into the solution).
///
/// # Errors
///
/// Returns an error if the model fails or the state diverges.
pub fn solve_unobserved<M, F>(
    model: &M,
    initial: M::Input,
    config: &Config,
    stop: F,
) -> Result<Solution<M::Input>, Error>
where
    M: Model,
    M::Input: StepIntegrable<f64, Derivative = M::Output> + Finite + Clone,
    F: FnMut(&M::Input) -> bool,
{
    solve(model, initial, config, stop, ())
}

/// A stopping rule that never fires.
#[must_use]
pub fn never<S>(_state: &S) -> bool {
    false
}
