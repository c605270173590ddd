use std::iter::FusedIterator;

use tracing::warn;
use undead_core::{Finite, Model, StepIntegrable};

use super::{Config, Error, Record, Solution, Status, step};

/// A lazy Euler run that yields one [`Record`] per step.
///
/// Nothing is computed until the iterator is advanced, so a caller can stop
/// consuming at any point for free. The iterator ends when the horizon is
/// reached, right after the record for which the stopping rule held, or right
/// after yielding an error.
///
/// Cloning a trajectory that has not been advanced, or building a new one from
/// the same inputs, replays the exact same sequence.
pub struct Trajectory<'a, M, F>
where
    M: Model,
{
    model: &'a M,
    config: Config,
    state: M::Input,
    step: usize,
    stop: F,
    stopped_by_rule: bool,
    failed: bool,
}

impl<'a, M, F> Trajectory<'a, M, F>
where
    M: Model,
    M::Input: StepIntegrable<f64, Derivative = M::Output> + Finite + Clone,
    F: FnMut(&M::Input) -> bool,
{
    pub(super) fn new(model: &'a M, initial: M::Input, config: &Config, stop: F) -> Self {
        Self {
            model,
            config: *config,
            state: initial,
            step: 0,
            stop,
            stopped_by_rule: false,
            failed: false,
        }
    }

    /// The state after the most recently yielded record.
    #[must_use]
    pub fn state(&self) -> &M::Input {
        &self.state
    }

    /// Number of steps taken so far.
    #[must_use]
    pub fn steps_taken(&self) -> usize {
        self.step
    }

    /// Whether the stopping rule ended the run.
    #[must_use]
    pub fn stopped_by_rule(&self) -> bool {
        self.stopped_by_rule
    }

    /// Runs the remaining steps and collects them into a [`Solution`].
    ///
    /// The solution's `initial` is the state the trajectory is currently at.
    ///
    /// # Errors
    ///
    /// Returns the first error the trajectory yields.
    pub fn collect_solution(mut self) -> Result<Solution<M::Input>, Error> {
        let initial = self.state.clone();
        let history = self.by_ref().collect::<Result<Vec<_>, _>>()?;
        let status = if self.stopped_by_rule {
            Status::StoppedByRule
        } else {
            Status::Complete
        };

        Ok(Solution {
            status,
            initial,
            steps: history.len(),
            history,
        })
    }

    fn is_finished(&self) -> bool {
        self.failed || self.stopped_by_rule || self.step >= self.config.steps()
    }
}

impl<M, F> Iterator for Trajectory<'_, M, F>
where
    M: Model,
    M::Input: StepIntegrable<f64, Derivative = M::Output> + Finite + Clone,
    F: FnMut(&M::Input) -> bool,
{
    type Item = Result<Record<M::Input>, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.is_finished() {
            return None;
        }

        let step_number = self.step + 1;
        let time = self.config.time_at(step_number);

        let next = match step(self.model, &self.state, self.config.dt()) {
            Ok(next) => next,
            Err(err) => {
                self.failed = true;
                return Some(Err(err));
            }
        };

        if !next.is_finite() {
            warn!(step = step_number, time, "state diverged");
            self.failed = true;
            return Some(Err(Error::NumericDivergence {
                step: step_number,
                time,
            }));
        }

        self.step = step_number;
        self.state = next.clone();
        self.stopped_by_rule = (self.stop)(&next);

        Some(Ok(Record {
            step: step_number,
            time,
            state: next,
        }))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.is_finished() {
            (0, Some(0))
        } else {
            (0, Some(self.config.steps() - self.step))
        }
    }
}

impl<M, F> FusedIterator for Trajectory<'_, M, F>
where
    M: Model,
    M::Input: StepIntegrable<f64, Derivative = M::Output> + Finite + Clone,
    F: FnMut(&M::Input) -> bool,
{
}

impl<M, F> Clone for Trajectory<'_, M, F>
where
    M: Model,
    M::Input: Clone,
    F: Clone,
{
    fn clone(&self) -> Self {
        Self {
            model: self.model,
            config: self.config,
            state: self.state.clone(),
            step: self.step,
            stop: self.stop.clone(),
            stopped_by_rule: self.stopped_by_rule,
            failed: self.failed,
        }
    }
}
