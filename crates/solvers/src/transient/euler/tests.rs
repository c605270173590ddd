use std::convert::Infallible;

use approx::assert_relative_eq;
use thiserror::Error;
use undead_core::Model;

use super::{
    Action, Config, Error, Record, Status, never, solve, solve_unobserved, step, trajectory,
};

/// Exponential decay: dx/dt = -rate * x.
struct Decay {
    rate: f64,
}

impl Model for Decay {
    type Input = f64;
    type Output = f64;
    type Error = Infallible;

    fn call(&self, x: &f64) -> Result<f64, Self::Error> {
        Ok(-self.rate * x)
    }
}

/// Constant growth: dx/dt = rate.
struct Growth {
    rate: f64,
}

impl Model for Growth {
    type Input = f64;
    type Output = f64;
    type Error = Infallible;

    fn call(&self, _x: &f64) -> Result<f64, Self::Error> {
        Ok(self.rate)
    }
}

#[derive(Debug, Error)]
#[error("negative input {0}")]
struct NegativeInput(f64);

/// Model that fails once its state goes negative.
struct FailsBelowZero;

impl Model for FailsBelowZero {
    type Input = f64;
    type Output = f64;
    type Error = NegativeInput;

    fn call(&self, x: &f64) -> Result<f64, Self::Error> {
        if *x < 0.0 {
            Err(NegativeInput(*x))
        } else {
            Ok(-1.0)
        }
    }
}

#[test]
fn single_step_is_explicit_euler() {
    let model = Decay { rate: 0.5 };
    let state = 8.0;

    let next = step(&model, &state, 0.25).expect("should step");

    assert_relative_eq!(next, 8.0 - 0.5 * 8.0 * 0.25);
    assert_relative_eq!(state, 8.0);
}

#[test]
fn complete_run_records_every_step() {
    let model = Growth { rate: 2.0 };
    let config = Config::new(1.0, 0.1).unwrap();

    let solution = solve_unobserved(&model, 0.0, &config, never).expect("should solve");

    assert_eq!(solution.status, Status::Complete);
    assert_eq!(solution.steps, 10);
    assert_eq!(solution.history.len(), 10);
    assert_relative_eq!(solution.initial, 0.0);

    let last = solution.history.last().unwrap();
    assert_eq!(last.step, 10);
    assert_relative_eq!(last.time, 1.0);
    assert_relative_eq!(last.state, 2.0, epsilon = 1e-12);
    assert_relative_eq!(*solution.final_state(), 2.0, epsilon = 1e-12);
}

#[test]
fn record_times_are_step_multiples() {
    let model = Growth { rate: 1.0 };
    let config = Config::new(1.0, 0.3).unwrap();

    let solution = solve_unobserved(&model, 0.0, &config, never).expect("should solve");

    let steps: Vec<usize> = solution.history.iter().map(|r| r.step).collect();
    assert_eq!(steps, vec![1, 2, 3, 4]);
    for record in &solution.history {
        #[allow(clippy::cast_precision_loss)]
        let expected = record.step as f64 * 0.3;
        assert_eq!(record.time, expected);
    }
}

#[test]
fn stopping_rule_truncates_run() {
    let model = Growth { rate: -1.0 };
    let config = Config::new(10.0, 0.5).unwrap();

    let solution =
        solve_unobserved(&model, 2.0, &config, |x: &f64| *x <= 0.0).expect("should solve");

    assert_eq!(solution.status, Status::StoppedByRule);
    assert_eq!(solution.steps, 4);
    assert_relative_eq!(*solution.final_state(), 0.0);
}

#[test]
fn observer_can_stop_early() {
    let model = Growth { rate: 1.0 };
    let config = Config::new(100.0, 1.0).unwrap();

    let observer = |record: &Record<f64>| (record.step >= 5).then_some(Action::StopEarly);

    let solution = solve(&model, 0.0, &config, never, observer).expect("should stop early");

    assert_eq!(solution.status, Status::StoppedByObserver);
    assert_eq!(solution.steps, 5);
    assert_eq!(solution.history.len(), 5);
}

#[test]
fn observer_sees_every_record() {
    let model = Decay { rate: 1.0 };
    let config = Config::new(1.0, 0.25).unwrap();

    let mut seen = Vec::new();
    solve(&model, 1.0, &config, never, |record: &Record<f64>| {
        seen.push(record.step);
        None
    })
    .expect("should solve");

    assert_eq!(seen, vec![1, 2, 3, 4]);
}

#[test]
fn zero_horizon_returns_initial_only() {
    let model = Growth { rate: 1.0 };
    let config = Config::new(0.0, 0.1).unwrap();

    let solution = solve_unobserved(&model, 5.0, &config, never).expect("should solve");

    assert_eq!(solution.status, Status::Complete);
    assert_eq!(solution.steps, 0);
    assert!(solution.history.is_empty());
    assert_relative_eq!(*solution.final_state(), 5.0);
}

#[test]
fn divergence_is_an_error() {
    let model = Growth { rate: f64::INFINITY };
    let config = Config::new(1.0, 0.1).unwrap();

    let err = solve_unobserved(&model, 0.0, &config, never).unwrap_err();

    assert!(matches!(err, Error::NumericDivergence { step: 1, .. }));
}

#[test]
fn model_errors_propagate() {
    let config = Config::new(5.0, 1.0).unwrap();

    let err = solve_unobserved(&FailsBelowZero, 1.5, &config, never).unwrap_err();

    assert!(matches!(err, Error::Model(_)));
    assert_eq!(err.to_string(), "model error: negative input -0.5");
}

#[test]
fn trajectory_is_lazy_and_fused() {
    let model = Growth { rate: 1.0 };
    let config = Config::new(3.0, 1.0).unwrap();

    let mut run = trajectory(&model, 0.0, &config, never);
    assert_eq!(run.steps_taken(), 0);
    assert_eq!(run.size_hint(), (0, Some(3)));

    let first = run.next().unwrap().unwrap();
    assert_eq!(first.step, 1);
    assert_eq!(run.steps_taken(), 1);
    assert_relative_eq!(*run.state(), 1.0);

    assert_eq!(run.by_ref().count(), 2);
    assert!(run.next().is_none());
    assert!(run.next().is_none());
}

#[test]
fn trajectory_stops_after_first_error() {
    let model = Growth { rate: f64::NAN };
    let config = Config::new(10.0, 1.0).unwrap();

    let results: Vec<_> = trajectory(&model, 0.0, &config, never).collect();

    assert_eq!(results.len(), 1);
    assert!(results[0].is_err());
}

#[test]
fn cloned_trajectory_replays_identically() {
    let model = Decay { rate: 0.3 };
    let config = Config::new(2.0, 0.1).unwrap();

    let run = trajectory(&model, 10.0, &config, never);
    let replay = run.clone();

    let first: Vec<_> = run.map(Result::unwrap).collect();
    let second: Vec<_> = replay.map(Result::unwrap).collect();

    assert_eq!(first.len(), 20);
    assert_eq!(first, second);
}

#[test]
fn collect_solution_matches_solve() {
    let model = Growth { rate: -1.0 };
    let config = Config::new(10.0, 0.5).unwrap();
    let rule = |x: &f64| *x <= 0.0;

    let lazy = trajectory(&model, 2.0, &config, rule)
        .collect_solution()
        .expect("should solve");
    let eager = solve_unobserved(&model, 2.0, &config, rule).expect("should solve");

    assert_eq!(lazy.status, eager.status);
    assert_eq!(lazy.history, eager.history);
}

#[test]
fn rule_on_final_step_still_reports_stopped_by_rule() {
    let model = Growth { rate: -1.0 };
    let config = Config::new(2.0, 0.5).unwrap();

    let solution =
        solve_unobserved(&model, 2.0, &config, |x: &f64| *x <= 0.0).expect("should solve");

    assert_eq!(solution.status, Status::StoppedByRule);
    assert_eq!(solution.steps, config.steps());
    assert_relative_eq!(*solution.final_state(), 0.0);
}

#[test]
fn early_stop_does_not_reserve_the_whole_horizon() {
    let model = Growth { rate: -1.0 };
    let config = Config::new(1.0e6, 1.0).unwrap();

    let solution =
        solve_unobserved(&model, 0.5, &config, |x: &f64| *x <= 0.0).expect("should solve");

    assert_eq!(solution.status, Status::StoppedByRule);
    assert_eq!(solution.steps, 1);
    assert!(solution.history.capacity() < config.steps());
}
