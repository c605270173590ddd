use thiserror::Error;

/// Upper bound on the number of steps a single run may take.
pub const MAX_STEPS: usize = 10_000_000;

/// Time horizon and step size for the Euler solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    total_time: f64,
    dt: f64,
    steps: usize,
}

/// Errors that can occur when validating an Euler solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ConfigError {
    #[error("total_time must be finite and non-negative, got {0}")]
    TotalTime(f64),

    #[error("dt must be finite and positive, got {0}")]
    StepSize(f64),

    #[error("horizon needs {0} steps, more than the limit of {MAX_STEPS}")]
    TooManySteps(f64),
}

impl Config {
    /// Creates a new config with a validated horizon.
    ///
    /// The run takes one step for every index `i` with `i * dt < total_time`,
    /// which is `ceil(total_time / dt)` steps.
    ///
    /// # Errors
    ///
    /// Returns an error if `total_time` is negative or non-finite, if `dt` is
    /// not strictly positive and finite, or if the horizon needs more than
    /// [`MAX_STEPS`] steps.
    pub fn new(total_time: f64, dt: f64) -> Result<Self, ConfigError> {
        if !total_time.is_finite() || total_time < 0.0 {
            return Err(ConfigError::TotalTime(total_time));
        }
        if !dt.is_finite() || dt <= 0.0 {
            return Err(ConfigError::StepSize(dt));
        }

        let ratio = (total_time / dt).ceil();
        #[allow(clippy::cast_precision_loss)]
        let limit = MAX_STEPS as f64;
        if !ratio.is_finite() || ratio > limit {
            return Err(ConfigError::TooManySteps(ratio));
        }

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let mut steps = ratio as usize;

        // The quotient can round across an integer; count against the loop
        // condition itself.
        while steps > 0 && time_at(steps - 1, dt) >= total_time {
            steps -= 1;
        }
        while time_at(steps, dt) < total_time {
            steps += 1;
        }

        Ok(Self {
            total_time,
            dt,
            steps,
        })
    }

    /// Returns the simulated time span.
    #[must_use]
    pub fn total_time(&self) -> f64 {
        self.total_time
    }

    /// Returns the fixed step size.
    #[must_use]
    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Returns the number of steps a run without early stopping takes.
    #[must_use]
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Returns the simulated time after `step` steps.
    #[must_use]
    pub fn time_at(&self, step: usize) -> f64 {
        time_at(step, self.dt)
    }
}

#[allow(clippy::cast_precision_loss)]
fn time_at(step: usize, dt: f64) -> f64 {
    step as f64 * dt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_cover_the_horizon() {
        assert_eq!(Config::new(10.0, 0.5).unwrap().steps(), 20);
        assert_eq!(Config::new(1.0, 0.3).unwrap().steps(), 4);
        assert_eq!(Config::new(1.0, 0.25).unwrap().steps(), 4);
        assert_eq!(Config::new(20.0, 0.01).unwrap().steps(), 2000);
        assert_eq!(Config::new(100.0, 1.0).unwrap().steps(), 100);
    }

    #[test]
    fn zero_horizon_takes_no_steps() {
        assert_eq!(Config::new(0.0, 0.1).unwrap().steps(), 0);
    }

    #[test]
    fn step_smaller_than_horizon_takes_one_step() {
        assert_eq!(Config::new(0.5, 2.0).unwrap().steps(), 1);
    }

    #[test]
    fn rejects_bad_total_time() {
        assert_eq!(Config::new(-1.0, 0.1), Err(ConfigError::TotalTime(-1.0)));
        assert!(matches!(
            Config::new(f64::NAN, 0.1),
            Err(ConfigError::TotalTime(_))
        ));
        assert!(matches!(
            Config::new(f64::INFINITY, 0.1),
            Err(ConfigError::TotalTime(_))
        ));
    }

    #[test]
    fn rejects_bad_step_size() {
        assert_eq!(Config::new(10.0, 0.0), Err(ConfigError::StepSize(0.0)));
        assert_eq!(Config::new(10.0, -0.5), Err(ConfigError::StepSize(-0.5)));
        assert!(matches!(
            Config::new(10.0, f64::NAN),
            Err(ConfigError::StepSize(_))
        ));
    }

    #[test]
    fn rejects_degenerate_horizon() {
        assert!(matches!(
            Config::new(1.0e6, 1.0e-6),
            Err(ConfigError::TooManySteps(_))
        ));
        assert!(matches!(
            Config::new(1.0, f64::MIN_POSITIVE),
            Err(ConfigError::TooManySteps(_))
        ));
    }

    #[test]
    fn time_is_step_times_dt() {
        let config = Config::new(1.0, 0.1).unwrap();
        assert_eq!(config.time_at(0), 0.0);
        assert_eq!(config.time_at(3), 3.0 * 0.1);
        assert_eq!(config.dt(), 0.1);
        assert_eq!(config.total_time(), 1.0);
    }
}
