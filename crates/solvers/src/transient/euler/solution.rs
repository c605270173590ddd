use super::Record;

/// Indicates how the solver terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Reached the end of the configured horizon.
    Complete,

    /// The stopping rule held for the latest state.
    ///
    /// For outbreak runs this is the doomsday condition. The trace ends with
    /// the record that triggered the rule. The rule takes precedence over
    /// [`Status::Complete`], so a rule that fires on the final step of the
    /// horizon still reports `StoppedByRule` with a full-length trace.
    StoppedByRule,

    /// Stopped early due to an observer action.
    StoppedByObserver,
}

/// The result of an Euler integration.
#[derive(Debug, Clone)]
pub struct Solution<S> {
    /// How the solver terminated.
    pub status: Status,

    /// The state the run started from.
    pub initial: S,

    /// One record per completed step, in order.
    pub history: Vec<Record<S>>,

    /// Number of integration steps completed.
    pub steps: usize,
}

impl<S> Solution<S> {
    /// Returns the most recent state: the last record, or the initial state
    /// when no steps were taken.
    #[must_use]
    pub fn final_state(&self) -> &S {
        self.history
            .last()
            .map_or(&self.initial, |record| &record.state)
    }
}
