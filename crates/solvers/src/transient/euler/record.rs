/// The state reached after one integration step.
///
/// Records are emitted in step order starting at step 1; the initial state is
/// not a record. `time` is always `step * dt` so it never accumulates
/// rounding error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Record<S> {
    /// The step number, starting at 1.
    pub step: usize,

    /// Simulated time at which `state` holds.
    pub time: f64,

    /// The state after this step.
    pub state: S,
}
