/// A trait for types that can be stepped using their derivative.
///
/// Implementing this trait lets a transient solver advance the type by
/// `derivative * delta`, where the derivative is taken with respect to
/// `Delta`. For the outbreak models `Delta` is a plain `f64` time increment.
pub trait StepIntegrable<Delta> {
    /// The derivative of the type with respect to `Delta`.
    type Derivative;

    /// Returns the value after stepping with a derivative and step size.
    #[must_use]
    fn step(&self, derivative: Self::Derivative, delta: Delta) -> Self;
}

/// A state whose values can be checked for NaN or infinity.
///
/// Solvers check every stepped state so a divergent run fails loudly instead
/// of carrying non-finite values through the rest of the trace.
pub trait Finite {
    /// Returns `true` if every value in the state is finite.
    fn is_finite(&self) -> bool;
}

impl Finite for f64 {
    fn is_finite(&self) -> bool {
        f64::is_finite(*self)
    }
}

impl StepIntegrable<f64> for f64 {
    type Derivative = f64;

    fn step(&self, derivative: f64, delta: f64) -> Self {
        self + derivative * delta
    }
}
