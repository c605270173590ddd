/// A callable model that maps a typed input to a typed output.
///
/// Transient solvers call a model once per step to learn how its input is
/// changing, so a model must be deterministic: the same input always produces
/// the same output. That is what makes a simulation replayable from its
/// initial state alone.
pub trait Model {
    type Input;
    type Output;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Calls the model with the given input.
    ///
    /// # Errors
    ///
    /// Each model defines its own `Error` type to represent domain-specific failures.
    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error>;
}
