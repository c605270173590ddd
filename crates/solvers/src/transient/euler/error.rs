use std::error::Error as StdError;

/// Errors that can occur during Euler integration.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("model error: {0}")]
    Model(#[source] Box<dyn StdError + Send + Sync>),

    #[error("state became non-finite at step {step} (t = {time})")]
    NumericDivergence { step: usize, time: f64 },
}

impl Error {
    pub(crate) fn model<E: StdError + Send + Sync + 'static>(err: E) -> Self {
        Self::Model(Box::new(err))
    }
}
