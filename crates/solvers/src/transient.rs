//! Solvers that advance a model's state through time.
//!
//! A transient model takes a state as input and returns that state's time
//! derivative as output. Solvers in this module repeatedly evaluate the model
//! and step the state forward.
//!
//! # Solvers
//!
//! - [`euler`] — explicit first-order integration with a fixed step size

pub mod euler;
