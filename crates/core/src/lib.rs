//! Core types and traits for simulating a zombie outbreak.
//!
//! This crate defines the compartment model and the shared abstractions that
//! solvers and observers build on:
//!
//! - [`Population`] — the five compartment values (S, I, Z, R, Q)
//! - [`Rates`] — the instantaneous rate of change of a [`Population`]
//! - [`Parameters`] — the seven rate constants of the model
//! - [`Variant`] — which structural assumptions govern the equations
//! - [`Outbreak`] — a [`Model`] that computes [`Rates`] for a [`Population`]
//! - [`Model`], [`Observer`], [`StepIntegrable`] — the seams solvers use to
//!   step any model forward in time

mod compartments;
mod model;
mod observer;
mod parameters;
mod step;
mod variant;

pub mod derivative;

pub use compartments::{Compartment, Population, Rates};
pub use derivative::Outbreak;
pub use model::Model;
pub use observer::Observer;
pub use parameters::{ParameterError, Parameters, Rate};
pub use step::{Finite, StepIntegrable};
pub use variant::{InvalidVariant, Variant};
