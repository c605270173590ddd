//! Transient solvers for outbreak simulations.
//!
//! - [`transient::euler`] — fixed-step forward Euler integration with an
//!   optional stopping rule, available as a lazy [`Trajectory`] or as a
//!   materialized [`Solution`]
//!
//! [`Trajectory`]: transient::euler::Trajectory
//! [`Solution`]: transient::euler::Solution

pub mod transient;
