//! Reports and plots for outbreak simulation traces.
//!
//! Everything here consumes the records produced by
//! [`undead_solvers::transient::euler`] and never feeds back into a run.
//!
//! # Modules
//!
//! - [`report`] — flat text export, one line per record
//! - [`series`] — `(time, value)` series for a single compartment
//!
//! # Features
//!
//! - `plot` — Enables [`PlotObserver`] for charting a run via egui.
//!   This feature adds dependencies on `eframe` and `egui_plot`.

pub mod report;
pub mod series;

#[cfg(feature = "plot")]
mod plot;

#[cfg(feature = "plot")]
pub use plot::{PlotObserver, Plottable, ShowConfig};
