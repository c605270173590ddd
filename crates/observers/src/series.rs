//! Read-only `(time, value)` views of a trace.

use undead_core::{Compartment, Population};
use undead_solvers::transient::euler::Record;

/// Extracts `[time, value]` points for one compartment, in trace order.
pub fn compartment_series<'a, I>(records: I, compartment: Compartment) -> Vec<[f64; 2]>
where
    I: IntoIterator<Item = &'a Record<Population>>,
{
    records
        .into_iter()
        .map(|record| [record.time, record.state.get(compartment)])
        .collect()
}

/// Extracts points for a compartment, starting with the initial population at
/// time zero.
pub fn compartment_series_from<'a, I>(
    initial: &Population,
    records: I,
    compartment: Compartment,
) -> Vec<[f64; 2]>
where
    I: IntoIterator<Item = &'a Record<Population>>,
{
    std::iter::once([0.0, initial.get(compartment)])
        .chain(compartment_series(records, compartment))
        .collect()
}
