//! Flat text export of a simulation trace.
//!
//! Each record becomes one line:
//!
//! ```text
//! Time: 0.01 | S: 499.53 | I: 0.00 | Z: 10.22 | R: 0.25 | Q: 0.00
//! ```
//!
//! Every value, including `Q`, is printed with two decimals so the columns of
//! every variant line up the same way.

use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use thiserror::Error;
use tracing::debug;
use undead_core::{Compartment, Population};
use undead_solvers::transient::euler::Record;

/// Errors that can occur while saving a report.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to write report to {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Formats one record as a report line, without a trailing newline.
#[must_use]
pub fn format_record(record: &Record<Population>) -> String {
    let mut line = format!("Time: {:.2}", record.time);
    for compartment in Compartment::ALL {
        let value = record.state.get(compartment);
        line.push_str(&format!(" | {}: {value:.2}", compartment.symbol()));
    }
    line
}

/// Writes one line per record to `writer`.
///
/// # Errors
///
/// Returns any error reported by the writer.
pub fn write_trace<'a, W, I>(mut writer: W, records: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a Record<Population>>,
{
    for record in records {
        writeln!(writer, "{}", format_record(record))?;
    }
    writer.flush()
}

/// Saves the report for `records` to a file at `path`, replacing any
/// existing file.
///
/// # Errors
///
/// Returns [`ReportError::Io`] if the file cannot be created or written.
pub fn save_trace<'a, I>(path: impl AsRef<Path>, records: I) -> Result<(), ReportError>
where
    I: IntoIterator<Item = &'a Record<Population>>,
{
    let path = path.as_ref();
    let io_error = |source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(io_error)?;
    write_trace(BufWriter::new(file), records).map_err(io_error)?;

    debug!(path = %path.display(), "saved simulation report");
    Ok(())
}
