use std::path::PathBuf;

use thiserror::Error;

// ---------------------------------------------------------------------------
// Error taxonomy: one type per pipeline stage
// ---------------------------------------------------------------------------

/// The input file could not be turned into a measurement table.
#[derive(Debug, Error)]
pub enum DataFormatError {
    #[error("failed to open {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("missing required column '{0}' in header")]
    MissingColumn(&'static str),

    #[error("row {row}: malformed record")]
    MalformedRow {
        row: usize,
        #[source]
        source: csv::Error,
    },

    #[error("row {row}, column '{column}': '{value}' is not a number")]
    NotANumber {
        row: usize,
        column: &'static str,
        value: String,
    },

    /// A header-only file has no axis ranges to plot from.
    #[error("no data rows after the header")]
    Empty,
}

/// The gain is mathematically undefined for a measurement.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("row {row}: input amplitude is zero, gain is undefined")]
    ZeroInput { row: usize },

    #[error("row {row}: amplitude ratio {ratio} is not positive, log10 is undefined")]
    NonPositiveRatio { row: usize, ratio: f64 },
}

/// The chart could not be drawn or written to disk.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to render chart to {}: {message}", path.display())]
    Backend { path: PathBuf, message: String },
}
