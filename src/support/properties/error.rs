use thiserror::Error;

/// Errors that can occur while building a [`PropertyTable`](super::PropertyTable).
///
/// Positions are 1-based. A `line` is the text line for parsed tables and the
/// row number for [`PropertyTable::from_rows`](super::PropertyTable::from_rows).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DataError {
    /// A field could not be read as a number.
    #[error("line {line}, column {column}: cannot parse {text:?} as a number")]
    Parse {
        line: usize,
        column: usize,
        text: String,
    },

    /// A row does not have one temperature and three property columns.
    #[error("line {line}: expected 4 columns, found {found}")]
    ColumnCount { line: usize, found: usize },

    /// A sample value is infinite or NaN.
    #[error("line {line}, column {column}: value is not finite")]
    NonFinite { line: usize, column: usize },

    /// Interpolation needs at least two samples.
    #[error("at least 2 samples are required, found {count}")]
    TooFewSamples { count: usize },

    /// Sample temperatures must be strictly increasing.
    #[error("line {line}: temperature {temperature} K does not exceed the previous row")]
    NotIncreasing { line: usize, temperature: f64 },
}
