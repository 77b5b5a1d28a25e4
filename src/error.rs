//! Errors returned by this crate.
//!
//! Two kinds of failures exist.
//! [`InputError`] means the source table could not be read
//! or is not a rectangular string table.
//! [`DataAssumptionViolation`] means the table is well-formed
//! but breaks an assumption the tree induction relies on,
//! e.g., a label column with more than two values.
use std::io;
use std::path::PathBuf;

use polars::prelude::PolarsError;
use thiserror::Error;


/// A shorthand for `std::result::Result<T, id3tree::Error>`.
pub type Result<T> = std::result::Result<T, Error>;


/// The error type of this crate.
#[derive(Error, Debug)]
pub enum Error {
    /// The source table is missing, unreadable, or malformed.
    #[error(transparent)]
    Input(#[from] InputError),

    /// The table violates an assumption of the tree induction.
    #[error(transparent)]
    DataAssumption(#[from] DataAssumptionViolation),

    /// Serializing the tree failed.
    #[error("failed to render the tree: {0}")]
    Render(#[from] serde_json::Error),
}


/// Failures while reading or constructing a [`Table`](crate::Table).
#[derive(Error, Debug)]
pub enum InputError {
    /// The source file could not be opened or read.
    #[error("cannot read `{}`: {source}", path.display())]
    Io {
        /// The path given to the reader.
        path: PathBuf,
        /// The underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// No source file was given to the reader.
    #[error("the file name for the table is not set")]
    MissingPath,

    /// The source is empty.
    #[error("the table has no header row")]
    MissingHeader,

    /// Only a header row is present.
    #[error("the table has no observation rows")]
    NoObservations,

    /// Fewer than two columns.
    #[error(
        "the table needs at least one feature column and a label column, \
        got {0} column(s)"
    )]
    TooFewColumns(usize),

    /// An observation row is not as wide as the header.
    #[error("row {row} has {found} cell(s), but the header has {expected}")]
    RaggedRow {
        /// 1-based observation row.
        row: usize,
        /// Header width.
        expected: usize,
        /// Cells in the row.
        found: usize,
    },

    /// A cell is null, e.g., an empty CSV cell or a short CSV row.
    #[error("column `{column}` has a missing value at row {row}")]
    MissingValue {
        /// Column name.
        column: String,
        /// 1-based observation row.
        row: usize,
    },

    /// Two columns share a name.
    #[error("the column name `{0}` appears more than once in the header")]
    DuplicateColumn(String),

    /// Parsing the CSV source or converting a data frame failed.
    #[error(transparent)]
    Polars(#[from] PolarsError),
}


/// A well-formed table that the ID3 induction cannot handle faithfully.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DataAssumptionViolation {
    /// More than two distinct label values.
    #[error(
        "the label column must take at most two distinct values, \
        found {}: {:?}", .0.len(), .0
    )]
    TooManyLabels(Vec<String>),

    /// A label outside an explicitly given label pair.
    #[error("label `{label}` is neither `{negative}` nor `{positive}`")]
    UnknownLabel {
        /// The offending label.
        label: String,
        /// The negative label of the pair.
        negative: String,
        /// The positive label of the pair.
        positive: String,
    },
}


impl Error {
    /// Returns `true` if this error was caused by the input source.
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::Input(_))
    }
}


impl From<PolarsError> for Error {
    fn from(err: PolarsError) -> Self {
        Self::Input(InputError::Polars(err))
    }
}
