//! Error types for batched vector kernels
//!
//! Provides a unified error type for all lanewise crates. Only the fallible
//! surfaces (configuration, columnar lookup, checked batch windows) return
//! these; kernels themselves are total.

use thiserror::Error;

/// Core error type for lanewise operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A batch window does not fit inside its backing storage
    #[error("Batch window out of bounds: offset {offset} + {batch} lanes exceeds length {len}")]
    OutOfBounds {
        offset: usize,
        batch: usize,
        len: usize,
    },

    /// A named column was not found in a columnar store
    #[error("Missing column: {0}")]
    MissingColumn(String),

    /// The same column was requested more than once for output
    #[error("Aliased column: {0} requested more than once for output")]
    AliasedColumn(String),

    /// A column does not have the store's length
    #[error("Column length mismatch for {name}: expected {expected}, got {actual}")]
    ColumnLength {
        name: String,
        expected: usize,
        actual: usize,
    },

    /// Invalid batch configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A kernel instantiation does not match the configured batch size
    #[error("Batch size mismatch: configured {configured}, instantiated {instantiated}")]
    BatchSizeMismatch {
        configured: usize,
        instantiated: usize,
    },

    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an error for a window that does not fit
    pub fn out_of_bounds(offset: usize, batch: usize, len: usize) -> Self {
        Self::OutOfBounds { offset, batch, len }
    }

    /// Create an error for a missing column
    pub fn missing_column(name: &str) -> Self {
        Self::MissingColumn(name.to_string())
    }

    /// Create an error for a column of the wrong length
    pub fn column_length(name: &str, expected: usize, actual: usize) -> Self {
        Self::ColumnLength {
            name: name.to_string(),
            expected,
            actual,
        }
    }
}
