use thiserror::Error;

/// Convenience result type for loading and report operations.
pub type BikeshareResult<T> = Result<T, BikeshareError>;

/// Error type returned by record loading and engine construction.
///
/// Statistics never fail: empty input and missing optional columns are reported through
/// [`crate::stats::Outcome`] instead.
#[derive(Debug, Error)]
pub enum BikeshareError {
    /// Underlying I/O error (e.g. file not found, permission denied).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed CSV framing (unbalanced quotes, bad UTF-8, ...).
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// The dataset cannot be used at all (missing required column, unknown city, ...).
    #[error("data source error: {message}")]
    DataSource { message: String },

    /// A required field could not be parsed. The whole load is abandoned.
    #[error("failed to parse value at row {row} column '{column}': {message} (raw='{raw}')")]
    ParseError {
        row: usize,
        column: String,
        raw: String,
        message: String,
    },

    /// Report or raw-row serialization failed.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// The report thread pool could not be created.
    #[error("thread pool error: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

impl BikeshareError {
    /// `true` for failures of the backing dataset itself (missing, unreadable or
    /// structurally unusable), `false` for row-level parse failures and engine errors.
    pub fn is_data_source(&self) -> bool {
        matches!(self, Self::Io(_) | Self::Csv(_) | Self::DataSource { .. })
    }
}
