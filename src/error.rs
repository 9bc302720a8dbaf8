use thiserror::Error;

/// Errors surfaced by the clustering engine.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// Dataset contains no points.
    #[error("empty dataset")]
    EmptyDataset,

    /// The kernel radius is not strictly positive.
    #[error("bandwidth must be strictly positive")]
    NonPositiveBandwidth,

    /// Point dimensionality differs from the dimensionality seen at fit time.
    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch {
        /// Dimensionality of the fitted centers.
        expected: usize,
        /// Dimensionality of the offending input.
        found: usize,
    },

    /// `predict` was called before any successful `fit`.
    #[error("not fitted yet, call `fit` first")]
    NotFitted,
}

/// Result type used by this crate.
pub type Result<T> = std::result::Result<T, Error>;
