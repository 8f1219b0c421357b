//! Error types for the binning engine.
//!
//! Almost every operation in this crate is infallible by construction:
//! empty inputs produce empty outputs, unknown dive modes fall back to a
//! default, and out-of-range binner indices fall back to the first binner.
//! The only representable failure is a programming-contract violation.

use thiserror::Error;

/// Error type for dive-log binning operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Two bins of different concrete value kinds were compared.
    ///
    /// Binners guarantee that all bins within one result set share a kind,
    /// so hitting this means a caller mixed bins from different binners.
    #[error("cannot compare {left} bin with {right} bin")]
    BinKindMismatch {
        left: &'static str,
        right: &'static str,
    },
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;
