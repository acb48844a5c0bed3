//! Cart formatting errors.

use thiserror::Error;

/// Failures turning a wire cart into the domain model.
#[derive(Debug, Error)]
pub enum FormatError {
    /// A monetary amount was not a valid decimal string.
    #[error("invalid money amount {amount:?}")]
    InvalidAmount {
        /// The offending wire value.
        amount: String,

        /// Decimal parse failure.
        #[source]
        source: rust_decimal::Error,
    },
}
