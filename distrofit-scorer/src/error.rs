//! Error types raised while configuring the matching engine.
#![forbid(unsafe_code)]

use thiserror::Error;

/// Errors raised when [`MatchWeights`](crate::MatchWeights) are unusable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WeightsError {
    /// A weight or multiplier was NaN or infinite.
    #[error("{field} must be finite")]
    NonFinite {
        /// Name of the offending field.
        field: &'static str,
    },
    /// A weight or multiplier was negative.
    #[error("{field} must not be negative")]
    Negative {
        /// Name of the offending field.
        field: &'static str,
    },
    /// Similarity and popularity weights summed to zero.
    #[error("similarity and popularity weights must sum to a positive value")]
    ZeroTotal,
    /// The popularity reference was zero, which would collapse normalisation.
    #[error("reference popularity must be positive")]
    ZeroReferencePopularity,
}
