//! Invalid-instance errors.
//!
//! Constructors validate their inputs and fail fast; no strategy ever runs
//! on a malformed instance, and no input is silently clamped or coerced.
//! Non-negativity is enforced by the unsigned parameter types, so the only
//! precondition left to check at runtime is structural.

use thiserror::Error;

/// Rejection of a malformed problem instance.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InstanceError {
    /// The weight and value sequences of a subset-selection instance must
    /// describe the same items.
    #[error("weights and values must have equal length (got {weights} weights, {values} values)")]
    LengthMismatch {
        /// Number of weights supplied.
        weights: usize,
        /// Number of values supplied.
        values: usize,
    },
}
