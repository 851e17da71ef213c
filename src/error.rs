//! Engine error type.
//!
//! Graph construction validates the snapshot up front, so the algorithms
//! themselves run on trusted indices and never produce lookup errors. The
//! only failures surfaced to callers are bad location names and malformed
//! input matrices. "No path found" is an empty result, not an error.

use thiserror::Error;

/// The top-level error type for the route engine.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RouteError {
    #[error("unknown location: {name}")]
    UnknownLocation { name: String },

    #[error("incomplete graph: {reason}")]
    IncompleteGraph { reason: String },

    #[error("negative weight on edge {from} -> {to}: {weight}")]
    NegativeWeight {
        from: String,
        to: String,
        weight: f64,
    },
}

/// Shorthand result type for engine operations.
pub type RouteResult<T> = Result<T, RouteError>;
