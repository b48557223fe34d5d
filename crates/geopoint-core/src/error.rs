//! Point-model error type.

use thiserror::Error;

/// Errors raised when an untyped geometry is narrowed to a [`Point`](crate::Point).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PointError {
    #[error("expected geometry type \"Point\", got {0:?}")]
    WrongKind(String),

    #[error("a Point needs exactly 2 coordinates, got {0}")]
    WrongArity(usize),

    #[error("unknown distance kind {0:?}")]
    UnknownDistanceKind(String),
}

/// Shorthand result type for `geopoint-core`.
pub type PointResult<T> = Result<T, PointError>;
