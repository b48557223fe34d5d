//! Error types for geopoint-codec.

use thiserror::Error;

use geopoint_core::PointError;

/// Errors produced while moving a point across a byte or JSON boundary.
#[derive(Debug, Error)]
pub enum CodecError {
    /// The column value handed to `scan` was not a byte sequence.
    #[error("invalid type: expected a byte sequence, got {0}")]
    InvalidType(&'static str),

    #[error("invalid length: a point record is {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("invalid header: expected order marker 0 and type tag 1, got {order} and {kind}")]
    InvalidHeader { order: u8, kind: u8 },

    /// Encode was asked to write an absent point.
    #[error("invalid point: cannot encode an absent point")]
    InvalidPoint,

    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[cfg(feature = "arrow")]
    #[error("Arrow error: {0}")]
    Arrow(#[from] arrow::error::ArrowError),
}

impl From<PointError> for CodecError {
    fn from(e: PointError) -> Self {
        CodecError::InvalidGeometry(e.to_string())
    }
}

/// Alias for `Result<T, CodecError>`.
pub type CodecResult<T> = Result<T, CodecError>;
