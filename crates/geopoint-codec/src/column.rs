//! Driver-agnostic column contract: `scan` on read, `value` on write.
//!
//! Storage drivers hand back dynamically typed cells.  [`ColumnValue`]
//! mirrors the usual set so the point codec can reject anything that is not
//! a byte sequence without depending on a particular driver.

use std::borrow::Cow;

use geopoint_core::Point;

use crate::binary;
use crate::{CodecError, CodecResult};

/// A single dynamically typed column cell.
#[derive(Clone, Debug, PartialEq)]
pub enum ColumnValue<'a> {
    Null,
    Integer(i64),
    Real(f64),
    Text(Cow<'a, str>),
    Blob(Cow<'a, [u8]>),
}

impl ColumnValue<'_> {
    /// Short type name used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            ColumnValue::Null       => "null",
            ColumnValue::Integer(_) => "integer",
            ColumnValue::Real(_)    => "real",
            ColumnValue::Text(_)    => "text",
            ColumnValue::Blob(_)    => "blob",
        }
    }
}

/// Read a point out of a column cell.
///
/// Fails with [`CodecError::InvalidType`] for anything but a blob, then
/// applies [`binary::decode`].
pub fn scan(value: &ColumnValue<'_>) -> CodecResult<Point> {
    match value {
        ColumnValue::Blob(bytes) => binary::decode(bytes),
        other => {
            log::debug!("scan rejected: {} cell", other.type_name());
            Err(CodecError::InvalidType(other.type_name()))
        }
    }
}

/// Produce the blob cell to store for `point`.
///
/// Fails with [`CodecError::InvalidPoint`] if `point` is absent.
pub fn value(point: Option<&Point>) -> CodecResult<ColumnValue<'static>> {
    let record = binary::encode(point)?;
    Ok(ColumnValue::Blob(Cow::Owned(record.to_vec())))
}
