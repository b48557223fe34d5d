//! Arrow column binding (feature `arrow`).
//!
//! A batch of `Option<Point>` maps to a `FixedSizeBinary(25)` array, one
//! [`crate::binary`] record per slot.  Absent points become nulls.

use arrow::array::{Array, FixedSizeBinaryArray, FixedSizeBinaryBuilder};
use arrow::datatypes::{DataType, Field};

use geopoint_core::Point;

use crate::binary::{self, RECORD_LEN};
use crate::{CodecError, CodecResult};

/// Schema field for a nullable point column called `name`.
pub fn point_field(name: &str) -> Field {
    Field::new(name, DataType::FixedSizeBinary(RECORD_LEN as i32), true)
}

/// Encode a batch of points into a `FixedSizeBinary(25)` array.
pub fn encode_array(points: &[Option<Point>]) -> CodecResult<FixedSizeBinaryArray> {
    let mut builder = FixedSizeBinaryBuilder::with_capacity(points.len(), RECORD_LEN as i32);
    for point in points {
        match point {
            Some(p) => builder.append_value(binary::encode(Some(p))?)?,
            None    => builder.append_null(),
        }
    }
    Ok(builder.finish())
}

/// Decode a point column.
///
/// Fails with [`CodecError::InvalidType`] if `array` is not fixed-size
/// binary, and with the usual [`binary::decode`] errors for a bad record
/// (including [`CodecError::InvalidLength`] for a column of the wrong width).
pub fn decode_array(array: &dyn Array) -> CodecResult<Vec<Option<Point>>> {
    let Some(records) = array.as_any().downcast_ref::<FixedSizeBinaryArray>() else {
        log::debug!("arrow decode rejected: column type {}", array.data_type());
        return Err(CodecError::InvalidType("non fixed-size binary Arrow column"));
    };

    records
        .iter()
        .map(|slot| slot.map(binary::decode).transpose())
        .collect()
}
