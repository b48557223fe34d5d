//! GeoJSON `Point` codec.
//!
//! Output is always `{"type":"Point","coordinates":[lon,lat]}` with full
//! `f64` precision; decoding a value produced here gives back the same bits
//! for every finite coordinate.

use serde::Deserialize;
use serde_json::Value;

use geopoint_core::{Point, RawGeometry, TypedGeometry};

use crate::{CodecError, CodecResult};

/// Serialize a point as a GeoJSON geometry.
///
/// Fails with [`CodecError::InvalidGeometry`] if the point is absent or has
/// a non-finite coordinate (JSON has no NaN or infinity).
pub fn encode(point: Option<&Point>) -> CodecResult<String> {
    encode_geometry(point)
}

/// Serialize any [`TypedGeometry`] that is tagged as a point.
///
/// Fails with [`CodecError::InvalidGeometry`] if the geometry is absent, is
/// not tagged `"Point"`, does not carry two coordinates, or carries a
/// non-finite coordinate.
pub fn encode_geometry<G>(geom: Option<&G>) -> CodecResult<String>
where
    G: TypedGeometry + ?Sized,
{
    let Some(geom) = geom else {
        return Err(invalid("absent point".into()));
    };
    if !geom.is_point() {
        return Err(invalid(format!("expected type \"Point\", got {:?}", geom.kind())));
    }
    let point = match *geom.coordinates() {
        [lon, lat] => Point::new(lon, lat),
        ref other => return Err(invalid(format!("Point needs 2 coordinates, got {}", other.len()))),
    };
    if !point.is_finite() {
        return Err(invalid(format!("non-finite coordinates {point}")));
    }

    Ok(serde_json::to_string(&point)?)
}

/// Parse a GeoJSON `Point` geometry.
///
/// Malformed JSON is a [`CodecError::Parse`]; well-formed JSON that is not a
/// two-coordinate `Point` object is a [`CodecError::InvalidGeometry`].
pub fn decode(json: impl AsRef<[u8]>) -> CodecResult<Point> {
    let value: Value = serde_json::from_slice(json.as_ref())?;
    decode_value(value)
}

/// Same as [`decode`] for an already-parsed JSON value.
pub fn decode_value(value: Value) -> CodecResult<Point> {
    let raw = RawGeometry::deserialize(value).map_err(|e| invalid(e.to_string()))?;
    let point = Point::try_from(raw).inspect_err(|e| log::debug!("json decode rejected: {e}"))?;
    log::trace!("json decode: {point}");
    Ok(point)
}

fn invalid(reason: String) -> CodecError {
    log::debug!("json codec rejected: {reason}");
    CodecError::InvalidGeometry(reason)
}
