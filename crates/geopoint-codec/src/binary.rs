//! Fixed 25-byte point record used at the column-store / wire boundary.
//!
//! # Layout
//!
//! ```text
//! offset  len  contents
//!      0    1  order/flag marker, always 0
//!      1    1  geometry type tag, 1 = point
//!      2    7  reserved, zero
//!      9    8  longitude, little-endian
//!     17    8  latitude,  little-endian
//! ```
//!
//! # Coordinate encoding
//!
//! The default [`CoordEncoding::Truncated`] stores each coordinate as a
//! little-endian **`i64`**: encode truncates toward zero, decode converts the
//! integer back to `f64`.  This is NOT the IEEE-754 bit pattern a spatial
//! database would write, and it discards fractional degrees: `(10.9, -20.2)`
//! comes back as `(10.0, -20.0)`.  Existing stored records use this layout,
//! and it is the default.  New columns that do not have to read old data can
//! opt into [`CoordEncoding::Ieee754`], which keeps the same frame but stores
//! raw `f64` bits.  The two encodings share a header and cannot be told
//! apart from the bytes alone.

use byteorder::{ByteOrder, LittleEndian};

use geopoint_core::Point;

use crate::{CodecError, CodecResult};

/// Total size of one record.
pub const RECORD_LEN: usize = 25;

/// Byte 0.
pub const ORDER_MARKER: u8 = 0;

/// Byte 1.
pub const POINT_TAG: u8 = 1;

const LON: std::ops::Range<usize> = 9..17;
const LAT: std::ops::Range<usize> = 17..25;

/// How coordinates are packed into their 8-byte slots.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub enum CoordEncoding {
    /// Integer part as little-endian `i64`.  Lossy; wire-compatible.
    #[default]
    Truncated,
    /// Raw little-endian `f64` bits.  Lossless.
    Ieee754,
}

impl CoordEncoding {
    fn write(self, slot: &mut [u8], v: f64) {
        match self {
            // `as` truncates toward zero, saturates out-of-range values and
            // maps NaN to 0.
            CoordEncoding::Truncated => LittleEndian::write_i64(slot, v as i64),
            CoordEncoding::Ieee754   => LittleEndian::write_f64(slot, v),
        }
    }

    fn read(self, slot: &[u8]) -> f64 {
        match self {
            CoordEncoding::Truncated => LittleEndian::read_i64(slot) as f64,
            CoordEncoding::Ieee754   => LittleEndian::read_f64(slot),
        }
    }
}

/// Encode with the default, truncating layout.
///
/// Fails with [`CodecError::InvalidPoint`] if `point` is absent.
pub fn encode(point: Option<&Point>) -> CodecResult<[u8; RECORD_LEN]> {
    encode_with(point, CoordEncoding::default())
}

/// Decode with the default, truncating layout.
///
/// Fails with [`CodecError::InvalidLength`] unless `bytes` is exactly
/// [`RECORD_LEN`] long, and with [`CodecError::InvalidHeader`] unless bytes
/// 0 and 1 are [`ORDER_MARKER`] and [`POINT_TAG`].  The reserved bytes are
/// not inspected.
pub fn decode(bytes: &[u8]) -> CodecResult<Point> {
    decode_with(bytes, CoordEncoding::default())
}

pub fn encode_with(point: Option<&Point>, enc: CoordEncoding) -> CodecResult<[u8; RECORD_LEN]> {
    let Some(point) = point else {
        log::debug!("binary encode rejected: absent point");
        return Err(CodecError::InvalidPoint);
    };

    let mut buf = [0u8; RECORD_LEN];
    buf[0] = ORDER_MARKER;
    buf[1] = POINT_TAG;
    enc.write(&mut buf[LON], point.lon());
    enc.write(&mut buf[LAT], point.lat());
    Ok(buf)
}

pub fn decode_with(bytes: &[u8], enc: CoordEncoding) -> CodecResult<Point> {
    if bytes.len() != RECORD_LEN {
        log::debug!("binary decode rejected: {} bytes", bytes.len());
        return Err(CodecError::InvalidLength { expected: RECORD_LEN, actual: bytes.len() });
    }
    if bytes[0] != ORDER_MARKER || bytes[1] != POINT_TAG {
        log::debug!("binary decode rejected: header {:#04x} {:#04x}", bytes[0], bytes[1]);
        return Err(CodecError::InvalidHeader { order: bytes[0], kind: bytes[1] });
    }

    let point = Point::new(enc.read(&bytes[LON]), enc.read(&bytes[LAT]));
    log::trace!("binary decode ({enc:?}): {point}");
    Ok(point)
}
