//! `geopoint-codec` — moving `geopoint_core::Point` across byte and JSON
//! boundaries.
//!
//! | Module             | Representation                                        |
//! |--------------------|-------------------------------------------------------|
//! | [`binary`]         | fixed 25-byte record (lossy by default, see module)   |
//! | [`json`]           | GeoJSON `{"type":"Point","coordinates":[lon,lat]}`    |
//! | [`column`]         | driver-agnostic `scan`/`value` over the binary record |
//! | `sqlite`           | `PointColumn: ToSql + FromSql` (feature `sqlite`)     |
//! | `arrow_column`     | `FixedSizeBinary(25)` arrays (feature `arrow`)        |
//!
//! Every function here is pure: no I/O, no shared state.  Rejections are
//! logged at `debug` through the `log` facade; installing a logger is up to
//! the application.
//!
//! # Usage
//!
//! ```rust
//! use geopoint_codec::{binary, json};
//! use geopoint_core::Point;
//!
//! let p = Point::new(-122.4194, 37.7749);
//! let text = json::encode(Some(&p)).unwrap();
//! assert_eq!(json::decode(&text).unwrap(), p);
//!
//! // The binary record keeps only the integer part of each coordinate.
//! let record = binary::encode(Some(&p)).unwrap();
//! assert_eq!(binary::decode(&record).unwrap(), Point::new(-122.0, 37.0));
//! ```

pub mod binary;
pub mod column;
pub mod error;
pub mod json;

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(feature = "arrow")]
pub mod arrow_column;


pub use binary::{CoordEncoding, RECORD_LEN};
pub use column::ColumnValue;
pub use error::{CodecError, CodecResult};

#[cfg(feature = "sqlite")]
pub use sqlite::PointColumn;
