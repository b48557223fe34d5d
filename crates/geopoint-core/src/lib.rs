//! `geopoint-core` — the longitude/latitude point value type.
//!
//! This crate has no `geopoint-*` dependencies and a single required
//! external one (`thiserror`), plus optional `serde`.  Encoding to bytes and
//! JSON lives in `geopoint-codec`.
//!
//! # What lives here
//!
//! | Module         | Contents                                                  |
//! |----------------|-----------------------------------------------------------|
//! | [`point`]      | `Point`, `TypedGeometry`, `RawGeometry`                   |
//! | [`distance`]   | planar approximation, haversine, `DistanceKind`           |
//! | [`error`]      | `PointError`, `PointResult`                               |
//!
//! # Absent points
//!
//! "No geometry yet" is `Option<Point>::None`.  Every operation that accepts
//! a possibly-absent point takes an `Option` and states what it does with
//! `None`; there is no null `Point`.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | `Point` (de)serializes as a GeoJSON `Point` object; derives |
//!           | on `RawGeometry` and `DistanceKind`.                       |

pub mod distance;
pub mod error;
pub mod point;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use distance::{great_circle_km, planar_approx_km, DistanceKind};
pub use error::{PointError, PointResult};
pub use point::{Point, RawGeometry, TypedGeometry, POINT_KIND};
