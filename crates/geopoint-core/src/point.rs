//! The point value type and the minimal typed-geometry capability.
//!
//! `Point` stores `[longitude, latitude]` as `f64`, in that order, matching
//! the GeoJSON coordinate order.  Ranges are deliberately not checked:
//! `Point::new(200.0, -95.0)` is a valid value and every codec carries it
//! through unchanged.

use std::fmt;

use crate::PointError;

/// Geometry type tag carried by every point.
pub const POINT_KIND: &str = "Point";

/// The smallest slice of a geometry hierarchy this workspace consumes: a
/// type tag plus a flat coordinate array.
pub trait TypedGeometry {
    /// GeoJSON-style type name, e.g. `"Point"`.
    fn kind(&self) -> &str;

    /// Flat coordinate array; `[lon, lat]` for points.
    fn coordinates(&self) -> &[f64];

    #[inline]
    fn is_point(&self) -> bool {
        self.kind() == POINT_KIND
    }
}

// ── Point ─────────────────────────────────────────────────────────────────────

/// A longitude/latitude pair in degrees.
///
/// Immutable once built: there are no setters, and decoders always return a
/// fresh value.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "RawGeometry", try_from = "RawGeometry")
)]
pub struct Point {
    coords: [f64; 2],
}

impl Point {
    /// Build a point from longitude and latitude.  Never fails.
    #[inline]
    pub const fn new(longitude: f64, latitude: f64) -> Self {
        Self { coords: [longitude, latitude] }
    }

    #[inline]
    pub fn lon(&self) -> f64 {
        self.coords[0]
    }

    #[inline]
    pub fn lat(&self) -> f64 {
        self.coords[1]
    }

    /// `[lon, lat]`.
    #[inline]
    pub fn coords(&self) -> [f64; 2] {
        self.coords
    }

    /// `true` when both components are finite (no NaN or infinity).
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.coords.iter().all(|c| c.is_finite())
    }
}

impl TypedGeometry for Point {
    #[inline]
    fn kind(&self) -> &str {
        POINT_KIND
    }

    #[inline]
    fn coordinates(&self) -> &[f64] {
        &self.coords
    }
}

impl From<[f64; 2]> for Point {
    fn from([lon, lat]: [f64; 2]) -> Self {
        Point::new(lon, lat)
    }
}

impl From<(f64, f64)> for Point {
    fn from((lon, lat): (f64, f64)) -> Self {
        Point::new(lon, lat)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "POINT({} {})", self.lon(), self.lat())
    }
}

// ── RawGeometry ───────────────────────────────────────────────────────────────

/// An untyped `{type, coordinates}` pair as it arrives from outside, before
/// it has been checked to be a point.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RawGeometry {
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub coordinates: Vec<f64>,
}

impl RawGeometry {
    pub fn new(kind: impl Into<String>, coordinates: Vec<f64>) -> Self {
        Self { kind: kind.into(), coordinates }
    }
}

impl TypedGeometry for RawGeometry {
    fn kind(&self) -> &str {
        &self.kind
    }

    fn coordinates(&self) -> &[f64] {
        &self.coordinates
    }
}

impl From<Point> for RawGeometry {
    fn from(p: Point) -> Self {
        RawGeometry::new(POINT_KIND, p.coords.to_vec())
    }
}

impl TryFrom<RawGeometry> for Point {
    type Error = PointError;

    fn try_from(raw: RawGeometry) -> Result<Self, Self::Error> {
        if !raw.is_point() {
            return Err(PointError::WrongKind(raw.kind));
        }
        match raw.coordinates[..] {
            [lon, lat] => Ok(Point::new(lon, lat)),
            _ => Err(PointError::WrongArity(raw.coordinates.len())),
        }
    }
}
