//! Distance engine: a flat-grid approximation and the haversine great-circle
//! distance, both in kilometres.
//!
//! Both functions take `Option<Point>` and return `0.0` when either side is
//! absent.  That is part of the contract, not an error path: callers that
//! need to distinguish "no geometry" must check before calling.

use std::str::FromStr;

use crate::{Point, PointError};

/// Kilometres per degree used by the planar approximation.
pub const KM_PER_DEGREE: f64 = 111.0;

/// Mean Earth radius used by the haversine formula.
pub const EARTH_RADIUS_KM: f64 = 6_371.0;

/// Euclidean distance in degree space, scaled by [`KM_PER_DEGREE`].
///
/// Ignores the narrowing of longitude degrees away from the equator, so it
/// overestimates east–west separations at high latitudes.  The constant and
/// formula are kept as-is for compatibility with stored results.
pub fn planar_approx_km(a: Option<Point>, b: Option<Point>) -> f64 {
    match (a, b) {
        (Some(a), Some(b)) => a.planar_km(b),
        _ => 0.0,
    }
}

/// Haversine great-circle distance on a sphere of radius [`EARTH_RADIUS_KM`].
pub fn great_circle_km(a: Option<Point>, b: Option<Point>) -> f64 {
    match (a, b) {
        (Some(a), Some(b)) => a.great_circle_km(b),
        _ => 0.0,
    }
}

impl Point {
    /// See [`planar_approx_km`].
    pub fn planar_km(self, other: Point) -> f64 {
        let dx = other.lon() - self.lon();
        let dy = other.lat() - self.lat();
        (dx * dx + dy * dy).sqrt() * KM_PER_DEGREE
    }

    /// See [`great_circle_km`].
    ///
    /// Uses `atan2` rather than `asin` so that `a ≈ 0` and `a ≈ 1` (identical
    /// and antipodal points) stay numerically stable.
    pub fn great_circle_km(self, other: Point) -> f64 {
        let lat1 = self.lat().to_radians();
        let lat2 = other.lat().to_radians();

        let d_lat = lat2 - lat1;
        let d_lon = other.lon().to_radians() - self.lon().to_radians();

        let a = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);
        // Rounding can push `a` a few ULPs past 1 for antipodal pairs.
        let a = a.clamp(0.0, 1.0);

        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        EARTH_RADIUS_KM * c
    }
}

// ── DistanceKind ──────────────────────────────────────────────────────────────

/// Selects one of the two distance algorithms at runtime.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DistanceKind {
    /// [`planar_approx_km`].
    Planar,
    /// [`great_circle_km`].
    #[default]
    GreatCircle,
}

impl DistanceKind {
    /// Distance between `a` and `b` in kilometres using this algorithm.
    #[inline]
    pub fn distance_km(self, a: Option<Point>, b: Option<Point>) -> f64 {
        match self {
            DistanceKind::Planar      => planar_approx_km(a, b),
            DistanceKind::GreatCircle => great_circle_km(a, b),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DistanceKind::Planar      => "planar",
            DistanceKind::GreatCircle => "great_circle",
        }
    }
}

impl std::fmt::Display for DistanceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DistanceKind {
    type Err = PointError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "planar"                       => Ok(DistanceKind::Planar),
            "great_circle" | "haversine"   => Ok(DistanceKind::GreatCircle),
            other => Err(PointError::UnknownDistanceKind(other.to_owned())),
        }
    }
}
