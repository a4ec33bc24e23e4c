//! Spherical geometry over latitude/longitude pairs
//!
//! Contains the coordinate primitive plus great-circle math (`spherical`)
//! and polyline/polygon containment queries (`path`).

mod math;
pub mod path;
pub mod spherical;

use serde::{Deserialize, Serialize};

/// Mean earth radius in meters, spherical approximation.
pub const EARTH_RADIUS: f64 = 6_371_009.0;

/// Tolerance used by [`LatLng::approx_eq`], in degrees.
///
/// 1e-7 degrees is roughly a centimeter at the equator, well below the
/// 1e-5 degree resolution of encoded polylines.
pub const COORD_EPSILON: f64 = 1e-7;

/// A geographic coordinate in degrees.
///
/// Latitude is expected in `[-90, 90]` and longitude in `[-180, 180]`;
/// out-of-range values are accepted as-is by the math functions, callers
/// should normalize before comparing coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    #[serde(rename = "lat")]
    pub latitude: f64,
    #[serde(rename = "lng")]
    pub longitude: f64,
}

impl LatLng {
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Tolerance-based equality with the fixed [`COORD_EPSILON`].
    #[must_use]
    pub fn approx_eq(&self, other: &Self) -> bool {
        self.approx_eq_within(other, COORD_EPSILON)
    }

    /// Tolerance-based equality with a caller-supplied epsilon in degrees.
    #[must_use]
    pub fn approx_eq_within(&self, other: &Self, epsilon: f64) -> bool {
        (self.latitude - other.latitude).abs() < epsilon
            && (self.longitude - other.longitude).abs() < epsilon
    }
}

impl From<LatLng> for geo::Point<f64> {
    fn from(value: LatLng) -> Self {
        Self::new(value.longitude, value.latitude)
    }
}

impl From<geo::Point<f64>> for LatLng {
    fn from(value: geo::Point<f64>) -> Self {
        Self::new(value.y(), value.x())
    }
}

impl From<LatLng> for geo::Coord<f64> {
    fn from(value: LatLng) -> Self {
        Self {
            x: value.longitude,
            y: value.latitude,
        }
    }
}

/// Builds a `geo::LineString` from a coordinate slice, longitude-first
/// as GeoJSON expects.
#[must_use]
pub fn line_string(path: &[LatLng]) -> geo::LineString<f64> {
    geo::LineString::new(path.iter().map(|&p| p.into()).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn approx_eq_uses_fixed_epsilon() {
        let a = LatLng::new(40.0, -88.0);
        let b = LatLng::new(40.0 + 5e-8, -88.0 - 5e-8);
        let c = LatLng::new(40.0 + 2e-7, -88.0);
        assert!(a.approx_eq(&b));
        assert!(!a.approx_eq(&c));
        assert!(a.approx_eq_within(&c, 1e-6));
    }

    #[test]
    fn geo_point_round_trip() {
        let p = LatLng::new(40.11, -88.24);
        let gp: geo::Point<f64> = p.into();
        assert_eq!(gp.x(), -88.24);
        assert_eq!(gp.y(), 40.11);
        assert_eq!(LatLng::from(gp), p);
    }
}
