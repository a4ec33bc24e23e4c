//! Great-circle math on the spherical earth model.
//!
//! All functions take and return degrees at the boundary and work in
//! radians internally. Distances are meters on a sphere of
//! [`EARTH_RADIUS`].

use itertools::Itertools;

use super::math::{hav_distance, wrap};
use super::{EARTH_RADIUS, LatLng};

/// Central angle between two points, in radians.
fn angle_between(from: LatLng, to: LatLng) -> f64 {
    let h = hav_distance(
        from.latitude.to_radians(),
        to.latitude.to_radians(),
        (from.longitude - to.longitude).to_radians(),
    );
    2.0 * h.sqrt().asin()
}

/// Great-circle distance between two points in meters.
#[must_use]
pub fn distance_between(from: LatLng, to: LatLng) -> f64 {
    angle_between(from, to) * EARTH_RADIUS
}

/// Initial bearing of the great-circle path from `from` to `to`,
/// in degrees clockwise from north, normalized to `[0, 360)`.
#[must_use]
pub fn heading(from: LatLng, to: LatLng) -> f64 {
    let from_lat = from.latitude.to_radians();
    let to_lat = to.latitude.to_radians();
    let d_lng = (to.longitude - from.longitude).to_radians();

    let heading = f64::atan2(
        d_lng.sin() * to_lat.cos(),
        from_lat.cos() * to_lat.sin() - from_lat.sin() * to_lat.cos() * d_lng.cos(),
    );
    heading.to_degrees().rem_euclid(360.0)
}

/// Length of a path in meters, the sum of consecutive great-circle
/// distances. Paths with fewer than two points have length 0.
#[must_use]
pub fn length(path: &[LatLng]) -> f64 {
    path.iter()
        .tuple_windows()
        .map(|(&a, &b)| distance_between(a, b))
        .sum()
}

/// Signed area of a closed polygon in square meters.
///
/// The polygon is implicitly closed. The sign encodes winding order:
/// counter-clockwise is positive. Fewer than three points yield 0.
#[must_use]
pub fn signed_area(path: &[LatLng]) -> f64 {
    if path.len() < 3 {
        return 0.0;
    }
    let prev = path[path.len() - 1];
    let mut prev_tan_lat = ((std::f64::consts::FRAC_PI_2 - prev.latitude.to_radians()) / 2.0).tan();
    let mut prev_lng = prev.longitude.to_radians();

    let mut total = 0.0;
    for point in path {
        let tan_lat = ((std::f64::consts::FRAC_PI_2 - point.latitude.to_radians()) / 2.0).tan();
        let lng = point.longitude.to_radians();
        total += polar_triangle_area(tan_lat, lng, prev_tan_lat, prev_lng);
        prev_tan_lat = tan_lat;
        prev_lng = lng;
    }
    total * EARTH_RADIUS * EARTH_RADIUS
}

/// Area of the spherical triangle formed by two points and the north
/// pole, given the tangents of half their colatitudes.
fn polar_triangle_area(tan1: f64, lng1: f64, tan2: f64, lng2: f64) -> f64 {
    let delta_lng = lng1 - lng2;
    let t = tan1 * tan2;
    2.0 * f64::atan2(t * delta_lng.sin(), 1.0 + t * delta_lng.cos())
}

/// Absolute area of a closed polygon in square meters.
#[must_use]
pub fn area(path: &[LatLng]) -> f64 {
    signed_area(path).abs()
}

/// Destination point at `distance_m` meters from `from` along the
/// great circle with the given initial `heading_deg`.
#[must_use]
pub fn offset(from: LatLng, distance_m: f64, heading_deg: f64) -> LatLng {
    let distance = distance_m / EARTH_RADIUS;
    let heading = heading_deg.to_radians();
    let from_lat = from.latitude.to_radians();
    let from_lng = from.longitude.to_radians();

    let cos_distance = distance.cos();
    let sin_distance = distance.sin();
    let sin_from_lat = from_lat.sin();
    let cos_from_lat = from_lat.cos();

    let sin_lat = cos_distance * sin_from_lat + sin_distance * cos_from_lat * heading.cos();
    let d_lng = f64::atan2(
        sin_distance * cos_from_lat * heading.sin(),
        cos_distance - sin_from_lat * sin_lat,
    );
    LatLng::new(
        sin_lat.asin().to_degrees(),
        wrap((from_lng + d_lng).to_degrees(), -180.0, 180.0),
    )
}

/// Origin point such that `offset(origin, distance_m, heading_deg)`
/// lands on `to`. Returns `None` when no such origin exists in
/// latitude/longitude space (antipodal degeneracies).
#[must_use]
pub fn offset_origin(to: LatLng, distance_m: f64, heading_deg: f64) -> Option<LatLng> {
    let distance = distance_m / EARTH_RADIUS;
    let heading = heading_deg.to_radians();

    // Solves the destination-point equations backwards for the origin
    // latitude; the quadratic may have zero, one or two solutions.
    let n1 = distance.cos();
    let n2 = distance.sin() * heading.cos();
    let n3 = distance.sin() * heading.sin();
    let n4 = to.latitude.to_radians().sin();
    let n12 = n1 * n1;

    let discriminant = n2 * n2 * n12 + n12 * n12 - n12 * n4 * n4;
    if discriminant < 0.0 {
        return None;
    }

    let mut b = (n2 * n4 + discriminant.sqrt()) / (n12 + n2 * n2);
    let a = (n4 - n2 * b) / n1;
    let mut from_lat = f64::atan2(a, b);
    if !(-std::f64::consts::FRAC_PI_2..=std::f64::consts::FRAC_PI_2).contains(&from_lat) {
        b = (n2 * n4 - discriminant.sqrt()) / (n12 + n2 * n2);
        from_lat = f64::atan2(a, b);
    }
    if !(-std::f64::consts::FRAC_PI_2..=std::f64::consts::FRAC_PI_2).contains(&from_lat) {
        return None;
    }

    let from_lng = to.longitude.to_radians()
        - f64::atan2(n3, n1 * from_lat.cos() - n2 * from_lat.sin());
    Some(LatLng::new(
        from_lat.to_degrees(),
        wrap(from_lng.to_degrees(), -180.0, 180.0),
    ))
}

/// Point at the given fraction of the great-circle arc from `from` to
/// `to`. Fraction 0 is `from`, fraction 1 is `to`; fractions outside
/// `[0, 1]` extrapolate along the same arc.
#[must_use]
pub fn interpolate(from: LatLng, to: LatLng, fraction: f64) -> LatLng {
    let from_lat = from.latitude.to_radians();
    let from_lng = from.longitude.to_radians();
    let to_lat = to.latitude.to_radians();
    let to_lng = to.longitude.to_radians();

    let angle = angle_between(from, to);
    let sin_angle = angle.sin();
    if sin_angle < 1e-6 {
        // Near-coincident or antipodal endpoints, fall back to linear.
        return LatLng::new(
            from.latitude + fraction * (to.latitude - from.latitude),
            from.longitude + fraction * (to.longitude - from.longitude),
        );
    }

    let a = ((1.0 - fraction) * angle).sin() / sin_angle;
    let b = (fraction * angle).sin() / sin_angle;

    // Slerp through 3D cartesian space.
    let cos_from_lat = from_lat.cos();
    let cos_to_lat = to_lat.cos();
    let x = a * cos_from_lat * from_lng.cos() + b * cos_to_lat * to_lng.cos();
    let y = a * cos_from_lat * from_lng.sin() + b * cos_to_lat * to_lng.sin();
    let z = a * from_lat.sin() + b * to_lat.sin();

    let lat = f64::atan2(z, x.hypot(y));
    let lng = f64::atan2(y, x);
    LatLng::new(lat.to_degrees(), lng.to_degrees())
}
