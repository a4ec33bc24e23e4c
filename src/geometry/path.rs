//! Containment and projection queries against coordinate paths.
//!
//! A path is an ordered `&[LatLng]` slice. Polygons are implicitly
//! closed (the last point connects back to the first), polylines are
//! open. The `geodesic` flag selects great-circle segments; when it is
//! false, segments are straight lines in mercator space (rhumb lines).
//!
//! "Not found" is `None` for index queries and `false` for boolean
//! queries; a point off the path is an expected outcome, never an
//! error.

use std::f64::consts::{FRAC_PI_2, PI};

use super::math::{hav, hav_distance, hav_from_sin, inverse_mercator, mercator, sin_from_hav,
                  sin_sum_from_hav, wrap};
use super::{EARTH_RADIUS, LatLng};
use crate::model::RouteStep;

/// Tests whether `point` lies inside the closed `polygon`.
///
/// Crossing-count test. An empty polygon contains nothing; a point
/// exactly on a vertex is inside.
#[must_use]
pub fn contains_location(point: LatLng, polygon: &[LatLng], geodesic: bool) -> bool {
    let size = polygon.len();
    if size == 0 {
        return false;
    }
    let lat3 = point.latitude.to_radians();
    let lng3 = point.longitude.to_radians();
    let prev = polygon[size - 1];
    let mut lat1 = prev.latitude.to_radians();
    let mut lng1 = prev.longitude.to_radians();

    let mut crossings = 0usize;
    for point2 in polygon {
        let d_lng3 = wrap(lng3 - lng1, -PI, PI);
        if lat3 == lat1 && d_lng3 == 0.0 {
            return true;
        }
        let lat2 = point2.latitude.to_radians();
        let lng2 = point2.longitude.to_radians();
        // Longitudes offset by -lng1 so the segment starts at x = 0.
        if intersects(lat1, lat2, wrap(lng2 - lng1, -PI, PI), lat3, d_lng3, geodesic) {
            crossings += 1;
        }
        lat1 = lat2;
        lng1 = lng2;
    }
    crossings % 2 == 1
}

/// Whether the upward ray from `(lat3, lng3)` crosses the segment from
/// `(lat1, 0)` to `(lat2, lng2)`. Longitudes are relative to the
/// segment start.
fn intersects(lat1: f64, lat2: f64, lng2: f64, lat3: f64, lng3: f64, geodesic: bool) -> bool {
    // Both segment ends on the same side of the point's meridian.
    if (lng3 >= 0.0 && lng3 >= lng2) || (lng3 < 0.0 && lng3 < lng2) {
        return false;
    }
    // Point is the south pole.
    if lat3 <= -FRAC_PI_2 {
        return false;
    }
    // Any segment end is a pole.
    if lat1 <= -FRAC_PI_2 || lat2 <= -FRAC_PI_2 || lat1 >= FRAC_PI_2 || lat2 >= FRAC_PI_2 {
        return false;
    }
    if lng2 <= -PI {
        return false;
    }
    let linear_lat = (lat1 * (lng2 - lng3) + lat2 * lng3) / lng2;
    // Northern hemisphere with the point under the chord.
    if lat1 >= 0.0 && lat2 >= 0.0 && lat3 < linear_lat {
        return false;
    }
    // Southern hemisphere with the point above the chord.
    if lat1 <= 0.0 && lat2 <= 0.0 && lat3 >= linear_lat {
        return true;
    }
    // Point is the north pole.
    if lat3 >= FRAC_PI_2 {
        return true;
    }
    // Compare against the latitude of the segment at the point's
    // meridian, great-circle or rhumb depending on the mode.
    if geodesic {
        lat3.tan() >= tan_lat_great_circle(lat1, lat2, lng2, lng3)
    } else {
        mercator(lat3) >= mercator_lat_rhumb(lat1, lat2, lng2, lng3)
    }
}

/// Tangent of the latitude where the great circle through
/// `(lat1, 0)` and `(lat2, lng2)` crosses longitude `lng3`.
fn tan_lat_great_circle(lat1: f64, lat2: f64, lng2: f64, lng3: f64) -> f64 {
    (lat1.tan() * (lng2 - lng3).sin() + lat2.tan() * lng3.sin()) / lng2.sin()
}

/// Mercator latitude where the rhumb line through `(lat1, 0)` and
/// `(lat2, lng2)` crosses longitude `lng3`.
fn mercator_lat_rhumb(lat1: f64, lat2: f64, lng2: f64, lng3: f64) -> f64 {
    (mercator(lat1) * (lng2 - lng3) + mercator(lat2) * lng3) / lng2
}

/// Tests whether `point` lies within `tolerance_m` meters of any edge
/// of the closed `polygon`.
#[must_use]
pub fn is_location_on_edge(
    point: LatLng,
    polygon: &[LatLng],
    geodesic: bool,
    tolerance_m: f64,
) -> bool {
    location_index_on_edge_or_path(point, polygon, true, geodesic, tolerance_m).is_some()
}

/// Tests whether `point` lies within `tolerance_m` meters of the open
/// polyline `path`.
#[must_use]
pub fn is_location_on_path(
    point: LatLng,
    path: &[LatLng],
    geodesic: bool,
    tolerance_m: f64,
) -> bool {
    location_index_on_edge_or_path(point, path, false, geodesic, tolerance_m).is_some()
}

/// Index of the segment of the open polyline `path` closest to `point`
/// within `tolerance_m`. Segment `i` joins `path[i]` and `path[i + 1]`;
/// the first (lowest-index) segment within tolerance wins. `None` when
/// no segment is within tolerance.
#[must_use]
pub fn location_index_on_path(
    point: LatLng,
    path: &[LatLng],
    geodesic: bool,
    tolerance_m: f64,
) -> Option<usize> {
    location_index_on_edge_or_path(point, path, false, geodesic, tolerance_m)
}

/// The unified segment query behind the boolean edge/path tests.
///
/// With `closed` the poly is treated as a polygon whose closing edge
/// (last point back to first) reports index 0; without it the poly is
/// an open polyline. Returns the first segment index within
/// `tolerance_m` meters of `point`, or `None`.
#[must_use]
pub fn location_index_on_edge_or_path(
    point: LatLng,
    poly: &[LatLng],
    closed: bool,
    geodesic: bool,
    tolerance_m: f64,
) -> Option<usize> {
    let size = poly.len();
    if size == 0 {
        return None;
    }
    let tolerance = tolerance_m / EARTH_RADIUS;
    let hav_tolerance = hav(tolerance);
    let lat3 = point.latitude.to_radians();
    let lng3 = point.longitude.to_radians();
    let prev = if closed { poly[size - 1] } else { poly[0] };
    let mut lat1 = prev.latitude.to_radians();
    let mut lng1 = prev.longitude.to_radians();

    if geodesic {
        for (idx, point2) in poly.iter().enumerate() {
            let lat2 = point2.latitude.to_radians();
            let lng2 = point2.longitude.to_radians();
            if is_on_segment_great_circle(lat1, lng1, lat2, lng2, lat3, lng3, hav_tolerance) {
                return Some(idx.saturating_sub(1));
            }
            lat1 = lat2;
            lng1 = lng2;
        }
    } else {
        // Project to mercator space where the rhumb segment is a
        // straight line, then measure the geodesic distance to the
        // closest point of the projected segment.
        let min_acceptable = lat3 - tolerance;
        let max_acceptable = lat3 + tolerance;
        let mut y1 = mercator(lat1);
        let y3 = mercator(lat3);
        for (idx, point2) in poly.iter().enumerate() {
            let lat2 = point2.latitude.to_radians();
            let y2 = mercator(lat2);
            let lng2 = point2.longitude.to_radians();
            if lat1.max(lat2) >= min_acceptable && lat1.min(lat2) <= max_acceptable {
                // Longitudes offset by -lng1; the implicit x1 is 0.
                let x2 = wrap(lng2 - lng1, -PI, PI);
                let x3_base = wrap(lng3 - lng1, -PI, PI);
                // The +/- 2*pi wrappings matter for polys spanning
                // 360 degrees of longitude.
                for x3 in [x3_base, x3_base + 2.0 * PI, x3_base - 2.0 * PI] {
                    let dy = y2 - y1;
                    let len2 = x2 * x2 + dy * dy;
                    // Degenerate segments collapse to the start point.
                    let t = if len2 <= 0.0 {
                        0.0
                    } else {
                        ((x3 * x2 + (y3 - y1) * dy) / len2).clamp(0.0, 1.0)
                    };
                    let x_closest = t * x2;
                    let y_closest = y1 + t * dy;
                    let lat_closest = inverse_mercator(y_closest);
                    let hav_dist = hav_distance(lat3, lat_closest, x3 - x_closest);
                    if hav_dist < hav_tolerance {
                        return Some(idx.saturating_sub(1));
                    }
                }
            }
            lat1 = lat2;
            lng1 = lng2;
            y1 = y2;
        }
    }
    None
}

/// Whether the point `(lat3, lng3)` is within the haversine tolerance
/// of the great-circle segment from `(lat1, lng1)` to `(lat2, lng2)`.
fn is_on_segment_great_circle(
    lat1: f64,
    lng1: f64,
    lat2: f64,
    lng2: f64,
    lat3: f64,
    lng3: f64,
    hav_tolerance: f64,
) -> bool {
    // Endpoint checks double as the degenerate-segment fallback.
    let hav_dist13 = hav_distance(lat1, lat3, lng1 - lng3);
    if hav_dist13 <= hav_tolerance {
        return true;
    }
    let hav_dist23 = hav_distance(lat2, lat3, lng2 - lng3);
    if hav_dist23 <= hav_tolerance {
        return true;
    }
    let sin_bearing = sin_delta_bearing(lat1, lng1, lat2, lng2, lat3, lng3);
    let sin_dist13 = sin_from_hav(hav_dist13);
    let hav_cross_track = hav_from_sin(sin_dist13 * sin_bearing);
    if hav_cross_track > hav_tolerance {
        return false;
    }
    let hav_dist12 = hav_distance(lat1, lat2, lng1 - lng2);
    let term = hav_dist12 + hav_cross_track * (1.0 - 2.0 * hav_dist12);
    if hav_dist13 > term || hav_dist23 > term {
        return false;
    }
    if hav_dist12 < 0.74 {
        return true;
    }
    let cos_cross_track = 1.0 - 2.0 * hav_cross_track;
    let hav_along_track13 = (hav_dist13 - hav_cross_track) / cos_cross_track;
    let hav_along_track23 = (hav_dist23 - hav_cross_track) / cos_cross_track;
    sin_sum_from_hav(hav_along_track13, hav_along_track23) > 0.0
}

/// Sine of the difference between the bearing from point 1 to point 3
/// and the bearing from point 1 to point 2.
fn sin_delta_bearing(lat1: f64, lng1: f64, lat2: f64, lng2: f64, lat3: f64, lng3: f64) -> f64 {
    let sin_lat1 = lat1.sin();
    let cos_lat2 = lat2.cos();
    let cos_lat3 = lat3.cos();
    let lat31 = lat3 - lat1;
    let lng31 = lng3 - lng1;
    let lat21 = lat2 - lat1;
    let lng21 = lng2 - lng1;
    let a = lng31.sin() * cos_lat3;
    let c = lng21.sin() * cos_lat2;
    let b = lat31.sin() + 2.0 * sin_lat1 * cos_lat3 * hav(lng31);
    let d = lat21.sin() + 2.0 * sin_lat1 * cos_lat2 * hav(lng21);
    let denom = (a * a + b * b) * (c * c + d * d);
    if denom <= 0.0 {
        1.0
    } else {
        (a * d - b * c) / denom.sqrt()
    }
}

/// Index of the first route step whose decoded path contains `point`
/// within `tolerance_m` meters. Step paths are short urban segments,
/// the edge test runs in the non-geodesic mode. `None` when no step
/// matches.
#[must_use]
pub fn location_step_index(point: LatLng, steps: &[RouteStep], tolerance_m: f64) -> Option<usize> {
    steps
        .iter()
        .position(|step| is_location_on_path(point, &step.path, false, tolerance_m))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::spherical;
    use crate::model::{IntValue, RouteStep};

    fn square() -> Vec<LatLng> {
        vec![
            LatLng::new(0.0, 0.0),
            LatLng::new(0.0, 1.0),
            LatLng::new(1.0, 1.0),
            LatLng::new(1.0, 0.0),
        ]
    }

    #[test]
    fn contains_inside_and_outside() {
        for geodesic in [false, true] {
            assert!(contains_location(LatLng::new(0.5, 0.5), &square(), geodesic));
            assert!(!contains_location(LatLng::new(5.0, 5.0), &square(), geodesic));
            assert!(!contains_location(LatLng::new(-0.5, 0.5), &square(), geodesic));
        }
    }

    #[test]
    fn contains_vertex_and_empty() {
        assert!(contains_location(LatLng::new(0.0, 0.0), &square(), true));
        assert!(!contains_location(LatLng::new(0.5, 0.5), &[], true));
    }

    #[test]
    fn on_edge_includes_closing_edge() {
        // Midpoint of the closing edge from (1,0) back to (0,0).
        let p = LatLng::new(0.5, 0.0);
        assert!(is_location_on_edge(p, &square(), false, 100.0));
        assert!(!is_location_on_path(p, &square(), false, 100.0));
        assert_eq!(
            location_index_on_edge_or_path(p, &square(), true, false, 100.0),
            Some(0)
        );
    }

    #[test]
    fn on_path_within_tolerance() {
        let path = [
            LatLng::new(0.0, 0.0),
            LatLng::new(0.0, 1.0),
            LatLng::new(0.0, 2.0),
        ];
        // ~550 m north of the first segment.
        let near = LatLng::new(0.005, 0.5);
        assert!(is_location_on_path(near, &path, false, 1_000.0));
        assert!(is_location_on_path(near, &path, true, 1_000.0));
        assert!(!is_location_on_path(near, &path, false, 100.0));
    }

    #[test]
    fn path_index_scenario() {
        let path = [
            LatLng::new(0.0, 0.0),
            LatLng::new(0.0, 1.0),
            LatLng::new(0.0, 2.0),
        ];
        let p = LatLng::new(0.0, 0.5);
        assert_eq!(location_index_on_path(p, &path, false, 1_000.0), Some(0));
        assert_eq!(
            location_index_on_path(LatLng::new(0.0, 1.5), &path, false, 1_000.0),
            Some(1)
        );
        assert_eq!(
            location_index_on_path(LatLng::new(1.0, 0.5), &path, false, 1_000.0),
            None
        );
    }

    #[test]
    fn path_index_at_vertices() {
        let path: Vec<LatLng> = (0..4).map(|i| LatLng::new(0.0, f64::from(i))).collect();
        // First matching segment wins: vertex k closes segment k - 1.
        assert_eq!(location_index_on_path(path[0], &path, false, 10.0), Some(0));
        assert_eq!(location_index_on_path(path[2], &path, false, 10.0), Some(1));
        assert_eq!(location_index_on_path(path[3], &path, false, 10.0), Some(2));
    }

    #[test]
    fn degenerate_segment_falls_back_to_point_distance() {
        let path = [LatLng::new(10.0, 10.0), LatLng::new(10.0, 10.0)];
        let near = spherical::offset(path[0], 50.0, 45.0);
        for geodesic in [false, true] {
            assert!(is_location_on_path(near, &path, geodesic, 100.0));
            assert!(!is_location_on_path(near, &path, geodesic, 10.0));
        }
    }

    #[test]
    fn empty_poly_yields_none() {
        let p = LatLng::new(0.0, 0.0);
        assert_eq!(location_index_on_path(p, &[], false, 1_000.0), None);
        assert!(!is_location_on_edge(p, &[], true, 1_000.0));
    }

    fn step_with_path(path: Vec<LatLng>) -> RouteStep {
        RouteStep {
            travel_mode: None,
            instructions_html: String::new(),
            start_location: path[0],
            end_location: path[path.len() - 1],
            duration: IntValue::new(60, "1 min"),
            distance: IntValue::new(100, "0.1 km"),
            path,
            maneuver: None,
            steps: Vec::new(),
            transit: None,
        }
    }

    #[test]
    fn step_index_first_match_wins() {
        let steps = vec![
            step_with_path(vec![LatLng::new(0.0, 0.0), LatLng::new(0.0, 1.0)]),
            step_with_path(vec![LatLng::new(0.0, 1.0), LatLng::new(0.0, 2.0)]),
        ];
        assert_eq!(
            location_step_index(LatLng::new(0.0, 0.5), &steps, 1_000.0),
            Some(0)
        );
        assert_eq!(
            location_step_index(LatLng::new(0.0, 1.5), &steps, 1_000.0),
            Some(1)
        );
        // Shared vertex lies on both steps, the first one wins.
        assert_eq!(
            location_step_index(LatLng::new(0.0, 1.0), &steps, 1_000.0),
            Some(0)
        );
        assert_eq!(
            location_step_index(LatLng::new(5.0, 5.0), &steps, 1_000.0),
            None
        );
    }
}
