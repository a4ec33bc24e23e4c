//! Shared trigonometric helpers for the spherical and path modules.
//!
//! Everything here works in radians; degree conversion happens at the
//! public API boundary.

/// Haversine of an angle: `sin^2(x / 2)`.
pub(crate) fn hav(x: f64) -> f64 {
    let sin_half = (x * 0.5).sin();
    sin_half * sin_half
}

/// Haversine of the central angle between two points given their
/// latitudes and longitude difference.
pub(crate) fn hav_distance(lat1: f64, lat2: f64, d_lng: f64) -> f64 {
    hav(lat1 - lat2) + hav(d_lng) * lat1.cos() * lat2.cos()
}

/// Sine of an angle from its haversine, valid for angles in `[0, pi]`.
pub(crate) fn sin_from_hav(h: f64) -> f64 {
    2.0 * (h * (1.0 - h)).max(0.0).sqrt()
}

/// Haversine of an angle from its sine, for angles in `[0, pi/2]`.
pub(crate) fn hav_from_sin(x: f64) -> f64 {
    let x2 = x * x;
    x2 / (1.0 + (1.0 - x2).max(0.0).sqrt()) * 0.5
}

/// Sine of the sum of two angles given their haversines.
pub(crate) fn sin_sum_from_hav(x: f64, y: f64) -> f64 {
    let a = (x * (1.0 - x)).max(0.0).sqrt();
    let b = (y * (1.0 - y)).max(0.0).sqrt();
    2.0 * (a + b - 2.0 * (a * y + b * x))
}

/// Wraps `n` into `[min, max)`.
pub(crate) fn wrap(n: f64, min: f64, max: f64) -> f64 {
    if n >= min && n < max {
        n
    } else {
        (n - min).rem_euclid(max - min) + min
    }
}

/// Latitude to mercator Y, unscaled.
pub(crate) fn mercator(lat: f64) -> f64 {
    (lat * 0.5 + std::f64::consts::FRAC_PI_4).tan().ln()
}

/// Mercator Y to latitude.
pub(crate) fn inverse_mercator(y: f64) -> f64 {
    2.0 * y.exp().atan() - std::f64::consts::FRAC_PI_2
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn mercator_round_trip() {
        for lat_deg in [-75.0, -10.0, 0.0, 33.3, 89.0] {
            let lat = f64::to_radians(lat_deg);
            assert_relative_eq!(inverse_mercator(mercator(lat)), lat, epsilon = 1e-12);
        }
    }

    #[test]
    fn wrap_into_longitude_range() {
        use std::f64::consts::PI;
        assert_relative_eq!(wrap(3.0 * PI, -PI, PI), -PI);
        assert_relative_eq!(wrap(-1.5 * PI, -PI, PI), 0.5 * PI);
        assert_relative_eq!(wrap(0.25, -PI, PI), 0.25);
    }

    #[test]
    fn hav_and_sin_agree() {
        for x in [0.0, 0.1, 0.5, 1.0, 2.0] {
            assert_relative_eq!(sin_from_hav(hav(x)), x.sin().abs(), epsilon = 1e-12);
        }
    }
}
