use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::geometry::LatLng;

/// Axis-aligned latitude/longitude box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLngBounds {
    pub northeast: LatLng,
    pub southwest: LatLng,
}

impl LatLngBounds {
    #[must_use]
    pub const fn new(northeast: LatLng, southwest: LatLng) -> Self {
        Self {
            northeast,
            southwest,
        }
    }

    /// Whether the box contains `point`.
    ///
    /// A box whose southwest longitude exceeds its northeast longitude
    /// crosses the antimeridian and is treated as wrapping through
    /// ±180 degrees.
    #[must_use]
    pub fn contains(&self, point: LatLng) -> bool {
        if point.latitude < self.southwest.latitude || point.latitude > self.northeast.latitude {
            return false;
        }
        if self.southwest.longitude <= self.northeast.longitude {
            (self.southwest.longitude..=self.northeast.longitude).contains(&point.longitude)
        } else {
            point.longitude >= self.southwest.longitude
                || point.longitude <= self.northeast.longitude
        }
    }
}

/// Machine value paired with its human-readable label, for example a
/// distance in meters with its "2.4 km" display text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntValue {
    pub value: i64,
    pub text: String,
}

impl IntValue {
    #[must_use]
    pub fn new(value: i64, text: impl Into<String>) -> Self {
        Self {
            value,
            text: text.into(),
        }
    }
}

/// An [`IntValue`] whose machine value is a unix timestamp, paired
/// with the IANA timezone name the label was rendered in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeValue {
    pub value: IntValue,
    pub time_zone: String,
}

impl TimeValue {
    /// The timestamp as a UTC datetime, `None` when it does not fit
    /// the chrono range.
    #[must_use]
    pub fn date_time(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.value.value, 0)
    }
}

/// Travel mode of a route step.
///
/// The lowercase string forms `walking`, `bicycling`, `driving` and
/// `transit` are part of the public contract; parsing accepts any
/// casing since the wire format upper-cases them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TravelMode {
    Walking,
    Bicycling,
    Driving,
    Transit,
}

impl TravelMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Walking => "walking",
            Self::Bicycling => "bicycling",
            Self::Driving => "driving",
            Self::Transit => "transit",
        }
    }
}

impl fmt::Display for TravelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TravelMode {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("walking") {
            Ok(Self::Walking)
        } else if s.eq_ignore_ascii_case("bicycling") {
            Ok(Self::Bicycling)
        } else if s.eq_ignore_ascii_case("driving") {
            Ok(Self::Driving)
        } else if s.eq_ignore_ascii_case("transit") {
            Ok(Self::Transit)
        } else {
            Err(crate::Error::InvalidData(format!(
                "unknown travel mode '{s}'"
            )))
        }
    }
}
