use std::fmt;

use serde::{Deserialize, Serialize};

use super::transit::TransitDetails;
use super::types::{IntValue, LatLngBounds, TravelMode};
use crate::geometry::LatLng;

/// One atomic maneuver of a leg.
///
/// `path` is the decoded coordinate sequence of the step's polyline;
/// the encoded string form is a wire-format detail and is not kept.
/// Multi-modal steps (a transit ride reached on foot, say) carry their
/// sub-maneuvers in `steps`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteStep {
    pub travel_mode: Option<TravelMode>,
    pub instructions_html: String,
    pub start_location: LatLng,
    pub end_location: LatLng,
    pub duration: IntValue,
    pub distance: IntValue,
    pub path: Vec<LatLng>,
    pub maneuver: Option<String>,
    pub steps: Vec<RouteStep>,
    pub transit: Option<TransitDetails>,
}

/// One origin-to-destination segment of a route, between consecutive
/// waypoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteLeg {
    pub start_address: String,
    pub end_address: String,
    pub start_location: LatLng,
    pub end_location: LatLng,
    pub duration: IntValue,
    pub distance: IntValue,
    pub steps: Vec<RouteStep>,
}

/// A complete route.
///
/// The address, endpoint and total fields are derived from the legs
/// when the route is built and stored, not recomputed per access.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    pub summary: String,
    pub copyrights: String,
    pub bounds: LatLngBounds,
    pub overview_path: Vec<LatLng>,
    pub legs: Vec<RouteLeg>,
    /// Start address of the first leg, empty when there are no legs.
    pub start_address: String,
    /// End address of the last leg, empty when there are no legs.
    pub end_address: String,
    /// Start location of the first leg.
    pub start_location: Option<LatLng>,
    /// End location of the last leg.
    pub end_location: Option<LatLng>,
    /// Total distance in meters, summed over the legs.
    pub distance: i64,
    /// Total duration in seconds, summed over the legs.
    pub duration: i64,
}

impl Route {
    /// Assembles a route, computing the derived fields from `legs`.
    #[must_use]
    pub fn from_parts(
        summary: String,
        copyrights: String,
        bounds: LatLngBounds,
        overview_path: Vec<LatLng>,
        legs: Vec<RouteLeg>,
    ) -> Self {
        let start_address = legs.first().map(|l| l.start_address.clone()).unwrap_or_default();
        let end_address = legs.last().map(|l| l.end_address.clone()).unwrap_or_default();
        let start_location = legs.first().map(|l| l.start_location);
        let end_location = legs.last().map(|l| l.end_location);
        let distance = legs.iter().map(|l| l.distance.value).sum();
        let duration = legs.iter().map(|l| l.duration.value).sum();
        Self {
            summary,
            copyrights,
            bounds,
            overview_path,
            legs,
            start_address,
            end_address,
            start_location,
            end_location,
            distance,
            duration,
        }
    }

    /// One-line human-readable summary, rendered from the precomputed
    /// derived fields.
    #[must_use]
    pub fn log_string(&self) -> String {
        format!(
            "Route '{}': {} -> {} ({} legs, {} m, {} s)",
            self.summary,
            self.start_address,
            self.end_address,
            self.legs.len(),
            self.distance,
            self.duration
        )
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.log_string())
    }
}
