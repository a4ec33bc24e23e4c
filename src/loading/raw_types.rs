//! Serde mirror of the directions-API response shape.
//!
//! Required fields are plain; anything the wire format may omit is an
//! `Option` or a defaulted collection. Missing a required field fails
//! the enclosing object, and only that object.

use serde::Deserialize;

use super::de::lenient_seq;
use crate::geometry::LatLng;

#[derive(Debug, Deserialize)]
pub(super) struct RawDirectionsResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default, deserialize_with = "lenient_seq")]
    pub routes: Vec<RawRoute>,
}

#[derive(Debug, Deserialize)]
pub(super) struct RawRoute {
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub copyrights: Option<String>,
    pub bounds: RawBounds,
    pub overview_polyline: RawPolyline,
    #[serde(default, deserialize_with = "lenient_seq")]
    pub legs: Vec<RawLeg>,
}

#[derive(Debug, Deserialize)]
pub(super) struct RawBounds {
    pub northeast: LatLng,
    pub southwest: LatLng,
}

#[derive(Debug, Deserialize)]
pub(super) struct RawPolyline {
    pub points: String,
}

#[derive(Debug, Deserialize)]
pub(super) struct RawLeg {
    #[serde(default)]
    pub start_address: Option<String>,
    #[serde(default)]
    pub end_address: Option<String>,
    pub start_location: LatLng,
    pub end_location: LatLng,
    pub duration: RawIntValue,
    pub distance: RawIntValue,
    #[serde(default, deserialize_with = "lenient_seq")]
    pub steps: Vec<RawStep>,
}

#[derive(Debug, Deserialize)]
pub(super) struct RawStep {
    #[serde(default)]
    pub travel_mode: Option<String>,
    #[serde(default)]
    pub html_instructions: Option<String>,
    pub start_location: LatLng,
    pub end_location: LatLng,
    pub duration: RawIntValue,
    pub distance: RawIntValue,
    pub polyline: RawPolyline,
    #[serde(default)]
    pub maneuver: Option<String>,
    #[serde(default, deserialize_with = "lenient_seq")]
    pub steps: Vec<RawStep>,
    #[serde(default)]
    pub transit_details: Option<RawTransitDetails>,
}

#[derive(Debug, Deserialize)]
pub(super) struct RawIntValue {
    pub value: i64,
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct RawTimeValue {
    pub value: i64,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub time_zone: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct RawTransitDetails {
    pub departure_stop: RawTransitStop,
    pub arrival_stop: RawTransitStop,
    pub departure_time: RawTimeValue,
    pub arrival_time: RawTimeValue,
    pub line: RawTransitLine,
    #[serde(default)]
    pub headsign: Option<String>,
    #[serde(default)]
    pub num_stops: u32,
}

#[derive(Debug, Deserialize)]
pub(super) struct RawTransitStop {
    #[serde(default)]
    pub name: Option<String>,
    pub location: LatLng,
}

#[derive(Debug, Deserialize)]
pub(super) struct RawTransitLine {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub short_name: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub text_color: Option<String>,
    #[serde(default)]
    pub vehicle: Option<RawTransitVehicle>,
    #[serde(default, deserialize_with = "lenient_seq")]
    pub agencies: Vec<RawTransitAgency>,
}

#[derive(Debug, Deserialize)]
pub(super) struct RawTransitVehicle {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default, rename = "type")]
    pub vehicle_type: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct RawTransitAgency {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}
