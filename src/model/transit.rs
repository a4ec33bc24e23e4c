//! Transit details attached to transit-mode route steps.

use serde::{Deserialize, Serialize};

use super::types::TimeValue;
use crate::geometry::LatLng;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransitDetails {
    pub departure_stop: TransitStop,
    pub arrival_stop: TransitStop,
    pub departure_time: TimeValue,
    pub arrival_time: TimeValue,
    pub line: TransitLine,
    pub headsign: String,
    pub num_stops: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransitStop {
    pub name: String,
    pub location: LatLng,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransitLine {
    pub name: String,
    pub short_name: String,
    pub color: String,
    pub text_color: String,
    pub vehicle: Option<TransitVehicle>,
    pub agencies: Vec<TransitAgency>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransitVehicle {
    pub name: String,
    pub icon: String,
    pub vehicle_type: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransitAgency {
    pub name: String,
    pub phone: String,
    pub url: String,
}
