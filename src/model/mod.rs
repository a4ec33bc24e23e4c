//! Route data model
//!
//! Immutable value tree built once by the loader from a directions
//! response: a route owns its legs, legs own their steps, steps own
//! their transit details. Nothing is mutated after construction and
//! nothing holds back-references.

mod route;
mod to_geojson;
mod transit;
mod types;

pub use route::{Route, RouteLeg, RouteStep};
pub use transit::{TransitAgency, TransitDetails, TransitLine, TransitStop, TransitVehicle};
pub use types::{IntValue, LatLngBounds, TimeValue, TravelMode};
