pub use crate::{COORD_EPSILON, EARTH_RADIUS};

// Re-export key components
pub use crate::error::Error;
pub use crate::geometry::LatLng;
pub use crate::geometry::path::{
    contains_location, is_location_on_edge, is_location_on_path, location_index_on_edge_or_path,
    location_index_on_path, location_step_index,
};
pub use crate::geometry::spherical::{
    area, distance_between, heading, interpolate, length, offset, offset_origin, signed_area,
};
pub use crate::loading::{parse_directions_response, parse_route, parse_routes};
pub use crate::polyline::{decode, encode};

// Core model types
pub use crate::model::{
    IntValue, LatLngBounds, Route, RouteLeg, RouteStep, TimeValue, TransitAgency, TransitDetails,
    TransitLine, TransitStop, TransitVehicle, TravelMode,
};
