//! Raw wire objects to model values.
//!
//! Conversion of a single object is strict and returns the first
//! failure (a bad embedded polyline, most commonly). Conversion of a
//! list drops failed elements with a warning, so one defective route
//! or step does not take the whole response down.

use log::warn;

use super::raw_types::{
    RawDirectionsResponse, RawIntValue, RawLeg, RawRoute, RawStep, RawTimeValue,
    RawTransitDetails, RawTransitLine, RawTransitStop, RawTransitVehicle,
};
use crate::error::Error;
use crate::model::{
    IntValue, LatLngBounds, Route, RouteLeg, RouteStep, TimeValue, TransitAgency, TransitDetails,
    TransitLine, TransitStop, TransitVehicle, TravelMode,
};
use crate::polyline;

/// Parses a full directions response.
///
/// The envelope `status` must be `OK` (case-insensitive); any other
/// status fails with [`Error::Directions`] carrying the status and the
/// server's `error_message`. On success the `routes` array is built
/// leniently.
pub fn parse_directions_response(json: &str) -> Result<Vec<Route>, Error> {
    let raw: RawDirectionsResponse = serde_json::from_str(json)?;
    let status = raw.status.unwrap_or_default();
    if !status.eq_ignore_ascii_case("OK") {
        return Err(Error::Directions {
            status,
            message: raw.error_message.unwrap_or_default(),
        });
    }
    Ok(process_routes(raw.routes))
}

/// Parses a single route object, strictly: any structurally required
/// field that is missing or malformed fails the route.
pub fn parse_route(value: serde_json::Value) -> Result<Route, Error> {
    let raw: RawRoute = serde_json::from_value(value)?;
    process_route(raw)
}

/// Parses a raw `routes` array leniently: malformed entries are
/// skipped with a warning, the rest survive in source order.
pub fn parse_routes(value: serde_json::Value) -> Result<Vec<Route>, Error> {
    let values: Vec<serde_json::Value> = serde_json::from_value(value)?;
    Ok(process_routes(
        values
            .into_iter()
            .filter_map(|v| match serde_json::from_value::<RawRoute>(v) {
                Ok(raw) => Some(raw),
                Err(e) => {
                    warn!("Skipping malformed route: {e}");
                    None
                }
            })
            .collect(),
    ))
}

fn process_routes(raw_routes: Vec<RawRoute>) -> Vec<Route> {
    raw_routes
        .into_iter()
        .filter_map(|raw| match process_route(raw) {
            Ok(route) => Some(route),
            Err(e) => {
                warn!("Skipping route: {e}");
                None
            }
        })
        .collect()
}

fn process_route(raw: RawRoute) -> Result<Route, Error> {
    let overview_path = polyline::decode(&raw.overview_polyline.points)?;
    let legs = raw
        .legs
        .into_iter()
        .filter_map(|leg| match process_leg(leg) {
            Ok(leg) => Some(leg),
            Err(e) => {
                warn!("Skipping route leg: {e}");
                None
            }
        })
        .collect();
    Ok(Route::from_parts(
        raw.summary.unwrap_or_default(),
        raw.copyrights.unwrap_or_default(),
        LatLngBounds::new(raw.bounds.northeast, raw.bounds.southwest),
        overview_path,
        legs,
    ))
}

fn process_leg(raw: RawLeg) -> Result<RouteLeg, Error> {
    let steps = raw
        .steps
        .into_iter()
        .filter_map(|step| match process_step(step) {
            Ok(step) => Some(step),
            Err(e) => {
                warn!("Skipping route step: {e}");
                None
            }
        })
        .collect();
    Ok(RouteLeg {
        start_address: raw.start_address.unwrap_or_default(),
        end_address: raw.end_address.unwrap_or_default(),
        start_location: raw.start_location,
        end_location: raw.end_location,
        duration: process_int_value(raw.duration),
        distance: process_int_value(raw.distance),
        steps,
    })
}

fn process_step(raw: RawStep) -> Result<RouteStep, Error> {
    let path = polyline::decode(&raw.polyline.points)?;
    let steps = raw
        .steps
        .into_iter()
        .filter_map(|step| match process_step(step) {
            Ok(step) => Some(step),
            Err(e) => {
                warn!("Skipping sub-step: {e}");
                None
            }
        })
        .collect();
    // An unrecognized travel mode downgrades to None, the step stays.
    let travel_mode = raw
        .travel_mode
        .as_deref()
        .and_then(|s| match s.parse::<TravelMode>() {
            Ok(mode) => Some(mode),
            Err(_) => {
                warn!("Unknown travel mode '{s}', dropping it");
                None
            }
        });
    Ok(RouteStep {
        travel_mode,
        instructions_html: raw.html_instructions.unwrap_or_default(),
        start_location: raw.start_location,
        end_location: raw.end_location,
        duration: process_int_value(raw.duration),
        distance: process_int_value(raw.distance),
        path,
        maneuver: raw.maneuver,
        steps,
        transit: raw.transit_details.map(process_transit),
    })
}

fn process_transit(raw: RawTransitDetails) -> TransitDetails {
    TransitDetails {
        departure_stop: process_transit_stop(raw.departure_stop),
        arrival_stop: process_transit_stop(raw.arrival_stop),
        departure_time: process_time_value(raw.departure_time),
        arrival_time: process_time_value(raw.arrival_time),
        line: process_transit_line(raw.line),
        headsign: raw.headsign.unwrap_or_default(),
        num_stops: raw.num_stops,
    }
}

fn process_transit_stop(raw: RawTransitStop) -> TransitStop {
    TransitStop {
        name: raw.name.unwrap_or_default(),
        location: raw.location,
    }
}

fn process_transit_line(raw: RawTransitLine) -> TransitLine {
    TransitLine {
        name: raw.name.unwrap_or_default(),
        short_name: raw.short_name.unwrap_or_default(),
        color: raw.color.unwrap_or_default(),
        text_color: raw.text_color.unwrap_or_default(),
        vehicle: raw.vehicle.map(|v: RawTransitVehicle| TransitVehicle {
            name: v.name.unwrap_or_default(),
            icon: v.icon.unwrap_or_default(),
            vehicle_type: v.vehicle_type.unwrap_or_default(),
        }),
        agencies: raw
            .agencies
            .into_iter()
            .map(|a| TransitAgency {
                name: a.name.unwrap_or_default(),
                phone: a.phone.unwrap_or_default(),
                url: a.url.unwrap_or_default(),
            })
            .collect(),
    }
}

fn process_int_value(raw: RawIntValue) -> IntValue {
    IntValue {
        value: raw.value,
        text: raw.text.unwrap_or_default(),
    }
}

fn process_time_value(raw: RawTimeValue) -> TimeValue {
    TimeValue {
        value: IntValue {
            value: raw.value,
            text: raw.text.unwrap_or_default(),
        },
        time_zone: raw.time_zone.unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn minimal_response() -> serde_json::Value {
        json!({
            "status": "OK",
            "routes": [{
                "summary": "US-45 N",
                "copyrights": "Map data",
                "bounds": {
                    "northeast": {"lat": 40.7, "lng": -120.95},
                    "southwest": {"lat": 38.5, "lng": -121.0}
                },
                "overview_polyline": {"points": "_p~iF~ps|U_ulLnnqC"},
                "legs": [{
                    "start_address": "Urbana, IL",
                    "end_address": "Rantoul, IL",
                    "start_location": {"lat": 38.5, "lng": -120.2},
                    "end_location": {"lat": 40.7, "lng": -120.95},
                    "duration": {"value": 1080, "text": "18 mins"},
                    "distance": {"value": 23300, "text": "23.3 km"},
                    "steps": [{
                        "travel_mode": "DRIVING",
                        "html_instructions": "Head <b>north</b>",
                        "start_location": {"lat": 38.5, "lng": -120.2},
                        "end_location": {"lat": 40.7, "lng": -120.95},
                        "duration": {"value": 1080, "text": "18 mins"},
                        "distance": {"value": 23300, "text": "23.3 km"},
                        "polyline": {"points": "_p~iF~ps|U_ulLnnqC"}
                    }]
                }]
            }]
        })
    }

    #[test]
    fn parses_minimal_response() {
        let routes = parse_directions_response(&minimal_response().to_string()).unwrap();
        assert_eq!(routes.len(), 1);
        let route = &routes[0];
        assert_eq!(route.legs.len(), 1);
        assert_eq!(route.legs[0].steps.len(), 1);
        assert_eq!(route.distance, 23_300);
        assert_eq!(route.distance, route.legs[0].distance.value);
        assert_eq!(route.start_address, "Urbana, IL");
        assert_eq!(route.overview_path.len(), 2);

        let step = &route.legs[0].steps[0];
        assert_eq!(step.travel_mode, Some(TravelMode::Driving));
        assert_eq!(step.path.len(), 2);
        assert!(step.path[0].approx_eq_within(&crate::LatLng::new(38.5, -120.2), 1e-9));
        assert!(step.steps.is_empty());
        assert!(step.transit.is_none());
    }

    #[test]
    fn non_ok_status_fails() {
        let body = json!({
            "status": "ZERO_RESULTS",
            "error_message": "no routes found",
            "routes": []
        });
        match parse_directions_response(&body.to_string()) {
            Err(Error::Directions { status, message }) => {
                assert_eq!(status, "ZERO_RESULTS");
                assert_eq!(message, "no routes found");
            }
            other => panic!("expected directions error, got {other:?}"),
        }
    }

    #[test]
    fn missing_status_fails() {
        assert!(matches!(
            parse_directions_response(r#"{"routes": []}"#),
            Err(Error::Directions { .. })
        ));
    }

    #[test]
    fn strict_route_requires_bounds() {
        let mut value = minimal_response();
        let route = value["routes"][0].take();
        let mut broken = route.clone();
        broken.as_object_mut().unwrap().remove("bounds");
        assert!(matches!(parse_route(broken), Err(Error::Json(_))));
        assert!(parse_route(route).is_ok());
    }

    #[test]
    fn malformed_leg_is_skipped() {
        let mut value = minimal_response();
        // Second leg lacks its required start_location.
        value["routes"][0]["legs"]
            .as_array_mut()
            .unwrap()
            .push(json!({"end_location": {"lat": 1.0, "lng": 2.0}}));
        let routes = parse_directions_response(&value.to_string()).unwrap();
        assert_eq!(routes[0].legs.len(), 1);
    }

    #[test]
    fn bad_step_polyline_skips_step_only() {
        let mut value = minimal_response();
        value["routes"][0]["legs"][0]["steps"][0]["polyline"]["points"] = json!("_p~iF");
        let routes = parse_directions_response(&value.to_string()).unwrap();
        assert!(routes[0].legs[0].steps.is_empty());
        assert_eq!(routes[0].legs.len(), 1);
    }

    #[test]
    fn unknown_travel_mode_keeps_step() {
        let mut value = minimal_response();
        value["routes"][0]["legs"][0]["steps"][0]["travel_mode"] = json!("HOVERBOARD");
        let routes = parse_directions_response(&value.to_string()).unwrap();
        let step = &routes[0].legs[0].steps[0];
        assert_eq!(step.travel_mode, None);
        assert_eq!(step.distance.value, 23_300);
    }

    #[test]
    fn transit_details_round_out() {
        let mut value = minimal_response();
        value["routes"][0]["legs"][0]["steps"][0]["travel_mode"] = json!("TRANSIT");
        value["routes"][0]["legs"][0]["steps"][0]["transit_details"] = json!({
            "departure_stop": {"name": "Illinois Terminal", "location": {"lat": 40.11, "lng": -88.24}},
            "arrival_stop": {"name": "Union Station", "location": {"lat": 41.87, "lng": -87.64}},
            "departure_time": {"value": 1660000000, "text": "10:00 AM", "time_zone": "America/Chicago"},
            "arrival_time": {"value": 1660010000, "text": "12:46 PM", "time_zone": "America/Chicago"},
            "headsign": "Chicago",
            "num_stops": 4,
            "line": {
                "name": "Illini Service",
                "short_name": "392",
                "vehicle": {"name": "Train", "icon": "//maps/train.png", "type": "HEAVY_RAIL"},
                "agencies": [{"name": "Amtrak", "url": "https://www.amtrak.com/"}]
            }
        });
        let routes = parse_directions_response(&value.to_string()).unwrap();
        let transit = routes[0].legs[0].steps[0].transit.as_ref().unwrap();
        assert_eq!(transit.departure_stop.name, "Illinois Terminal");
        assert_eq!(transit.num_stops, 4);
        assert_eq!(transit.line.short_name, "392");
        assert_eq!(transit.line.vehicle.as_ref().unwrap().vehicle_type, "HEAVY_RAIL");
        assert_eq!(transit.line.agencies.len(), 1);
        assert_eq!(transit.line.agencies[0].phone, "");
        assert_eq!(
            transit.departure_time.date_time().unwrap().timestamp(),
            1_660_000_000
        );
    }

    #[test]
    fn parse_routes_skips_malformed_entry() {
        let good = minimal_response()["routes"][0].clone();
        let routes = parse_routes(json!([good, {"summary": "broken"}])).unwrap();
        assert_eq!(routes.len(), 1);
        assert_eq!(routes[0].summary, "US-45 N");
    }
}
