//! GeoJSON export of a route tree.

use geojson::{Feature, FeatureCollection, Geometry, Value as GeoJsonValue};
use serde_json::json;

use super::route::{Route, RouteStep};
use crate::error::Error;
use crate::geometry::line_string;

impl Route {
    /// Converts the route to a GeoJSON `FeatureCollection`: one
    /// `LineString` feature per step (legs flattened, in order) plus a
    /// final feature for the overview path.
    pub fn to_geojson(&self) -> Result<FeatureCollection, Error> {
        let mut features = Vec::new();

        for (leg_idx, leg) in self.legs.iter().enumerate() {
            for (step_idx, step) in leg.steps.iter().enumerate() {
                features.push(create_step_feature(leg_idx, step_idx, step)?);
            }
        }
        features.push(create_overview_feature(self)?);

        Ok(FeatureCollection {
            features,
            bbox: None,
            foreign_members: None,
        })
    }

    pub fn to_geojson_string(&self) -> Result<String, Error> {
        serde_json::to_string(&self.to_geojson()?).map_err(|e| Error::GeoJsonError(e.to_string()))
    }
}

fn create_step_feature(leg_idx: usize, step_idx: usize, step: &RouteStep) -> Result<Feature, Error> {
    // Steps with an empty polyline still get a geometry from their
    // endpoints so the collection stays renderable.
    let geometry = if step.path.is_empty() {
        Geometry::new(GeoJsonValue::from(&line_string(&[
            step.start_location,
            step.end_location,
        ])))
    } else {
        Geometry::new(GeoJsonValue::from(&line_string(&step.path)))
    };

    let value = json!({
        "type": "Feature",
        "geometry": geometry,
        "properties": {
            "feature_type": "step",
            "leg_index": leg_idx,
            "step_index": step_idx,
            "travel_mode": step.travel_mode.map(|m| m.as_str()),
            "instructions": step.instructions_html,
            "maneuver": step.maneuver,
            "distance": step.distance.value,
            "distance_text": step.distance.text,
            "duration": step.duration.value,
            "duration_text": step.duration.text,
        }
    });

    serde_json::from_value(value).map_err(|e| Error::GeoJsonError(e.to_string()))
}

fn create_overview_feature(route: &Route) -> Result<Feature, Error> {
    let geometry = Geometry::new(GeoJsonValue::from(&line_string(&route.overview_path)));

    let value = json!({
        "type": "Feature",
        "geometry": geometry,
        "properties": {
            "feature_type": "overview",
            "summary": route.summary,
            "copyrights": route.copyrights,
            "distance": route.distance,
            "duration": route.duration,
        }
    });

    serde_json::from_value(value).map_err(|e| Error::GeoJsonError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::LatLng;
    use crate::model::{IntValue, LatLngBounds, RouteLeg, TravelMode};

    fn sample_route() -> Route {
        let path = vec![LatLng::new(40.0, -88.0), LatLng::new(40.1, -88.0)];
        let step = RouteStep {
            travel_mode: Some(TravelMode::Walking),
            instructions_html: "Head <b>north</b>".into(),
            start_location: path[0],
            end_location: path[1],
            duration: IntValue::new(600, "10 mins"),
            distance: IntValue::new(800, "0.8 km"),
            path: path.clone(),
            maneuver: None,
            steps: Vec::new(),
            transit: None,
        };
        let leg = RouteLeg {
            start_address: "A".into(),
            end_address: "B".into(),
            start_location: path[0],
            end_location: path[1],
            duration: IntValue::new(600, "10 mins"),
            distance: IntValue::new(800, "0.8 km"),
            steps: vec![step],
        };
        Route::from_parts(
            "Test".into(),
            String::new(),
            LatLngBounds::new(path[1], path[0]),
            path,
            vec![leg],
        )
    }

    #[test]
    fn collection_has_step_and_overview_features() {
        let collection = sample_route().to_geojson().unwrap();
        assert_eq!(collection.features.len(), 2);

        let step = &collection.features[0];
        let props = step.properties.as_ref().unwrap();
        assert_eq!(props["feature_type"], "step");
        assert_eq!(props["travel_mode"], "walking");
        assert_eq!(props["distance"], 800);

        let overview = &collection.features[1];
        let props = overview.properties.as_ref().unwrap();
        assert_eq!(props["feature_type"], "overview");

        // Geometry is longitude-first.
        let geometry = serde_json::to_value(step.geometry.as_ref().unwrap()).unwrap();
        assert_eq!(geometry["type"], "LineString");
        assert_eq!(geometry["coordinates"][0][0], -88.0);
        assert_eq!(geometry["coordinates"][0][1], 40.0);
    }

    #[test]
    fn geojson_string_is_valid_json() {
        let text = sample_route().to_geojson_string().unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["type"], "FeatureCollection");
    }
}
