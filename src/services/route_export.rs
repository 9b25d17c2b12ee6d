use crate::models::{Coordinates, HistoryEntry};
use geojson::{Feature, FeatureCollection, Geometry, JsonObject, Value};
use serde_json::json;

fn position(c: &Coordinates) -> Vec<f64> {
    // GeoJSON is lng, lat
    vec![c.lng, c.lat]
}

fn feature(geometry: Value, properties: JsonObject) -> Feature {
    Feature {
        bbox: None,
        geometry: Some(Geometry::new(geometry)),
        id: None,
        properties: Some(properties),
        foreign_members: None,
    }
}

/// Polyline plus markers for a stored route: one `LineString` for the path,
/// a `start` point, and a numbered `waypoint` point per interior position.
pub fn history_entry_to_geojson(entry: &HistoryEntry) -> FeatureCollection {
    let mut features = Vec::with_capacity(entry.points.len());

    let mut line_props = JsonObject::new();
    line_props.insert("id".to_string(), json!(entry.id));
    line_props.insert("route_type".to_string(), json!(entry.route_type_label));
    line_props.insert("distance_km".to_string(), json!(entry.distance_km));
    line_props.insert("created_at".to_string(), json!(entry.created_at));
    features.push(feature(
        Value::LineString(entry.points.iter().map(position).collect()),
        line_props,
    ));

    let mut start_props = JsonObject::new();
    start_props.insert("role".to_string(), json!("start"));
    features.push(feature(Value::Point(position(&entry.start)), start_props));

    let interior = entry.points.len().saturating_sub(2);
    for (i, point) in entry.points.iter().skip(1).take(interior).enumerate() {
        let mut props = JsonObject::new();
        props.insert("role".to_string(), json!("waypoint"));
        props.insert("index".to_string(), json!(i + 1));
        features.push(feature(Value::Point(position(point)), props));
    }

    FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    }
}
