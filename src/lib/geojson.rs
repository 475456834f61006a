use serde::Serialize;
use std::collections::HashMap;

#[derive(Serialize)]
#[serde(tag = "type")]
pub enum Geometry {
    Point {
        coordinates: (f64, f64),
    },
    LineString {
        coordinates: Vec<(f64, f64)>,
    },
    Polygon {
        coordinates: Vec<Vec<(f64, f64)>>,
    },
    MultiPolygon {
        coordinates: Vec<Vec<Vec<(f64, f64)>>>,
    },
}

#[derive(Serialize)]
#[serde(tag = "type")]
pub enum Entity {
    Feature {
        properties: HashMap<String, String>,
        geometry: Geometry,
    },
    FeatureCollection {
        features: Vec<Entity>,
    },
}
