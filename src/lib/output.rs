use super::geojson::{Entity, Geometry};
use super::geometry::{Bounds, Coordinate};
use super::shapes::{Area, Extent, RenderableShape, TitledShape};
use serde::Serialize;
use serde_json::to_string;
use std::collections::HashMap;
use std::error::Error;
use std::io::Write;

pub trait Output {
    fn write_geojson(&self, writer: &mut dyn Write) -> Result<(), Box<dyn Error>>;
    fn write_json_lines(&self, writer: &mut dyn Write) -> Result<(), Box<dyn Error>>;
}

#[derive(Serialize)]
struct JSONShape<'a> {
    #[serde(flatten)]
    shape: &'a TitledShape,
    #[serde(skip_serializing_if = "Option::is_none")]
    bounds: Option<Bounds>,
    #[serde(skip_serializing_if = "Option::is_none")]
    centroid: Option<Coordinate>,
}

fn pairs(coordinates: &[Coordinate]) -> Vec<(f64, f64)> {
    coordinates.iter().map(|&c| c.into()).collect()
}

fn rings(area: &Area) -> Vec<Vec<(f64, f64)>> {
    let mut rings = vec![pairs(&area.outer)];
    rings.extend(area.holes.iter().map(|hole| pairs(hole)));
    rings
}

impl From<&RenderableShape> for Geometry {
    fn from(shape: &RenderableShape) -> Self {
        match shape {
            RenderableShape::Marker { coordinate } => Geometry::Point {
                coordinates: (*coordinate).into(),
            },
            RenderableShape::Path { coordinates } => Geometry::LineString {
                coordinates: pairs(coordinates),
            },
            RenderableShape::Area(area) => Geometry::Polygon {
                coordinates: rings(area),
            },
            RenderableShape::CompositeArea { areas } => Geometry::MultiPolygon {
                coordinates: areas.iter().map(rings).collect(),
            },
        }
    }
}

impl Output for Vec<TitledShape> {
    fn write_json_lines(&self, writer: &mut dyn Write) -> Result<(), Box<dyn Error>> {
        for shape in self.iter() {
            let json_shape = JSONShape {
                shape,
                bounds: shape.shape.bounds(),
                centroid: shape.shape.centroid(),
            };
            let json = to_string(&json_shape)?;
            writeln!(writer, "{}", json)?;
        }
        Ok(())
    }

    fn write_geojson(&self, writer: &mut dyn Write) -> Result<(), Box<dyn Error>> {
        let features = self
            .iter()
            .map(|shape| {
                let geometry = (&shape.shape).into();
                let mut properties = HashMap::new();
                if let Some(title) = &shape.title {
                    properties.insert(String::from("title"), title.clone());
                }
                Entity::Feature {
                    geometry,
                    properties,
                }
            })
            .collect();
        let feature_collection = Entity::FeatureCollection { features };
        let string = to_string(&feature_collection)?;
        writeln!(writer, "{}", string)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{square, square_ring, square_with_hole};
    use serde_json::{json, Value};

    fn shapes() -> Vec<TitledShape> {
        vec![
            TitledShape::new(
                RenderableShape::Area(square_with_hole(0., 0., 4., square_ring(1., 1., 2.)).into()),
                Some("Park Slope".to_string()),
            ),
            TitledShape::new(
                RenderableShape::Marker {
                    coordinate: Coordinate::new(-73.99, 40.63),
                },
                None,
            ),
        ]
    }

    fn lines(buffer: Vec<u8>) -> Vec<Value> {
        let string = String::from_utf8(buffer).unwrap();
        string
            .trim()
            .split('\n')
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[test]
    fn json_lines() {
        let mut buffer = Vec::new();
        shapes().write_json_lines(&mut buffer).unwrap();
        let lines = lines(buffer);
        assert_eq!(lines.len(), 2);

        assert_eq!(lines[0]["title"], json!("Park Slope"));
        assert_eq!(lines[0]["shape"], json!("Area"));
        assert_eq!(lines[0]["holes"].as_array().unwrap().len(), 1);
        assert_eq!(lines[0]["bounds"], json!({"e": 4.0, "n": 4.0, "s": 0.0, "w": 0.0}));

        assert!(lines[1].get("title").is_none());
        assert_eq!(lines[1]["coordinate"], json!([-73.99, 40.63]));
        assert_eq!(lines[1]["centroid"], json!([-73.99, 40.63]));
    }

    #[test]
    fn geojson() {
        let mut buffer = Vec::new();
        shapes().write_geojson(&mut buffer).unwrap();
        let value = lines(buffer).pop().unwrap();

        assert_eq!(value["type"], json!("FeatureCollection"));
        let features = value["features"].as_array().unwrap();
        assert_eq!(features.len(), 2);
        assert_eq!(features[0]["geometry"]["type"], json!("Polygon"));
        assert_eq!(features[0]["properties"]["title"], json!("Park Slope"));
        assert_eq!(
            features[0]["geometry"]["coordinates"][0],
            json!([[0.0, 0.0], [0.0, 4.0], [4.0, 4.0], [4.0, 0.0], [0.0, 0.0]])
        );
        assert_eq!(features[1]["geometry"]["type"], json!("Point"));
        assert_eq!(features[1]["properties"], json!({}));
    }

    #[test]
    fn composite_area_as_multi_polygon() {
        let shape = RenderableShape::CompositeArea {
            areas: vec![square(0., 0., 1.).into(), square(5., 5., 1.).into()],
        };
        match Geometry::from(&shape) {
            Geometry::MultiPolygon { coordinates } => {
                assert_eq!(coordinates.len(), 2);
                assert_eq!(coordinates[1][0][0], (5., 5.));
            }
            _ => panic!("expected a multi polygon"),
        }
    }
}
