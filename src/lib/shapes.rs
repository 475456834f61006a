use super::geometry::{geo_polygon, line_string, Bounds, Coordinate, Geometry, MultiPolygon, Polygon};
use geo::prelude::*;
use serde::Serialize;

/// A filled region with optional holes, rings taken verbatim from the source geometry.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Area {
    pub outer: Vec<Coordinate>,
    pub holes: Vec<Vec<Coordinate>>,
}

/// Platform agnostic drawing primitives. No styling is attached.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(tag = "shape")]
pub enum RenderableShape {
    Marker { coordinate: Coordinate },
    Path { coordinates: Vec<Coordinate> },
    Area(Area),
    CompositeArea { areas: Vec<Area> },
}

/// Result of converting one geometry. Multi point and multi line geometries
/// expand into several shapes, everything else maps to exactly one.
#[derive(Debug, Clone, PartialEq)]
pub enum Renderable {
    Shape(RenderableShape),
    Shapes(Vec<RenderableShape>),
}

impl Renderable {
    pub fn into_shapes(self) -> Vec<RenderableShape> {
        match self {
            Renderable::Shape(shape) => vec![shape],
            Renderable::Shapes(shapes) => shapes,
        }
    }
}

impl From<Polygon> for Area {
    fn from(polygon: Polygon) -> Self {
        let mut rings = polygon.into_rings().into_iter();
        let outer = rings.next().unwrap_or_default();
        Area {
            outer,
            holes: rings.collect(),
        }
    }
}

fn composite(multi_polygon: MultiPolygon) -> Vec<Area> {
    multi_polygon
        .into_polygons()
        .into_iter()
        .map(Area::from)
        .collect()
}

pub fn to_renderable(geometry: Geometry) -> Renderable {
    match geometry {
        Geometry::Point(coordinate) => Renderable::Shape(RenderableShape::Marker { coordinate }),
        Geometry::LineString(coordinates) => {
            Renderable::Shape(RenderableShape::Path { coordinates })
        }
        Geometry::Polygon(polygon) => Renderable::Shape(RenderableShape::Area(polygon.into())),
        Geometry::MultiPolygon(multi_polygon) => {
            Renderable::Shape(RenderableShape::CompositeArea {
                areas: composite(multi_polygon),
            })
        }
        Geometry::MultiPoint(coordinates) => Renderable::Shapes(
            coordinates
                .into_iter()
                .map(|coordinate| RenderableShape::Marker { coordinate })
                .collect(),
        ),
        Geometry::MultiLineString(lines) => Renderable::Shapes(
            lines
                .into_iter()
                .map(|coordinates| RenderableShape::Path { coordinates })
                .collect(),
        ),
    }
}

impl From<Geometry> for Renderable {
    fn from(geometry: Geometry) -> Self {
        to_renderable(geometry)
    }
}

/// Label anchor and extent of a shape.
pub trait Extent {
    fn bounds(&self) -> Option<Bounds>;
    fn centroid(&self) -> Option<Coordinate>;
}

impl From<&Area> for geo_types::Polygon<f64> {
    fn from(area: &Area) -> Self {
        geo_polygon(&area.outer, &area.holes)
    }
}

fn geo_multi_polygon(areas: &[Area]) -> geo_types::MultiPolygon<f64> {
    geo_types::MultiPolygon(areas.iter().map(|area| area.into()).collect())
}

impl Extent for Area {
    fn bounds(&self) -> Option<Bounds> {
        let polygon: geo_types::Polygon<f64> = self.into();
        polygon.bounding_rect().map(Bounds::from)
    }

    fn centroid(&self) -> Option<Coordinate> {
        let polygon: geo_types::Polygon<f64> = self.into();
        polygon.centroid().map(Coordinate::from)
    }
}

impl Extent for RenderableShape {
    fn bounds(&self) -> Option<Bounds> {
        match self {
            RenderableShape::Marker { coordinate } => Some(Bounds {
                e: coordinate.lon,
                n: coordinate.lat,
                s: coordinate.lat,
                w: coordinate.lon,
            }),
            RenderableShape::Path { coordinates } => {
                line_string(coordinates).bounding_rect().map(Bounds::from)
            }
            RenderableShape::Area(area) => area.bounds(),
            RenderableShape::CompositeArea { areas } => {
                geo_multi_polygon(areas).bounding_rect().map(Bounds::from)
            }
        }
    }

    fn centroid(&self) -> Option<Coordinate> {
        match self {
            RenderableShape::Marker { coordinate } => Some(*coordinate),
            RenderableShape::Path { coordinates } => {
                line_string(coordinates).centroid().map(Coordinate::from)
            }
            RenderableShape::Area(area) => area.centroid(),
            RenderableShape::CompositeArea { areas } => {
                geo_multi_polygon(areas).centroid().map(Coordinate::from)
            }
        }
    }
}

/// A shape paired with a title chosen by the caller.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct TitledShape {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(flatten)]
    pub shape: RenderableShape,
}

impl TitledShape {
    pub fn new(shape: RenderableShape, title: Option<String>) -> Self {
        TitledShape { title, shape }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::decode_str;
    use crate::test_helpers::{ring, square};
    use approx::*;

    #[test]
    fn point_becomes_marker() {
        let geometry = decode_str(r#"{"type":"Point","coordinates":[-73.99643342179832,40.63328912259067]}"#)
            .unwrap();
        let shape = to_renderable(geometry);
        let expected = RenderableShape::Marker {
            coordinate: Coordinate::new(-73.99643342179832, 40.63328912259067),
        };
        assert_eq!(shape, Renderable::Shape(expected));
    }

    #[test]
    fn line_string_becomes_path() {
        let coordinates = ring(&[(9., 50.), (9., 51.), (10., 51.)]);
        let shape = to_renderable(Geometry::LineString(coordinates.clone()));
        assert_eq!(shape, Renderable::Shape(RenderableShape::Path { coordinates }));
    }

    #[test]
    fn polygon_keeps_open_rings() {
        let outer = ring(&[(0., 0.), (0., 4.), (4., 4.)]);
        let hole = ring(&[(1., 1.), (2., 1.), (1., 2.)]);
        let polygon = Polygon::new(vec![outer.clone(), hole.clone()]).unwrap();
        let shapes = to_renderable(Geometry::Polygon(polygon)).into_shapes();
        assert_eq!(
            shapes,
            vec![RenderableShape::Area(Area {
                outer,
                holes: vec![hole],
            })]
        );
    }

    #[test]
    fn multi_polygon_keeps_order() {
        let polygons = vec![square(0., 0., 1.), square(10., 10., 2.), square(-5., -5., 1.)];
        let multi_polygon = MultiPolygon::new(polygons.clone());
        match to_renderable(Geometry::MultiPolygon(multi_polygon)) {
            Renderable::Shape(RenderableShape::CompositeArea { areas }) => {
                assert_eq!(areas.len(), 3);
                for (area, polygon) in areas.iter().zip(polygons.iter()) {
                    assert_eq!(&area.outer[..], polygon.outer_ring());
                }
            }
            other => panic!("expected composite area, got {:?}", other),
        }
    }

    #[test]
    fn multi_point_expands() {
        let points = ring(&[(1., 2.), (3., 4.)]);
        let shapes = to_renderable(Geometry::MultiPoint(points)).into_shapes();
        assert_eq!(shapes.len(), 2);
        assert_eq!(
            shapes[1],
            RenderableShape::Marker {
                coordinate: Coordinate::new(3., 4.)
            }
        );
    }

    #[test]
    fn multi_line_string_expands() {
        let lines = vec![ring(&[(0., 0.), (1., 1.)]), ring(&[(2., 2.), (3., 3.)])];
        match to_renderable(Geometry::MultiLineString(lines)) {
            Renderable::Shapes(shapes) => assert_eq!(shapes.len(), 2),
            other => panic!("expected shapes, got {:?}", other),
        }
    }

    #[test]
    fn area_extent() {
        let area = Area::from(square(0., 0., 4.));
        let bounds = area.bounds().unwrap();
        assert_eq!(bounds.sw(), [0., 0.]);
        assert_eq!(bounds.ne(), [4., 4.]);
        let centroid = area.centroid().unwrap();
        assert_relative_eq!(centroid.lon, 2., epsilon = 1e-9);
        assert_relative_eq!(centroid.lat, 2., epsilon = 1e-9);
    }

    #[test]
    fn serialize_titled_area() {
        let area = Area {
            outer: ring(&[(0., 0.), (0., 1.), (1., 1.), (0., 0.)]),
            holes: vec![],
        };
        let titled = TitledShape::new(RenderableShape::Area(area), Some("Park".into()));
        let json = serde_json::to_value(&titled).unwrap();
        let expected = serde_json::json!({
            "title": "Park",
            "shape": "Area",
            "outer": [[0.0, 0.0], [0.0, 1.0], [1.0, 1.0], [0.0, 0.0]],
            "holes": []
        });
        assert_eq!(json, expected);
    }
}
