use super::error::GeometryError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// A position in GeoJSON axis order: longitude first, latitude second.
#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
#[serde(into = "[f64; 2]")]
pub struct Coordinate {
    pub lon: f64,
    pub lat: f64,
}

impl Coordinate {
    pub fn new(lon: f64, lat: f64) -> Self {
        Coordinate { lon, lat }
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from(coordinates: (f64, f64)) -> Self {
        Coordinate {
            lon: coordinates.0,
            lat: coordinates.1,
        }
    }
}

impl From<Coordinate> for [f64; 2] {
    fn from(coordinate: Coordinate) -> Self {
        [coordinate.lon, coordinate.lat]
    }
}

impl From<Coordinate> for (f64, f64) {
    fn from(coordinate: Coordinate) -> Self {
        (coordinate.lon, coordinate.lat)
    }
}

impl From<Coordinate> for geo_types::Coordinate<f64> {
    fn from(coordinate: Coordinate) -> Self {
        geo_types::Coordinate {
            x: coordinate.lon,
            y: coordinate.lat,
        }
    }
}

impl From<geo_types::Point<f64>> for Coordinate {
    fn from(point: geo_types::Point<f64>) -> Self {
        Coordinate {
            lon: point.x(),
            lat: point.y(),
        }
    }
}

/// Axis aligned extent of a shape, named by compass side.
#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub e: f64,
    pub n: f64,
    pub s: f64,
    pub w: f64,
}

impl Bounds {
    pub fn sw(&self) -> [f64; 2] {
        [self.w, self.s]
    }

    pub fn ne(&self) -> [f64; 2] {
        [self.e, self.n]
    }
}

impl From<geo_types::Rect<f64>> for Bounds {
    fn from(rect: geo_types::Rect<f64>) -> Self {
        Bounds {
            e: rect.max().x,
            n: rect.max().y,
            s: rect.min().y,
            w: rect.min().x,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryKind {
    Point,
    LineString,
    Polygon,
    MultiPoint,
    MultiLineString,
    MultiPolygon,
}

impl GeometryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            GeometryKind::Point => "Point",
            GeometryKind::LineString => "LineString",
            GeometryKind::Polygon => "Polygon",
            GeometryKind::MultiPoint => "MultiPoint",
            GeometryKind::MultiLineString => "MultiLineString",
            GeometryKind::MultiPolygon => "MultiPolygon",
        }
    }

    /// Array nesting depth of the `coordinates` member for this kind.
    pub fn depth(&self) -> usize {
        match self {
            GeometryKind::Point => 1,
            GeometryKind::LineString | GeometryKind::MultiPoint => 2,
            GeometryKind::Polygon | GeometryKind::MultiLineString => 3,
            GeometryKind::MultiPolygon => 4,
        }
    }
}

impl FromStr for GeometryKind {
    type Err = GeometryError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag {
            "Point" => Ok(GeometryKind::Point),
            "LineString" => Ok(GeometryKind::LineString),
            "Polygon" => Ok(GeometryKind::Polygon),
            "MultiPoint" => Ok(GeometryKind::MultiPoint),
            "MultiLineString" => Ok(GeometryKind::MultiLineString),
            "MultiPolygon" => Ok(GeometryKind::MultiPolygon),
            other => Err(GeometryError::UnrecognizedType(other.to_string())),
        }
    }
}

impl fmt::Display for GeometryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An outer boundary followed by zero or more holes.
///
/// Rings are kept exactly as given: neither closure nor winding order is
/// checked or repaired.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    rings: Vec<Vec<Coordinate>>,
}

impl Polygon {
    pub fn new(rings: Vec<Vec<Coordinate>>) -> Result<Self, GeometryError> {
        if rings.is_empty() {
            return Err(GeometryError::EmptyPolygonRings);
        }
        Ok(Polygon { rings })
    }

    pub fn outer_ring(&self) -> &[Coordinate] {
        &self.rings[0]
    }

    pub fn holes(&self) -> &[Vec<Coordinate>] {
        &self.rings[1..]
    }

    pub fn rings(&self) -> &[Vec<Coordinate>] {
        &self.rings
    }

    pub fn into_rings(self) -> Vec<Vec<Coordinate>> {
        self.rings
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MultiPolygon {
    polygons: Vec<Polygon>,
}

impl MultiPolygon {
    pub fn new(polygons: Vec<Polygon>) -> Self {
        MultiPolygon { polygons }
    }

    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    pub fn into_polygons(self) -> Vec<Polygon> {
        self.polygons
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Point(Coordinate),
    LineString(Vec<Coordinate>),
    Polygon(Polygon),
    MultiPoint(Vec<Coordinate>),
    MultiLineString(Vec<Vec<Coordinate>>),
    MultiPolygon(MultiPolygon),
}

impl Geometry {
    pub fn kind(&self) -> GeometryKind {
        match self {
            Geometry::Point(_) => GeometryKind::Point,
            Geometry::LineString(_) => GeometryKind::LineString,
            Geometry::Polygon(_) => GeometryKind::Polygon,
            Geometry::MultiPoint(_) => GeometryKind::MultiPoint,
            Geometry::MultiLineString(_) => GeometryKind::MultiLineString,
            Geometry::MultiPolygon(_) => GeometryKind::MultiPolygon,
        }
    }
}

pub(crate) fn line_string(coordinates: &[Coordinate]) -> geo_types::LineString<f64> {
    geo_types::LineString(coordinates.iter().map(|&c| c.into()).collect())
}

pub(crate) fn geo_polygon(outer: &[Coordinate], holes: &[Vec<Coordinate>]) -> geo_types::Polygon<f64> {
    let interiors = holes.iter().map(|hole| line_string(hole)).collect();
    geo_types::Polygon::new(line_string(outer), interiors)
}

impl From<&Polygon> for geo_types::Polygon<f64> {
    fn from(polygon: &Polygon) -> Self {
        geo_polygon(polygon.outer_ring(), polygon.holes())
    }
}

impl From<&MultiPolygon> for geo_types::MultiPolygon<f64> {
    fn from(multi_polygon: &MultiPolygon) -> Self {
        geo_types::MultiPolygon(multi_polygon.polygons().iter().map(|p| p.into()).collect())
    }
}
