//! Point in region tests using the even-odd rule.
//!
//! A horizontal ray is cast from the query point towards increasing longitude
//! and the ring edges it crosses are counted. Rings need not be closed, the
//! last coordinate is always joined back to the first. Longitudes are treated
//! as plain planar values: rings crossing the antimeridian give wrong answers.

use super::geometry::{Coordinate, MultiPolygon, Polygon};
use super::shapes::{Area, RenderableShape};
use itertools::Itertools;

/// How a point lying exactly on a ring edge is classified.
///
/// The rule is applied identically to outer rings and holes. With
/// `Inclusive` a point on a hole edge is inside the hole and therefore
/// outside the polygon; with `Exclusive` it is outside the hole and the
/// outer ring decides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundaryRule {
    Inclusive,
    Exclusive,
}

impl Default for BoundaryRule {
    fn default() -> Self {
        BoundaryRule::Inclusive
    }
}

#[derive(Debug, PartialEq)]
enum RingPosition {
    Inside,
    Outside,
    Boundary,
}

fn on_segment(a: &Coordinate, b: &Coordinate, point: Coordinate) -> bool {
    let within_box = point.lon >= a.lon.min(b.lon)
        && point.lon <= a.lon.max(b.lon)
        && point.lat >= a.lat.min(b.lat)
        && point.lat <= a.lat.max(b.lat);
    if !within_box {
        return false;
    }
    let cross = (b.lon - a.lon) * (point.lat - a.lat) - (b.lat - a.lat) * (point.lon - a.lon);
    // rounding in the differences grows with the ordinates, not with the edge
    let magnitude = [a.lon, a.lat, b.lon, b.lat, point.lon, point.lat]
        .iter()
        .fold(0f64, |max, ordinate| max.max(ordinate.abs()));
    let length = (b.lon - a.lon).hypot(b.lat - a.lat);
    cross.abs() <= 16. * f64::EPSILON * magnitude * length
}

fn classify(ring: &[Coordinate], point: Coordinate) -> RingPosition {
    let mut inside = false;
    for (a, b) in ring.iter().chain(ring.first()).tuple_windows() {
        if on_segment(a, b, point) {
            return RingPosition::Boundary;
        }
        if (a.lat > point.lat) != (b.lat > point.lat) {
            let crossing = (b.lon - a.lon) * (point.lat - a.lat) / (b.lat - a.lat) + a.lon;
            if point.lon < crossing {
                inside = !inside;
            }
        }
    }
    if inside {
        RingPosition::Inside
    } else {
        RingPosition::Outside
    }
}

fn within_ring(ring: &[Coordinate], point: Coordinate, rule: BoundaryRule) -> bool {
    match classify(ring, point) {
        RingPosition::Inside => true,
        RingPosition::Outside => false,
        RingPosition::Boundary => rule == BoundaryRule::Inclusive,
    }
}

fn area_contains(
    outer: &[Coordinate],
    holes: &[Vec<Coordinate>],
    point: Coordinate,
    rule: BoundaryRule,
) -> bool {
    within_ring(outer, point, rule) && !holes.iter().any(|hole| within_ring(hole, point, rule))
}

pub trait Containment {
    fn contains_with(&self, point: Coordinate, rule: BoundaryRule) -> bool;

    fn contains(&self, point: Coordinate) -> bool {
        self.contains_with(point, BoundaryRule::default())
    }
}

impl Containment for Polygon {
    fn contains_with(&self, point: Coordinate, rule: BoundaryRule) -> bool {
        area_contains(self.outer_ring(), self.holes(), point, rule)
    }
}

impl Containment for MultiPolygon {
    fn contains_with(&self, point: Coordinate, rule: BoundaryRule) -> bool {
        self.polygons()
            .iter()
            .any(|polygon| polygon.contains_with(point, rule))
    }
}

impl Containment for Area {
    fn contains_with(&self, point: Coordinate, rule: BoundaryRule) -> bool {
        area_contains(&self.outer, &self.holes, point, rule)
    }
}

impl Containment for RenderableShape {
    fn contains_with(&self, point: Coordinate, rule: BoundaryRule) -> bool {
        match self {
            RenderableShape::Marker { .. } | RenderableShape::Path { .. } => false,
            RenderableShape::Area(area) => area.contains_with(point, rule),
            RenderableShape::CompositeArea { areas } => {
                areas.iter().any(|area| area.contains_with(point, rule))
            }
        }
    }
}

/// Boundary inclusive containment of `point` in `polygon`.
pub fn contains(polygon: &Polygon, point: Coordinate) -> bool {
    polygon.contains(point)
}

pub fn contains_with(polygon: &Polygon, point: Coordinate, rule: BoundaryRule) -> bool {
    polygon.contains_with(point, rule)
}

/// Every item containing `point`, in input order.
pub fn containing<'a, T, I>(items: I, point: Coordinate, rule: BoundaryRule) -> Vec<&'a T>
where
    T: Containment + 'a,
    I: IntoIterator<Item = &'a T>,
{
    items
        .into_iter()
        .filter(|item| item.contains_with(point, rule))
        .collect()
}

pub fn polygons_containing<'a, I>(polygons: I, point: Coordinate) -> Vec<&'a Polygon>
where
    I: IntoIterator<Item = &'a Polygon>,
{
    containing(polygons, point, BoundaryRule::Inclusive)
}
