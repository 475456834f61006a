use super::contains::{BoundaryRule, Containment};
use super::geometry::Coordinate;
use super::shapes::{Extent, RenderableShape, TitledShape};
use rstar::{RTree, RTreeObject, AABB};

/// An area or composite area with its position in the source input.
#[derive(Debug, Clone)]
pub struct Region {
    pub id: usize,
    pub shape: TitledShape,
    envelope: AABB<[f64; 2]>,
}

impl Region {
    fn new(id: usize, shape: TitledShape) -> Option<Self> {
        match shape.shape {
            RenderableShape::Area(_) | RenderableShape::CompositeArea { .. } => {}
            _ => return None,
        }
        let bounds = shape.shape.bounds()?;
        let envelope = AABB::from_corners(bounds.sw(), bounds.ne());
        Some(Region {
            id,
            shape,
            envelope,
        })
    }

    pub fn title(&self) -> Option<&str> {
        self.shape.title.as_deref()
    }
}

impl RTreeObject for Region {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        self.envelope
    }
}

/// Finds the regions under a tapped coordinate.
///
/// Candidates come from an R-tree over region bounds and are confirmed with
/// the even-odd containment test.
pub struct RegionIndex {
    tree: RTree<Region>,
    rule: BoundaryRule,
}

impl RegionIndex {
    /// Index every area shape; markers and paths are skipped.
    pub fn new(shapes: impl IntoIterator<Item = TitledShape>, rule: BoundaryRule) -> Self {
        let regions = shapes
            .into_iter()
            .enumerate()
            .filter_map(|(id, shape)| Region::new(id, shape))
            .collect();
        RegionIndex {
            tree: RTree::bulk_load(regions),
            rule,
        }
    }

    pub fn len(&self) -> usize {
        self.tree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Regions containing `point`, ordered by their position in the input.
    pub fn locate(&self, point: Coordinate) -> Vec<&Region> {
        let aabb = AABB::from_point([point.lon, point.lat]);
        let mut matches: Vec<&Region> = self
            .tree
            .locate_in_envelope_intersecting(&aabb)
            .filter(|region| region.shape.shape.contains_with(point, self.rule))
            .collect();
        matches.sort_by_key(|region| region.id);
        matches
    }
}
