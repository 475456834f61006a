//! Decode GeoJSON geometry into renderable shapes and answer point in region
//! queries against it.
//!
//! ```
//! use geojson_shapes::contains::contains;
//! use geojson_shapes::decode::decode_str;
//! use geojson_shapes::geometry::{Coordinate, Geometry};
//!
//! let text = r#"{"type":"Polygon","coordinates":[[[0,0],[0,4],[4,4],[4,0],[0,0]]]}"#;
//! if let Geometry::Polygon(polygon) = decode_str(text).unwrap() {
//!     assert!(contains(&polygon, Coordinate::new(2., 2.)));
//!     assert!(!contains(&polygon, Coordinate::new(10., 10.)));
//! }
//! ```

use contains::BoundaryRule;
use features::FeatureCollection;
use filter::{Filter, Group};
use geometry::Coordinate;
use index::RegionIndex;
use shapes::TitledShape;
use std::error::Error;
use std::io::Read;
use tracing::info;

pub mod contains;
pub mod decode;
pub mod error;
pub mod features;
pub mod filter;
mod geojson;
pub mod geometry;
pub mod index;
pub mod logging;
pub mod output;
pub mod shapes;
#[cfg(test)]
mod test_helpers;

pub use error::{FeatureError, GeometryError};

/// Read a GeoJSON document and turn every matching feature into titled shapes.
///
/// Features failing to decode are skipped. `title_key` names the property
/// used as title; `groups` restricts the output to features passing the
/// filter, an empty slice keeps everything.
pub fn load_shapes(
    reader: impl Read,
    title_key: Option<&str>,
    groups: &[Group],
) -> Result<Vec<TitledShape>, Box<dyn Error>> {
    let mut collection = FeatureCollection::from_reader(reader)?;
    if !groups.is_empty() {
        collection.features.retain(|feature| feature.filter(groups));
    }
    if let Some(key) = title_key {
        collection.update_titles(key);
    }
    info!(
        features = collection.features.len(),
        rejected = collection.rejected.len(),
        "loaded geojson"
    );
    Ok(collection.into_titled_shapes())
}

/// Titled areas of a GeoJSON document containing `point`, in document order.
pub fn locate(
    reader: impl Read,
    title_key: Option<&str>,
    point: Coordinate,
    rule: BoundaryRule,
) -> Result<Vec<TitledShape>, Box<dyn Error>> {
    let shapes = load_shapes(reader, title_key, &[])?;
    let index = RegionIndex::new(shapes, rule);
    let regions = index.locate(point);
    info!(regions = index.len(), matches = regions.len(), "located point");
    Ok(regions
        .into_iter()
        .map(|region| region.shape.clone())
        .collect())
}
