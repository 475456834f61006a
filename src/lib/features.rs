use super::decode::decode;
use super::error::FeatureError;
use super::geometry::Geometry;
use super::shapes::{to_renderable, TitledShape};
use rayon::prelude::*;
use serde_json::{Map, Value};
use std::io::Read;
use std::str::FromStr;
use tracing::{debug, warn};

/// A geometry together with its untouched `properties` map and an optional
/// display title.
#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    pub geometry: Geometry,
    pub properties: Map<String, Value>,
    pub title: Option<String>,
}

fn property_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

impl Feature {
    pub fn new(geometry: Geometry) -> Self {
        Feature {
            geometry,
            properties: Map::new(),
            title: None,
        }
    }

    /// Textual form of a property: strings verbatim, other values as json.
    pub fn property(&self, key: &str) -> Option<String> {
        self.properties.get(key).map(property_text)
    }

    pub fn update_title_from_property(&mut self, key: &str) -> Result<(), FeatureError> {
        let title = self
            .property(key)
            .ok_or_else(|| FeatureError::MissingPropertyKey(key.to_string()))?;
        self.title = Some(title);
        Ok(())
    }

    pub fn into_renderable(self) -> Vec<TitledShape> {
        let title = self.title;
        to_renderable(self.geometry)
            .into_shapes()
            .into_iter()
            .map(|shape| TitledShape::new(shape, title.clone()))
            .collect()
    }
}

fn decode_feature(mut value: Value) -> Result<Feature, FeatureError> {
    if !value.is_object() {
        return Err(FeatureError::InvalidDocument(
            "feature is not an object".to_string(),
        ));
    }
    let geometry = match value.get("geometry") {
        None | Some(Value::Null) => return Err(FeatureError::MissingGeometry),
        Some(geometry) => decode(geometry)?,
    };
    let properties = match value.get_mut("properties").map(Value::take) {
        Some(Value::Object(properties)) => properties,
        None | Some(Value::Null) => Map::new(),
        Some(other) => {
            return Err(FeatureError::InvalidDocument(format!(
                "properties must be an object or null, found {}",
                other
            )))
        }
    };
    Ok(Feature {
        geometry,
        properties,
        title: None,
    })
}

/// A feature that could not be decoded, with its position in the input.
#[derive(Debug)]
pub struct Rejected {
    pub index: usize,
    pub error: FeatureError,
}

#[derive(Debug, Default)]
pub struct FeatureCollection {
    pub features: Vec<Feature>,
    pub rejected: Vec<Rejected>,
}

impl FeatureCollection {
    /// Build a collection from a parsed GeoJSON document.
    ///
    /// A `FeatureCollection` is decoded feature by feature: a broken feature is
    /// recorded in `rejected` and the rest are kept in input order. A single
    /// `Feature` or a bare geometry object must decode completely.
    pub fn from_value(mut value: Value) -> Result<Self, FeatureError> {
        let tag = value.get("type").and_then(Value::as_str).map(str::to_string);
        match tag.as_deref() {
            Some("FeatureCollection") => {
                let features = match value.get_mut("features").map(Value::take) {
                    Some(Value::Array(features)) => features,
                    _ => {
                        return Err(FeatureError::InvalidDocument(
                            "feature collection without a features array".to_string(),
                        ))
                    }
                };
                Ok(Self::decode_features(features))
            }
            Some("Feature") => {
                let feature = decode_feature(value)?;
                Ok(FeatureCollection {
                    features: vec![feature],
                    rejected: vec![],
                })
            }
            _ => {
                let geometry = decode(&value)?;
                Ok(FeatureCollection {
                    features: vec![Feature::new(geometry)],
                    rejected: vec![],
                })
            }
        }
    }

    pub fn from_reader(reader: impl Read) -> Result<Self, FeatureError> {
        let value = serde_json::from_reader(reader)?;
        Self::from_value(value)
    }

    fn decode_features(features: Vec<Value>) -> Self {
        let results: Vec<_> = features.into_par_iter().map(decode_feature).collect();

        let mut collection = FeatureCollection::default();
        for (index, result) in results.into_iter().enumerate() {
            match result {
                Ok(feature) => collection.features.push(feature),
                Err(error) => {
                    warn!(index, error = %error, "skipping feature");
                    collection.rejected.push(Rejected { index, error });
                }
            }
        }
        debug!(
            features = collection.features.len(),
            rejected = collection.rejected.len(),
            "decoded feature collection"
        );
        collection
    }

    /// Title every feature from the property `key`. Features lacking the
    /// property keep their previous title; the number of misses is returned.
    pub fn update_titles(&mut self, key: &str) -> usize {
        let mut misses = 0;
        for (index, feature) in self.features.iter_mut().enumerate() {
            if let Err(error) = feature.update_title_from_property(key) {
                warn!(index, error = %error, "feature left untitled");
                misses += 1;
            }
        }
        misses
    }

    pub fn into_titled_shapes(self) -> Vec<TitledShape> {
        self.features
            .into_iter()
            .flat_map(Feature::into_renderable)
            .collect()
    }
}

impl FromStr for FeatureCollection {
    type Err = FeatureError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let value = serde_json::from_str(text)?;
        Self::from_value(value)
    }
}
