use thiserror::Error;

/// Failures while turning a GeoJSON geometry object into a [`Geometry`](super::geometry::Geometry).
#[derive(Debug, Error)]
pub enum GeometryError {
    /// The `type` member is missing or names none of the six geometry kinds.
    #[error("unrecognized geometry type: {0}")]
    UnrecognizedType(String),

    /// The `coordinates` member does not have the shape the type tag implies.
    #[error("malformed coordinates: {0}")]
    MalformedCoordinates(String),

    #[error("polygon has no rings")]
    EmptyPolygonRings,

    #[error("invalid json: {0}")]
    Json(#[from] serde_json::Error),
}

/// Failures at the feature level, wrapping geometry failures.
#[derive(Debug, Error)]
pub enum FeatureError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error("feature has no geometry")]
    MissingGeometry,

    #[error("feature has no property named {0:?}")]
    MissingPropertyKey(String),

    #[error("invalid geojson document: {0}")]
    InvalidDocument(String),

    #[error("invalid json: {0}")]
    Json(#[from] serde_json::Error),
}
