use super::error::GeometryError;
use super::geometry::{Coordinate, Geometry, GeometryKind, MultiPolygon, Polygon};
use serde_json::Value;

type DecodeResult<T> = Result<T, GeometryError>;

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn malformed(message: String) -> GeometryError {
    GeometryError::MalformedCoordinates(message)
}

fn array(value: &Value) -> DecodeResult<&[Value]> {
    value
        .as_array()
        .map(Vec::as_slice)
        .ok_or_else(|| malformed(format!("expected an array, found {}", describe(value))))
}

fn ordinate(value: &Value) -> DecodeResult<f64> {
    let number = value
        .as_f64()
        .ok_or_else(|| malformed(format!("expected a number, found {}", describe(value))))?;
    // unreachable through serde_json, which has no non-finite numbers
    if !number.is_finite() {
        return Err(malformed(format!("non-finite ordinate {}", number)));
    }
    Ok(number)
}

fn position(value: &Value) -> DecodeResult<Coordinate> {
    match array(value)? {
        [lon, lat] => Ok(Coordinate::new(ordinate(lon)?, ordinate(lat)?)),
        other => Err(malformed(format!(
            "a position needs exactly 2 numbers, found {}",
            other.len()
        ))),
    }
}

fn positions(value: &Value) -> DecodeResult<Vec<Coordinate>> {
    array(value)?.iter().map(position).collect()
}

fn lines(value: &Value) -> DecodeResult<Vec<Vec<Coordinate>>> {
    array(value)?.iter().map(positions).collect()
}

fn polygon(value: &Value) -> DecodeResult<Polygon> {
    Polygon::new(lines(value)?)
}

fn kind(value: &Value) -> DecodeResult<GeometryKind> {
    match value.get("type") {
        Some(Value::String(tag)) => tag.parse(),
        Some(other) => Err(GeometryError::UnrecognizedType(other.to_string())),
        None => Err(GeometryError::UnrecognizedType("<missing>".to_string())),
    }
}

/// Decode a GeoJSON geometry object.
///
/// The `type` tag decides how deep `coordinates` is walked. Any position that
/// is not a pair of finite numbers, or any nesting that does not match the
/// tag, fails the whole geometry.
///
/// # Example
///
/// ```
/// use geojson_shapes::decode::decode;
/// use geojson_shapes::geometry::{Coordinate, Geometry};
/// use serde_json::json;
///
/// let geometry = decode(&json!({"type": "Point", "coordinates": [13.4, 52.5]})).unwrap();
/// assert_eq!(geometry, Geometry::Point(Coordinate::new(13.4, 52.5)));
/// ```
pub fn decode(value: &Value) -> DecodeResult<Geometry> {
    let kind = kind(value)?;
    let coordinates = value
        .get("coordinates")
        .ok_or_else(|| malformed(format!("{} without coordinates", kind)))?;

    geometry(kind, coordinates).map_err(|error| match error {
        GeometryError::MalformedCoordinates(message) => malformed(format!(
            "{} expects positions nested {} deep: {}",
            kind,
            kind.depth(),
            message
        )),
        other => other,
    })
}

fn geometry(kind: GeometryKind, coordinates: &Value) -> DecodeResult<Geometry> {
    let geometry = match kind {
        GeometryKind::Point => Geometry::Point(position(coordinates)?),
        GeometryKind::LineString => Geometry::LineString(positions(coordinates)?),
        GeometryKind::MultiPoint => Geometry::MultiPoint(positions(coordinates)?),
        GeometryKind::Polygon => Geometry::Polygon(polygon(coordinates)?),
        GeometryKind::MultiLineString => Geometry::MultiLineString(lines(coordinates)?),
        GeometryKind::MultiPolygon => {
            let polygons = array(coordinates)?
                .iter()
                .map(polygon)
                .collect::<DecodeResult<_>>()?;
            Geometry::MultiPolygon(MultiPolygon::new(polygons))
        }
    };
    Ok(geometry)
}

pub fn decode_str(text: &str) -> DecodeResult<Geometry> {
    let value: Value = serde_json::from_str(text)?;
    decode(&value)
}
