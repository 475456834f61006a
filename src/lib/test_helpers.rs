use super::geometry::{Coordinate, Polygon};

pub fn ring(coordinates: &[(f64, f64)]) -> Vec<Coordinate> {
    coordinates.iter().map(|&c| c.into()).collect()
}

/// Closed axis aligned square ring with its south west corner at `(lon, lat)`.
pub fn square_ring(lon: f64, lat: f64, size: f64) -> Vec<Coordinate> {
    ring(&[
        (lon, lat),
        (lon, lat + size),
        (lon + size, lat + size),
        (lon + size, lat),
        (lon, lat),
    ])
}

pub fn square(lon: f64, lat: f64, size: f64) -> Polygon {
    Polygon::new(vec![square_ring(lon, lat, size)]).unwrap()
}

pub fn square_with_hole(lon: f64, lat: f64, size: f64, hole: Vec<Coordinate>) -> Polygon {
    Polygon::new(vec![square_ring(lon, lat, size), hole]).unwrap()
}
