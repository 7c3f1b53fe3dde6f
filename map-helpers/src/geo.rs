//! Coordinate and pixel types shared by the option structs.

use serde::{Deserialize, Serialize};

/// Geographic coordinate in degrees.
///
/// Serialized as a `[lat, lng]` pair, the same shape marker and view
/// positions take in JSON configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct LatLng {
    /// Latitude.
    pub lat: f64,
    /// Longitude.
    pub lng: f64,
}

impl LatLng {
    /// Creates a new coordinate.
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Returns true if both components are finite numbers.
    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }
}

impl From<[f64; 2]> for LatLng {
    fn from([lat, lng]: [f64; 2]) -> Self {
        Self { lat, lng }
    }
}

impl From<LatLng> for [f64; 2] {
    fn from(value: LatLng) -> Self {
        [value.lat, value.lng]
    }
}

impl From<(f64, f64)> for LatLng {
    fn from((lat, lng): (f64, f64)) -> Self {
        Self { lat, lng }
    }
}

/// Pair of pixel values, used for sizes and anchor offsets.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Point {
    /// Horizontal component.
    pub x: f64,
    /// Vertical component.
    pub y: f64,
}

impl Point {
    /// Creates a new point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Self {
        Self { x, y }
    }
}

impl From<Point> for [f64; 2] {
    fn from(value: Point) -> Self {
        [value.x, value.y]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latlng_serializes_as_pair() {
        let value = serde_json::to_value(LatLng::new(28.34, 115.56)).unwrap();
        assert_eq!(value, serde_json::json!([28.34, 115.56]));

        let parsed: LatLng = serde_json::from_str("[1.5, -2.0]").unwrap();
        assert_eq!(parsed, LatLng::new(1.5, -2.0));
    }

    #[test]
    fn non_finite_coordinates() {
        assert!(LatLng::new(0.0, 0.0).is_finite());
        assert!(!LatLng::new(f64::NAN, 0.0).is_finite());
        assert!(!LatLng::new(0.0, f64::INFINITY).is_finite());
    }

    #[test]
    fn point_from_pair() {
        let point: Point = serde_json::from_str("[25, 41]").unwrap();
        assert_eq!(point, Point::new(25.0, 41.0));
    }
}
