//! Geographic point type.

use crate::distance::haversine_meters;

/// A location in degrees of latitude and longitude.
///
/// No bounds are enforced; any finite pair is accepted.
///
/// # Examples
///
/// ```
/// use pickup_router::models::Point;
///
/// let a = Point::new(0.0, 0.0);
/// let b = Point::new(0.0, 0.01);
/// assert!((a.distance_to(&b) - b.distance_to(&a)).abs() < 1e-9);
/// assert_eq!(a.distance_to(&a), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lng: f64,
}

impl Point {
    /// Creates a point from latitude and longitude in degrees.
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Great-circle distance to another point, in meters.
    pub fn distance_to(&self, other: &Point) -> f64 {
        haversine_meters(self, other)
    }
}
