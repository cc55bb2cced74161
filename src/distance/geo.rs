//! Great-circle distance and the linear distance-to-time model.

use crate::models::Point;

/// Mean Earth radius in meters.
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// Assumed constant travel speed (about 40 km/h).
pub const SPEED_METERS_PER_SECOND: f64 = 11.11;

/// Haversine distance between two points, in meters.
///
/// # Examples
///
/// ```
/// use pickup_router::models::Point;
/// use pickup_router::distance::haversine_meters;
///
/// // One degree of longitude on the equator.
/// let d = haversine_meters(&Point::new(0.0, 0.0), &Point::new(0.0, 1.0));
/// assert!((d - 111_194.93).abs() < 0.01);
/// ```
pub fn haversine_meters(a: &Point, b: &Point) -> f64 {
    let phi1 = a.lat.to_radians();
    let phi2 = b.lat.to_radians();
    let dphi = (b.lat - a.lat).to_radians();
    let dlmb = (b.lng - a.lng).to_radians();

    let h = (dphi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (dlmb / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_METERS * h.sqrt().atan2((1.0 - h).sqrt())
}

/// Travel time in seconds for a distance in meters at
/// [`SPEED_METERS_PER_SECOND`].
pub fn travel_seconds(meters: f64) -> f64 {
    meters / SPEED_METERS_PER_SECOND
}
