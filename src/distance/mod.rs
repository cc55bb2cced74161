//! Distance and travel time.
//!
//! Provides the closed-form great-circle travel model and a dense travel
//! time matrix over depot and pickups.

mod geo;
mod matrix;

pub use geo::{haversine_meters, travel_seconds, EARTH_RADIUS_METERS, SPEED_METERS_PER_SECOND};
pub use matrix::TimeMatrix;
