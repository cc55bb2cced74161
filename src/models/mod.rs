//! Domain model types for pickup trip construction.
//!
//! Provides the core values: geographic points, pickups with integer demand,
//! the parsed routing input, trips as ordered stop sets, and the per-trip
//! leg reports produced from them.

mod input;
mod pickup;
mod point;
mod report;
mod trip;

pub use input::RoutingInput;
pub use pickup::Pickup;
pub use point::Point;
pub use report::{TripLeg, TripReport};
pub use trip::{Stop, Trip};
