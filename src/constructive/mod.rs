//! Trip builders.
//!
//! - [`nearest_neighbor_trips`] — Capacitated greedy nearest-neighbor with split demand, O(n²) per trip
//! - [`input_order_trips`] — Input-order packing, split only when capacity runs out, O(n + total demand / capacity)

mod input_order;
mod nearest_neighbor;

pub use input_order::input_order_trips;
pub use nearest_neighbor::nearest_neighbor_trips;
