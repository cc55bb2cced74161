//! # pickup-router
//!
//! Assigns geolocated pickups with integer demand to capacity-limited trips
//! that start and end at a single depot, and reports each trip's legs with
//! human-readable distance and duration text.
//!
//! ## Modules
//!
//! - [`models`] — Domain types (Point, Pickup, RoutingInput, Trip, TripReport)
//! - [`distance`] — Haversine travel model and travel time matrix
//! - [`constructive`] — Trip builders (greedy nearest-neighbor, input order)
//! - [`evaluation`] — Per-trip leg metrics
//! - [`solver`] — Pipeline tying builders and metrics together
//! - [`protocol`] — Line-based input protocol and JSON report
//!
//! ## Example
//!
//! ```
//! let input = "depot: 0,0\ncapacity: 3\npickup: P1|0|0.01|3\npickup: P2|0|0.02|3\n";
//! let mut out = Vec::new();
//! let report = pickup_router::run(input.as_bytes(), &mut out).unwrap();
//! assert_eq!(report.trips.len(), 2);
//! ```

use std::io::{BufRead, Write};

pub mod constructive;
pub mod distance;
pub mod error;
pub mod evaluation;
pub mod models;
pub mod protocol;
pub mod solver;

pub use error::{Error, Result};

use protocol::{read_input, write_report, Report};

/// Reads protocol input to end of stream, plans trips and writes the JSON
/// report. Nothing is written if the input fails to parse.
pub fn run<R: BufRead, W: Write>(input: R, output: W) -> Result<Report> {
    let routing_input = read_input(input)?;
    let plan = solver::solve(&routing_input);
    let report = Report::from_reports(&plan.reports);
    write_report(&report, output)?;
    Ok(report)
}
