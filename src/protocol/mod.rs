//! Text boundary of the solver.
//!
//! - [`reader`] — parses the line-based `key: value` input protocol
//! - [`writer`] — renders a [`RoutingInput`](crate::models::RoutingInput) back into that protocol
//! - [`report`] — JSON report types and distance/duration text formatting

pub mod reader;
pub mod report;
pub mod writer;

pub use reader::{parse_input, read_input};
pub use report::{format_miles, format_minutes, write_report, ItemOutput, Report, TripOutput};
pub use writer::{encode_input, sanitize_name};
