//! Trip evaluation.
//!
//! Recomputes leg distances and durations for built trips directly from the
//! travel model, independent of the matrix the builders used.

mod metrics;

pub use metrics::TripMetrics;
