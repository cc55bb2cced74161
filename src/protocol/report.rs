//! JSON report emitted on standard output.
//!
//! ```text
//! { "trips": [ { "items": [ {"name", "distanceText", "durationText"}, ... ],
//!                "totalMeters", "totalSeconds",
//!                "returnDistanceText", "returnDurationText" }, ... ] }
//! ```

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::{TripLeg, TripReport};

/// Meters in one statute mile.
pub const METERS_PER_MILE: f64 = 1609.34;

/// Formats meters as miles with one decimal, e.g. `"1.4 mi"`.
///
/// # Examples
///
/// ```
/// use pickup_router::protocol::format_miles;
///
/// assert_eq!(format_miles(1609.34), "1.0 mi");
/// assert_eq!(format_miles(0.0), "0.0 mi");
/// ```
pub fn format_miles(meters: f64) -> String {
    format!("{:.1} mi", meters / METERS_PER_MILE)
}

/// Formats seconds as whole minutes, halves rounded away from zero.
///
/// # Examples
///
/// ```
/// use pickup_router::protocol::format_minutes;
///
/// assert_eq!(format_minutes(90.0), "2 min");
/// assert_eq!(format_minutes(89.0), "1 min");
/// ```
pub fn format_minutes(seconds: f64) -> String {
    format!("{} min", (seconds / 60.0).round() as i64)
}

/// One leg as presented to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemOutput {
    /// Destination pickup name.
    pub name: String,
    /// Distance text, e.g. `"0.7 mi"`.
    pub distance_text: String,
    /// Duration text, e.g. `"2 min"`.
    pub duration_text: String,
}

/// One trip as presented to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripOutput {
    /// Outbound and inter-stop legs.
    pub items: Vec<ItemOutput>,
    /// Rounded total distance including the return leg.
    pub total_meters: i64,
    /// Rounded total duration including the return leg.
    pub total_seconds: i64,
    /// Distance text of the return leg.
    pub return_distance_text: String,
    /// Duration text of the return leg.
    pub return_duration_text: String,
}

/// The whole document.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Report {
    /// Trips in the order they were built.
    pub trips: Vec<TripOutput>,
}

impl From<&TripLeg> for ItemOutput {
    fn from(leg: &TripLeg) -> Self {
        Self {
            name: leg.name.clone(),
            distance_text: format_miles(leg.meters),
            duration_text: format_minutes(leg.seconds),
        }
    }
}

impl From<&TripReport> for TripOutput {
    fn from(report: &TripReport) -> Self {
        Self {
            items: report.legs.iter().map(ItemOutput::from).collect(),
            total_meters: report.total_meters.round() as i64,
            total_seconds: report.total_seconds.round() as i64,
            return_distance_text: format_miles(report.return_meters),
            return_duration_text: format_minutes(report.return_seconds),
        }
    }
}

impl Report {
    /// Builds the presented document from unrounded trip reports.
    pub fn from_reports(reports: &[TripReport]) -> Self {
        Self {
            trips: reports.iter().map(TripOutput::from).collect(),
        }
    }
}

/// Writes `report` as pretty-printed JSON followed by a newline.
pub fn write_report<W: Write>(report: &Report, mut writer: W) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, report)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}
