//! Railway PNR status processing: validate a booking, classify each
//! passenger's current berth code and summarise the result.
//! Pure and synchronous; nothing here does IO or keeps state between calls.

pub mod config;
pub mod errors;
pub mod model;
pub mod render;
pub mod report;
pub mod types;
pub mod validate;

pub use crate::errors::ValidationError;
pub use crate::model::StatusLabel;
pub use crate::report::{chart_prepared, format_passenger_name, format_pnr, format_train_info};
pub use crate::types::{BookingRecord, PassengerRecord, PassengerReport, PnrReport, Summary, Train};
pub use crate::validate::{is_valid_pnr, validate_booking, validate_record};

use crate::report::build_report;
use serde_json::Value;

/// Validates `raw` and builds its report, or returns `None` when the record
/// is structurally invalid.
///
/// Passengers whose current code is not recognised are not an error: they
/// get `status_label: None` and do not count toward any label.
pub fn process_railway_pnr(raw: &Value) -> Option<PnrReport> {
    try_process_railway_pnr(raw).ok()
}

pub fn try_process_railway_pnr(raw: &Value) -> Result<PnrReport, ValidationError> {
    let record = validate_booking(raw).map_err(|e| {
        tracing::debug!(error = %e, "rejected booking record");
        e
    })?;
    Ok(finish(&record))
}

/// Typed entry point for records that were deserialized by the caller.
pub fn process_booking(record: &BookingRecord) -> Result<PnrReport, ValidationError> {
    validate_record(record)?;
    Ok(finish(record))
}

fn finish(record: &BookingRecord) -> PnrReport {
    let report = build_report(record);
    tracing::debug!(
        pnr = %report.pnr_formatted,
        passengers = report.summary.total_passengers,
        chart_prepared = report.chart_prepared,
        "built pnr report"
    );
    report
}
