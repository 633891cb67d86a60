use serde::Serialize;

use crate::processing::{reduce_records, NumericColumn, ReduceOp};
use crate::types::TripRecord;

use super::Outcome;

const SECONDS_PER_HOUR: f64 = 3600.0;

/// Total and mean trip duration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DurationReport {
    pub trips: usize,
    pub total_seconds: f64,
    pub total_hours: f64,
    pub mean_seconds: f64,
    pub mean_hours: f64,
}

/// Sum and mean of `duration_seconds`, also expressed in hours.
pub fn trip_durations(records: &[TripRecord]) -> Outcome<DurationReport> {
    let total = reduce_records(records, NumericColumn::TripDuration, ReduceOp::Sum);
    let mean = reduce_records(records, NumericColumn::TripDuration, ReduceOp::Mean);
    match (total, mean) {
        (Some(total_seconds), Some(mean_seconds)) => Outcome::Computed(DurationReport {
            trips: records.len(),
            total_seconds,
            total_hours: total_seconds / SECONDS_PER_HOUR,
            mean_seconds,
            mean_hours: mean_seconds / SECONDS_PER_HOUR,
        }),
        _ => Outcome::NoData,
    }
}
