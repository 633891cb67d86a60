use std::fmt;

use serde::Serialize;

use crate::processing::{mode, Mode};
use crate::types::TripRecord;

use super::Outcome;

/// A start → end station combination, counted as one key.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct StationPair {
    pub start: String,
    pub end: String,
}

impl fmt::Display for StationPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (start) and {} (end)", self.start, self.end)
    }
}

/// Most popular stations and trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StationReport {
    pub start_station: Mode<String>,
    pub end_station: Mode<String>,
    /// Mode over (start, end) pairs, not the two column modes combined.
    pub trip: Mode<StationPair>,
}

/// Most frequent start station, end station and start/end combination of `records`.
pub fn station_popularity(records: &[TripRecord]) -> Outcome<StationReport> {
    let start = mode(records.iter().map(|r| r.start_station.as_str()));
    let end = mode(records.iter().map(|r| r.end_station.as_str()));
    let trip = mode(
        records
            .iter()
            .map(|r| (r.start_station.as_str(), r.end_station.as_str())),
    );

    match (start, end, trip) {
        (Some(start), Some(end), Some(trip)) => Outcome::Computed(StationReport {
            start_station: start.map(str::to_owned),
            end_station: end.map(str::to_owned),
            trip: trip.map(|(s, e)| StationPair {
                start: s.to_owned(),
                end: e.to_owned(),
            }),
        }),
        _ => Outcome::NoData,
    }
}
