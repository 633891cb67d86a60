//! Core data model types.
//!
//! A city's trip file is loaded into a [`TripDataSet`]: an ordered, immutable list of
//! [`TripRecord`]s plus the [`DatasetColumns`] describing which optional columns the file had.

use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};
use serde::Serialize;

/// One bike-share trip.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TripRecord {
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    /// Trip length in seconds, as stored in the source file (not recomputed from the timestamps).
    pub duration_seconds: f64,
    pub start_station: String,
    pub end_station: String,
    /// Free-form rider label. Only `"Subscriber"` and `"Customer"` are counted by reports.
    pub user_type: String,
    /// `None` when the cell is empty or the dataset has no gender column.
    pub gender: Option<String>,
    /// `None` when the cell is empty or the dataset has no birth-year column.
    pub birth_year: Option<i32>,
}

impl TripRecord {
    /// Calendar month of `start_time` (1–12).
    pub fn month(&self) -> u32 {
        self.start_time.month()
    }

    /// Day of week of `start_time`.
    pub fn weekday(&self) -> Weekday {
        self.start_time.weekday()
    }

    /// Day of week of `start_time`, Monday = 0 … Sunday = 6.
    pub fn weekday_index(&self) -> u32 {
        self.start_time.weekday().num_days_from_monday()
    }

    /// Hour of `start_time` (0–23).
    pub fn start_hour(&self) -> u32 {
        self.start_time.hour()
    }
}

/// Optional columns present in a loaded dataset.
///
/// Reports that depend on an optional column check these flags rather than
/// inspecting individual records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct DatasetColumns {
    pub gender: bool,
    pub birth_year: bool,
}

impl DatasetColumns {
    /// Both optional columns present.
    pub fn all() -> Self {
        Self {
            gender: true,
            birth_year: true,
        }
    }

    /// Neither optional column present.
    pub fn required_only() -> Self {
        Self::default()
    }
}

/// In-memory trip dataset for one city.
///
/// Records keep the source file's row order. Filtering produces a new dataset and never
/// touches the original.
#[derive(Debug, Clone, PartialEq)]
pub struct TripDataSet {
    /// Optional columns the source had.
    pub columns: DatasetColumns,
    records: Vec<TripRecord>,
}

impl TripDataSet {
    /// Create a dataset from column flags and records.
    pub fn new(columns: DatasetColumns, records: Vec<TripRecord>) -> Self {
        Self { columns, records }
    }

    /// Records in source order.
    pub fn records(&self) -> &[TripRecord] {
        &self.records
    }

    /// Number of records in the dataset.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Create a new dataset containing only records that match `predicate`.
    ///
    /// The returned dataset keeps the original column flags and relative order.
    pub fn filter_records<F>(&self, mut predicate: F) -> Self
    where
        F: FnMut(&TripRecord) -> bool,
    {
        let records = self
            .records
            .iter()
            .filter(|&r| predicate(r))
            .cloned()
            .collect();
        Self {
            columns: self.columns,
            records,
        }
    }

    /// Reduce (fold) all records into an accumulator value.
    pub fn reduce_records<A, F>(&self, init: A, reducer: F) -> A
    where
        F: FnMut(A, &TripRecord) -> A,
    {
        self.records.iter().fold(init, reducer)
    }
}
