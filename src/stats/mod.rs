//! Descriptive statistics over a (possibly filtered) [`TripDataSet`].
//!
//! There are six report groups, each a pure function of its input:
//!
//! | Report | Function | Needs |
//! | --- | --- | --- |
//! | most frequent month / weekday / start hour | [`time_of_travel`] | records |
//! | most popular start, end and start→end trip | [`station_popularity`] | records |
//! | total and mean trip duration | [`trip_durations`] | records |
//! | subscriber / customer counts | [`user_types`] | records |
//! | male / female counts | [`genders`] | `Gender` column |
//! | earliest / most recent / most common birth year | [`birth_years`] | `Birth Year` column |
//!
//! None of them fail. Empty input yields [`Outcome::NoData`]; a report whose column the
//! dataset lacks yields [`Outcome::NotAvailable`].

pub mod duration;
pub mod stations;
pub mod time;
pub mod users;

use std::fmt;

use serde::Serialize;

use crate::types::TripDataSet;

pub use duration::{trip_durations, DurationReport};
pub use stations::{station_popularity, StationPair, StationReport};
pub use time::{time_of_travel, TimeOfTravelReport};
pub use users::{
    birth_years, genders, user_types, BirthYearReport, GenderReport, UserTypeReport, CUSTOMER,
    FEMALE, MALE, SUBSCRIBER,
};

/// Result of one report.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome<R> {
    /// The report was computed.
    Computed(R),
    /// The input had no usable records.
    NoData,
    /// The dataset does not carry the column this report needs.
    NotAvailable { reason: String },
}

impl<R> Outcome<R> {
    pub fn is_computed(&self) -> bool {
        matches!(self, Self::Computed(_))
    }

    /// The computed report, if any.
    pub fn computed(&self) -> Option<&R> {
        match self {
            Self::Computed(r) => Some(r),
            _ => None,
        }
    }

    pub(crate) fn not_available(column: &str) -> Self {
        Self::NotAvailable {
            reason: format!("{column} is not available for this dataset"),
        }
    }
}

impl<R> From<Option<R>> for Outcome<R> {
    fn from(value: Option<R>) -> Self {
        match value {
            Some(r) => Self::Computed(r),
            None => Self::NoData,
        }
    }
}

/// Identifies a report group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportKind {
    TimeOfTravel,
    Stations,
    Durations,
    UserTypes,
    Genders,
    BirthYears,
}

impl ReportKind {
    pub const ALL: [ReportKind; 6] = [
        ReportKind::TimeOfTravel,
        ReportKind::Stations,
        ReportKind::Durations,
        ReportKind::UserTypes,
        ReportKind::Genders,
        ReportKind::BirthYears,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Self::TimeOfTravel => "The Most Frequent Times of Travel",
            Self::Stations => "The Most Popular Stations and Trip",
            Self::Durations => "Trip Duration",
            Self::UserTypes => "User Types",
            Self::Genders => "Gender",
            Self::BirthYears => "Birth Year",
        }
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// All six reports for one filtered dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportSet {
    /// Number of records the reports were computed over.
    pub record_count: usize,
    pub time_of_travel: Outcome<TimeOfTravelReport>,
    pub stations: Outcome<StationReport>,
    pub durations: Outcome<DurationReport>,
    pub user_types: Outcome<UserTypeReport>,
    pub genders: Outcome<GenderReport>,
    pub birth_years: Outcome<BirthYearReport>,
}

/// Compute every report sequentially.
///
/// See [`crate::execution::ReportEngine`] for a parallel, observable version.
pub fn compute_all_reports(dataset: &TripDataSet) -> ReportSet {
    let records = dataset.records();
    ReportSet {
        record_count: dataset.len(),
        time_of_travel: time_of_travel(records),
        stations: station_popularity(records),
        durations: trip_durations(records),
        user_types: user_types(records),
        genders: genders(dataset),
        birth_years: birth_years(dataset),
    }
}
