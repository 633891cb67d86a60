//! Month / weekday filtering for [`crate::types::TripDataSet`].

use chrono::{Month, Weekday};
use serde::Serialize;

use crate::types::{TripDataSet, TripRecord};

/// Calendar months in order, January first.
pub const MONTHS: [Month; 12] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
    Month::July,
    Month::August,
    Month::September,
    Month::October,
    Month::November,
    Month::December,
];

/// Weekdays in order, Monday first (index matches [`TripRecord::weekday_index`]).
pub const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Month constraint: no filter, or a single calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum MonthFilter {
    #[default]
    All,
    Only(Month),
}

impl MonthFilter {
    pub fn matches(&self, record: &TripRecord) -> bool {
        match self {
            Self::All => true,
            Self::Only(m) => record.month() == m.number_from_month(),
        }
    }

    /// Parse `all` or a full month name (case-insensitive). Any of the twelve months is
    /// accepted here; months missing from a dataset simply filter to nothing.
    pub fn parse(input: &str) -> Option<Self> {
        let trimmed = input.trim();
        if trimmed.eq_ignore_ascii_case("all") {
            return Some(Self::All);
        }
        month_from_name(trimmed).map(Self::Only)
    }
}

/// Weekday constraint: no filter, or a single day of the week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum DayFilter {
    #[default]
    All,
    Only(Weekday),
}

impl DayFilter {
    pub fn matches(&self, record: &TripRecord) -> bool {
        match self {
            Self::All => true,
            Self::Only(d) => record.weekday_index() == d.num_days_from_monday(),
        }
    }

    /// Parse `all` or a full weekday name (case-insensitive).
    pub fn parse(input: &str) -> Option<Self> {
        let trimmed = input.trim();
        if trimmed.eq_ignore_ascii_case("all") {
            return Some(Self::All);
        }
        weekday_from_name(trimmed).map(Self::Only)
    }
}

/// Full English month name to [`Month`], case-insensitive.
pub fn month_from_name(name: &str) -> Option<Month> {
    MONTHS
        .iter()
        .copied()
        .find(|m| m.name().eq_ignore_ascii_case(name))
}

/// Full English weekday name to [`Weekday`], case-insensitive.
pub fn weekday_from_name(name: &str) -> Option<Weekday> {
    WEEKDAYS
        .iter()
        .copied()
        .find(|d| weekday_name(*d).eq_ignore_ascii_case(name))
}

/// Full English name of a weekday, e.g. `"Monday"`.
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Returns a new [`TripDataSet`] with the records that satisfy both constraints.
///
/// Relative order is preserved and `dataset` is left untouched.
pub fn apply_filters(dataset: &TripDataSet, month: MonthFilter, day: DayFilter) -> TripDataSet {
    let out = dataset.filter_records(|r| month.matches(r) && day.matches(r));
    log::debug!(
        "filter month={month:?} day={day:?}: {} of {} records kept",
        out.len(),
        dataset.len()
    );
    out
}
