//! Rider statistics: user types, genders and birth years.

use serde::Serialize;

use crate::processing::{mode, reduce_records, Mode, NumericColumn, ReduceOp};
use crate::types::{TripDataSet, TripRecord};

use super::Outcome;

pub const SUBSCRIBER: &str = "Subscriber";
pub const CUSTOMER: &str = "Customer";
pub const MALE: &str = "Male";
pub const FEMALE: &str = "Female";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UserTypeReport {
    pub subscribers: usize,
    pub customers: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GenderReport {
    pub male: usize,
    pub female: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BirthYearReport {
    /// Oldest rider.
    pub earliest: i32,
    /// Youngest rider.
    pub most_recent: i32,
    pub most_common: Mode<i32>,
}

/// Subscriber and customer counts. Any other label is ignored.
pub fn user_types(records: &[TripRecord]) -> Outcome<UserTypeReport> {
    if records.is_empty() {
        return Outcome::NoData;
    }
    let (subscribers, customers) =
        records
            .iter()
            .fold((0, 0), |(s, c), r| match r.user_type.as_str() {
                SUBSCRIBER => (s + 1, c),
                CUSTOMER => (s, c + 1),
                _ => (s, c),
            });
    Outcome::Computed(UserTypeReport {
        subscribers,
        customers,
    })
}

/// Male and female counts; missing and other values are ignored.
pub fn genders(dataset: &TripDataSet) -> Outcome<GenderReport> {
    if !dataset.columns.gender {
        return Outcome::not_available("gender");
    }
    if dataset.is_empty() {
        return Outcome::NoData;
    }
    let report = dataset.reduce_records(GenderReport { male: 0, female: 0 }, |mut acc, r| {
        match r.gender.as_deref() {
            Some(MALE) => acc.male += 1,
            Some(FEMALE) => acc.female += 1,
            _ => {}
        }
        acc
    });
    Outcome::Computed(report)
}

/// Earliest, most recent and most common birth year over records that have one.
pub fn birth_years(dataset: &TripDataSet) -> Outcome<BirthYearReport> {
    if !dataset.columns.birth_year {
        return Outcome::not_available("birth year");
    }
    let records = dataset.records();
    let earliest = reduce_records(records, NumericColumn::BirthYear, ReduceOp::Min);
    let most_recent = reduce_records(records, NumericColumn::BirthYear, ReduceOp::Max);
    let most_common = mode(records.iter().filter_map(|r| r.birth_year));

    match (earliest, most_recent, most_common) {
        // Birth years are stored as i32, so the f64 extrema convert back exactly.
        (Some(earliest), Some(most_recent), Some(most_common)) => {
            Outcome::Computed(BirthYearReport {
                earliest: earliest as i32,
                most_recent: most_recent as i32,
                most_common,
            })
        }
        _ => Outcome::NoData,
    }
}
