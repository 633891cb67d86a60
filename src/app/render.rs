//! Plain-text rendering of reports and raw rows.

use std::io::Write;

use crate::catalog::City;
use crate::error::BikeshareResult;
use crate::processing::filter::weekday_name;
use crate::stats::{Outcome, ReportKind, ReportSet};
use crate::types::TripRecord;

const RULE: &str = "----------------------------------------";

/// Write every report of `reports` for `city`.
pub fn render_reports<W: Write>(out: &mut W, city: City, reports: &ReportSet) -> BikeshareResult<()> {
    writeln!(out, "{} trips selected in {}.", reports.record_count, city)?;

    section(out, ReportKind::TimeOfTravel, &reports.time_of_travel, |out, r| {
        writeln!(out, "The most common month is: {} ({} trips)", r.month.value.name(), r.month.count)?;
        writeln!(
            out,
            "The most common day of the week is: {} ({} trips)",
            weekday_name(r.weekday.value),
            r.weekday.count
        )?;
        writeln!(
            out,
            "The most common start hour is: {} ({} trips)",
            r.start_hour.value, r.start_hour.count
        )
    })?;

    section(out, ReportKind::Stations, &reports.stations, |out, r| {
        writeln!(out, "The most common start station is: {}", r.start_station.value)?;
        writeln!(out, "The most common end station is: {}", r.end_station.value)?;
        writeln!(
            out,
            "The most common station combination is: {} ({} trips)",
            r.trip.value, r.trip.count
        )
    })?;

    section(out, ReportKind::Durations, &reports.durations, |out, r| {
        writeln!(out, "The total travel time is {:.4} hours.", r.total_hours)?;
        writeln!(out, "The mean travel time is {:.4} hours.", r.mean_hours)
    })?;

    section(out, ReportKind::UserTypes, &reports.user_types, |out, r| {
        writeln!(out, "The number of subscribers in {city} is: {}", r.subscribers)?;
        writeln!(out, "The number of customers in {city} is: {}", r.customers)
    })?;

    section(out, ReportKind::Genders, &reports.genders, |out, r| {
        writeln!(out, "The number of male users in {city} is: {}", r.male)?;
        writeln!(out, "The number of female users in {city} is: {}", r.female)
    })?;

    section(out, ReportKind::BirthYears, &reports.birth_years, |out, r| {
        writeln!(out, "The earliest birth year of users in {city} is: {}", r.earliest)?;
        writeln!(out, "The most recent birth year of users in {city} is: {}", r.most_recent)?;
        writeln!(
            out,
            "The most common birth year of users in {city} is: {}",
            r.most_common.value
        )
    })?;

    writeln!(out, "{RULE}")?;
    Ok(())
}

fn section<W, R, F>(out: &mut W, kind: ReportKind, outcome: &Outcome<R>, body: F) -> BikeshareResult<()>
where
    W: Write,
    F: FnOnce(&mut W, &R) -> std::io::Result<()>,
{
    writeln!(out, "{RULE}")?;
    writeln!(out, "Calculating {kind}...")?;
    match outcome {
        Outcome::Computed(r) => body(out, r)?,
        Outcome::NoData => writeln!(out, "No data for this selection.")?,
        Outcome::NotAvailable { reason } => writeln!(out, "Sorry, {reason}.")?,
    }
    Ok(())
}

/// Write `window` as one JSON object per record.
pub fn render_window<W: Write>(out: &mut W, window: &[TripRecord]) -> BikeshareResult<()> {
    for record in window {
        serde_json::to_writer(&mut *out, record)?;
        writeln!(out)?;
    }
    Ok(())
}
