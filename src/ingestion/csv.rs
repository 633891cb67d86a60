//! CSV trip-file parsing.

use std::path::Path;

use chrono::NaiveDateTime;

use crate::error::{BikeshareError, BikeshareResult};
use crate::types::{DatasetColumns, TripDataSet, TripRecord};

pub const START_TIME: &str = "Start Time";
pub const END_TIME: &str = "End Time";
pub const TRIP_DURATION: &str = "Trip Duration";
pub const START_STATION: &str = "Start Station";
pub const END_STATION: &str = "End Station";
pub const USER_TYPE: &str = "User Type";
pub const GENDER: &str = "Gender";
pub const BIRTH_YEAR: &str = "Birth Year";

/// Columns every trip file must have.
pub const REQUIRED_COLUMNS: [&str; 6] = [
    START_TIME,
    END_TIME,
    TRIP_DURATION,
    START_STATION,
    END_STATION,
    USER_TYPE,
];

const TIMESTAMP_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

/// Load a trip CSV file into an in-memory [`TripDataSet`].
///
/// Rules:
///
/// - The file must have headers, and the headers must contain all [`REQUIRED_COLUMNS`]
///   (order can differ, extra columns are ignored).
/// - `Gender` and `Birth Year` are optional; their presence is recorded in
///   [`TripDataSet::columns`].
/// - The first row that fails to parse aborts the load.
pub fn load_trips_from_path(path: impl AsRef<Path>) -> BikeshareResult<TripDataSet> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)?;
    load_trips_from_reader(&mut rdr)
}

/// Header positions of the columns we read.
struct ColumnIndex {
    start_time: usize,
    end_time: usize,
    duration: usize,
    start_station: usize,
    end_station: usize,
    user_type: usize,
    gender: Option<usize>,
    birth_year: Option<usize>,
}

impl ColumnIndex {
    fn from_headers(headers: &csv::StringRecord) -> BikeshareResult<Self> {
        let find = |name: &str| headers.iter().position(|h| h.trim() == name);
        let require = |name: &str| {
            find(name).ok_or_else(|| BikeshareError::DataSource {
                message: format!(
                    "missing required column '{name}'. headers={:?}",
                    headers.iter().collect::<Vec<_>>()
                ),
            })
        };

        Ok(Self {
            start_time: require(START_TIME)?,
            end_time: require(END_TIME)?,
            duration: require(TRIP_DURATION)?,
            start_station: require(START_STATION)?,
            end_station: require(END_STATION)?,
            user_type: require(USER_TYPE)?,
            gender: find(GENDER),
            birth_year: find(BIRTH_YEAR),
        })
    }

    fn columns(&self) -> DatasetColumns {
        DatasetColumns {
            gender: self.gender.is_some(),
            birth_year: self.birth_year.is_some(),
        }
    }
}

/// Load trips from an existing CSV reader.
pub fn load_trips_from_reader<R: std::io::Read>(
    rdr: &mut csv::Reader<R>,
) -> BikeshareResult<TripDataSet> {
    let headers = rdr.headers()?.clone();
    let idx = ColumnIndex::from_headers(&headers)?;

    let mut records = Vec::new();
    for (row_idx0, result) in rdr.records().enumerate() {
        // 1-based line number for users; +1 again because the header is line 1.
        let user_row = row_idx0 + 2;
        let record = result?;
        let cell = |i: usize| record.get(i).unwrap_or("");

        records.push(TripRecord {
            start_time: parse_timestamp(user_row, START_TIME, cell(idx.start_time))?,
            end_time: parse_timestamp(user_row, END_TIME, cell(idx.end_time))?,
            duration_seconds: parse_duration(user_row, cell(idx.duration))?,
            start_station: parse_station(user_row, START_STATION, cell(idx.start_station))?,
            end_station: parse_station(user_row, END_STATION, cell(idx.end_station))?,
            user_type: cell(idx.user_type).trim().to_owned(),
            gender: idx.gender.and_then(|i| non_empty(cell(i))),
            birth_year: match idx.birth_year {
                Some(i) => parse_birth_year(user_row, cell(i))?,
                None => None,
            },
        });
    }

    Ok(TripDataSet::new(idx.columns(), records))
}

fn parse_error(row: usize, column: &str, raw: &str, message: impl Into<String>) -> BikeshareError {
    BikeshareError::ParseError {
        row,
        column: column.to_owned(),
        raw: raw.to_owned(),
        message: message.into(),
    }
}

fn non_empty(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

fn parse_timestamp(row: usize, column: &str, raw: &str) -> BikeshareResult<NaiveDateTime> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(parse_error(row, column, raw, "empty value for required column"));
    }
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
        .ok_or_else(|| parse_error(row, column, raw, "expected timestamp like 2017-01-01 09:07:57"))
}

fn parse_duration(row: usize, raw: &str) -> BikeshareResult<f64> {
    let v = raw
        .trim()
        .parse::<f64>()
        .map_err(|e| parse_error(row, TRIP_DURATION, raw, e.to_string()))?;
    if !v.is_finite() {
        return Err(parse_error(row, TRIP_DURATION, raw, "duration must be a finite number"));
    }
    Ok(v)
}

fn parse_station(row: usize, column: &str, raw: &str) -> BikeshareResult<String> {
    non_empty(raw).ok_or_else(|| parse_error(row, column, raw, "empty value for required column"))
}

/// Birth years are written either as integers or as whole floats (`1992.0`).
fn parse_birth_year(row: usize, raw: &str) -> BikeshareResult<Option<i32>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    if let Ok(v) = trimmed.parse::<i32>() {
        return Ok(Some(v));
    }
    let v = trimmed
        .parse::<f64>()
        .map_err(|e| parse_error(row, BIRTH_YEAR, raw, e.to_string()))?;
    if v.fract() != 0.0 || v < f64::from(i32::MIN) || v > f64::from(i32::MAX) {
        return Err(parse_error(row, BIRTH_YEAR, raw, "expected a whole year"));
    }
    Ok(Some(v as i32))
}

#[cfg(test)]
mod tests {
    use super::{parse_birth_year, parse_timestamp};

    #[test]
    fn timestamps_accept_common_layouts() {
        let expected = "2017-01-01 09:07:57";
        for raw in [
            "2017-01-01 09:07:57",
            "2017-01-01 09:07:57.000",
            "2017-01-01T09:07:57",
            "01/01/2017 09:07:57",
        ] {
            let ts = parse_timestamp(2, "Start Time", raw).unwrap();
            assert_eq!(ts.format("%Y-%m-%d %H:%M:%S").to_string(), expected, "raw={raw}");
        }
        let minutes = parse_timestamp(2, "Start Time", "1/1/2017 9:07").unwrap();
        assert_eq!(minutes.format("%H:%M").to_string(), "09:07");
    }

    #[test]
    fn timestamps_reject_garbage() {
        let err = parse_timestamp(7, "End Time", "yesterday").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("row 7"));
        assert!(msg.contains("column 'End Time'"));
    }

    #[test]
    fn birth_year_forms() {
        assert_eq!(parse_birth_year(2, "").unwrap(), None);
        assert_eq!(parse_birth_year(2, "1992").unwrap(), Some(1992));
        assert_eq!(parse_birth_year(2, "1992.0").unwrap(), Some(1992));
        assert!(parse_birth_year(2, "1992.5").is_err());
        assert!(parse_birth_year(2, "ninety").is_err());
    }
}
