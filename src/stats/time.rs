use chrono::{Month, Weekday};
use serde::Serialize;

use crate::processing::filter::{MONTHS, WEEKDAYS};
use crate::processing::{mode, Mode};
use crate::types::TripRecord;

use super::Outcome;

/// Most frequent times of travel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeOfTravelReport {
    pub month: Mode<Month>,
    pub weekday: Mode<Weekday>,
    /// Hour of day, 0–23.
    pub start_hour: Mode<u32>,
}

/// Most frequent month, weekday and start hour of `records`.
pub fn time_of_travel(records: &[TripRecord]) -> Outcome<TimeOfTravelReport> {
    most_frequent_times(records).into()
}

fn most_frequent_times(records: &[TripRecord]) -> Option<TimeOfTravelReport> {
    let month = mode(records.iter().map(TripRecord::month))?;
    let weekday = mode(records.iter().map(TripRecord::weekday_index))?;
    let start_hour = mode(records.iter().map(TripRecord::start_hour))?;
    Some(TimeOfTravelReport {
        // `month()` is 1-based, `weekday_index()` Monday-based.
        month: month.map(|m| MONTHS[(m - 1) as usize]),
        weekday: weekday.map(|d| WEEKDAYS[d as usize]),
        start_hour,
    })
}

#[cfg(test)]
mod tests {
    use chrono::{Month, Weekday};

    use super::time_of_travel;
    use crate::processing::Mode;
    use crate::stats::Outcome;
    use crate::types::test_support::trip;

    #[test]
    fn months_and_weekdays_by_frequency() {
        // months [1, 1, 3], weekdays [Mon, Mon, Wed]
        let records = vec![
            trip("2017-01-02 08:00:00", 1.0),
            trip("2017-01-09 17:00:00", 1.0),
            trip("2017-03-08 17:00:00", 1.0),
        ];
        let report = time_of_travel(&records);
        let r = report.computed().unwrap();
        assert_eq!(r.month, Mode { value: Month::January, count: 2 });
        assert_eq!(r.weekday, Mode { value: Weekday::Mon, count: 2 });
        assert_eq!(r.start_hour, Mode { value: 17, count: 2 });
    }

    #[test]
    fn ties_pick_earliest_key() {
        // Sunday and Tuesday once each; hours 23 and 5 once each.
        let records = vec![
            trip("2017-05-07 23:00:00", 1.0),
            trip("2017-04-04 05:00:00", 1.0),
        ];
        let r = time_of_travel(&records);
        let r = r.computed().unwrap();
        assert_eq!(r.month.value, Month::April);
        assert_eq!(r.weekday.value, Weekday::Tue);
        assert_eq!(r.start_hour.value, 5);
    }

    #[test]
    fn empty_records_have_no_data() {
        assert_eq!(time_of_travel(&[]), Outcome::NoData);
    }
}
