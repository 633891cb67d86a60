use chrono::{Month, Weekday};

use bikeshare_stats::catalog::{City, CityCatalog};
use bikeshare_stats::execution::{ExecutionOptions, ReportEngine};
use bikeshare_stats::ingestion::{load_city, LoadOptions};
use bikeshare_stats::processing::{apply_filters, mode, DayFilter, Mode, MonthFilter};
use bikeshare_stats::stats::{
    compute_all_reports, BirthYearReport, GenderReport, Outcome, StationPair, UserTypeReport,
};
use bikeshare_stats::types::TripDataSet;

fn load(city: City) -> TripDataSet {
    let opts = LoadOptions {
        catalog: CityCatalog::new("tests/fixtures"),
        ..Default::default()
    };
    load_city(city, &opts).unwrap()
}

fn round4(v: f64) -> f64 {
    (v * 10_000.0).round() / 10_000.0
}

#[test]
fn chicago_full_report() {
    let ds = load(City::Chicago);
    let reports = compute_all_reports(&ds);
    assert_eq!(reports.record_count, 10);

    let time = reports.time_of_travel.computed().unwrap();
    // January and June tie with three trips each; the earlier month wins.
    assert_eq!(time.month.value, Month::January);
    assert_eq!(time.month.count, 3);
    assert_eq!(time.weekday.value, Weekday::Fri);
    assert_eq!(time.weekday.count, 3);
    // 9, 14 and 18 o'clock tie with two trips each.
    assert_eq!(time.start_hour.value, 9);

    let stations = reports.stations.computed().unwrap();
    assert_eq!(stations.start_station.value, "Wood St & Hubbard St");
    assert_eq!(stations.end_station.value, "Damen Ave & Chicago Ave");
    assert_eq!(
        stations.trip.value,
        StationPair {
            start: "Wood St & Hubbard St".to_string(),
            end: "Damen Ave & Chicago Ave".to_string(),
        }
    );
    assert_eq!(stations.trip.count, 3);

    let durations = reports.durations.computed().unwrap();
    assert_eq!(durations.total_seconds, 9662.0);
    assert_eq!(durations.mean_seconds, 966.2);
    assert_eq!(round4(durations.total_hours), 2.6839);
    assert_eq!(round4(durations.mean_hours), 0.2684);

    assert_eq!(
        reports.user_types,
        Outcome::Computed(UserTypeReport {
            subscribers: 9,
            customers: 1
        })
    );
    assert_eq!(
        reports.genders,
        Outcome::Computed(GenderReport { male: 7, female: 2 })
    );

    let births = reports.birth_years.computed().unwrap();
    assert_eq!((births.earliest, births.most_recent), (1975, 1992));
    assert_eq!(births.most_common.value, 1990);
    assert_eq!(births.most_common.count, 3);
}

#[test]
fn new_york_report_ignores_blank_labels() {
    let ds = load(City::NewYorkCity);
    let reports = compute_all_reports(&ds);

    assert_eq!(
        reports.user_types,
        Outcome::Computed(UserTypeReport {
            subscribers: 6,
            customers: 1
        })
    );
    assert_eq!(
        reports.genders,
        Outcome::Computed(GenderReport { male: 5, female: 1 })
    );
    assert_eq!(
        reports.birth_years,
        Outcome::Computed(BirthYearReport {
            earliest: 1981,
            most_recent: 1998,
            most_common: Mode {
                value: 1986,
                count: 2
            },
        })
    );

    let trip = &reports.stations.computed().unwrap().trip;
    assert_eq!(trip.value.to_string(), "1 Ave & E 44 St (start) and E 53 St & 3 Ave (end)");
}

#[test]
fn washington_omits_demographics_only() {
    let ds = load(City::Washington);
    let reports = compute_all_reports(&ds);

    assert!(reports.time_of_travel.is_computed());
    assert!(reports.stations.is_computed());
    assert_eq!(
        reports.user_types,
        Outcome::Computed(UserTypeReport {
            subscribers: 4,
            customers: 1
        })
    );
    let durations = reports.durations.computed().unwrap();
    assert_eq!(round4(durations.total_seconds), 4905.634);

    match &reports.genders {
        Outcome::NotAvailable { reason } => assert_eq!(reason, "gender is not available for this dataset"),
        other => panic!("unexpected {other:?}"),
    }
    match &reports.birth_years {
        Outcome::NotAvailable { reason } => {
            assert_eq!(reason, "birth year is not available for this dataset")
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn filtered_selection_reports() {
    let ds = load(City::Chicago);

    let june_fridays = apply_filters(&ds, MonthFilter::Only(Month::June), DayFilter::Only(Weekday::Fri));
    assert_eq!(june_fridays.len(), 2);
    let reports = compute_all_reports(&june_fridays);
    assert_eq!(reports.record_count, 2);
    let durations = reports.durations.computed().unwrap();
    assert_eq!(durations.total_seconds, 321.0 + 269.0);

    let january_mondays =
        apply_filters(&ds, MonthFilter::Only(Month::January), DayFilter::Only(Weekday::Mon));
    assert!(january_mondays.is_empty());
    let empty = compute_all_reports(&january_mondays);
    assert_eq!(empty.time_of_travel, Outcome::NoData);
    assert_eq!(empty.stations, Outcome::NoData);
    assert_eq!(empty.durations, Outcome::NoData);
    assert_eq!(empty.user_types, Outcome::NoData);
    assert_eq!(empty.genders, Outcome::NoData);
    assert_eq!(empty.birth_years, Outcome::NoData);
}

#[test]
fn filters_yield_ordered_matching_subsequences() {
    let ds = load(City::Chicago);
    let months = [MonthFilter::All]
        .into_iter()
        .chain(bikeshare_stats::selection::SELECTABLE_MONTHS.map(MonthFilter::Only));
    for month in months {
        for day in [DayFilter::All, DayFilter::Only(Weekday::Mon), DayFilter::Only(Weekday::Fri)] {
            let out = apply_filters(&ds, month, day);

            // Subsequence of the source, in source order.
            let mut source = ds.records().iter();
            for r in out.records() {
                assert!(source.any(|s| s == r), "out of order for {month:?}/{day:?}");
            }

            for r in out.records() {
                if let MonthFilter::Only(m) = month {
                    assert_eq!(r.month(), m.number_from_month());
                }
                if let DayFilter::Only(d) = day {
                    assert_eq!(r.weekday(), d);
                }
            }
        }
    }
}

#[test]
fn start_hour_mode_is_idempotent() {
    let ds = load(City::NewYorkCity);
    let first = mode(ds.records().iter().map(|r| r.start_hour())).unwrap();
    let narrowed = ds.filter_records(|r| r.start_hour() == first.value);
    let again = mode(narrowed.records().iter().map(|r| r.start_hour())).unwrap();
    assert_eq!(again, first);
}

#[test]
fn parallel_engine_agrees_on_fixture_data() {
    let engine = ReportEngine::new(ExecutionOptions {
        parallel: true,
        num_threads: Some(3),
    })
    .unwrap();
    for city in City::ALL {
        let ds = load(city);
        assert_eq!(engine.compute_all(&ds), compute_all_reports(&ds), "{city}");
    }
}
