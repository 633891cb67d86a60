//! In-memory trip transformations.
//!
//! The processing layer operates on [`crate::types::TripDataSet`] values produced by
//! [`crate::ingestion`]. Everything here is pure: inputs are borrowed and never modified.
//!
//! - [`apply_filters()`]: month / weekday filtering
//! - [`mode()`]: most frequent key, smallest key wins ties
//! - [`reduce()`]: count/sum/mean/min/max over numeric columns
//!
//! ## Example: filter → reduce
//!
//! ```rust
//! use chrono::{Month, NaiveDateTime};
//! use bikeshare_stats::processing::{apply_filters, reduce, DayFilter, MonthFilter, NumericColumn, ReduceOp};
//! use bikeshare_stats::types::{DatasetColumns, TripDataSet, TripRecord};
//!
//! let at = |s: &str| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap();
//! let trip = |start: &str, end: &str, secs: f64| TripRecord {
//!     start_time: at(start),
//!     end_time: at(end),
//!     duration_seconds: secs,
//!     start_station: "Clark St & Lake St".to_string(),
//!     end_station: "Canal St & Adams St".to_string(),
//!     user_type: "Subscriber".to_string(),
//!     gender: None,
//!     birth_year: None,
//! };
//! let ds = TripDataSet::new(
//!     DatasetColumns::required_only(),
//!     vec![
//!         trip("2017-01-02 08:00:00", "2017-01-02 08:10:00", 600.0),
//!         trip("2017-02-02 08:00:00", "2017-02-02 08:05:00", 300.0),
//!     ],
//! );
//!
//! let january = apply_filters(&ds, MonthFilter::Only(Month::January), DayFilter::All);
//! let total = reduce(&january, NumericColumn::TripDuration, ReduceOp::Sum);
//! assert_eq!(total, Some(600.0));
//! ```

pub mod filter;
pub mod mode;
pub mod reduce;

pub use filter::{apply_filters, DayFilter, MonthFilter};
pub use mode::{mode, Mode};
pub use reduce::{reduce, reduce_records, NumericColumn, ReduceOp};
