//! `bikeshare-stats` answers descriptive-statistics questions over historical bike-share trip
//! records for Chicago, New York City and Washington.
//!
//! A run picks a [`catalog::City`], loads its trip file into an in-memory
//! [`types::TripDataSet`], narrows it with an optional month and/or weekday filter, and
//! computes six report groups over the result. The filtered records can then be paged
//! through in windows of five.
//!
//! ## Pipeline
//!
//! 1. [`ingestion::load_city`]: read and type-check the city's CSV file. The load fails as a
//!    whole on a missing file, a missing required column, or the first unparsable row.
//! 2. [`processing::apply_filters`]: keep records whose start month / weekday match.
//! 3. [`stats::compute_all_reports`] (or [`execution::ReportEngine`] for a parallel run):
//!    busiest times, busiest stations, trip durations, user types, genders, birth years.
//! 4. [`paginate::RawRowPaginator`]: show the filtered records five at a time.
//!
//! **Columns** (`Start Time`, `End Time`, `Trip Duration`, `Start Station`, `End Station`,
//! `User Type` are required; `Gender` and `Birth Year` are optional). Reports that need an
//! optional column come back as [`stats::Outcome::NotAvailable`] when the file lacks it, and
//! every report returns [`stats::Outcome::NoData`] for an empty selection.
//!
//! ## Example
//!
//! ```no_run
//! use chrono::{Month, Weekday};
//! use bikeshare_stats::catalog::{City, CityCatalog};
//! use bikeshare_stats::ingestion::{load_city, LoadOptions};
//! use bikeshare_stats::paginate::RawRowPaginator;
//! use bikeshare_stats::processing::{apply_filters, DayFilter, MonthFilter};
//! use bikeshare_stats::stats::compute_all_reports;
//!
//! # fn main() -> Result<(), bikeshare_stats::BikeshareError> {
//! let opts = LoadOptions {
//!     catalog: CityCatalog::new("data"),
//!     ..Default::default()
//! };
//! let ds = load_city(City::Chicago, &opts)?;
//! let march_mondays = apply_filters(&ds, MonthFilter::Only(Month::March), DayFilter::Only(Weekday::Mon));
//!
//! let reports = compute_all_reports(&march_mondays);
//! if let Some(t) = reports.time_of_travel.computed() {
//!     println!("busiest hour: {}", t.start_hour.value);
//! }
//!
//! let mut pager = RawRowPaginator::new(march_mondays.records());
//! let first_five = pager.next_window();
//! println!("{} rows", first_five.len());
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`catalog`]: cities and dataset locations
//! - [`selection`]: validation of city / month / day answers
//! - [`ingestion`]: the record store (CSV parsing + load observers)
//! - [`types`]: trip record and dataset types
//! - [`processing`]: filtering, mode and numeric reductions
//! - [`stats`]: the six report groups
//! - [`execution`]: parallel report computation with timing events
//! - [`paginate`]: raw-row windows
//! - [`app`]: the `bikeshare` command-line program
//! - [`error`]: error types

pub mod app;
pub mod catalog;
pub mod error;
pub mod execution;
pub mod ingestion;
pub mod paginate;
pub mod processing;
pub mod selection;
pub mod stats;
pub mod types;

pub use error::{BikeshareError, BikeshareResult};
