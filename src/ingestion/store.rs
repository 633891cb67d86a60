//! Record store entrypoint.
//!
//! Most callers should use [`load_city`], which resolves a [`City`] through the configured
//! [`CityCatalog`] and loads its trip file into an immutable [`TripDataSet`].
//!
//! If a [`LoadObserver`] is configured, success/failure/alerts are reported to it.

use std::error::Error as StdError;
use std::fmt;
use std::path::Path;
use std::sync::Arc;

use crate::catalog::{City, CityCatalog};
use crate::error::{BikeshareError, BikeshareResult};
use crate::types::TripDataSet;

use super::csv::load_trips_from_path;
use super::observability::{LoadContext, LoadObserver, LoadSeverity, LoadStats};

/// Options controlling how datasets are located and how loads are reported.
///
/// Use [`Default`] for common cases (files in the working directory, no observer).
#[derive(Clone)]
pub struct LoadOptions {
    /// Where each city's file lives.
    pub catalog: CityCatalog,
    /// Optional observer for logging/alerts.
    pub observer: Option<Arc<dyn LoadObserver>>,
    /// Severity threshold at which `on_alert` is invoked.
    pub alert_at_or_above: LoadSeverity,
}

impl fmt::Debug for LoadOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadOptions")
            .field("catalog", &self.catalog)
            .field("observer_set", &self.observer.is_some())
            .field("alert_at_or_above", &self.alert_at_or_above)
            .finish()
    }
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            catalog: CityCatalog::default(),
            observer: None,
            alert_at_or_above: LoadSeverity::Critical,
        }
    }
}

/// Load the trip records of `city`.
///
/// When an observer is configured, this function reports:
///
/// - `on_success` on success, with row count and column stats
/// - `on_failure` on failure, with a computed severity
/// - `on_alert` on failure when the computed severity is >= `options.alert_at_or_above`
///
/// # Examples
///
/// ```no_run
/// use std::sync::Arc;
///
/// use bikeshare_stats::catalog::{City, CityCatalog};
/// use bikeshare_stats::ingestion::{load_city, LoadOptions, LogObserver};
///
/// # fn main() -> Result<(), bikeshare_stats::BikeshareError> {
/// let opts = LoadOptions {
///     catalog: CityCatalog::new("data"),
///     observer: Some(Arc::new(LogObserver)),
///     ..Default::default()
/// };
/// let ds = load_city(City::Chicago, &opts)?;
/// println!("records={}", ds.len());
/// # Ok(())
/// # }
/// ```
pub fn load_city(city: City, options: &LoadOptions) -> BikeshareResult<TripDataSet> {
    let path = options.catalog.path_for(city);
    load_observed(Some(city), &path, options)
}

/// Load a city by display name (case-insensitive).
///
/// Unknown names fail with [`BikeshareError::DataSource`].
pub fn load_city_by_name(name: &str, options: &LoadOptions) -> BikeshareResult<TripDataSet> {
    let city = City::from_name(name).ok_or_else(|| BikeshareError::DataSource {
        message: format!("unknown city '{name}'"),
    })?;
    load_city(city, options)
}

/// Load a trip file that is not part of the catalog.
pub fn load_path(path: impl AsRef<Path>, options: &LoadOptions) -> BikeshareResult<TripDataSet> {
    load_observed(None, path.as_ref(), options)
}

fn load_observed(
    city: Option<City>,
    path: &Path,
    options: &LoadOptions,
) -> BikeshareResult<TripDataSet> {
    let ctx = LoadContext {
        city,
        path: path.to_path_buf(),
    };

    let result = load_trips_from_path(path);

    if let Some(obs) = options.observer.as_ref() {
        match &result {
            Ok(ds) => obs.on_success(
                &ctx,
                LoadStats {
                    rows: ds.len(),
                    columns: ds.columns,
                },
            ),
            Err(e) => {
                let sev = severity_for_error(e);
                obs.on_failure(&ctx, sev, e);
                if sev >= options.alert_at_or_above {
                    obs.on_alert(&ctx, sev, e);
                }
            }
        }
    }

    result
}

fn severity_for_error(e: &BikeshareError) -> LoadSeverity {
    match e {
        BikeshareError::Io(_) => LoadSeverity::Critical,
        BikeshareError::Csv(err) => match err.kind() {
            ::csv::ErrorKind::Io(_) => LoadSeverity::Critical,
            _ if error_chain_contains_io(err) => LoadSeverity::Critical,
            _ => LoadSeverity::Error,
        },
        BikeshareError::DataSource { .. } => LoadSeverity::Error,
        BikeshareError::ParseError { .. } => LoadSeverity::Error,
        BikeshareError::Json(_) => LoadSeverity::Error,
        BikeshareError::ThreadPool(_) => LoadSeverity::Critical,
    }
}

fn error_chain_contains_io(e: &(dyn StdError + 'static)) -> bool {
    let mut cur: Option<&(dyn StdError + 'static)> = e.source();
    while let Some(err) = cur {
        if err.is::<std::io::Error>() {
            return true;
        }
        cur = err.source();
    }
    false
}
