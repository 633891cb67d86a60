//! Execution engine for computing the report set with configurable parallelism.
//!
//! This module sits "above" [`crate::stats`] and provides:
//!
//! - Parallel execution of the six independent reports on a rayon pool
//! - Per-report timing events for an [`ExecutionObserver`]
//!
//! Every report only reads the filtered dataset, so running them concurrently yields the
//! same [`ReportSet`] as [`crate::stats::compute_all_reports`].

mod observer;

use std::sync::Arc;
use std::time::Instant;

use rayon::ThreadPool;
use rayon::ThreadPoolBuilder;

use crate::error::BikeshareResult;
use crate::stats::{self, ReportKind, ReportSet};
use crate::types::TripDataSet;

pub use observer::{ExecutionEvent, ExecutionObserver, LogExecutionObserver};

/// Configuration for the [`ReportEngine`].
#[derive(Debug, Clone)]
pub struct ExecutionOptions {
    /// Compute reports concurrently. When `false`, reports run one after another on the
    /// calling thread.
    pub parallel: bool,
    /// Number of worker threads used when `parallel` is set.
    ///
    /// If `None`, uses the platform's available parallelism.
    pub num_threads: Option<usize>,
}

impl Default for ExecutionOptions {
    fn default() -> Self {
        Self {
            parallel: true,
            num_threads: None,
        }
    }
}

/// Computes [`ReportSet`]s, optionally in parallel, reporting timings to an observer.
pub struct ReportEngine {
    pool: Option<ThreadPool>,
    observer: Option<Arc<dyn ExecutionObserver>>,
}

impl ReportEngine {
    /// Create a new engine with the given options.
    ///
    /// Fails if the thread pool cannot be built.
    pub fn new(opts: ExecutionOptions) -> BikeshareResult<Self> {
        let pool = if opts.parallel {
            let n_threads = opts
                .num_threads
                .unwrap_or_else(|| std::thread::available_parallelism().map(|n| n.get()).unwrap_or(1))
                .max(1);
            Some(ThreadPoolBuilder::new().num_threads(n_threads).build()?)
        } else {
            None
        };

        Ok(Self {
            pool,
            observer: None,
        })
    }

    /// An engine that runs every report on the calling thread.
    pub fn sequential() -> Self {
        Self {
            pool: None,
            observer: None,
        }
    }

    /// Attach an observer for execution events.
    pub fn with_observer(mut self, observer: Arc<dyn ExecutionObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    pub fn is_parallel(&self) -> bool {
        self.pool.is_some()
    }

    /// Compute all six reports over `dataset`.
    pub fn compute_all(&self, dataset: &TripDataSet) -> ReportSet {
        let start = Instant::now();
        self.emit(ExecutionEvent::RunStarted {
            records: dataset.len(),
        });

        let records = dataset.records();
        let time = || self.timed(ReportKind::TimeOfTravel, || stats::time_of_travel(records));
        let stations = || self.timed(ReportKind::Stations, || stats::station_popularity(records));
        let durations = || self.timed(ReportKind::Durations, || stats::trip_durations(records));
        let users = || self.timed(ReportKind::UserTypes, || stats::user_types(records));
        let genders = || self.timed(ReportKind::Genders, || stats::genders(dataset));
        let births = || self.timed(ReportKind::BirthYears, || stats::birth_years(dataset));

        let out = match &self.pool {
            Some(pool) => {
                let ((time_of_travel, stations), ((durations, user_types), (genders, birth_years))) =
                    pool.install(|| {
                        rayon::join(
                            || rayon::join(time, stations),
                            || rayon::join(|| rayon::join(durations, users), || rayon::join(genders, births)),
                        )
                    });
                ReportSet {
                    record_count: dataset.len(),
                    time_of_travel,
                    stations,
                    durations,
                    user_types,
                    genders,
                    birth_years,
                }
            }
            None => ReportSet {
                record_count: dataset.len(),
                time_of_travel: time(),
                stations: stations(),
                durations: durations(),
                user_types: users(),
                genders: genders(),
                birth_years: births(),
            },
        };

        self.emit(ExecutionEvent::RunFinished {
            elapsed: start.elapsed(),
        });
        out
    }

    fn timed<R>(&self, kind: ReportKind, f: impl FnOnce() -> R) -> R {
        let start = Instant::now();
        self.emit(ExecutionEvent::ReportStarted { kind });
        let out = f();
        self.emit(ExecutionEvent::ReportFinished {
            kind,
            elapsed: start.elapsed(),
        });
        out
    }

    fn emit(&self, event: ExecutionEvent) {
        if let Some(obs) = &self.observer {
            obs.on_event(&event);
        }
    }
}
