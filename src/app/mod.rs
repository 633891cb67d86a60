//! Command-line application: argument parsing, the interactive prompt loop, and rendering.

pub mod args;
pub mod interactive;
pub mod render;

use std::io::Write;
use std::sync::Arc;

use serde::Serialize;

use crate::catalog::City;
use crate::error::BikeshareResult;
use crate::execution::{LogExecutionObserver, ReportEngine};
use crate::ingestion::{load_city, LoadOptions};
use crate::paginate::RawRowPaginator;
use crate::processing::{apply_filters, DayFilter, MonthFilter};
use crate::stats::ReportSet;
use crate::types::TripRecord;

pub use args::{BikeshareCliArguments, OutputFormat};
pub use interactive::Session;

/// Run the program described by `args`, writing to stdout.
pub fn run(args: &BikeshareCliArguments) -> BikeshareResult<()> {
    let engine = ReportEngine::new(args.execution_options())?.with_observer(Arc::new(LogExecutionObserver));
    let options = args.load_options();

    match args.city {
        Some(city) => {
            let selection = OneShot {
                city,
                month: args.month,
                day: args.day,
                format: args.format,
                raw_windows: args.raw_windows,
            };
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            selection.run(&mut out, &options, &engine)
        }
        None => {
            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            Session::new(stdin.lock(), stdout.lock()).run(&options, &engine)
        }
    }
}

/// A single non-interactive filter + report cycle.
#[derive(Debug, Clone, Copy)]
pub struct OneShot {
    pub city: City,
    pub month: MonthFilter,
    pub day: DayFilter,
    pub format: OutputFormat,
    /// Number of raw-row windows to print after the reports.
    pub raw_windows: usize,
}

#[derive(Serialize)]
struct OneShotOutput<'a> {
    city: City,
    month: MonthFilter,
    day: DayFilter,
    reports: &'a ReportSet,
    raw_rows: Vec<&'a TripRecord>,
}

impl OneShot {
    pub fn run<W: Write>(
        &self,
        out: &mut W,
        options: &LoadOptions,
        engine: &ReportEngine,
    ) -> BikeshareResult<()> {
        let dataset = load_city(self.city, options)?;
        let filtered = apply_filters(&dataset, self.month, self.day);
        let reports = engine.compute_all(&filtered);

        let mut pager = RawRowPaginator::new(filtered.records());
        let mut windows = Vec::new();
        for _ in 0..self.raw_windows {
            let window = pager.next_window();
            if window.is_empty() {
                break;
            }
            windows.push(window);
        }

        match self.format {
            OutputFormat::Text => {
                render::render_reports(out, self.city, &reports)?;
                for window in windows {
                    render::render_window(out, window)?;
                }
            }
            OutputFormat::Json => {
                let doc = OneShotOutput {
                    city: self.city,
                    month: self.month,
                    day: self.day,
                    reports: &reports,
                    raw_rows: windows.into_iter().flatten().collect(),
                };
                serde_json::to_writer_pretty(&mut *out, &doc)?;
                writeln!(out)?;
            }
        }
        Ok(())
    }
}
