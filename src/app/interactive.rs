//! Interactive prompt loop: ask for a city, month and day, print reports, page through raw
//! rows, then offer to start over.

use std::io::{BufRead, Write};

use crate::catalog::City;
use crate::error::BikeshareResult;
use crate::execution::ReportEngine;
use crate::ingestion::{load_city, LoadOptions};
use crate::paginate::{RawRowPaginator, DEFAULT_WINDOW_SIZE};
use crate::processing::{apply_filters, DayFilter, MonthFilter};
use crate::selection::{validate_city, validate_day, validate_month, Validation};

use super::render::{render_reports, render_window};

/// A prompt session over any line-based input and output.
pub struct Session<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the output, e.g. to inspect what was written.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Run filter/report cycles until the user declines to restart or input ends.
    pub fn run(&mut self, options: &LoadOptions, engine: &ReportEngine) -> BikeshareResult<()> {
        loop {
            writeln!(self.output, "Hello! Let's explore some US bikeshare data!")?;
            let Some((city, month, day)) = self.prompt_filters()? else {
                return Ok(());
            };
            log::info!("selected city={city} month={month:?} day={day:?}");

            let dataset = load_city(city, options)?;
            let filtered = apply_filters(&dataset, month, day);
            let reports = engine.compute_all(&filtered);
            render_reports(&mut self.output, city, &reports)?;

            let mut pager = RawRowPaginator::new(filtered.records());
            if !self.page_raw_rows(&mut pager)? {
                return Ok(());
            }

            if !self.confirm("\nWould you like to restart? Enter yes or no.")? {
                return Ok(());
            }
        }
    }

    /// Ask for city, month and day. `None` if input ended first.
    pub fn prompt_filters(&mut self) -> BikeshareResult<Option<(City, MonthFilter, DayFilter)>> {
        let Some(city) = self.ask(
            "Which city would you like to analyze: Chicago, New York City, or Washington?",
            validate_city,
            "Please enter a valid city.",
        )?
        else {
            return Ok(None);
        };
        let Some(month) = self.ask(
            "You can choose between January, February, March, April, May, June, or type all.",
            validate_month,
            "Please enter a valid month.",
        )?
        else {
            return Ok(None);
        };
        let Some(day) = self.ask(
            "You can choose between Monday, Tuesday, Wednesday, Thursday, Friday, Saturday, Sunday, or type all.",
            validate_day,
            "Please enter a valid day.",
        )?
        else {
            return Ok(None);
        };
        Ok(Some((city, month, day)))
    }

    /// Show windows while the user answers yes.
    ///
    /// Returns `false` if input ended.
    fn page_raw_rows(&mut self, pager: &mut RawRowPaginator<'_>) -> BikeshareResult<bool> {
        let prompt = format!(
            "\nWould you like to see {DEFAULT_WINDOW_SIZE} lines of raw data? Enter yes or no."
        );
        loop {
            writeln!(self.output, "{prompt}")?;
            let Some(answer) = self.read_line()? else {
                return Ok(false);
            };
            if !answer.eq_ignore_ascii_case("yes") {
                return Ok(true);
            }
            let window = pager.next_window();
            if window.is_empty() {
                writeln!(self.output, "No more raw data to display.")?;
                return Ok(true);
            }
            render_window(&mut self.output, window)?;
        }
    }

    /// Re-ask until `validate` accepts the answer. `None` if input ended.
    fn ask<T>(
        &mut self,
        prompt: &str,
        validate: impl Fn(&str) -> Validation<T>,
        retry: &str,
    ) -> BikeshareResult<Option<T>> {
        loop {
            writeln!(self.output, "{prompt}")?;
            let Some(answer) = self.read_line()? else {
                return Ok(None);
            };
            match validate(&answer) {
                Validation::Valid(v) => return Ok(Some(v)),
                Validation::Invalid { input, reason } => {
                    log::debug!("rejected answer '{input}': {reason}");
                    writeln!(self.output, "{retry}")?;
                }
            }
        }
    }

    fn confirm(&mut self, prompt: &str) -> BikeshareResult<bool> {
        writeln!(self.output, "{prompt}")?;
        Ok(self
            .read_line()?
            .is_some_and(|a| a.eq_ignore_ascii_case("yes")))
    }

    fn read_line(&mut self) -> BikeshareResult<Option<String>> {
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}
