use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, ValueEnum};

use crate::catalog::{City, CityCatalog};
use crate::execution::ExecutionOptions;
use crate::ingestion::{LoadOptions, LogObserver};
use crate::processing::{DayFilter, MonthFilter};

/// explore US bike-share trip data for Chicago, New York City and Washington
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct BikeshareCliArguments {
    /// directory holding chicago.csv, new_york_city.csv and washington.csv
    #[arg(short = 'D', long, env = "BIKESHARE_DATA_DIR", default_value = ".")]
    pub data_dir: PathBuf,
    /// city to analyze. when omitted, the program asks interactively.
    #[arg(short, long, value_parser = parse_city)]
    pub city: Option<City>,
    /// month to filter by (full name), or "all"
    #[arg(short, long, value_parser = parse_month, default_value = "all")]
    pub month: MonthFilter,
    /// day of week to filter by (full name), or "all"
    #[arg(short, long, value_parser = parse_day, default_value = "all")]
    pub day: DayFilter,
    /// report output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
    /// number of 5-row raw data windows to print after the reports
    #[arg(long, default_value_t = 0)]
    pub raw_windows: usize,
    /// compute reports one at a time on the main thread
    #[arg(long)]
    pub sequential: bool,
    /// worker threads for report computation (defaults to available parallelism)
    #[arg(long)]
    pub threads: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

impl BikeshareCliArguments {
    pub fn load_options(&self) -> LoadOptions {
        LoadOptions {
            catalog: CityCatalog::new(&self.data_dir),
            observer: Some(Arc::new(LogObserver)),
            ..Default::default()
        }
    }

    pub fn execution_options(&self) -> ExecutionOptions {
        ExecutionOptions {
            parallel: !self.sequential,
            num_threads: self.threads,
        }
    }
}

fn parse_city(s: &str) -> Result<City, String> {
    City::from_name(s).ok_or_else(|| {
        format!("unknown city '{s}', expected one of: chicago, new york city, washington")
    })
}

fn parse_month(s: &str) -> Result<MonthFilter, String> {
    MonthFilter::parse(s).ok_or_else(|| format!("invalid month '{s}', expected a full month name or all"))
}

fn parse_day(s: &str) -> Result<DayFilter, String> {
    DayFilter::parse(s).ok_or_else(|| format!("invalid day '{s}', expected a full weekday name or all"))
}

#[cfg(test)]
mod tests {
    use chrono::{Month, Weekday};
    use clap::Parser;

    use super::{BikeshareCliArguments, OutputFormat};
    use crate::catalog::City;
    use crate::processing::{DayFilter, MonthFilter};

    #[test]
    fn defaults_to_interactive_with_no_filters() {
        let args = BikeshareCliArguments::try_parse_from(["bikeshare", "-D", "data"]).unwrap();
        assert_eq!(args.city, None);
        assert_eq!(args.month, MonthFilter::All);
        assert_eq!(args.day, DayFilter::All);
        assert_eq!(args.format, OutputFormat::Text);
        assert!(args.execution_options().parallel);
        assert_eq!(
            args.load_options().catalog.path_for(City::Chicago),
            std::path::PathBuf::from("data/chicago.csv")
        );
    }

    #[test]
    fn parses_one_shot_selection() {
        let args = BikeshareCliArguments::try_parse_from([
            "bikeshare",
            "--city",
            "New York City",
            "--month",
            "March",
            "--day",
            "friday",
            "--format",
            "json",
            "--sequential",
        ])
        .unwrap();
        assert_eq!(args.city, Some(City::NewYorkCity));
        assert_eq!(args.month, MonthFilter::Only(Month::March));
        assert_eq!(args.day, DayFilter::Only(Weekday::Fri));
        assert_eq!(args.format, OutputFormat::Json);
        assert!(!args.execution_options().parallel);
    }

    #[test]
    fn rejects_unknown_city() {
        assert!(BikeshareCliArguments::try_parse_from(["bikeshare", "--city", "boston"]).is_err());
    }
}
