//! The fixed set of cities and where their trip files live.

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

/// A city with a published trip dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum City {
    Chicago,
    NewYorkCity,
    Washington,
}

impl City {
    /// Every city in the catalog, in prompt order.
    pub const ALL: [City; 3] = [City::Chicago, City::NewYorkCity, City::Washington];

    /// Parse a city display name (case-insensitive, surrounding whitespace ignored).
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "chicago" => Some(Self::Chicago),
            "new york city" => Some(Self::NewYorkCity),
            "washington" => Some(Self::Washington),
            _ => None,
        }
    }

    /// Human-readable name, e.g. `"New York City"`.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Chicago => "Chicago",
            Self::NewYorkCity => "New York City",
            Self::Washington => "Washington",
        }
    }

    /// Default file name of the city's dataset.
    pub fn file_name(&self) -> &'static str {
        match self {
            Self::Chicago => "chicago.csv",
            Self::NewYorkCity => "new_york_city.csv",
            Self::Washington => "washington.csv",
        }
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Maps each [`City`] to the path of its dataset.
///
/// By default every city resolves to `<data_dir>/<City::file_name>`; single cities can be
/// pointed elsewhere with [`CityCatalog::with_path`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CityCatalog {
    data_dir: PathBuf,
    overrides: HashMap<City, PathBuf>,
}

impl CityCatalog {
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
            overrides: HashMap::new(),
        }
    }

    /// Use `path` for `city` instead of the default file under the data directory.
    pub fn with_path(mut self, city: City, path: impl AsRef<Path>) -> Self {
        self.overrides.insert(city, path.as_ref().to_path_buf());
        self
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Dataset location for `city`.
    pub fn path_for(&self, city: City) -> PathBuf {
        match self.overrides.get(&city) {
            Some(p) => p.clone(),
            None => self.data_dir.join(city.file_name()),
        }
    }
}

impl Default for CityCatalog {
    fn default() -> Self {
        Self::new(".")
    }
}
