//! Record store: loading a city's trip file into memory.
//!
//! Most callers should use [`load_city`] (from [`store`]) which:
//!
//! - resolves the city's file through a [`crate::catalog::CityCatalog`]
//! - parses every row into a typed [`crate::types::TripRecord`], failing the whole load on
//!   the first bad row
//! - optionally reports success/failure/alerts to a [`LoadObserver`]
//!
//! The parser itself lives in [`csv`].

pub mod csv;
pub mod observability;
pub mod store;

pub use observability::{
    CompositeObserver, LoadContext, LoadObserver, LoadSeverity, LoadStats, LogObserver,
};
pub use store::{load_city, load_city_by_name, load_path, LoadOptions};
