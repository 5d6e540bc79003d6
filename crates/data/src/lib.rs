//! Price-index dataset loading for Valora.
//!
//! Turns the monthly CSV into a validated [`valora_core::InflationSeries`].
//! This is the only crate that touches the dataset file.

pub mod date;
pub mod error;
pub mod loader;

pub use date::parse_period_date;
pub use error::DatasetError;
pub use loader::{DatasetLoader, LoadReport};
