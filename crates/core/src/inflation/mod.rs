//! Monthly inflation series and cumulative factors.

pub mod error;
pub mod period;
pub mod record;
pub mod series;

#[cfg(test)]
mod tests;

pub use error::InflationError;
pub use record::InflationRecord;
pub use series::InflationSeries;
