//! Purchasing-power conversion across redenominations and inflation.

pub mod engine;
pub mod error;
pub mod types;


pub use engine::InflationAdjuster;
pub use error::ConversionError;
pub use types::{ConversionRequest, ConversionResult, CoveredPeriod, Direction};
