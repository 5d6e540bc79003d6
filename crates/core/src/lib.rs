//! Conversion engine for Valora.
//!
//! This crate contains the pure conversion logic with ZERO io or web
//! dependencies. Reference data is loaded elsewhere and handed in.
//!
//! # Modules
//!
//! - `currency` - Redenomination table and nominal rescaling
//! - `inflation` - Monthly inflation series and cumulative factors
//! - `adjuster` - Purchasing-power conversion combining both

pub mod adjuster;
pub mod currency;
pub mod inflation;

pub use adjuster::{ConversionError, ConversionRequest, ConversionResult, Direction, InflationAdjuster};
pub use currency::{CurrencyError, RedenominationTable};
pub use inflation::{InflationError, InflationRecord, InflationSeries};
