//! Redenominations and nominal currency conversion.

pub mod conversion;
pub mod error;
pub mod redenomination;

#[cfg(test)]
mod props;

pub use error::CurrencyError;
pub use redenomination::{CurrencyEra, ORIGIN_CURRENCY, RedenominationEvent, RedenominationTable};
