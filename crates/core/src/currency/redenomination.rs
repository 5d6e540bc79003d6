//! Redenomination table for the Argentine peso.
//!
//! Every redenomination removed trailing zeros from the currency in
//! circulation and gave it a new name. Crossing an event forward in time
//! shrinks a nominal figure by `10^zeros_removed`.

use chrono::NaiveDate;
use serde::Serialize;

use super::error::CurrencyError;

/// Currency in circulation before the first redenomination.
pub const ORIGIN_CURRENCY: &str = "Peso Moneda Nacional";

/// A single currency change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RedenominationEvent {
    /// First day the new currency was in effect.
    pub effective_date: NaiveDate,
    /// Number of trailing zeros removed from the previous currency.
    pub zeros_removed: u32,
    /// Name of the currency introduced by this event.
    pub resulting_currency: &'static str,
}

impl RedenominationEvent {
    /// Creates a new redenomination event.
    #[must_use]
    pub const fn new(
        effective_date: NaiveDate,
        zeros_removed: u32,
        resulting_currency: &'static str,
    ) -> Self {
        Self {
            effective_date,
            zeros_removed,
            resulting_currency,
        }
    }
}

const fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => date,
        None => panic!("invalid redenomination date"),
    }
}

/// Argentine redenominations, oldest first.
const ARGENTINE_EVENTS: [RedenominationEvent; 4] = [
    // Ley 18.188
    RedenominationEvent::new(ymd(1970, 1, 1), 2, "Peso Ley 18.188"),
    RedenominationEvent::new(ymd(1983, 6, 1), 4, "Peso Argentino"),
    RedenominationEvent::new(ymd(1985, 6, 15), 3, "Austral"),
    // Convertibility plan
    RedenominationEvent::new(ymd(1992, 1, 1), 4, "Peso"),
];

/// A period during which one currency was in circulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CurrencyEra {
    /// Currency name.
    pub name: &'static str,
    /// First day of the era (`None` for the origin currency).
    pub start: Option<NaiveDate>,
    /// First day of the following era (`None` for the current currency).
    pub end: Option<NaiveDate>,
    /// Zeros removed between the origin currency and this one.
    pub zeros_since_origin: u32,
}

impl CurrencyEra {
    /// Returns true if the given date falls within this era.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start.is_none_or(|start| date >= start) && self.end.is_none_or(|end| date < end)
    }
}

/// Ordered list of redenomination events plus the origin currency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedenominationTable {
    origin_currency: &'static str,
    events: Vec<RedenominationEvent>,
}

impl RedenominationTable {
    /// Creates a table, checking that effective dates strictly increase.
    ///
    /// # Errors
    ///
    /// Returns `CurrencyError::EventsOutOfOrder` if two consecutive events are
    /// not in strictly ascending date order.
    pub fn new(
        origin_currency: &'static str,
        events: Vec<RedenominationEvent>,
    ) -> Result<Self, CurrencyError> {
        if let Some(pair) = events
            .windows(2)
            .find(|pair| pair[0].effective_date >= pair[1].effective_date)
        {
            return Err(CurrencyError::EventsOutOfOrder {
                previous: pair[0].effective_date,
                next: pair[1].effective_date,
            });
        }

        Ok(Self {
            origin_currency,
            events,
        })
    }

    /// The Argentine peso table (1970, 1983, 1985 and 1992 redenominations).
    #[must_use]
    pub fn argentine() -> Self {
        Self {
            origin_currency: ORIGIN_CURRENCY,
            events: ARGENTINE_EVENTS.to_vec(),
        }
    }

    /// Name of the currency before the first event.
    #[must_use]
    pub const fn origin_currency(&self) -> &'static str {
        self.origin_currency
    }

    /// Events, oldest first.
    #[must_use]
    pub fn events(&self) -> &[RedenominationEvent] {
        &self.events
    }

    /// Returns the name of the currency in circulation on `date`.
    #[must_use]
    pub fn currency_at(&self, date: NaiveDate) -> &'static str {
        self.events
            .iter()
            .rev()
            .find(|event| event.effective_date <= date)
            .map_or(self.origin_currency, |event| event.resulting_currency)
    }

    /// Zeros removed by events strictly after `date`.
    #[must_use]
    pub fn zeros_until_present(&self, date: NaiveDate) -> u32 {
        self.events
            .iter()
            .filter(|event| event.effective_date > date)
            .map(|event| event.zeros_removed)
            .sum()
    }

    /// Zeros removed by events effective on or before `date`.
    #[must_use]
    pub fn zeros_since_origin(&self, date: NaiveDate) -> u32 {
        self.events
            .iter()
            .take_while(|event| event.effective_date <= date)
            .map(|event| event.zeros_removed)
            .sum()
    }

    /// Lists every currency era, origin first.
    #[must_use]
    pub fn eras(&self) -> Vec<CurrencyEra> {
        let mut eras = Vec::with_capacity(self.events.len() + 1);
        let mut zeros = 0;

        eras.push(CurrencyEra {
            name: self.origin_currency,
            start: None,
            end: self.events.first().map(|event| event.effective_date),
            zeros_since_origin: 0,
        });

        for (i, event) in self.events.iter().enumerate() {
            zeros += event.zeros_removed;
            eras.push(CurrencyEra {
                name: event.resulting_currency,
                start: Some(event.effective_date),
                end: self.events.get(i + 1).map(|next| next.effective_date),
                zeros_since_origin: zeros,
            });
        }

        eras
    }
}

impl Default for RedenominationTable {
    fn default() -> Self {
        Self::argentine()
    }
}
