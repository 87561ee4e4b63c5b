//! Currency conversion over a cached exchange-rate table.
//!
//! The table is a point-in-time snapshot handed in by the caller; fetching
//! and refreshing it belongs to the surrounding runtime. Rates are expressed
//! as units of currency per one unit of the table's base currency, the shape
//! exchange-rate APIs return.

use std::collections::HashMap;
use std::fmt;

use chrono::{DateTime, Duration, Utc};
use serde::Deserialize;

use crate::types::Conversion;

/// Error type for conversion operations
#[derive(Debug, Clone, PartialEq)]
pub enum ConvertError {
    /// A currency code was absent from the rate table
    UnknownCurrency(String),
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::UnknownCurrency(code) => {
                write!(f, "No exchange rate for currency: {}", code)
            }
        }
    }
}

impl std::error::Error for ConvertError {}

type Result<T> = std::result::Result<T, ConvertError>;

/// A snapshot of exchange rates relative to one base currency.
///
/// Deserializes directly from the usual rate-API shape:
/// `{"base": "USD", "rates": {"SEK": 10.5, ...}}`. The fetch timestamp
/// defaults to deserialization time when the payload carries none; staleness
/// *policy* stays with the caller, the table only answers `is_stale`.
#[derive(Debug, Clone, Deserialize)]
pub struct RateTable {
    /// ISO code the rates are relative to.
    pub base: String,
    /// Units of currency per one unit of `base`.
    pub rates: HashMap<String, f64>,
    /// When this snapshot was fetched.
    #[serde(default = "Utc::now")]
    pub fetched_at: DateTime<Utc>,
}

impl RateTable {
    pub fn new(
        base: impl Into<String>,
        rates: HashMap<String, f64>,
        fetched_at: DateTime<Utc>,
    ) -> Self {
        RateTable {
            base: base.into(),
            rates,
            fetched_at,
        }
    }

    /// Units of `code` per one unit of the base currency. The base itself
    /// is implicitly 1.0.
    pub fn rate(&self, code: &str) -> Result<f64> {
        if code == self.base {
            return Ok(1.0);
        }
        match self.rates.get(code) {
            Some(rate) if *rate > 0.0 => Ok(*rate),
            Some(rate) => {
                log::warn!(
                    "Non-positive rate {} for {} in table based on {}",
                    rate,
                    code,
                    self.base
                );
                Err(ConvertError::UnknownCurrency(code.to_string()))
            }
            None => Err(ConvertError::UnknownCurrency(code.to_string())),
        }
    }

    /// Every ISO code this table can convert, the base included. Feeds
    /// `CurrencyRegistry::with_additional_codes` so a fetched table extends
    /// the detectable currency set.
    pub fn currency_codes(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.base.as_str()).chain(self.rates.keys().map(|k| k.as_str()))
    }

    /// Whether the snapshot is older than `max_age` at `now`.
    pub fn is_stale(&self, max_age: Duration, now: DateTime<Utc>) -> bool {
        now - self.fetched_at > max_age
    }
}

/// Two-decimal rounding for display.
fn round_display(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Convert `amount` from one currency to another through the table's base.
///
/// Fails with `ConvertError::UnknownCurrency` when either code is absent
/// from the table; substituting a default rate instead is caller policy.
pub fn convert(amount: f64, from: &str, table: &RateTable, to: &str) -> Result<Conversion> {
    let converted = if from == to {
        amount
    } else {
        amount / table.rate(from)? * table.rate(to)?
    };
    Ok(Conversion {
        amount: round_display(converted),
        currency: to.to_string(),
    })
}
