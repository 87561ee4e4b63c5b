//! Core value types shared by detection and conversion.

use std::fmt;

/// A currency the matcher can recognize: a canonical ISO 4217 code plus the
/// textual patterns (symbols and alternate spellings) that identify it in
/// selected text. Patterns are stored uppercased since matching runs over
/// normalized (uppercase, whitespace-free) text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyIdentifier {
    /// Three-letter ISO code, e.g. "USD".
    pub code: String,
    /// Patterns recognized for this currency, e.g. ["$", "USD", "US$"].
    /// A pattern may be claimed by several currencies; the registry's
    /// configured order decides which one wins.
    pub patterns: Vec<String>,
}

/// The outcome of a successful detection pass over one selection.
#[derive(Debug, Clone, PartialEq)]
pub struct DetectionResult {
    /// Canonical ISO code of the detected currency.
    pub currency: String,
    /// The parsed amount.
    pub amount: f64,
}

/// A converted amount in its target currency, rounded to two decimals
/// for display.
#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    pub amount: f64,
    pub currency: String,
}

impl fmt::Display for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} {}", self.amount, self.currency)
    }
}
