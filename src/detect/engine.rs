//! Detection entry point.
//!
//! Normalizes a raw selection, finds the currency marker, then validates
//! and parses the numeric run next to it. Every failure mode is a plain
//! `None`: not finding an amount in arbitrary selected text is a normal
//! outcome, not an error.

use crate::detect::matcher::match_currency;
use crate::detect::number::parse_amount;
use crate::registry::CurrencyRegistry;
use crate::types::DetectionResult;

/// Strip all whitespace and uppercase. Selections routinely carry embedded
/// spaces ("100 USD", "$ 123"), so interior whitespace goes too.
fn normalize(raw: &str) -> String {
    raw.split_whitespace().collect::<String>().to_uppercase()
}

/// Detect a single currency amount in a selection.
///
/// Returns `None` for empty input, input without a recognized currency
/// marker, input with leftover text or a second marker, and numeric runs
/// that fail separator validation.
///
/// # Examples
/// ```
/// use currency_detect::{CurrencyRegistry, detect};
///
/// let registry = CurrencyRegistry::default_set();
/// let result = detect(registry, "123.456,789 kr").unwrap();
/// assert_eq!(result.currency, "SEK");
/// assert_eq!(result.amount, 123456.789);
/// ```
pub fn detect(registry: &CurrencyRegistry, raw: &str) -> Option<DetectionResult> {
    let text = normalize(raw);
    let (code, token) = match_currency(registry, &text)?;
    let amount = parse_amount(token)?;
    Some(DetectionResult {
        currency: code.to_string(),
        amount,
    })
}
