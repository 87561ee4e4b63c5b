//! Anchored currency-pattern matching.
//!
//! Each identifier pattern is tried in two shapes against the *entire*
//! normalized selection: pattern-then-number and number-then-pattern. Both
//! shapes are anchored with `eof`, so leftover characters or a second
//! currency marker make every shape fail and the selection yields no match.

use winnow::combinator::eof;
use winnow::token::{literal, take_while};
use winnow::{ModalResult, Parser};

use crate::registry::CurrencyRegistry;

/// The candidate numeric run: one or more digits, periods or commas.
/// Structural validity is the validator's job, not the matcher's.
fn numeric_run<'s>(input: &mut &'s str) -> ModalResult<&'s str> {
    take_while(1.., ('0'..='9', '.', ',')).parse_next(input)
}

/// Try one pattern in prefix and suffix position over the whole text,
/// returning the captured numeric run on a full-string match.
fn match_pattern<'s>(pattern: &str, text: &'s str) -> Option<&'s str> {
    let mut input = text;
    let prefixed: ModalResult<&'s str> = (literal(pattern), numeric_run, eof)
        .map(|(_, token, _)| token)
        .parse_next(&mut input);
    if let Ok(token) = prefixed {
        return Some(token);
    }

    let mut input = text;
    let suffixed: ModalResult<&'s str> = (numeric_run, literal(pattern), eof)
        .map(|(token, _, _)| token)
        .parse_next(&mut input);
    suffixed.ok()
}

/// Scan the normalized text against every registered identifier, in registry
/// order, and return the first full-string match as a canonical ISO code
/// plus the numeric run next to the marker.
pub fn match_currency<'r, 's>(
    registry: &'r CurrencyRegistry,
    text: &'s str,
) -> Option<(&'r str, &'s str)> {
    for ident in registry.identifiers() {
        for pattern in &ident.patterns {
            if let Some(token) = match_pattern(pattern, text) {
                return Some((ident.code.as_str(), token));
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_and_suffix_shapes() {
        let registry = CurrencyRegistry::default_set();
        assert_eq!(match_currency(registry, "$123"), Some(("USD", "123")));
        assert_eq!(match_currency(registry, "123$"), Some(("USD", "123")));
        assert_eq!(match_currency(registry, "USD123"), Some(("USD", "123")));
        assert_eq!(match_currency(registry, "123USD"), Some(("USD", "123")));
    }

    #[test]
    fn test_whole_string_anchoring() {
        let registry = CurrencyRegistry::default_set();
        assert_eq!(match_currency(registry, "USD123EUR"), None);
        assert_eq!(match_currency(registry, "$123x"), None);
        assert_eq!(match_currency(registry, "ABOUT$123"), None);
        assert_eq!(match_currency(registry, "$"), None);
        assert_eq!(match_currency(registry, ""), None);
    }

    #[test]
    fn test_overlapping_symbols() {
        let registry = CurrencyRegistry::default_set();
        // "R" alone is ZAR; "R$" is BRL; "RP" is IDR. Anchoring sorts them
        // out without any priority mechanism.
        assert_eq!(match_currency(registry, "R100"), Some(("ZAR", "100")));
        assert_eq!(match_currency(registry, "R$100"), Some(("BRL", "100")));
        assert_eq!(match_currency(registry, "RP100"), Some(("IDR", "100")));
        // "US$" only matches once the bare "$" prefix has failed to span
        // the string.
        assert_eq!(match_currency(registry, "US$99"), Some(("USD", "99")));
        assert_eq!(match_currency(registry, "MX$5"), Some(("MXN", "5")));
    }

    #[test]
    fn test_numeric_run_is_not_validated_here() {
        let registry = CurrencyRegistry::default_set();
        // Structurally a match; the validator rejects the token later.
        assert_eq!(
            match_currency(registry, "$1.234.56"),
            Some(("USD", "1.234.56"))
        );
    }
}
