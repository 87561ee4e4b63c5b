//! Numeric token validation and parsing.
//!
//! A token is the raw `[0-9.,]+` run found next to a currency marker. The
//! two separator characters are disambiguated against each other: when both
//! appear, the rightmost one is the decimal separator and the other groups
//! thousands in runs of exactly three digits. With a single separator kind,
//! three or more groups mean thousands grouping and exactly two groups are
//! read as a decimal number, whatever the group lengths.

fn is_all_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Thousands grouping: leading group 1-3 digits, every later group exactly 3.
fn is_grouped(parts: &[&str]) -> bool {
    let Some((first, rest)) = parts.split_first() else {
        return false;
    };
    if first.len() > 3 || !is_all_digits(first) {
        return false;
    }
    rest.iter().all(|group| group.len() == 3 && is_all_digits(group))
}

/// Decide whether a numeric token is a well-formed number under either the
/// US or the European separator convention.
///
/// Accepts e.g. "123", "123.45", "123,45", "1,234.56", "1.234,56",
/// "1,234,567" and "1.234.567". Rejects inconsistent grouping such as
/// "1.234.56", "1,234,56", "1.23,45" and "1,23.45".
pub fn is_valid_number_format(token: &str) -> bool {
    match (token.rfind(','), token.rfind('.')) {
        // European order: comma is the sole decimal separator, periods group
        // thousands (1.234,56)
        (Some(last_comma), Some(last_period)) if last_comma > last_period => {
            if token.matches(',').count() != 1 {
                return false;
            }
            let integer_part = &token[..last_comma];
            let decimal_part = &token[last_comma + 1..];
            is_all_digits(decimal_part)
                && is_grouped(&integer_part.split('.').collect::<Vec<_>>())
        }
        // US order: period is the sole decimal separator, commas group
        // thousands (1,234.56)
        (Some(_), Some(last_period)) => {
            if token.matches('.').count() != 1 {
                return false;
            }
            let integer_part = &token[..last_period];
            let decimal_part = &token[last_period + 1..];
            is_all_digits(decimal_part)
                && is_grouped(&integer_part.split(',').collect::<Vec<_>>())
        }
        // One separator kind only
        (Some(_), None) | (None, Some(_)) => {
            let separator = if token.contains(',') { ',' } else { '.' };
            let parts: Vec<&str> = token.split(separator).collect();
            match parts.len() {
                // Three or more groups: thousands-only. The final group must
                // also be exactly 3 digits, which rejects a trailing decimal
                // collision like "1.234.56".
                3.. => is_grouped(&parts),
                // Exactly two groups: read as a decimal number, no length
                // constraint on either side ("123,45" and "1,234" alike).
                2 => is_all_digits(parts[0]) && is_all_digits(parts[1]),
                // Cannot happen once a separator is known present
                _ => false,
            }
        }
        (None, None) => is_all_digits(token),
    }
}

/// Parse a numeric token into a float, mirroring the validator's separator
/// classification. Returns `None` for tokens `is_valid_number_format`
/// rejects.
pub fn parse_amount(token: &str) -> Option<f64> {
    if !is_valid_number_format(token) {
        return None;
    }

    let normalized = match (token.rfind(','), token.rfind('.')) {
        // European: strip thousands periods, comma becomes the decimal point
        (Some(last_comma), Some(last_period)) if last_comma > last_period => {
            token.replace('.', "").replace(',', ".")
        }
        // US: strip thousands commas
        (Some(_), Some(_)) => token.replace(',', ""),
        (Some(_), None) => {
            if token.matches(',').count() > 1 {
                token.replace(',', "")
            } else {
                token.replace(',', ".")
            }
        }
        (None, Some(_)) => {
            if token.matches('.').count() > 1 {
                token.replace('.', "")
            } else {
                token.to_string()
            }
        }
        (None, None) => token.to_string(),
    };

    normalized.parse::<f64>().ok()
}
