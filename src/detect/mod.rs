//! Currency-and-amount detection
//!
//! This module turns one user-selected string into a `{currency, amount}`
//! result or a definitive no-match. The main entry point is the `detect`
//! function.

mod engine;
mod matcher;
mod number;

pub use engine::detect;
pub use matcher::match_currency;
pub use number::{is_valid_number_format, parse_amount};
