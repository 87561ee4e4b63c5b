pub mod convert;
pub mod detect;
pub mod registry;
pub mod types;

pub use convert::{ConvertError, RateTable, convert};
pub use detect::{detect, is_valid_number_format, parse_amount};
pub use registry::CurrencyRegistry;
pub use types::{Conversion, CurrencyIdentifier, DetectionResult};
