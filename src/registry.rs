//! Currency identifier registry
//!
//! Loads the set of recognized currencies (ISO codes plus their symbols)
//! from embedded TOML data and resolves symbols back to canonical ISO
//! codes. Registry iteration order is the configured order; it is the
//! tie-break when one symbol is claimed by several currencies.

use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

use crate::types::CurrencyIdentifier;

/// Error type for registry construction
#[derive(Debug, Clone, PartialEq)]
pub enum RegistryError {
    /// An error occurred while parsing the identifier TOML data
    ParseError(String),
    /// A currency code was not a three-letter ISO code
    InvalidCode(String),
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::ParseError(msg) => {
                write!(f, "Error parsing currency identifier data: {}", msg)
            }
            RegistryError::InvalidCode(code) => write!(f, "Invalid currency code: {}", code),
        }
    }
}

impl std::error::Error for RegistryError {}

type Result<T> = std::result::Result<T, RegistryError>;

/// An ordered, read-only set of recognized currency identifiers.
///
/// Detection takes a `&CurrencyRegistry` as a point-in-time snapshot; the
/// registry is never mutated after construction, so a shared reference is
/// safe to use from any number of concurrent callers.
pub struct CurrencyRegistry {
    identifiers: Vec<CurrencyIdentifier>,
    symbol_to_code: HashMap<String, String>,
}

// Global singleton for the built-in identifier table
static DEFAULT_REGISTRY: OnceLock<CurrencyRegistry> = OnceLock::new();

impl CurrencyRegistry {
    /// Build a registry from an explicit identifier list, preserving order.
    ///
    /// Codes and patterns are uppercased to match the matcher's normalized
    /// input. A pattern listed under more than one currency is flagged and
    /// resolved to the first currency that listed it.
    pub fn from_identifiers(identifiers: Vec<CurrencyIdentifier>) -> Self {
        let identifiers: Vec<CurrencyIdentifier> = identifiers
            .into_iter()
            .map(|ident| CurrencyIdentifier {
                code: ident.code.to_uppercase(),
                patterns: ident
                    .patterns
                    .iter()
                    .filter(|p| !p.is_empty())
                    .map(|p| p.to_uppercase())
                    .collect(),
            })
            .collect();

        let mut symbol_to_code: HashMap<String, String> = HashMap::new();
        for ident in &identifiers {
            for pattern in &ident.patterns {
                match symbol_to_code.get(pattern) {
                    Some(existing) if existing != &ident.code => {
                        log::warn!(
                            "currency pattern {:?} claimed by both {} and {}; keeping {}",
                            pattern,
                            existing,
                            ident.code,
                            existing
                        );
                    }
                    Some(_) => {}
                    None => {
                        symbol_to_code.insert(pattern.clone(), ident.code.clone());
                    }
                }
            }
        }

        CurrencyRegistry {
            identifiers,
            symbol_to_code,
        }
    }

    /// Parse a registry from TOML with `[[currency]]` entries carrying a
    /// `code` string and a `patterns` string array. Array order becomes
    /// registry order.
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let parsed: toml::Value =
            toml::from_str(toml_str).map_err(|e| RegistryError::ParseError(e.to_string()))?;

        let entries = parsed
            .get("currency")
            .and_then(|v| v.as_array())
            .ok_or_else(|| RegistryError::ParseError("missing [[currency]] entries".to_string()))?;

        let mut identifiers = Vec::with_capacity(entries.len());
        for entry in entries {
            let code = entry.get("code").and_then(|v| v.as_str()).ok_or_else(|| {
                RegistryError::ParseError("currency entry without a code".to_string())
            })?;
            if code.len() != 3 || !code.bytes().all(|b| b.is_ascii_alphabetic()) {
                return Err(RegistryError::InvalidCode(code.to_string()));
            }

            let mut patterns: Vec<String> = entry
                .get("patterns")
                .and_then(|v| v.as_array())
                .map(|arr| {
                    arr.iter()
                        .filter_map(|p| p.as_str())
                        .map(str::to_string)
                        .collect()
                })
                .unwrap_or_default();
            if patterns.is_empty() {
                // A bare entry is still detectable by its ISO code
                patterns.push(code.to_string());
            }

            identifiers.push(CurrencyIdentifier {
                code: code.to_string(),
                patterns,
            });
        }

        Ok(Self::from_identifiers(identifiers))
    }

    /// Get the built-in registry loaded from the embedded identifier table.
    pub fn default_set() -> &'static Self {
        DEFAULT_REGISTRY.get_or_init(|| {
            Self::from_toml(include_str!("registry/currencies.toml")).unwrap_or_else(|e| {
                // Continue with an empty table rather than poisoning every caller
                log::error!("Failed to load embedded currency data: {}", e);
                CurrencyRegistry {
                    identifiers: Vec::new(),
                    symbol_to_code: HashMap::new(),
                }
            })
        })
    }

    /// Return a registry that additionally recognizes every ISO code in
    /// `codes`, e.g. the currency list of a fetched rate table. New codes
    /// are detectable by the bare code only; codes already present keep
    /// their symbol data and position.
    pub fn with_additional_codes<'a, I>(&self, codes: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut identifiers = self.identifiers.clone();
        for code in codes {
            let code = code.to_uppercase();
            if code.len() != 3 || !code.bytes().all(|b| b.is_ascii_alphabetic()) {
                log::warn!("ignoring non-ISO currency code {:?} from rate table", code);
                continue;
            }
            if identifiers.iter().any(|ident| ident.code == code) {
                continue;
            }
            identifiers.push(CurrencyIdentifier {
                code: code.clone(),
                patterns: vec![code],
            });
        }
        Self::from_identifiers(identifiers)
    }

    /// The identifiers in matcher iteration order.
    pub fn identifiers(&self) -> &[CurrencyIdentifier] {
        &self.identifiers
    }

    /// Resolve a symbol or pattern to its canonical ISO code, e.g. "kr"
    /// and ":-" both resolve to "SEK".
    pub fn resolve_symbol(&self, symbol: &str) -> Option<&str> {
        self.symbol_to_code
            .get(&symbol.to_uppercase())
            .map(|s| s.as_str())
    }

    /// Whether `code` names a recognized currency.
    pub fn contains(&self, code: &str) -> bool {
        let code = code.to_uppercase();
        self.identifiers.iter().any(|ident| ident.code == code)
    }
}
