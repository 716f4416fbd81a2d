//! The fixed table of supported foreign currencies.
//!
//! Rates are expressed as IDR units per one unit of the foreign currency.
//! A table is immutable once built; construction enforces that every rate is
//! strictly positive and that codes are unique.

use std::collections::HashMap;

use kurs_shared::CurrencyCode;
use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;
use thiserror::Error;

/// Built-in rates: (code, IDR per unit, display symbol).
const STANDARD_RATES: [(&str, Decimal, Option<&str>); 10] = [
    ("USD", dec!(16789), Some("$")),
    ("EUR", dec!(18250), Some("€")),
    ("GBP", dec!(21300), Some("£")),
    ("JPY", dec!(117.1), Some("¥")),
    ("SGD", dec!(12450), Some("S$")),
    ("MYR", dec!(3570), Some("RM")),
    ("AUD", dec!(10650), Some("A$")),
    ("CNY", dec!(2310), Some("CN¥")),
    ("SAR", dec!(4475), None),
    ("KRW", dec!(12.1), Some("₩")),
];

static STANDARD: Lazy<CurrencyTable> = Lazy::new(|| {
    CurrencyTable::from_rows(&STANDARD_RATES).expect("built-in currency table is well-formed")
});

/// Errors raised while building a currency table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    /// A table needs at least one currency.
    #[error("Currency table is empty")]
    Empty,

    /// A code is not three ASCII letters.
    #[error("Invalid currency code: {0}")]
    InvalidCode(String),

    /// A rate is zero or negative.
    #[error("Rate for {0} must be greater than 0")]
    NonPositiveRate(CurrencyCode),

    /// The same code appears twice.
    #[error("Duplicate currency code: {0}")]
    DuplicateCode(CurrencyCode),
}

/// A foreign currency and its fixed rate against IDR.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Currency {
    /// Unique currency code.
    pub code: CurrencyCode,
    /// IDR units per one unit of this currency. Always > 0.
    pub rate: Decimal,
    /// Display glyph. Defaults to the code.
    pub symbol: String,
}

impl Currency {
    /// Creates a currency, falling back to the code when no symbol is given.
    #[must_use]
    pub fn new(code: CurrencyCode, rate: Decimal, symbol: Option<&str>) -> Self {
        let symbol = symbol.map_or_else(|| code.to_string(), str::to_string);
        Self { code, rate, symbol }
    }
}

/// Immutable, ordered collection of currencies with lookup by code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyTable {
    entries: Vec<Currency>,
    index: HashMap<CurrencyCode, usize>,
}

impl CurrencyTable {
    /// Builds a table, checking rate positivity and code uniqueness.
    pub fn new(entries: Vec<Currency>) -> Result<Self, TableError> {
        if entries.is_empty() {
            return Err(TableError::Empty);
        }

        let mut index = HashMap::with_capacity(entries.len());
        for (position, currency) in entries.iter().enumerate() {
            if currency.rate <= Decimal::ZERO {
                return Err(TableError::NonPositiveRate(currency.code.clone()));
            }
            if index.insert(currency.code.clone(), position).is_some() {
                return Err(TableError::DuplicateCode(currency.code.clone()));
            }
        }

        Ok(Self { entries, index })
    }

    /// Builds a table from `(code, rate, symbol)` rows.
    pub fn from_rows(rows: &[(&str, Decimal, Option<&str>)]) -> Result<Self, TableError> {
        let entries = rows
            .iter()
            .map(|&(code, rate, symbol)| {
                let code = code
                    .parse::<CurrencyCode>()
                    .map_err(|_| TableError::InvalidCode(code.to_string()))?;
                Ok(Currency::new(code, rate, symbol))
            })
            .collect::<Result<Vec<_>, TableError>>()?;

        Self::new(entries)
    }

    /// The compiled-in table of ten currencies.
    pub fn standard() -> &'static Self {
        &STANDARD
    }

    /// All currencies in table order.
    #[must_use]
    pub fn list_all(&self) -> &[Currency] {
        &self.entries
    }

    /// Looks up a currency by code, ignoring case and surrounding whitespace.
    #[must_use]
    pub fn find_by_code(&self, code: &str) -> Option<&Currency> {
        let code = code.parse::<CurrencyCode>().ok()?;
        self.index.get(&code).map(|&position| &self.entries[position])
    }

    /// The first currency in table order.
    #[must_use]
    pub fn first(&self) -> &Currency {
        &self.entries[0]
    }
}
