//! Fixed-rate conversion from IDR into foreign currencies.

pub mod conversion;
pub mod table;

#[cfg(test)]
mod props;

pub use conversion::{ConversionRequest, ConversionResult, convert, convert_input, format};
pub use table::{Currency, CurrencyTable, TableError};
