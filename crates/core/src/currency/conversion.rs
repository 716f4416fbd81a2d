//! Currency conversion logic.
//!
//! CRITICAL: Rounding strategy:
//! - `convert` never rounds; the quotient keeps full decimal precision
//! - `format` rounds to 2 decimal places for display only
//! - Use banker's rounding (round half to even)

use kurs_shared::{CurrencyCode, Money};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use super::table::Currency;
use crate::input::{ValidationError, validate};

/// Decimal places shown in a formatted result.
pub const DISPLAY_DECIMAL_PLACES: u32 = 2;

/// Converts an IDR amount into `target` by dividing by its rate.
///
/// The quotient keeps at most 28 fractional digits, so amounts below about
/// `rate * 5e-29` come out as exactly zero.
///
/// # Panics
///
/// Panics if the quotient exceeds the `Decimal` range, which needs a rate
/// below 1 and an amount near `Decimal::MAX`.
#[must_use]
pub fn convert(amount: Decimal, target: &Currency) -> Decimal {
    amount / target.rate
}

/// Renders `value` as `"<value to 2 dp> <code>"`.
///
/// Uses banker's rounding on the exact decimal value, so `1.005` renders as
/// `1.00` and `1.015` as `1.02`.
#[must_use]
pub fn format(value: Decimal, currency: &Currency) -> String {
    let mut rounded =
        value.round_dp_with_strategy(DISPLAY_DECIMAL_PLACES, RoundingStrategy::MidpointNearestEven);
    rounded.rescale(DISPLAY_DECIMAL_PLACES);
    format!("{rounded} {}", currency.code)
}

/// A single conversion attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionRequest<'a> {
    /// Positive amount in IDR.
    pub amount: Decimal,
    /// Currency to convert into.
    pub target: &'a Currency,
}

/// Outcome of a successful conversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversionResult {
    /// Converted amount, unrounded.
    pub value: Money,
    /// Text shown to the user.
    pub display_text: String,
}

impl<'a> ConversionRequest<'a> {
    /// Creates a request for an already validated amount.
    #[must_use]
    pub const fn new(amount: Decimal, target: &'a Currency) -> Self {
        Self { amount, target }
    }

    /// Runs the conversion and formats the result.
    #[must_use]
    pub fn execute(&self) -> ConversionResult {
        let value = convert(self.amount, self.target);
        ConversionResult {
            display_text: format(value, self.target),
            value: Money::new(value, self.target.code.clone()),
        }
    }

    /// The source amount as IDR money.
    #[must_use]
    pub fn source(&self) -> Money {
        Money::new(self.amount, CurrencyCode::base())
    }
}

/// Validates `raw` and converts it into `target`.
pub fn convert_input(raw: &str, target: &Currency) -> Result<ConversionResult, ValidationError> {
    let amount = validate(raw)?;
    Ok(ConversionRequest::new(amount, target).execute())
}
