//! Property-based tests for currency operations.
//!
//! - Monotonicity in amount and in rate
//! - One unit's worth of IDR converts to exactly one unit
//! - Formatting always shows two decimal places

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::conversion::{convert, format};
use super::table::{Currency, CurrencyTable};

/// Strategy to generate positive decimal amounts (0.01 to 1,000,000,000.00).
fn positive_amount() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate positive exchange rates (0.0001 to 100,000.0000).
fn positive_rate() -> impl Strategy<Value = Decimal> {
    (1i64..1_000_000_000i64).prop_map(|v| Decimal::new(v, 4))
}

/// Strategy to pick a currency from the built-in table.
fn standard_currency() -> impl Strategy<Value = Currency> {
    prop::sample::select(CurrencyTable::standard().list_all())
}

fn with_rate(rate: Decimal) -> Currency {
    Currency::new("XTS".parse().unwrap(), rate, None)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Converting more IDR always yields more foreign currency.
    #[test]
    fn prop_convert_increasing_in_amount(
        a in positive_amount(),
        b in positive_amount(),
        currency in standard_currency(),
    ) {
        prop_assume!(a != b);
        let (low, high) = if a < b { (a, b) } else { (b, a) };
        prop_assert!(convert(low, &currency) < convert(high, &currency));
    }

    /// A more expensive currency always yields fewer units.
    #[test]
    fn prop_convert_decreasing_in_rate(
        amount in positive_amount(),
        r1 in positive_rate(),
        r2 in positive_rate(),
    ) {
        prop_assume!(r1 != r2);
        let (cheap, dear) = if r1 < r2 { (r1, r2) } else { (r2, r1) };
        prop_assert!(convert(amount, &with_rate(cheap)) > convert(amount, &with_rate(dear)));
    }

    /// Converting exactly one rate's worth of IDR gives one unit.
    #[test]
    fn prop_rate_converts_to_one(rate in positive_rate()) {
        let currency = with_rate(rate);
        let value = convert(rate, &currency);
        let tolerance = Decimal::new(1, 9);
        prop_assert!((value - Decimal::ONE).abs() <= tolerance);
        prop_assert_eq!(format(value, &currency), "1.00 XTS");
    }

    /// Positive inputs give positive outputs.
    #[test]
    fn prop_positive_inputs_positive_output(
        amount in positive_amount(),
        currency in standard_currency(),
    ) {
        prop_assert!(convert(amount, &currency) > Decimal::ZERO);
    }

    /// Formatted text always carries exactly two fractional digits and the code.
    #[test]
    fn prop_format_two_decimals(
        amount in positive_amount(),
        currency in standard_currency(),
    ) {
        let text = format(convert(amount, &currency), &currency);
        let (number, code) = text.split_once(' ').unwrap();
        prop_assert_eq!(code, currency.code.as_str());
        let (_, fraction) = number.split_once('.').unwrap();
        prop_assert_eq!(fraction.len(), 2);
    }
}
