//! Property-based tests for amount validation.

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::validation::{ValidationError, sanitize_input, validate};

/// Strategy to generate positive decimal amounts (0.01 to 1,000,000,000.00).
fn positive_amount() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate zero or negative amounts.
fn non_positive_amount() -> impl Strategy<Value = Decimal> {
    (-100_000_000_000i64..=0i64).prop_map(|cents| Decimal::new(cents, 2))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Whitespace-only input is always blank, never malformed.
    #[test]
    fn prop_whitespace_is_empty(raw in "[ \t\r\n]{0,12}") {
        prop_assert_eq!(validate(&raw), Err(ValidationError::EmptyInput));
    }

    /// Text containing a letter can never parse.
    #[test]
    fn prop_letters_are_malformed(raw in "[0-9]{0,4}[a-zA-Z]{1,6}[0-9.]{0,4}") {
        prop_assert_eq!(validate(&raw), Err(ValidationError::MalformedNumber));
    }

    /// Any rendered positive amount validates back to the same value.
    #[test]
    fn prop_positive_amounts_are_valid(amount in positive_amount()) {
        prop_assert_eq!(validate(&amount.to_string()), Ok(amount));
    }

    /// Trailing fractional zeros never change the value, however many.
    #[test]
    fn prop_trailing_zeros_are_ignored(amount in positive_amount(), zeros in 0usize..48) {
        let raw = format!("{amount}{}", "0".repeat(zeros));
        prop_assert_eq!(validate(&raw), Ok(amount));
    }

    /// Any rendered zero or negative amount is rejected as non-positive.
    #[test]
    fn prop_non_positive_amounts_are_rejected(amount in non_positive_amount()) {
        prop_assert_eq!(
            validate(&amount.to_string()),
            Err(ValidationError::NonPositiveAmount)
        );
    }

    /// The field filter only ever yields digits and at most one dot.
    #[test]
    fn prop_sanitize_keeps_digits_and_one_dot(raw in "\\PC{0,32}") {
        let clean = sanitize_input(&raw);
        prop_assert!(clean.chars().all(|c| c.is_ascii_digit() || c == '.'));
        prop_assert!(clean.matches('.').count() <= 1);
    }

    /// Sanitized text is either blank, malformed only as a lone dot, or a
    /// non-negative number.
    #[test]
    fn prop_sanitized_text_never_negative(raw in "[-0-9.a-z ]{0,16}") {
        let clean = sanitize_input(&raw);
        match validate(&clean) {
            Ok(amount) => prop_assert!(amount > Decimal::ZERO),
            Err(ValidationError::EmptyInput) => prop_assert!(clean.is_empty()),
            Err(ValidationError::MalformedNumber) => prop_assert_eq!(clean, "."),
            Err(ValidationError::NonPositiveAmount) => {
                prop_assert!(clean.chars().all(|c| c == '0' || c == '.'));
            }
        }
    }
}
