//! Validation of raw amount text.
//!
//! Rules are applied in order and the first match wins:
//! 1. blank input
//! 2. not a plain decimal number
//! 3. zero or negative value

use kurs_shared::AppError;
use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;

/// Reasons an amount is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Error)]
#[serde(rename_all = "snake_case")]
pub enum ValidationError {
    /// Input is empty or whitespace-only.
    #[error("enter an amount")]
    EmptyInput,

    /// Input is not a finite plain decimal number.
    #[error("invalid number format")]
    MalformedNumber,

    /// Parsed value is zero or negative.
    #[error("amount must be greater than 0")]
    NonPositiveAmount,
}

/// Either a positive IDR amount or the reason it was rejected.
pub type ValidationOutcome = Result<Decimal, ValidationError>;

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        Self::Validation(err.to_string())
    }
}

/// Validates raw input and returns the parsed IDR amount.
///
/// Surrounding whitespace is ignored. Accepted syntax is an optional sign,
/// ASCII digits and at most one `.`; exponents and grouping separators are
/// malformed, and so is an integer part above `Decimal::MAX`. Fractional
/// digits past the 28th are rounded half to even.
pub fn validate(raw: &str) -> ValidationOutcome {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyInput);
    }

    let amount = parse_plain_decimal(trimmed).ok_or(ValidationError::MalformedNumber)?;
    if amount <= Decimal::ZERO {
        return Err(ValidationError::NonPositiveAmount);
    }

    Ok(amount)
}

/// Fractional digits a `Decimal` can hold.
const MAX_SCALE: usize = 28;

/// Smallest positive `Decimal`; finer positive amounts round up to it.
const SMALLEST_POSITIVE: Decimal = Decimal::from_parts(1, 0, 0, false, 28);

fn parse_plain_decimal(text: &str) -> Option<Decimal> {
    let (negative, body) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let (whole, fraction) = body.split_once('.').unwrap_or((body, ""));
    if whole.is_empty() && fraction.is_empty() {
        return None;
    }
    // A second '.' lands in `fraction` and fails the digit check.
    if !whole.bytes().all(|b| b.is_ascii_digit()) || !fraction.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    // Integer parts beyond Decimal::MAX have no representation.
    let whole_value = if whole.is_empty() {
        Decimal::ZERO
    } else {
        Decimal::from_str_exact(whole).ok()?
    };

    let fraction = fraction.trim_end_matches('0');
    let (kept, rest) = fraction.split_at(fraction.len().min(MAX_SCALE));
    let mut fraction_value = if kept.is_empty() {
        Decimal::ZERO
    } else {
        let scale = u32::try_from(kept.len()).ok()?;
        Decimal::try_from_i128_with_scale(kept.parse().ok()?, scale).ok()?
    };
    if rounds_up(kept, rest) {
        fraction_value += SMALLEST_POSITIVE;
    }

    let mut value = whole_value.checked_add(fraction_value)?;
    if value.is_zero() && body.bytes().any(|b| matches!(b, b'1'..=b'9')) {
        value = SMALLEST_POSITIVE;
    }

    Some(if negative { -value } else { value })
}

/// Banker's rounding of `kept` given the dropped digits `rest`, which carry
/// no trailing zeros.
fn rounds_up(kept: &str, rest: &str) -> bool {
    match rest.as_bytes().first() {
        None => false,
        Some(&digit) if digit != b'5' => digit > b'5',
        Some(_) => rest.len() > 1 || kept.bytes().last().is_some_and(|d| (d - b'0') % 2 == 1),
    }
}

/// Filters typed text the way the amount field does: ASCII digits and the
/// first `.` only.
#[must_use]
pub fn sanitize_input(raw: &str) -> String {
    let mut seen_dot = false;
    raw.chars()
        .filter(|&c| match c {
            '0'..='9' => true,
            '.' if !seen_dot => {
                seen_dot = true;
                true
            }
            _ => false,
        })
        .collect()
}
