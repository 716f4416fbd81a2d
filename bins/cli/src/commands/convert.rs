//! One-shot conversion.

use std::io::Write;

use kurs_core::currency::convert_input;
use kurs_core::{ConversionRequest, Currency, validate};
use kurs_shared::{AppError, AppResult, Money};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::debug;

/// JSON shape of a one-shot conversion.
#[derive(Debug, Serialize)]
struct ConversionView<'a> {
    source: Money,
    currency: &'a str,
    rate: Decimal,
    value: Decimal,
    display: String,
}

pub fn run<W: Write>(raw: &str, target: &Currency, json: bool, out: &mut W) -> AppResult<()> {
    if json {
        let request = ConversionRequest::new(validate(raw)?, target);
        let result = request.execute();
        debug!(amount = %request.amount, currency = %target.code, "Converted");
        let view = ConversionView {
            source: request.source(),
            currency: target.code.as_str(),
            rate: target.rate,
            value: result.value.amount,
            display: result.display_text,
        };
        let body = serde_json::to_string_pretty(&view)
            .map_err(|e| AppError::Internal(e.to_string()))?;
        writeln!(out, "{body}")?;
    } else {
        let result = convert_input(raw, target)?;
        debug!(amount = raw.trim(), currency = %target.code, "Converted");
        writeln!(out, "{}", result.display_text)?;
    }
    Ok(())
}
