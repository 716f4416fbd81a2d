//! Currency listing.

use std::io::Write;

use kurs_core::CurrencyTable;
use kurs_shared::{AppError, AppResult};

pub fn run<W: Write>(table: &CurrencyTable, json: bool, out: &mut W) -> AppResult<()> {
    if json {
        let body = serde_json::to_string_pretty(table.list_all())
            .map_err(|e| AppError::Internal(e.to_string()))?;
        writeln!(out, "{body}")?;
        return Ok(());
    }

    writeln!(out, "{:<6}{:<8}IDR per unit", "CODE", "SYMBOL")?;
    for currency in table.list_all() {
        writeln!(
            out,
            "{:<6}{:<8}{}",
            currency.code.as_str(),
            currency.symbol,
            currency.rate
        )?;
    }
    Ok(())
}
