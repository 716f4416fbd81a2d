//! Command implementations.
//!
//! Every command writes its results to the given writer and reports
//! failures as `AppError`; the caller decides how to print them.

mod convert;
mod interactive;
mod list;

use std::io::{BufRead, Write};

use kurs_core::{Currency, CurrencyTable};
use kurs_shared::{AppConfig, AppError, AppResult};

use crate::cli::Command;

/// Runs `command` against the built-in currency table.
pub fn run<R: BufRead, W: Write>(
    command: Command,
    config: &AppConfig,
    input: R,
    out: &mut W,
) -> AppResult<()> {
    let table = CurrencyTable::standard();
    match command {
        Command::Convert { amount, to, json } => {
            let target = resolve_currency(table, to.as_deref(), config)?;
            convert::run(&amount, target, json, out)
        }
        Command::List { json } => list::run(table, json, out),
        Command::Interactive { to } => {
            let target = resolve_currency(table, to.as_deref(), config)?;
            interactive::run(table, target, input, out)
        }
    }
}

/// Picks the requested currency, falling back to the configured default.
fn resolve_currency<'t>(
    table: &'t CurrencyTable,
    requested: Option<&str>,
    config: &AppConfig,
) -> AppResult<&'t Currency> {
    let code = match requested {
        Some(code) => code.to_string(),
        None => config.default_code()?.to_string(),
    };
    table
        .find_by_code(&code)
        .ok_or_else(|| AppError::NotFound(format!("currency {}", code.trim())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_to_string(command: Command, config: &AppConfig, stdin: &str) -> AppResult<String> {
        let mut out = Vec::new();
        run(command, config, Cursor::new(stdin), &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_resolve_explicit_code() {
        let table = CurrencyTable::standard();
        let config = AppConfig::default();
        let currency = resolve_currency(table, Some("gbp"), &config).unwrap();
        assert_eq!(currency.code.as_str(), "GBP");
    }

    #[test]
    fn test_resolve_uses_config_default() {
        let table = CurrencyTable::standard();
        let config = AppConfig {
            default_currency: "MYR".to_string(),
            ..AppConfig::default()
        };
        let currency = resolve_currency(table, None, &config).unwrap();
        assert_eq!(currency.code.as_str(), "MYR");
    }

    #[test]
    fn test_resolve_unknown_code_is_not_found() {
        let table = CurrencyTable::standard();
        let err = resolve_currency(table, Some("IDR"), &AppConfig::default()).unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_resolve_bad_config_default() {
        let table = CurrencyTable::standard();
        let config = AppConfig {
            default_currency: "rupiah".to_string(),
            ..AppConfig::default()
        };
        let err = resolve_currency(table, None, &config).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn test_run_convert() {
        let output = run_to_string(
            Command::Convert {
                amount: "100000".to_string(),
                to: Some("JPY".to_string()),
                json: false,
            },
            &AppConfig::default(),
            "",
        )
        .unwrap();
        assert_eq!(output, "853.97 JPY\n");
    }

    #[test]
    fn test_run_convert_rejects_input() {
        let err = run_to_string(
            Command::Convert {
                amount: "abc".to_string(),
                to: None,
                json: false,
            },
            &AppConfig::default(),
            "",
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "invalid number format");
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_run_interactive_from_stdin() {
        let output = run_to_string(
            Command::Interactive { to: None },
            &AppConfig::default(),
            "16789\n:quit\n",
        )
        .unwrap();
        assert!(output.contains("1.00 USD"));
    }
}
