//! Line-oriented converter session.
//!
//! Each line becomes one or more `SessionEvent`s:
//! - an amount line sets the input and submits it
//! - `:use CODE` selects a currency
//! - `:list` prints the table, `:help` the commands
//! - `:quit` (or end of input) leaves

use std::io::{BufRead, Write};

use kurs_core::{Currency, CurrencyTable, Readout, SessionEvent, SessionState};
use kurs_shared::AppResult;
use tracing::{debug, info};

const HELP: &str = "Type an IDR amount to convert it.\n\
:use CODE  select a currency\n\
:list      show currencies\n\
:quit      exit";

/// One parsed input line.
#[derive(Debug, PartialEq, Eq)]
enum Line<'a> {
    Amount(&'a str),
    Use(&'a str),
    List,
    Help,
    Quit,
    Unknown(&'a str),
}

fn parse_line(line: &str) -> Line<'_> {
    let line = line.trim();
    let Some(directive) = line.strip_prefix(':') else {
        return Line::Amount(line);
    };

    let (name, argument) = directive
        .split_once(char::is_whitespace)
        .map_or((directive, ""), |(name, rest)| (name, rest.trim()));
    match name {
        "use" | "u" => Line::Use(argument),
        "list" | "l" => Line::List,
        "help" | "h" | "?" => Line::Help,
        "quit" | "q" | "exit" => Line::Quit,
        _ => Line::Unknown(line),
    }
}

pub fn run<R: BufRead, W: Write>(
    table: &CurrencyTable,
    initial: &Currency,
    input: R,
    out: &mut W,
) -> AppResult<()> {
    let mut state = SessionState::new(table)
        .reduce(SessionEvent::CurrencySelected(initial.code.to_string()));
    info!(currency = %state.selected().code, "Session started");

    let mut lines = input.lines();
    loop {
        write!(out, "kurs [{}]> ", state.selected().code)?;
        out.flush()?;

        let Some(line) = lines.next() else {
            writeln!(out)?;
            break;
        };
        let line = line?;

        match parse_line(&line) {
            Line::Quit => break,
            Line::Help => writeln!(out, "{HELP}")?,
            Line::List => super::list::run(table, false, out)?,
            Line::Use(code) => {
                state = state.reduce(SessionEvent::CurrencySelected(code.to_string()));
                if state.selected().code.as_str() == code.trim().to_ascii_uppercase() {
                    writeln!(out, "selected {}", state.selected().code)?;
                } else {
                    writeln!(out, "unknown currency: {code}")?;
                }
            }
            Line::Unknown(text) => writeln!(out, "unknown command: {text} (try :help)")?,
            Line::Amount(text) => {
                state = state
                    .reduce(SessionEvent::InputChanged(text.to_string()))
                    .reduce(SessionEvent::Submit);
                if let Readout::Rejected { reason } = state.readout() {
                    debug!(input = text, %reason, "Rejected input");
                }
                if let Some(message) = state.message() {
                    writeln!(out, "{message}")?;
                }
            }
        }
    }

    info!("Session ended");
    Ok(())
}
