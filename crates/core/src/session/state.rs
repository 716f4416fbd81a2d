//! Session state and reducer.
//!
//! Lifecycle: idle -> (submit) -> converted | rejected -> idle on the next
//! edit or currency change.

use serde::Serialize;

use crate::currency::{ConversionResult, Currency, CurrencyTable, convert_input};
use crate::input::{ValidationError, sanitize_input};

/// What the result label currently shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Readout {
    /// Nothing submitted since the last edit.
    Idle,
    /// Last submit succeeded.
    Converted(ConversionResult),
    /// Last submit was rejected.
    Rejected {
        /// Why the input was rejected.
        reason: ValidationError,
    },
}

/// A user action on the converter screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// The amount field changed to the given raw text.
    InputChanged(String),
    /// A currency code was picked from the list.
    CurrencySelected(String),
    /// The convert button was pressed.
    Submit,
}

/// Immutable snapshot of the converter screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState<'t> {
    table: &'t CurrencyTable,
    input: String,
    selected: &'t Currency,
    readout: Readout,
}

impl<'t> SessionState<'t> {
    /// Fresh state: empty input, first currency selected, idle.
    #[must_use]
    pub fn new(table: &'t CurrencyTable) -> Self {
        Self {
            table,
            input: String::new(),
            selected: table.first(),
            readout: Readout::Idle,
        }
    }

    /// Current (sanitized) amount text.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Currently selected currency.
    #[must_use]
    pub const fn selected(&self) -> &'t Currency {
        self.selected
    }

    /// Currencies available for selection.
    #[must_use]
    pub const fn table(&self) -> &'t CurrencyTable {
        self.table
    }

    /// What the result label shows.
    #[must_use]
    pub const fn readout(&self) -> &Readout {
        &self.readout
    }

    /// True when nothing has been submitted since the last edit.
    #[must_use]
    pub const fn is_idle(&self) -> bool {
        matches!(self.readout, Readout::Idle)
    }

    /// Text for the result label, if any.
    #[must_use]
    pub fn message(&self) -> Option<String> {
        match &self.readout {
            Readout::Idle => None,
            Readout::Converted(result) => Some(result.display_text.clone()),
            Readout::Rejected { reason } => Some(reason.to_string()),
        }
    }

    /// Applies `event` and returns the next state. `self` is left untouched.
    #[must_use]
    pub fn reduce(&self, event: SessionEvent) -> Self {
        match event {
            SessionEvent::InputChanged(raw) => Self {
                input: sanitize_input(&raw),
                readout: Readout::Idle,
                ..self.clone()
            },
            SessionEvent::CurrencySelected(code) => Self {
                selected: self.table.find_by_code(&code).unwrap_or(self.selected),
                readout: Readout::Idle,
                ..self.clone()
            },
            SessionEvent::Submit => Self {
                readout: match convert_input(&self.input, self.selected) {
                    Ok(result) => Readout::Converted(result),
                    Err(reason) => Readout::Rejected { reason },
                },
                ..self.clone()
            },
        }
    }
}

/// Free-function form of [`SessionState::reduce`].
#[must_use]
pub fn reduce<'t>(state: &SessionState<'t>, event: SessionEvent) -> SessionState<'t> {
    state.reduce(event)
}
