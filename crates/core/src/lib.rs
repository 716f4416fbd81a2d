//! Core conversion logic for Kurs.
//!
//! This crate contains pure logic with ZERO I/O dependencies.
//! The currency table, input validation, conversion and the converter
//! screen's state machine all live here.
//!
//! # Modules
//!
//! - `currency` - Fixed rate table, conversion and display formatting
//! - `input` - Amount text filtering and validation
//! - `session` - Immutable screen state and its reducer

pub mod currency;
pub mod input;
pub mod session;

pub use currency::{ConversionRequest, ConversionResult, Currency, CurrencyTable, TableError};
pub use input::{ValidationError, ValidationOutcome, validate};
pub use session::{Readout, SessionEvent, SessionState};
