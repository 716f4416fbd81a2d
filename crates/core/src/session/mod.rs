//! Converter screen state as an immutable snapshot and a pure reducer.
//!
//! A front end owns one `SessionState`, turns user actions into
//! `SessionEvent`s and replaces its state with the reducer's output.

pub mod state;

pub use state::{Readout, SessionEvent, SessionState, reduce};
