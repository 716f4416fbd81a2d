//! Amount input handling: filtering typed text and validating it.

pub mod validation;

#[cfg(test)]
mod validation_props;

pub use validation::{ValidationError, ValidationOutcome, sanitize_input, validate};
