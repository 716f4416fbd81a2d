//! Common types used across the application.

pub mod code;
pub mod money;

pub use code::CurrencyCode;
pub use money::Money;
