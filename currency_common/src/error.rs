//! Error types shared between the library and its front ends.
//!
//! Every failure of a user action maps onto one `ConverterError` variant. None of
//! them are fatal to the process: the front end shows the message and waits for
//! the next action.
use std::io;

use strum_macros::{Display, EnumString};
use thiserror::Error;

/// Which side of a conversion a currency input belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum CurrencyRole {
    /// The currency converted from.
    Base,
    /// The currency converted to.
    Target,
}

/// Unified error type for the converter.
#[derive(Error, Debug)]
pub enum ConverterError {
    /// The amount field did not hold a number.
    #[error("Invalid amount '{0}'. Please enter a numeric value.")]
    InvalidAmount(String),

    /// Neither a known ISO code nor a known currency name.
    #[error("Invalid {role} currency: '{input}' is not a known currency code or name")]
    UnknownCurrency {
        /// Side of the conversion the input was entered for.
        role: CurrencyRole,
        /// The input as the user typed it.
        input: String,
    },

    /// Transport failure or a non-success HTTP status.
    #[error("Network error: {0}")]
    Network(String),

    /// The provider answered but reported a failure (e.g. `invalid-key`).
    #[error("Error fetching exchange rates: {0}")]
    Provider(String),

    /// The provider answered with a body we could not interpret.
    #[error("Invalid response from rate provider: {0}")]
    InvalidResponse(String),

    /// The fetched rate mapping has no entry for the target code.
    #[error("Currency '{0}' not supported by the API.")]
    UnsupportedTarget(String),

    /// Missing or unusable configuration value.
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error from the terminal front end.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl From<reqwest::Error> for ConverterError {
    fn from(err: reqwest::Error) -> Self {
        ConverterError::Network(err.to_string())
    }
}

impl From<serde_json::Error> for ConverterError {
    fn from(err: serde_json::Error) -> Self {
        ConverterError::InvalidResponse(err.to_string())
    }
}
