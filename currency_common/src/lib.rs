//!
//! Core of the currency converter, shared by every front end.
//!
//! This crate aggregates:
//! - `error`: unified error type `ConverterError` used across the workspace.
//! - `result`: handy `Result<T, ConverterError>` alias.
//! - `config`: provider endpoint and access key.
//! - `reference`: static ISO 4217 / ISO 3166 tables and the supplemental currency list.
//! - `resolver`: maps user input (code or English name) to a currency code.
//! - `rates`: the `RateSource` seam and the ExchangeRate-API client.
//! - `converter`: amount parsing and the conversion action.
//! - `directory`: country/currency listing filtered by a search term.
#![warn(missing_docs)]
pub mod config;
pub mod converter;
pub mod directory;
pub mod error;
pub mod rates;
pub mod reference;
pub mod resolver;
pub mod result;

pub use config::ApiConfig;
pub use converter::Conversion;
pub use error::{ConverterError, CurrencyRole};
pub use rates::{RateMapping, RateSource};
pub use result::Result;
