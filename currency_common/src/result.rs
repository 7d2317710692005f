//! `Result` alias used by every fallible operation in the converter.
use crate::error::ConverterError;

/// `std::result::Result` with the error type defaulting to `ConverterError`.
pub type Result<T, E = ConverterError> = std::result::Result<T, E>;
