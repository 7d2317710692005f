//! Amount parsing and currency conversion.
//!
//! `convert` is the pure multiplication step. `convert_request` is the whole user
//! action: it validates the three text inputs and only touches the rate source
//! once both currencies have resolved.
use std::fmt;

use log::debug;

use crate::error::{ConverterError, CurrencyRole};
use crate::rates::{RateMapping, RateSource};
use crate::resolver;
use crate::result::Result;

/// Outcome of a successful conversion.
#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    /// Amount in the base currency, as entered.
    pub amount: f64,
    /// Base currency code.
    pub base: String,
    /// Target currency code.
    pub target: String,
    /// Amount in the target currency.
    pub converted: f64,
}

impl fmt::Display for Conversion {
    /// `50.0 USD = 45.00 EUR`: the entered amount in shortest form, the result to cents.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?} {} = {:.2} {}",
            self.amount, self.base, self.converted, self.target
        )
    }
}

/// Parse the amount field.
pub fn parse_amount(text: &str) -> Result<f64> {
    text.trim()
        .parse::<f64>()
        .map_err(|_| ConverterError::InvalidAmount(text.to_string()))
}

/// Multiply `amount` by the rate for `target`.
pub fn convert(amount: f64, target: &str, rates: &RateMapping) -> Result<f64> {
    rates
        .rate(target)
        .map(|rate| amount * rate)
        .ok_or_else(|| ConverterError::UnsupportedTarget(target.to_string()))
}

/// Run a full conversion from raw user input.
///
/// Error precedence: an invalid amount wins over unresolved currencies, and an
/// unresolved base wins over an unresolved target. The source is queried at most
/// once and never when validation fails.
pub fn convert_request<S: RateSource + ?Sized>(
    source: &S,
    base_input: &str,
    target_input: &str,
    amount_input: &str,
) -> Result<Conversion> {
    let base = resolver::resolve(base_input, CurrencyRole::Base);
    let target = resolver::resolve(target_input, CurrencyRole::Target);
    let amount = parse_amount(amount_input)?;
    let base = base?;
    let target = target?;

    let rates = source.latest(&base)?;
    let converted = convert(amount, &target, &rates)?;
    debug!("{} {} -> {} {}", amount, base, converted, target);

    Ok(Conversion {
        amount,
        base,
        target,
        converted,
    })
}
