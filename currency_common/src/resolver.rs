//! Currency resolution.
//!
//! Accepts what a user would type into a currency field, either an ISO 4217 code
//! in any case or the full English currency name, and yields the canonical
//! upper-case code. Only the ISO table is consulted; matching is exact on the
//! whole (trimmed) string.
use log::debug;

use crate::error::{ConverterError, CurrencyRole};
use crate::reference::{self, CurrencyEntry};
use crate::result::Result;

/// Resolve `input` to a known currency code, or `None`.
pub fn resolve_code(input: &str) -> Option<&'static str> {
    resolve_in(reference::currencies(), input)
}

/// Resolve `input` for the given side of a conversion.
///
/// Returns `ConverterError::UnknownCurrency` carrying the raw input when nothing matches.
pub fn resolve(input: &str, role: CurrencyRole) -> Result<String> {
    match resolve_code(input) {
        Some(code) => {
            debug!("Resolved {} currency '{}' to {}", role, input, code);
            Ok(code.to_string())
        }
        None => Err(ConverterError::UnknownCurrency {
            role,
            input: input.to_string(),
        }),
    }
}

fn resolve_in(table: &'static [CurrencyEntry], input: &str) -> Option<&'static str> {
    let normalized = input.trim().to_uppercase();
    if let Some(entry) = table.iter().find(|c| c.code == normalized) {
        return Some(entry.code);
    }
    let wanted = normalized.to_lowercase();
    table
        .iter()
        .find(|c| c.name.to_lowercase() == wanted)
        .map(|c| c.code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn every_code_resolves_to_itself() {
        for entry in reference::currencies() {
            assert_eq!(resolve_code(entry.code), Some(entry.code));
        }
    }

    #[test]
    fn every_name_resolves_to_a_code_with_that_name() {
        for entry in reference::currencies() {
            for variant in [entry.name.to_string(), entry.name.to_uppercase(), entry.name.to_lowercase()] {
                let code = resolve_code(&variant).unwrap_or_else(|| panic!("{} did not resolve", variant));
                let resolved = reference::currency_by_code(code).unwrap();
                assert_eq!(resolved.name.to_lowercase(), entry.name.to_lowercase());
            }
        }
    }

    #[rstest]
    #[case("usd", "USD")]
    #[case("  eur  ", "EUR")]
    #[case("Euro", "EUR")]
    #[case("pound sterling", "GBP")]
    #[case("US DOLLAR", "USD")]
    #[case("Yen", "JPY")]
    #[case("Leone", "SLE")]
    fn resolves_codes_and_names(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(resolve_code(input), Some(expected));
    }

    #[rstest]
    #[case("")]
    #[case("European Euro")]
    #[case("Dollar")]
    #[case("US")]
    #[case("XYZ")]
    fn rejects_partial_and_unknown(#[case] input: &str) {
        assert_eq!(resolve_code(input), None);
    }

    #[test]
    fn name_match_is_unicode_case_insensitive() {
        assert_eq!(resolve_code("BOLÍVAR SOBERANO"), Some("VED"));
        assert_eq!(resolve_code("pa'anga"), Some("TOP"));
    }

    #[test]
    fn resolve_reports_role_and_raw_input() {
        let err = resolve(" European Euro ", CurrencyRole::Target).unwrap_err();
        match err {
            ConverterError::UnknownCurrency { role, input } => {
                assert_eq!(role, CurrencyRole::Target);
                assert_eq!(input, " European Euro ");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
