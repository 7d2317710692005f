//! Static reference data.
//!
//! - `currencies`: the ISO 4217 table, used for resolution and the directory join.
//! - `countries`: the ISO 3166-1 table, each country tagged with its currency code.
//! - `supplemental`: the hand-maintained list appended to directory listings.
//!
//! Tables are plain `'static` slices; enumeration order is the slice order.

macro_rules! currency_entries {
    ($($code:literal => $name:literal),* $(,)?) => {
        &[$($crate::reference::CurrencyEntry { code: $code, name: $name }),*]
    };
}

pub mod countries;
pub mod currencies;
pub mod supplemental;

/// One row of a currency table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyEntry {
    /// ISO 4217 alphabetic code, upper case.
    pub code: &'static str,
    /// English currency name.
    pub name: &'static str,
}

/// One row of the country table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountryEntry {
    /// ISO 3166-1 alpha-2 code.
    pub alpha_2: &'static str,
    /// English short name.
    pub name: &'static str,
    /// Code of the country's currency, `None` where no currency is assigned.
    pub currency: Option<&'static str>,
}

/// The ISO 4217 table in code order.
pub fn currencies() -> &'static [CurrencyEntry] {
    currencies::CURRENCIES
}

/// The ISO 3166-1 table in alpha-2 order.
pub fn countries() -> &'static [CountryEntry] {
    countries::COUNTRIES
}

/// The supplemental currency list in declaration order.
pub fn supplemental() -> &'static [CurrencyEntry] {
    supplemental::SUPPLEMENTAL
}

/// Look up an ISO 4217 entry by exact (upper-case) code.
pub fn currency_by_code(code: &str) -> Option<&'static CurrencyEntry> {
    currencies().iter().find(|c| c.code == code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn assert_unique(codes: impl Iterator<Item = &'static str>, table: &str) {
        let mut seen = HashSet::new();
        for code in codes {
            assert!(seen.insert(code), "duplicate code {} in {}", code, table);
        }
    }

    #[test]
    fn codes_are_unique_within_each_table() {
        assert_unique(currencies().iter().map(|c| c.code), "currencies");
        assert_unique(supplemental().iter().map(|c| c.code), "supplemental");
        assert_unique(countries().iter().map(|c| c.alpha_2), "countries");
    }

    #[test]
    fn codes_are_three_upper_case_letters() {
        for entry in currencies().iter().chain(supplemental()) {
            assert_eq!(entry.code.len(), 3, "{}", entry.code);
            assert!(entry.code.chars().all(|c| c.is_ascii_uppercase()), "{}", entry.code);
        }
    }

    #[test]
    fn every_country_currency_is_in_the_standards_table() {
        for country in countries() {
            if let Some(code) = country.currency {
                assert!(
                    currency_by_code(code).is_some(),
                    "{} refers to unknown currency {}",
                    country.name,
                    code
                );
            }
        }
    }

    #[test]
    fn lookup_by_code() {
        assert_eq!(currency_by_code("EUR").map(|c| c.name), Some("Euro"));
        assert!(currency_by_code("eur").is_none());
        assert!(currency_by_code("XYZ").is_none());
    }
}
