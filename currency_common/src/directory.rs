//! Country/currency directory search.
//!
//! Two passes over static data, in this order:
//! 1. every country (ISO 3166 order) joined to its ISO 4217 currency, kept when the
//!    country or currency name contains the term;
//! 2. every supplemental currency (declaration order), kept when its code or name
//!    contains the term.
//!
//! Matching is a case-insensitive substring test and the empty term matches all
//! rows. A currency present in both tables shows up in both passes.
use std::fmt;

use crate::reference::{self, CountryEntry, CurrencyEntry};

/// One line of the directory listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectoryEntry {
    /// A country and the currency it uses.
    Country {
        /// The country row.
        country: &'static CountryEntry,
        /// Its currency.
        currency: &'static CurrencyEntry,
    },
    /// A row from the supplemental table.
    Supplemental(&'static CurrencyEntry),
}

impl DirectoryEntry {
    /// Currency code of the row.
    pub fn code(&self) -> &'static str {
        match self {
            DirectoryEntry::Country { currency, .. } => currency.code,
            DirectoryEntry::Supplemental(currency) => currency.code,
        }
    }
}

impl fmt::Display for DirectoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DirectoryEntry::Country { country, currency } => {
                write!(f, "{} - {} ({})", country.name, currency.name, currency.code)
            }
            DirectoryEntry::Supplemental(currency) => write!(f, "{} - {}", currency.code, currency.name),
        }
    }
}

/// List directory rows matching `term`.
pub fn search(term: &str) -> Vec<DirectoryEntry> {
    let needle = term.to_lowercase();
    let contains = |haystack: &str| haystack.to_lowercase().contains(&needle);

    let countries = reference::countries().iter().filter_map(|country| {
        let currency = country.currency.and_then(reference::currency_by_code)?;
        (contains(country.name) || contains(currency.name))
            .then_some(DirectoryEntry::Country { country, currency })
    });

    let supplemental = reference::supplemental()
        .iter()
        .filter(|entry| contains(entry.code) || contains(entry.name))
        .map(DirectoryEntry::Supplemental);

    countries.chain(supplemental).collect()
}
