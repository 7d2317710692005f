//! Command-line arguments for the currency client.
//!
//! This module defines the CLI interface using `clap`. See `main` for end-to-end usage.
use clap::{Parser, Subcommand};

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Rate provider access key. Falls back to `EXCHANGE_RATE_API_KEY`.
    #[clap(long, global = true)]
    pub api_key: Option<String>,

    /// Rate provider base URL. Falls back to `EXCHANGE_RATE_API_URL`.
    #[clap(long, global = true)]
    pub endpoint: Option<String>,

    /// What to do; the interactive shell when omitted.
    #[command(subcommand)]
    pub command: Option<Mode>,
}

/// Top-level actions.
#[derive(Debug, Subcommand)]
pub enum Mode {
    /// Convert an amount once and print the result.
    Convert {
        /// Currency to convert from (ISO code or English name).
        base: String,
        /// Currency to convert to (ISO code or English name).
        target: String,
        /// Amount in the base currency.
        #[clap(allow_hyphen_values = true)]
        amount: String,
    },
    /// Print the country/currency directory filtered by a search term.
    Search {
        /// Case-insensitive substring; lists everything when omitted.
        #[clap(default_value = "")]
        term: String,
    },
    /// Interactive session with the converter form and the directory.
    Shell,
}
