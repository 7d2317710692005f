//! Currency Client: converts amounts between currencies at live rates from
//! ExchangeRate-API and browses a country/currency directory.
//!
//! Usage example (CLI):
//! ```bash
//! export EXCHANGE_RATE_API_KEY=...            # or put it in ./.env
//! currency_client convert usd "Pound Sterling" 120
//! currency_client search euro
//! currency_client                             # interactive shell
//! ```
//!
//! Currencies are accepted as ISO 4217 codes or full English names. The directory
//! works without an API key; conversions report the missing key as an error.
#![warn(missing_docs)]
mod args;
mod shell;
mod view;

use crate::args::{Args, Mode};
use crate::shell::{render_feedback, render_listing};
use crate::view::{AppState, Feedback};
use clap::Parser;
use currency_common::rates::ExchangeRateApi;
use currency_common::{ApiConfig, ConverterError, RateMapping, RateSource, Result};
use log::{debug, info};
use std::io;
use std::process::ExitCode;

/// Rate source built from configuration, or the reason it could not be.
///
/// Deferring the configuration error keeps the directory usable without a key.
enum ConfiguredSource {
    Ready(ExchangeRateApi),
    Unavailable(String),
}

impl ConfiguredSource {
    fn from_args(args: &Args) -> Result<Self> {
        match ApiConfig::from_env(args.api_key.clone(), args.endpoint.clone()) {
            Ok(config) => {
                info!("Using rate provider at {}", config.endpoint);
                Ok(ConfiguredSource::Ready(ExchangeRateApi::new(config)?))
            }
            Err(ConverterError::Config(reason)) => {
                info!("Rate provider not configured: {}", reason);
                Ok(ConfiguredSource::Unavailable(reason))
            }
            Err(e) => Err(e),
        }
    }
}

impl RateSource for ConfiguredSource {
    fn latest(&self, base: &str) -> Result<RateMapping> {
        match self {
            ConfiguredSource::Ready(api) => api.latest(base),
            ConfiguredSource::Unavailable(reason) => Err(ConverterError::Config(reason.clone())),
        }
    }
}

fn run(args: Args) -> Result<ExitCode> {
    let source = ConfiguredSource::from_args(&args)?;
    let mut state = AppState::new();
    let stdout = io::stdout();

    match args.command.unwrap_or(Mode::Shell) {
        Mode::Convert { base, target, amount } => {
            state.base_input = base;
            state.target_input = target;
            state.amount_input = amount;
            let feedback = state.convert(&source);
            match &feedback {
                Feedback::Result(_) => {
                    render_feedback(&mut stdout.lock(), &feedback)?;
                    Ok(ExitCode::SUCCESS)
                }
                Feedback::Error(_) => {
                    render_feedback(&mut io::stderr().lock(), &feedback)?;
                    Ok(ExitCode::FAILURE)
                }
            }
        }
        Mode::Search { term } => {
            state.set_search(&term);
            render_listing(&mut stdout.lock(), &state)?;
            Ok(ExitCode::SUCCESS)
        }
        Mode::Shell => {
            shell::run(&source, &mut state, io::stdin().lock(), stdout.lock())?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn main() -> ExitCode {
    init_logger();
    let args = Args::parse();

    match run(args) {
        Ok(code) => code,
        Err(e) => {
            debug!("run failed: {:?}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Error)
        .parse_default_env()
        .init();
}
