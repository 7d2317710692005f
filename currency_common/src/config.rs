//! Rate provider configuration.
//!
//! The access key is never compiled in. It is read from the environment (a `.env`
//! file in the working directory is honoured) and may be overridden from the
//! command line by the front end.
use std::env;

use crate::error::ConverterError;
use crate::result::Result;

/// Base URL of the ExchangeRate-API v6 service.
pub const DEFAULT_ENDPOINT: &str = "https://v6.exchangerate-api.com/v6";
/// Environment variable holding the provider access key.
pub const API_KEY_VAR: &str = "EXCHANGE_RATE_API_KEY";
/// Environment variable overriding the provider base URL.
pub const ENDPOINT_VAR: &str = "EXCHANGE_RATE_API_URL";

/// Endpoint and credentials for the rate provider.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL, without the `/{key}/latest/{base}` suffix.
    pub endpoint: String,
    /// Provider access key.
    pub api_key: String,
}

impl std::fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiConfig")
            .field("endpoint", &self.endpoint)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

impl ApiConfig {
    /// Build a config from explicit values. Fails on an empty key.
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>) -> Result<Self> {
        let api_key = api_key.into().trim().to_string();
        if api_key.is_empty() {
            return Err(ConverterError::Config(format!(
                "no API key configured; set {} or pass --api-key",
                API_KEY_VAR
            )));
        }
        let endpoint = endpoint.into().trim().trim_end_matches('/').to_string();
        Ok(Self { endpoint, api_key })
    }

    /// Load from the process environment after reading `.env`, with optional overrides.
    pub fn from_env(api_key: Option<String>, endpoint: Option<String>) -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok(), api_key, endpoint)
    }

    /// Resolve the config through `lookup`; explicit overrides win over looked-up values.
    pub fn from_lookup<F>(lookup: F, api_key: Option<String>, endpoint: Option<String>) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |v: String| {
            let v = v.trim().to_string();
            (!v.is_empty()).then_some(v)
        };
        let api_key = api_key
            .and_then(non_empty)
            .or_else(|| lookup(API_KEY_VAR).and_then(non_empty))
            .unwrap_or_default();
        let endpoint = endpoint
            .and_then(non_empty)
            .or_else(|| lookup(ENDPOINT_VAR).and_then(non_empty))
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
        Self::new(endpoint, api_key)
    }
}
