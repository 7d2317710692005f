//! Exchange-rate fetching.
//!
//! `RateSource` is the seam between the conversion path and the network. The
//! production source is `ExchangeRateApi`, a blocking client for the
//! ExchangeRate-API v6 `latest` endpoint:
//!
//! ```text
//! GET {endpoint}/{key}/latest/{base}
//! {"result":"success","base_code":"USD","time_last_update_unix":1700000000,
//!  "conversion_rates":{"USD":1,"EUR":0.92,...}}
//! {"result":"error","error-type":"invalid-key"}
//! ```
//!
//! One call, no retry, no caching: every conversion fetches a fresh mapping.
use std::collections::HashMap;

use chrono::{DateTime, Utc};
use log::{debug, info};
use reqwest::blocking::Client;
use serde::Deserialize;

use crate::config::ApiConfig;
use crate::error::ConverterError;
use crate::result::Result;

/// Snapshot of one base currency's multipliers to every supported target.
#[derive(Debug, Clone, PartialEq)]
pub struct RateMapping {
    base: String,
    rates: HashMap<String, f64>,
    last_updated: Option<DateTime<Utc>>,
}

impl RateMapping {
    /// Create a mapping for `base` from `(code, rate)` pairs.
    pub fn new<I, K>(base: impl Into<String>, rates: I) -> Self
    where
        I: IntoIterator<Item = (K, f64)>,
        K: Into<String>,
    {
        Self {
            base: base.into(),
            rates: rates.into_iter().map(|(k, v)| (k.into(), v)).collect(),
            last_updated: None,
        }
    }

    /// Attach the provider's last-update time.
    pub fn with_last_updated(mut self, at: Option<DateTime<Utc>>) -> Self {
        self.last_updated = at;
        self
    }

    /// Base currency code the rates are quoted against.
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Multiplier from the base to `code`, if the provider quoted it.
    pub fn rate(&self, code: &str) -> Option<f64> {
        self.rates.get(code).copied()
    }

    /// When the provider last refreshed these rates.
    pub fn last_updated(&self) -> Option<DateTime<Utc>> {
        self.last_updated
    }

    /// Number of quoted targets.
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    /// `true` when no target is quoted.
    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}

/// Anything that can produce the latest rate mapping for a base currency.
pub trait RateSource {
    /// Fetch all rates quoted against `base`.
    fn latest(&self, base: &str) -> Result<RateMapping>;
}

impl<T: RateSource + ?Sized> RateSource for &T {
    fn latest(&self, base: &str) -> Result<RateMapping> {
        (**self).latest(base)
    }
}

/// Body of the `latest` endpoint, success or error.
#[derive(Debug, Deserialize)]
struct LatestResponse {
    #[serde(default)]
    result: Option<String>,
    #[serde(rename = "error-type", default)]
    error_type: Option<String>,
    #[serde(default)]
    base_code: Option<String>,
    #[serde(default)]
    time_last_update_unix: Option<i64>,
    #[serde(default)]
    conversion_rates: Option<HashMap<String, f64>>,
}

/// Interpret a `latest` response body requested for `base`.
pub fn parse_latest_response(base: &str, body: &str) -> Result<RateMapping> {
    let response: LatestResponse = serde_json::from_str(body)?;

    if response.result.as_deref() != Some("success") {
        let reason = response
            .error_type
            .unwrap_or_else(|| "Unknown error".to_string());
        return Err(ConverterError::Provider(reason));
    }

    let rates = response.conversion_rates.ok_or_else(|| {
        ConverterError::InvalidResponse("success response without conversion_rates".to_string())
    })?;
    let last_updated = response
        .time_last_update_unix
        .and_then(|secs| DateTime::from_timestamp(secs, 0));

    Ok(RateMapping::new(response.base_code.unwrap_or_else(|| base.to_string()), rates)
        .with_last_updated(last_updated))
}

/// Blocking client for ExchangeRate-API.
pub struct ExchangeRateApi {
    client: Client,
    config: ApiConfig,
}

impl ExchangeRateApi {
    /// Build a client for the configured endpoint.
    pub fn new(config: ApiConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("currency_common/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client, config })
    }

    /// Full request URL for `base`.
    pub fn latest_url(&self, base: &str) -> String {
        format!("{}/{}/latest/{}", self.config.endpoint, self.config.api_key, base)
    }

    fn redacted_url(&self, base: &str) -> String {
        format!("{}/***/latest/{}", self.config.endpoint, base)
    }
}

impl RateSource for ExchangeRateApi {
    fn latest(&self, base: &str) -> Result<RateMapping> {
        debug!("GET {}", self.redacted_url(base));
        let response = self.client.get(self.latest_url(base)).send()?;
        let status = response.status();
        let body = response.text()?;

        let parsed = parse_latest_response(base, &body);
        if !status.is_success() {
            return match parsed {
                Err(err @ ConverterError::Provider(_)) => Err(err),
                _ => Err(ConverterError::Network(format!("HTTP status {}", status))),
            };
        }

        let mapping = parsed?;
        match mapping.last_updated() {
            Some(at) => info!(
                "Received {} rates for base {} (updated {})",
                mapping.len(),
                mapping.base(),
                at.to_rfc3339()
            ),
            None => info!("Received {} rates for base {}", mapping.len(), mapping.base()),
        }
        Ok(mapping)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::io::{BufRead, BufReader, Write};
    use std::net::TcpListener;
    use std::thread;

    /// Serve one canned HTTP response on a local port and return a client pointed at it.
    ///
    /// The handler also returns the request line it saw.
    fn serve_once(status: &str, body: &str) -> (ExchangeRateApi, thread::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );
        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut reader = BufReader::new(stream.try_clone().unwrap());
            let mut request_line = String::new();
            reader.read_line(&mut request_line).unwrap();
            loop {
                let mut header = String::new();
                if reader.read_line(&mut header).unwrap() == 0 || header == "\r\n" {
                    break;
                }
            }
            stream.write_all(response.as_bytes()).unwrap();
            stream.flush().unwrap();
            request_line
        });
        let config = ApiConfig::new(format!("http://{}/v6", addr), "test-key").unwrap();
        (ExchangeRateApi::new(config).unwrap(), handle)
    }

    #[test]
    fn served_success_becomes_mapping() {
        let (api, server) = serve_once(
            "200 OK",
            r#"{"result":"success","base_code":"USD","conversion_rates":{"EUR":0.9}}"#,
        );
        let mapping = api.latest("USD").unwrap();
        assert_eq!(mapping.rate("EUR"), Some(0.9));
        assert!(server.join().unwrap().starts_with("GET /v6/test-key/latest/USD "));
    }

    #[test]
    fn provider_error_on_client_status_stays_provider() {
        let (api, server) = serve_once(
            "403 Forbidden",
            r#"{"result":"error","error-type":"invalid-key"}"#,
        );
        match api.latest("USD") {
            Err(ConverterError::Provider(reason)) => assert_eq!(reason, "invalid-key"),
            other => panic!("unexpected: {other:?}"),
        }
        server.join().unwrap();
    }

    #[test]
    fn gateway_error_page_is_a_network_error() {
        let (api, server) = serve_once("502 Bad Gateway", "<html>502 Bad Gateway</html>");
        match api.latest("USD") {
            Err(ConverterError::Network(message)) => assert!(message.contains("502")),
            other => panic!("unexpected: {other:?}"),
        }
        server.join().unwrap();
    }

    #[test]
    fn served_success_with_bad_rates_is_invalid() {
        let (api, server) = serve_once(
            "200 OK",
            r#"{"result":"success","conversion_rates":{"EUR":"n/a"}}"#,
        );
        assert!(matches!(api.latest("USD"), Err(ConverterError::InvalidResponse(_))));
        server.join().unwrap();
    }

    #[test]
    fn parses_success_body() {
        let body = r#"{
            "result": "success",
            "base_code": "USD",
            "time_last_update_unix": 1700000000,
            "conversion_rates": {"USD": 1, "EUR": 0.92, "JPY": 149.5}
        }"#;
        let mapping = parse_latest_response("USD", body).unwrap();
        assert_eq!(mapping.base(), "USD");
        assert_eq!(mapping.len(), 3);
        assert_eq!(mapping.rate("EUR"), Some(0.92));
        assert_eq!(mapping.rate("USD"), Some(1.0));
        assert_eq!(mapping.rate("XYZ"), None);
        assert_eq!(
            mapping.last_updated(),
            Some(Utc.timestamp_opt(1_700_000_000, 0).unwrap())
        );
    }

    #[test]
    fn base_falls_back_to_requested_code() {
        let body = r#"{"result":"success","conversion_rates":{"EUR":0.9}}"#;
        let mapping = parse_latest_response("USD", body).unwrap();
        assert_eq!(mapping.base(), "USD");
        assert_eq!(mapping.last_updated(), None);
    }

    #[test]
    fn provider_error_carries_error_type() {
        let body = r#"{"result":"error","error-type":"invalid-key"}"#;
        match parse_latest_response("USD", body) {
            Err(ConverterError::Provider(reason)) => assert_eq!(reason, "invalid-key"),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn provider_error_without_reason() {
        match parse_latest_response("USD", r#"{"result":"error"}"#) {
            Err(ConverterError::Provider(reason)) => assert_eq!(reason, "Unknown error"),
            other => panic!("unexpected: {other:?}"),
        }
        assert!(matches!(
            parse_latest_response("USD", "{}"),
            Err(ConverterError::Provider(_))
        ));
    }

    #[test]
    fn success_without_rates_is_invalid() {
        assert!(matches!(
            parse_latest_response("USD", r#"{"result":"success"}"#),
            Err(ConverterError::InvalidResponse(_))
        ));
    }

    #[test]
    fn malformed_body_is_invalid() {
        assert!(matches!(
            parse_latest_response("USD", "<html>502 Bad Gateway</html>"),
            Err(ConverterError::InvalidResponse(_))
        ));
    }

    #[test]
    fn url_follows_endpoint_template() {
        let api = ExchangeRateApi::new(ApiConfig::new("https://rates.example/v6/", "k123").unwrap()).unwrap();
        assert_eq!(api.latest_url("EUR"), "https://rates.example/v6/k123/latest/EUR");
        assert!(!api.redacted_url("EUR").contains("k123"));
    }

    #[test]
    fn unreachable_endpoint_is_a_network_error() {
        let api = ExchangeRateApi::new(ApiConfig::new("http://127.0.0.1:1", "k").unwrap()).unwrap();
        assert!(matches!(api.latest("USD"), Err(ConverterError::Network(_))));
    }

    #[test]
    fn references_delegate_to_the_source() {
        struct Fixed;
        impl RateSource for Fixed {
            fn latest(&self, base: &str) -> Result<RateMapping> {
                Ok(RateMapping::new(base, [("EUR", 0.5)]))
            }
        }
        let source = Fixed;
        let by_ref: &dyn RateSource = &source;
        assert_eq!(by_ref.latest("USD").unwrap().rate("EUR"), Some(0.5));
    }
}
