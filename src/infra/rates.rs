//! Client for the open.er-api.com latest-rates endpoint.
//!
//! - One GET per call, no retries, no caching.
//! - `load_live_rate` is the only place failures are absorbed.

use reqwest::{Client, Url};
use serde::Deserialize;
use thiserror::Error;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

use crate::domain::ExchangeRate;

const DEFAULT_ENDPOINT: &str = "https://open.er-api.com/v6/latest/EUR";
const USD_CODE: &str = "USD";

#[derive(Debug, Error)]
pub enum RateClientError {
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("http request error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("response has no usable USD rate")]
    MissingRate,
}

/// A USD quote as reported by the provider.
#[derive(Clone, Debug, PartialEq)]
pub struct RateQuote {
    pub usd_per_eur: f64,
    pub updated_at: Option<OffsetDateTime>,
}

#[derive(Clone)]
pub struct RateClient {
    http: Client,
    endpoint: Url,
}

impl RateClient {
    pub fn new() -> Result<Self, RateClientError> {
        Self::with_endpoint(DEFAULT_ENDPOINT)
    }

    pub fn with_endpoint(endpoint: &str) -> Result<Self, RateClientError> {
        let endpoint = Url::parse(endpoint)?;
        Ok(Self {
            http: Client::new(),
            endpoint,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub async fn latest_usd_rate(&self) -> Result<RateQuote, RateClientError> {
        let response = self
            .http
            .get(self.endpoint.clone())
            .send()
            .await?
            .error_for_status()?;
        let payload: LatestRatesDto = response.json().await?;
        payload.into_quote().ok_or(RateClientError::MissingRate)
    }
}

/// Fetches the live rate once, returning `None` on any failure so the
/// caller keeps whatever rate it already holds.
pub async fn load_live_rate(client: &RateClient) -> Option<ExchangeRate> {
    match client.latest_usd_rate().await {
        Ok(quote) => {
            let rate = ExchangeRate::live(quote.usd_per_eur, quote.updated_at)?;
            tracing::info!(
                usd_per_eur = rate.usd_per_eur(),
                updated_at = %rate
                    .updated_at()
                    .and_then(|at| at.format(&Rfc3339).ok())
                    .unwrap_or_else(|| "unknown".to_string()),
                "live exchange rate loaded"
            );
            Some(rate)
        }
        Err(err) => {
            tracing::debug!(endpoint = %client.endpoint(), error = %err, "keeping fallback exchange rate");
            None
        }
    }
}

/// Only `rates.USD` decides acceptance; every other field is read leniently.
#[derive(Debug, Deserialize)]
struct LatestRatesDto {
    #[serde(default)]
    rates: Option<serde_json::Value>,
    #[serde(default)]
    time_last_update_unix: Option<serde_json::Value>,
}

impl LatestRatesDto {
    fn into_quote(self) -> Option<RateQuote> {
        let usd_per_eur = self
            .rates?
            .get(USD_CODE)
            .and_then(serde_json::Value::as_f64)
            .filter(|rate| rate.is_finite() && *rate > 0.0)?;
        let updated_at = self
            .time_last_update_unix
            .as_ref()
            .and_then(parse_unix_seconds);
        Some(RateQuote {
            usd_per_eur,
            updated_at,
        })
    }
}

fn parse_unix_seconds(value: &serde_json::Value) -> Option<OffsetDateTime> {
    let secs = match value {
        serde_json::Value::Number(number) => number
            .as_i64()
            .or_else(|| number.as_f64().map(|secs| secs.trunc() as i64))?,
        serde_json::Value::String(raw) => raw.trim().parse::<i64>().ok()?,
        _ => return None,
    };
    OffsetDateTime::from_unix_timestamp(secs).ok()
}
