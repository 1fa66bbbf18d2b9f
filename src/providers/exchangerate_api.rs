use async_trait::async_trait;
use serde::Deserialize;
use std::collections::HashMap;
use tracing::{debug, instrument, warn};

use crate::core::currency::{CurrencyCode, RateProvider, RateTable};
use crate::core::error::{FxError, FxResult};

/// Rate provider for exchangerate-api style `latest` endpoints.
///
/// Requests `{base_url}/{api_key}/latest/{BASE}` and reads the
/// `conversion_rates` object from the response.
pub struct ExchangeRateApiProvider {
    base_url: String,
    api_key: String,
}

impl ExchangeRateApiProvider {
    pub fn new(base_url: &str, api_key: &str) -> Self {
        ExchangeRateApiProvider {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }

    fn latest_url(&self, key: &str, base: &CurrencyCode) -> String {
        format!("{}/{}/latest/{}", self.base_url, key, base)
    }
}

#[derive(Debug, Deserialize)]
struct LatestRatesResponse {
    conversion_rates: Option<HashMap<String, f64>>,
    #[serde(rename = "error-type")]
    error_type: Option<String>,
}

fn unavailable(status: Option<u16>, message: String) -> FxError {
    FxError::ProviderUnavailable { status, message }
}

#[async_trait]
impl RateProvider for ExchangeRateApiProvider {
    #[instrument(name = "ExchangeRateFetch", skip(self, base), fields(base = %base))]
    async fn fetch_rates(&self, base: &CurrencyCode) -> FxResult<RateTable> {
        let url = self.latest_url(&self.api_key, base);
        debug!("Requesting rates from {}", self.latest_url("***", base));

        let client = reqwest::Client::builder()
            .user_agent("fxc/1.0")
            .build()
            .map_err(|e| unavailable(None, format!("Failed to build HTTP client: {e}")))?;

        let response = client.get(&url).send().await.map_err(|e| {
            unavailable(
                e.status().map(|s| s.as_u16()),
                format!("Request error for base currency {base}: {}", e.without_url()),
            )
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!(%status, "Rate provider returned an error status");
            return Err(unavailable(
                Some(status.as_u16()),
                format!("HTTP error: {status} for base currency: {base}"),
            ));
        }

        let text = response.text().await.map_err(|e| {
            unavailable(
                None,
                format!("Failed to read response for base currency {base}: {}", e.without_url()),
            )
        })?;

        let data: LatestRatesResponse = serde_json::from_str(&text).map_err(|e| {
            FxError::MalformedResponse(format!("Failed to parse JSON response for {base}: {e}"))
        })?;

        let rates = data.conversion_rates.ok_or_else(|| {
            let detail = data
                .error_type
                .map(|t| format!(" (provider error: {t})"))
                .unwrap_or_default();
            FxError::MalformedResponse(format!(
                "No conversion_rates field in response for {base}{detail}"
            ))
        })?;

        let table: RateTable = rates
            .into_iter()
            .filter_map(|(code, rate)| CurrencyCode::new(&code).ok().map(|code| (code, rate)))
            .collect();
        debug!("Received {} rates for base {}", table.len(), base);
        Ok(table)
    }
}
