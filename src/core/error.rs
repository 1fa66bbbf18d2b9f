//! Errors surfaced by the rate cache and conversion service.

use crate::core::currency::CurrencyCode;
use thiserror::Error;

pub type FxResult<T> = std::result::Result<T, FxError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FxError {
    /// Transport failure or non-success HTTP status from the rate provider.
    #[error("Rate provider unavailable{}: {message}", http_status(.status))]
    ProviderUnavailable {
        status: Option<u16>,
        message: String,
    },
    /// The provider answered successfully but the payload has no usable rate table.
    #[error("Malformed response from rate provider: {0}")]
    MalformedResponse(String),
    #[error("Exchange rate not found for {0}")]
    RateNotFound(CurrencyCode),
    #[error("Invalid currency code: '{0}'")]
    InvalidCurrencyCode(String),
}

fn http_status(status: &Option<u16>) -> String {
    status.map(|s| format!(" (HTTP {s})")).unwrap_or_default()
}

impl FxError {
    pub fn status(&self) -> Option<u16> {
        match self {
            FxError::ProviderUnavailable { status, .. } => *status,
            _ => None,
        }
    }
}
