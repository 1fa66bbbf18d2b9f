//! Currency codes, rate tables and the rate provider abstraction

use crate::core::error::{FxError, FxResult};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt::Display;
use std::str::FromStr;

/// A currency identifier such as `USD`.
///
/// Codes are trimmed and upper-cased on construction. Beyond being non-empty no
/// validation happens here; the rate provider is the source of truth for which
/// codes exist.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CurrencyCode(String);

impl CurrencyCode {
    pub fn new(code: &str) -> FxResult<Self> {
        let code = code.trim();
        if code.is_empty() {
            return Err(FxError::InvalidCurrencyCode(code.to_string()));
        }
        Ok(CurrencyCode(code.to_uppercase()))
    }

    pub(crate) fn from_static(code: &'static str) -> Self {
        CurrencyCode(code.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for CurrencyCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for CurrencyCode {
    type Err = FxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CurrencyCode::new(s)
    }
}

impl TryFrom<String> for CurrencyCode {
    type Error = FxError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        CurrencyCode::new(&value)
    }
}

impl From<CurrencyCode> for String {
    fn from(code: CurrencyCode) -> String {
        code.0
    }
}

impl Borrow<str> for CurrencyCode {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for CurrencyCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Rates of many target currencies relative to one implicit base currency.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RateTable {
    rates: HashMap<CurrencyCode, f64>,
}

impl RateTable {
    /// Returns the rate for `target`, if the table holds a usable one.
    ///
    /// Zero, negative and non-finite rates are treated as missing.
    pub fn rate(&self, target: &str) -> Option<f64> {
        self.rates
            .get(target)
            .copied()
            .filter(|rate| rate.is_finite() && *rate > 0.0)
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    /// Rates ordered by currency code.
    pub fn sorted(&self) -> Vec<(&CurrencyCode, f64)> {
        let mut rates: Vec<_> = self.rates.iter().map(|(code, rate)| (code, *rate)).collect();
        rates.sort_by(|a, b| a.0.cmp(b.0));
        rates
    }
}

impl FromIterator<(CurrencyCode, f64)> for RateTable {
    fn from_iter<I: IntoIterator<Item = (CurrencyCode, f64)>>(iter: I) -> Self {
        RateTable {
            rates: iter.into_iter().collect(),
        }
    }
}

/// Fetches the latest rate table for a base currency from an upstream source.
#[async_trait]
pub trait RateProvider: Send + Sync {
    async fn fetch_rates(&self, base: &CurrencyCode) -> FxResult<RateTable>;
}
