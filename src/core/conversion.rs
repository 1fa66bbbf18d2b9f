//! Converts amounts between currencies using rate tables from a [`RateCache`].
use crate::core::cache::RateCache;
use crate::core::currency::{CurrencyCode, RateTable};
use crate::core::error::{FxError, FxResult};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::{debug, instrument};

/// A completed conversion, as shown to the user.
#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    pub amount: f64,
    pub from: CurrencyCode,
    pub to: CurrencyCode,
    pub converted: f64,
    /// Value of one unit of `from` in `to`, derived as `converted / amount`.
    pub rate: f64,
    pub converted_at: DateTime<Utc>,
}

#[derive(Clone)]
pub struct ConversionService {
    cache: Arc<RateCache>,
}

impl ConversionService {
    pub fn new(cache: Arc<RateCache>) -> Self {
        Self { cache }
    }

    pub fn cache(&self) -> &RateCache {
        &self.cache
    }

    /// The effective rate table for `base`.
    pub async fn rates(&self, base: &CurrencyCode) -> FxResult<Arc<RateTable>> {
        self.cache.rates_for(base).await
    }

    /// Converts `amount` of `from` into `to`.
    ///
    /// The amount is not validated here; callers are expected to reject
    /// non-positive input before calling.
    #[instrument(name = "Convert", skip(self, from, to), fields(from = %from, to = %to))]
    pub async fn convert(
        &self,
        amount: f64,
        from: &CurrencyCode,
        to: &CurrencyCode,
    ) -> FxResult<f64> {
        let table = self.cache.rates_for(from).await?;
        let rate = table
            .rate(to.as_str())
            .ok_or_else(|| FxError::RateNotFound(to.clone()))?;
        let converted = amount * rate;
        debug!(rate, converted, "Converted amount");
        Ok(converted)
    }

    /// Like [`convert`](Self::convert), but returns the full conversion record.
    pub async fn quote(
        &self,
        amount: f64,
        from: &CurrencyCode,
        to: &CurrencyCode,
    ) -> FxResult<Conversion> {
        let converted = self.convert(amount, from, to).await?;
        Ok(Conversion {
            amount,
            from: from.clone(),
            to: to.clone(),
            converted,
            rate: converted / amount,
            converted_at: self.cache.clock().now(),
        })
    }
}
