//! Tracks the currently selected currency pair and its latest result.
use crate::core::conversion::{Conversion, ConversionService};
use crate::core::currency::CurrencyCode;
use crate::core::error::FxResult;
use tracing::debug;

/// The state a front end keeps between conversions.
///
/// Swapping currencies invalidates the previous result and immediately runs a
/// new conversion for the swapped pair. Both operations take `&mut self`, so a
/// result can only be rendered once the conversion it belongs to has finished.
#[derive(Debug, Clone)]
pub struct ConverterSession {
    pub amount: f64,
    pub from: CurrencyCode,
    pub to: CurrencyCode,
    last: Option<Conversion>,
}

impl ConverterSession {
    pub fn new(amount: f64, from: CurrencyCode, to: CurrencyCode) -> Self {
        Self {
            amount,
            from,
            to,
            last: None,
        }
    }

    /// The result of the most recent successful conversion for the current pair.
    pub fn last(&self) -> Option<&Conversion> {
        self.last.as_ref()
    }

    pub async fn convert(&mut self, service: &ConversionService) -> FxResult<&Conversion> {
        self.last = None;
        let conversion = service.quote(self.amount, &self.from, &self.to).await?;
        Ok(&*self.last.insert(conversion))
    }

    pub async fn swap(&mut self, service: &ConversionService) -> FxResult<&Conversion> {
        std::mem::swap(&mut self.from, &mut self.to);
        debug!("Swapped pair to {} -> {}", self.from, self.to);
        self.convert(service).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::cache::{DEFAULT_TTL, RateCache};
    use crate::core::clock::{Clock, ManualClock};
    use crate::core::currency::{RateProvider, RateTable};
    use crate::core::error::FxError;
    use async_trait::async_trait;
    use chrono::Utc;
    use std::sync::Arc;
    use std::sync::Mutex;

    fn code(s: &str) -> CurrencyCode {
        CurrencyCode::new(s).unwrap()
    }

    #[derive(Default)]
    struct RecordingProvider {
        requested: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl RateProvider for RecordingProvider {
        async fn fetch_rates(&self, base: &CurrencyCode) -> FxResult<RateTable> {
            self.requested.lock().unwrap().push(base.to_string());
            match base.as_str() {
                "USD" => Ok([(code("USD"), 1.0), (code("EUR"), 0.9)].into_iter().collect()),
                "EUR" => Ok([(code("EUR"), 1.0), (code("USD"), 1.1)].into_iter().collect()),
                _ => Err(FxError::ProviderUnavailable {
                    status: None,
                    message: "connection refused".to_string(),
                }),
            }
        }
    }

    fn service(provider: Arc<RecordingProvider>) -> ConversionService {
        let clock: Arc<dyn Clock> = Arc::new(ManualClock::new(Utc::now()));
        let cache = RateCache::new(provider, clock, DEFAULT_TTL);
        ConversionService::new(Arc::new(cache))
    }

    #[tokio::test]
    async fn test_swap_resolves_rates_for_new_base() {
        let provider = Arc::new(RecordingProvider::default());
        let service = service(Arc::clone(&provider));
        let mut session = ConverterSession::new(10.0, code("USD"), code("EUR"));

        let first = session.convert(&service).await.unwrap();
        assert!((first.converted - 9.0).abs() < 1e-9);

        let swapped = session.swap(&service).await.unwrap();
        assert_eq!(swapped.from, code("EUR"));
        assert_eq!(swapped.to, code("USD"));
        assert!((swapped.converted - 11.0).abs() < 1e-9);

        assert_eq!(*provider.requested.lock().unwrap(), vec!["USD", "EUR"]);
        assert_eq!(session.last().unwrap().from, code("EUR"));
    }

    #[tokio::test]
    async fn test_failed_swap_clears_previous_result() {
        let provider = Arc::new(RecordingProvider::default());
        let service = service(provider);
        let mut session = ConverterSession::new(10.0, code("USD"), code("GBP"));

        let err = session.convert(&service).await.unwrap_err();
        assert_eq!(err, FxError::RateNotFound(code("GBP")));
        assert!(session.last().is_none());

        session.to = code("EUR");
        session.convert(&service).await.unwrap();
        assert!(session.last().is_some());

        session.to = code("GBP");
        session.from = code("EUR");
        // GBP base is unavailable, so the swapped conversion fails
        assert!(session.swap(&service).await.is_err());
        assert!(session.last().is_none());
        assert_eq!(session.from, code("GBP"));
        assert_eq!(session.to, code("EUR"));
    }
}
