//! Core business logic: rate caching, conversion and formatting

pub mod cache;
pub mod catalog;
pub mod clock;
pub mod config;
pub mod conversion;
pub mod currency;
pub mod error;
pub mod format;
pub mod log;
pub mod session;

// Re-export main types for cleaner imports
pub use cache::{CacheEntry, RateCache};
pub use clock::{Clock, SystemClock};
pub use conversion::{Conversion, ConversionService};
pub use currency::{CurrencyCode, RateProvider, RateTable};
pub use error::{FxError, FxResult};
pub use session::ConverterSession;
