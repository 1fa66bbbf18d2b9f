pub mod cli;
pub mod core;
pub mod providers;

use crate::core::config::{API_KEY_ENV, AppConfig};
use crate::core::{ConversionService, CurrencyCode, RateCache, SystemClock};
use anyhow::{Context, Result, bail};
use std::sync::Arc;
use tracing::{debug, info};

pub enum AppCommand {
    Convert {
        amount: f64,
        from: Option<String>,
        to: Option<String>,
        swap: bool,
    },
    Rates {
        bases: Vec<String>,
    },
    Currencies,
}

/// Wires the HTTP provider, the system clock and the rate cache together.
pub fn build_service(config: &AppConfig) -> ConversionService {
    let provider = providers::ExchangeRateApiProvider::new(
        &config.provider.base_url,
        &config.provider.api_key,
    );
    let cache = RateCache::new(
        Arc::new(provider),
        Arc::new(SystemClock),
        config.cache.ttl(),
    );
    ConversionService::new(Arc::new(cache))
}

fn service_with_key(config: &AppConfig) -> Result<ConversionService> {
    if config.provider.api_key.is_empty() {
        bail!(
            "No provider access key configured. Set provider.api_key in the config file or the {API_KEY_ENV} environment variable"
        );
    }
    Ok(build_service(config))
}

fn parse_code(code: Option<&str>, fallback: &CurrencyCode) -> Result<CurrencyCode> {
    match code {
        Some(code) => CurrencyCode::new(code).with_context(|| format!("Invalid currency: '{code}'")),
        None => Ok(fallback.clone()),
    }
}

pub async fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    info!("Currency converter starting...");

    if let AppCommand::Currencies = command {
        cli::currencies::run();
        return Ok(());
    }

    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    run_with_config(command, config).await
}

/// Runs a command against an already loaded configuration.
pub async fn run_with_config(command: AppCommand, config: AppConfig) -> Result<()> {
    debug!(
        base_url = %config.provider.base_url,
        ttl_seconds = config.cache.ttl_seconds,
        "Loaded config"
    );

    match command {
        AppCommand::Convert {
            amount,
            from,
            to,
            swap,
        } => {
            let from = parse_code(from.as_deref(), &config.defaults.from)?;
            let to = parse_code(to.as_deref(), &config.defaults.to)?;
            let service = service_with_key(&config)?;
            cli::convert::run(&service, amount, from, to, swap).await
        }
        AppCommand::Rates { bases } => {
            let bases = if bases.is_empty() {
                vec![config.defaults.from.clone()]
            } else {
                bases
                    .iter()
                    .map(|b| parse_code(Some(b), &config.defaults.from))
                    .collect::<Result<Vec<_>>>()?
            };
            let service = service_with_key(&config)?;
            cli::rates::run(&service, &bases).await
        }
        AppCommand::Currencies => {
            cli::currencies::run();
            Ok(())
        }
    }
}
