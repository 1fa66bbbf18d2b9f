use super::ui;
use crate::core::catalog;
use crate::core::format::format_rate;
use crate::core::{ConversionService, CurrencyCode, FxResult, RateTable};
use anyhow::{Result, bail};
use comfy_table::Cell;
use futures::future::join_all;
use std::sync::Arc;
use tracing::{error, info};

/// Fetches and prints the rate tables for each base currency.
pub async fn run(service: &ConversionService, bases: &[CurrencyCode]) -> Result<()> {
    info!("Fetching rate tables for {} base currencies", bases.len());

    let pb = ui::new_spinner("Fetching exchange rates...");
    let results: Vec<(&CurrencyCode, FxResult<Arc<RateTable>>)> =
        join_all(bases.iter().map(|base| async move { (base, service.rates(base).await) }))
            .await;
    pb.finish_and_clear();

    let mut failures = 0;
    let num_results = results.len();
    for (i, (base, result)) in results.into_iter().enumerate() {
        match result {
            Ok(table) => println!("{}", display_rates(base, &table)),
            Err(e) => {
                failures += 1;
                error!(error = %e, base = %base, "Error fetching exchange rates");
                ui::print_failure(&format!(
                    "Failed to fetch exchange rates for {base}. Please try again later."
                ));
            }
        }
        if i + 1 < num_results {
            ui::print_separator();
        }
    }

    if failures > 0 {
        bail!("Failed to fetch exchange rates for {failures} of {num_results} base currencies");
    }
    Ok(())
}

pub fn display_rates(base: &CurrencyCode, table: &RateTable) -> String {
    let mut output = format!(
        "Rates for 1 {}\n\n",
        ui::style_text(base.as_str(), ui::StyleType::Title)
    );

    let mut rates_table = ui::new_styled_table();
    rates_table.set_header(vec![
        ui::header_cell("Currency"),
        ui::header_cell("Name"),
        ui::header_cell("Rate"),
    ]);
    for (code, rate) in table.sorted() {
        let name = catalog::lookup(code.as_str()).map(|c| c.name);
        let name_cell = name.map_or_else(|| ui::na_cell(false), Cell::new);
        let rate_cell = match table.rate(code.as_str()) {
            Some(_) => ui::number_cell(format_rate(rate)),
            None => ui::na_cell(true),
        };
        rates_table.add_row(vec![Cell::new(code.as_str()), name_cell, rate_cell]);
    }

    output.push_str(&rates_table.to_string());
    output.push_str(&format!(
        "\n\n{}",
        ui::style_text(
            &format!("{} currencies", table.len()),
            ui::StyleType::Subtle
        )
    ));
    output
}
