use super::ui;
use crate::core::format::{format_money, format_rate};
use crate::core::{Conversion, ConversionService, ConverterSession, CurrencyCode};
use anyhow::{Context, Result, bail};
use chrono::Local;
use comfy_table::Cell;
use tracing::{error, info};

const FAILURE_NOTICE: &str = "Currency conversion failed. Please try again later.";

/// Rejects amounts the conversion service should never see.
pub fn validate_amount(amount: f64) -> Result<f64> {
    if !amount.is_finite() || amount <= 0.0 {
        bail!("Please enter a valid amount greater than zero (got {amount})");
    }
    Ok(amount)
}

pub async fn run(
    service: &ConversionService,
    amount: f64,
    from: CurrencyCode,
    to: CurrencyCode,
    swap: bool,
) -> Result<()> {
    let amount = validate_amount(amount)?;
    info!("Converting {} {} to {}", amount, from, to);

    let mut session = ConverterSession::new(amount, from, to);
    print_conversion(convert_with_spinner(&mut session, service, false).await?)?;

    if swap {
        ui::print_separator();
        print_conversion(convert_with_spinner(&mut session, service, true).await?)?;
    }
    Ok(())
}

async fn convert_with_spinner<'a>(
    session: &'a mut ConverterSession,
    service: &ConversionService,
    swap: bool,
) -> Result<&'a Conversion> {
    let pb = ui::new_spinner("Fetching exchange rates...");
    let result = if swap {
        session.swap(service).await
    } else {
        session.convert(service).await
    };
    pb.finish_and_clear();

    result.map_err(|e| {
        error!(error = %e, "Error converting currency");
        ui::print_failure(FAILURE_NOTICE);
        anyhow::Error::new(e)
    })
}

fn print_conversion(conversion: &Conversion) -> Result<()> {
    println!("{}", display_conversion(conversion)?);
    Ok(())
}

/// Renders a conversion as the amount, the result, the unit rate and the time.
pub fn display_conversion(conversion: &Conversion) -> Result<String> {
    let from = conversion.from.as_str();
    let to = conversion.to.as_str();
    let amount = format_money(conversion.amount, from)
        .with_context(|| format!("Failed to format amount in {from}"))?;
    let converted = format_money(conversion.converted, to)
        .with_context(|| format!("Failed to format amount in {to}"))?;

    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Amount"),
        ui::header_cell("Converted"),
        ui::header_cell("Rate"),
    ]);
    table.add_row(vec![
        ui::number_cell(amount),
        ui::number_cell(converted.clone()),
        Cell::new(format!(
            "1 {from} = {} {to}",
            format_rate(conversion.rate)
        )),
    ]);

    let converted_at = conversion
        .converted_at
        .with_timezone(&Local)
        .format("%Y-%m-%d %H:%M:%S");

    let mut output = format!(
        "{} {} → {}\n\n",
        ui::style_text("Conversion:", ui::StyleType::Title),
        from,
        to
    );
    output.push_str(&table.to_string());
    output.push_str(&format!(
        "\n\n{}: {}\n{}",
        ui::style_text("Result", ui::StyleType::TotalLabel),
        ui::style_text(&converted, ui::StyleType::TotalValue),
        ui::style_text(
            &format!("Converted at {converted_at}"),
            ui::StyleType::Subtle
        )
    ));
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_validate_amount() {
        assert_eq!(validate_amount(10.5).unwrap(), 10.5);
        for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(validate_amount(bad).is_err(), "{bad} should be rejected");
        }
    }

    #[test]
    fn test_display_conversion() {
        let conversion = Conversion {
            amount: 10.0,
            from: CurrencyCode::new("USD").unwrap(),
            to: CurrencyCode::new("EUR").unwrap(),
            converted: 9.0,
            rate: 0.9,
            converted_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
        };
        let output = console::strip_ansi_codes(&display_conversion(&conversion).unwrap())
            .to_string();
        assert!(output.contains("$10.00"));
        assert!(output.contains("€9.00"));
        assert!(output.contains("1 USD = 0.9000 EUR"));
        assert!(output.contains("Converted at"));
    }

    #[test]
    fn test_display_conversion_rejects_malformed_code() {
        let conversion = Conversion {
            amount: 1.0,
            from: CurrencyCode::new("USD").unwrap(),
            to: CurrencyCode::new("EURO").unwrap(),
            converted: 0.9,
            rate: 0.9,
            converted_at: Utc::now(),
        };
        assert!(display_conversion(&conversion).is_err());
    }
}
