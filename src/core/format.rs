//! Monetary display formatting.
use crate::core::catalog;
use crate::core::error::{FxError, FxResult};
use num_format::{Locale, ToFormattedString};

/// Formats `amount` as a monetary string with two fraction digits.
///
/// Follows en-US conventions: comma thousands separators, a leading symbol for
/// currencies that have a well-known one (`$1,234.50`, `€9.00`) and the code
/// followed by a space otherwise (`CHF 10.00`). Alphabetic symbols are spaced
/// like codes (`FCFA 10.00`). The code must be three ASCII letters; case is
/// ignored.
pub fn format_money(amount: f64, currency: &str) -> FxResult<String> {
    let code = currency.trim();
    if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(FxError::InvalidCurrencyCode(currency.to_string()));
    }
    let code = code.to_ascii_uppercase();

    let prefix = match catalog::lookup(&code).and_then(|c| c.symbol) {
        Some(symbol) if symbol.ends_with(|c: char| c.is_alphabetic()) => format!("{symbol} "),
        Some(symbol) => symbol.to_string(),
        None => format!("{code} "),
    };
    let sign = if amount.is_sign_negative() && amount != 0.0 {
        "-"
    } else {
        ""
    };
    Ok(format!("{sign}{prefix}{}", group_digits(amount.abs())))
}

/// Formats a unit exchange rate, keeping more precision for small rates.
pub fn format_rate(rate: f64) -> String {
    if rate != 0.0 && rate.abs() < 0.01 {
        format!("{rate:.6}")
    } else {
        format!("{rate:.4}")
    }
}

fn group_digits(amount: f64) -> String {
    let fixed = format!("{amount:.2}");
    let Some((int_part, frac_part)) = fixed.split_once('.') else {
        return fixed;
    };
    // Amounts beyond u128 are left ungrouped
    let grouped = int_part
        .parse::<u128>()
        .map(|n| n.to_formatted_string(&Locale::en))
        .unwrap_or_else(|_| int_part.to_string());
    format!("{grouped}.{frac_part}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_known_symbols() {
        assert_eq!(format_money(9.0, "EUR").unwrap(), "€9.00");
        assert_eq!(format_money(1234.5, "USD").unwrap(), "$1,234.50");
        assert_eq!(format_money(150.0, "jpy").unwrap(), "¥150.00");
        assert_eq!(format_money(0.004, "GBP").unwrap(), "£0.00");
    }

    #[test]
    fn test_format_code_fallback() {
        assert_eq!(format_money(10.0, "CHF").unwrap(), "CHF 10.00");
        assert_eq!(format_money(1_000_000.0, "SEK").unwrap(), "SEK 1,000,000.00");
        // Well-formed but unlisted codes are still formatted
        assert_eq!(format_money(2.5, "XYZ").unwrap(), "XYZ 2.50");
    }

    #[test]
    fn test_format_alphabetic_symbols_are_spaced() {
        assert_eq!(format_money(10.0, "XAF").unwrap(), "FCFA 10.00");
        assert_eq!(format_money(2500.0, "xof").unwrap(), "F CFA 2,500.00");
        assert_eq!(format_money(-3.0, "XPF").unwrap(), "-CFPF 3.00");
    }

    #[test]
    fn test_format_large_amounts() {
        assert_eq!(
            format_money(1e20, "USD").unwrap(),
            "$100,000,000,000,000,000,000.00"
        );
        assert_eq!(format_money(1234567.891, "EUR").unwrap(), "€1,234,567.89");
    }

    #[test]
    fn test_format_rounding_and_sign() {
        assert_eq!(format_money(999.999, "USD").unwrap(), "$1,000.00");
        assert_eq!(format_money(-1234.567, "USD").unwrap(), "-$1,234.57");
        assert_eq!(format_money(-0.001, "USD").unwrap(), "-$0.00");
        assert_eq!(format_money(0.0, "USD").unwrap(), "$0.00");
        assert_eq!(format_money(100.0, "USD").unwrap(), "$100.00");
        assert_eq!(format_money(123456.0, "USD").unwrap(), "$123,456.00");
    }

    #[test]
    fn test_format_rejects_invalid_codes() {
        for code in ["", "US", "USDX", "U$D", "12A"] {
            assert_eq!(
                format_money(1.0, code),
                Err(FxError::InvalidCurrencyCode(code.to_string()))
            );
        }
    }

    #[test]
    fn test_format_rate() {
        assert_eq!(format_rate(0.9), "0.9000");
        assert_eq!(format_rate(150.0), "150.0000");
        assert_eq!(format_rate(0.006667), "0.006667");
    }
}
