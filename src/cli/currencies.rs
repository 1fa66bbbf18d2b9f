use super::ui;
use crate::core::catalog::{self, Currency};
use comfy_table::Cell;

pub fn run() {
    println!("{}", display_currencies(catalog::all()));
}

pub fn display_currencies(currencies: &[Currency]) -> String {
    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Code"),
        ui::header_cell("Name"),
        ui::header_cell("Symbol"),
    ]);
    for currency in currencies {
        table.add_row(vec![
            Cell::new(currency.code),
            Cell::new(currency.name),
            currency.symbol.map_or_else(|| ui::na_cell(false), Cell::new),
        ]);
    }
    format!(
        "{}\n\n{}",
        ui::style_text("Supported currencies", ui::StyleType::Title),
        table
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_currencies() {
        let output = console::strip_ansi_codes(&display_currencies(catalog::all())).to_string();
        assert!(output.contains("Supported currencies"));
        assert!(output.contains("Japanese Yen"));
        assert!(output.contains("Swiss Franc"));
    }
}
