use super::ui;
use crate::core::catalog::Query;
use crate::core::fund::Fund;
use crate::core::{analytics, catalog};
use anyhow::Result;
use comfy_table::Cell;
use tracing::info;

/// Renders catalog entries in the order given.
pub fn display_as_table(funds: &[Fund], currency: &str) -> String {
    let mut table = ui::new_styled_table();

    table.set_header(vec![
        ui::header_cell("Fund"),
        ui::header_cell("Category"),
        ui::header_cell("Risk"),
        ui::header_cell(&format!("NAV ({currency})")),
        ui::header_cell("1Y"),
        ui::header_cell("3Y"),
        ui::header_cell("5Y"),
        ui::header_cell("AUM"),
        ui::header_cell("Expense (%)"),
        ui::header_cell("Min. Investment"),
    ]);

    for fund in funds {
        table.add_row(vec![
            Cell::new(&fund.name),
            Cell::new(fund.category.as_str()),
            Cell::new(fund.risk_rating.as_str()),
            ui::number_cell(format!("{:.2}", fund.current_price)),
            ui::change_cell(fund.return_yearly),
            ui::change_cell(fund.return_three_year),
            ui::change_cell(fund.return_five_year),
            ui::number_cell(ui::format_large_amount(fund.aum)),
            ui::number_cell(format!("{:.2}", fund.expense_ratio)),
            ui::number_cell(format!("{:.2}", fund.min_investment)),
        ]);
    }

    table.to_string()
}

pub fn run(funds: &[Fund], query: &Query, currency: &str) -> Result<()> {
    info!("Querying catalog of {} funds", funds.len());

    let categories = catalog::categories(funds)
        .iter()
        .map(|c| c.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    println!(
        "Categories: {}",
        ui::style_text(&categories, ui::StyleType::Subtle)
    );
    println!(
        "Filters: search={:?}, category={}, risk={}, sort={}\n",
        query.search, query.category, query.risk, query.sort
    );

    let result = analytics::query_catalog(funds, query);
    if result.is_empty() {
        println!("No funds match the given filters.");
        return Ok(());
    }

    println!("{}", display_as_table(&result, currency));
    println!(
        "\n{}",
        ui::style_text(
            &format!("{} of {} funds", result.len(), funds.len()),
            ui::StyleType::TotalLabel
        )
    );
    Ok(())
}
