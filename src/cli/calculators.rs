use super::ui;
use crate::core::analytics;
use crate::core::calculator::{LumpSumInput, Projection, RealizedReturns, ReturnsInput, SipInput};
use anyhow::Result;
use comfy_table::Cell;
use tracing::info;

fn projection_table(inputs: Vec<(&str, String)>, projection: &Projection, currency: &str) -> String {
    let mut table = ui::new_styled_table();
    table.set_header(vec![ui::header_cell("Item"), ui::header_cell("Value")]);

    for (label, value) in inputs {
        table.add_row(vec![Cell::new(label), ui::number_cell(value)]);
    }
    table.add_row(vec![
        Cell::new(format!("Invested ({currency})")),
        ui::number_cell(format!("{:.2}", projection.invested)),
    ]);
    table.add_row(vec![
        Cell::new(format!("Estimated Returns ({currency})")),
        ui::gain_cell(projection.returns),
    ]);
    table.add_row(vec![
        Cell::new(format!("Total Value ({currency})")),
        ui::format_optional_cell(Some(projection.total), |v| format!("{v:.2}")),
    ]);

    table.to_string()
}

pub fn display_sip(input: &SipInput, projection: &Projection, currency: &str) -> String {
    projection_table(
        vec![
            ("Monthly Investment", format!("{:.2}", input.amount)),
            ("Expected Return (% p.a.)", format!("{:.2}", input.annual_rate_pct)),
            ("Time Period (Years)", input.years.to_string()),
        ],
        projection,
        currency,
    )
}

pub fn display_lump_sum(input: &LumpSumInput, projection: &Projection, currency: &str) -> String {
    projection_table(
        vec![
            ("Investment Amount", format!("{:.2}", input.principal)),
            ("Expected Return (% p.a.)", format!("{:.2}", input.annual_rate_pct)),
            ("Time Period (Years)", format!("{}", input.years)),
        ],
        projection,
        currency,
    )
}

pub fn display_returns(input: &ReturnsInput, returns: &RealizedReturns, currency: &str) -> String {
    let mut table = ui::new_styled_table();
    table.set_header(vec![ui::header_cell("Item"), ui::header_cell("Value")]);
    table.add_row(vec![
        Cell::new(format!("Initial Investment ({currency})")),
        ui::number_cell(format!("{:.2}", input.initial)),
    ]);
    table.add_row(vec![
        Cell::new(format!("Final Value ({currency})")),
        ui::number_cell(format!("{:.2}", input.final_value)),
    ]);
    table.add_row(vec![
        Cell::new("Investment Period (Years)"),
        ui::number_cell(format!("{}", input.years)),
    ]);
    table.add_row(vec![
        Cell::new(format!("Absolute Return ({currency})")),
        ui::gain_cell(returns.absolute_return),
    ]);
    table.add_row(vec![
        Cell::new("Total Return"),
        ui::change_cell(returns.total_return_pct),
    ]);
    table.add_row(vec![
        Cell::new("CAGR"),
        ui::change_cell(returns.cagr_pct),
    ]);
    table.to_string()
}

pub fn run_sip(input: &SipInput, currency: &str) -> Result<()> {
    info!("Projecting SIP: {input:?}");
    let projection =
        analytics::compute_periodic_investment(input.amount, input.annual_rate_pct, input.years);
    println!(
        "{}\n\n{}",
        ui::style_text("SIP Calculator", ui::StyleType::Title),
        display_sip(input, &projection, currency)
    );
    Ok(())
}

pub fn run_lump_sum(input: &LumpSumInput, currency: &str) -> Result<()> {
    info!("Projecting lump sum: {input:?}");
    let projection =
        analytics::compute_lump_sum(input.principal, input.annual_rate_pct, input.years);
    println!(
        "{}\n\n{}",
        ui::style_text("Lumpsum Calculator", ui::StyleType::Title),
        display_lump_sum(input, &projection, currency)
    );
    Ok(())
}

/// Fails when the inputs leave the returns undefined, e.g. a zero initial
/// investment.
pub fn run_returns(input: &ReturnsInput, currency: &str) -> Result<()> {
    info!("Measuring returns: {input:?}");
    let returns = analytics::compute_realized_returns(input.initial, input.final_value, input.years)?;
    println!(
        "{}\n\n{}",
        ui::style_text("Returns Calculator", ui::StyleType::Title),
        display_returns(input, &returns, currency)
    );
    Ok(())
}
