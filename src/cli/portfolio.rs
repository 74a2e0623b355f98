use super::ui;
use crate::core::analytics;
use crate::core::catalog::find_fund;
use crate::core::fund::Fund;
use crate::core::portfolio::{self, Holding, PortfolioMetrics};
use anyhow::Result;
use comfy_table::{Attribute, Cell};
use tracing::{debug, info};

/// Holdings together with their aggregated metrics, ready for display.
pub struct PortfolioReport<'a> {
    pub holdings: &'a [Holding],
    pub funds: &'a [Fund],
    pub metrics: PortfolioMetrics,
    pub weights: Option<Vec<f64>>,
    pub currency: &'a str,
}

impl<'a> PortfolioReport<'a> {
    pub fn new(holdings: &'a [Holding], funds: &'a [Fund], currency: &'a str) -> Self {
        PortfolioReport {
            holdings,
            funds,
            metrics: analytics::aggregate_portfolio(holdings),
            weights: portfolio::allocation_weights(holdings),
            currency,
        }
    }

    pub fn display_as_table(&self) -> String {
        let currency = self.currency;
        let mut table = ui::new_styled_table();

        table.set_header(vec![
            ui::header_cell("Fund"),
            ui::header_cell("Risk"),
            ui::header_cell("Units"),
            ui::header_cell(&format!("Invested ({currency})")),
            ui::header_cell(&format!("Current ({currency})")),
            ui::header_cell("Gain"),
            ui::header_cell("Gain (%)"),
            ui::header_cell("Weight (%)"),
        ]);

        for (i, holding) in self.holdings.iter().enumerate() {
            let risk = find_fund(self.funds, &holding.fund_id).map(|f| f.risk_rating.as_str());
            if risk.is_none() {
                debug!("Holding {} is not in the catalog", holding.fund_id);
            }
            let gain_pct = match holding.gain_percentage() {
                Ok(pct) => ui::change_cell(pct),
                Err(_) => ui::na_cell(true),
            };
            let weight = self.weights.as_ref().map(|w| w[i]);

            table.add_row(vec![
                Cell::new(&holding.fund_name),
                Cell::new(risk.unwrap_or("N/A")),
                ui::number_cell(format!("{:.2}", holding.units)),
                ui::number_cell(format!("{:.2}", holding.invested_amount)),
                ui::number_cell(format!("{:.2}", holding.current_value)),
                ui::gain_cell(holding.gain()),
                gain_pct,
                ui::format_optional_cell(weight, |w| format!("{w:.2}%")),
            ]);
        }

        let total_gain_pct = match self.metrics.gain_percentage() {
            Ok(pct) => ui::change_cell(pct),
            Err(_) => ui::na_cell(!self.holdings.is_empty()),
        };
        table.add_row(vec![
            Cell::new("Total").add_attribute(Attribute::Bold),
            Cell::new(""),
            Cell::new(""),
            ui::number_cell(format!("{:.2}", self.metrics.total_invested)),
            ui::number_cell(format!("{:.2}", self.metrics.total_current)),
            ui::gain_cell(self.metrics.total_gain),
            total_gain_pct,
            Cell::new(""),
        ]);

        let mut output = format!(
            "Portfolio: {}\n\n",
            ui::style_text(&format!("{} holdings", self.holdings.len()), ui::StyleType::Title)
        );
        output.push_str(&table.to_string());

        let total_style_type = if self.metrics.total_gain >= 0.0 {
            ui::StyleType::TotalValue
        } else {
            ui::StyleType::Error
        };
        output.push_str(&format!(
            "\n\nCurrent Value ({}): {}",
            ui::style_text(currency, ui::StyleType::TotalLabel),
            ui::style_text(&format!("{:.2}", self.metrics.total_current), total_style_type)
        ));

        output
    }
}

pub fn run(holdings: &[Holding], funds: &[Fund], currency: &str) -> Result<()> {
    info!("Summarising portfolio of {} holdings", holdings.len());

    if holdings.is_empty() {
        println!("No holdings found in the portfolio.");
        return Ok(());
    }

    let report = PortfolioReport::new(holdings, funds, currency);
    println!("{}", report.display_as_table());
    Ok(())
}
