use super::ui;
use crate::core::analytics;
use crate::core::transaction::{Transaction, TransactionKind, TransactionQuery, TransactionStats};
use anyhow::Result;
use comfy_table::{Cell, Color};
use tracing::info;

pub fn display_as_table(transactions: &[Transaction], currency: &str) -> String {
    let mut table = ui::new_styled_table();

    table.set_header(vec![
        ui::header_cell("Date"),
        ui::header_cell("Fund"),
        ui::header_cell("Type"),
        ui::header_cell("Units"),
        ui::header_cell(&format!("NAV ({currency})")),
        ui::header_cell(&format!("Amount ({currency})")),
        ui::header_cell("Status"),
    ]);

    for txn in transactions {
        let kind_color = match txn.kind {
            TransactionKind::Buy => Color::Green,
            TransactionKind::Sell => Color::Red,
        };
        table.add_row(vec![
            Cell::new(txn.date.format("%d %b %Y")),
            Cell::new(&txn.fund_name),
            Cell::new(txn.kind.as_str()).fg(kind_color),
            ui::number_cell(format!("{:.2}", txn.units)),
            ui::number_cell(format!("{:.2}", txn.nav)),
            ui::number_cell(format!("{:.2}", txn.amount)),
            Cell::new(txn.status.as_str()),
        ]);
    }

    table.to_string()
}

fn display_stats(stats: &TransactionStats, currency: &str) -> String {
    let net_style = if stats.net_amount >= 0.0 {
        ui::StyleType::TotalValue
    } else {
        ui::StyleType::Error
    };
    format!(
        "Total Purchases ({currency}): {:.2}\nTotal Redemptions ({currency}): {:.2}\nTransactions: {}\nNet Investment ({currency}): {}",
        stats.total_buy,
        stats.total_sell,
        stats.count,
        ui::style_text(&format!("{:.2}", stats.net_amount), net_style)
    )
}

pub fn run(transactions: &[Transaction], query: &TransactionQuery, currency: &str) -> Result<()> {
    info!("Listing {} transactions", transactions.len());

    let stats = analytics::summarize_transactions(transactions);
    println!("{}\n", display_stats(&stats, currency));

    let result = analytics::query_transactions(transactions, query);
    if result.is_empty() {
        println!("No transactions found.");
        return Ok(());
    }

    println!("Filters: type={}, sort={}\n", query.kind, query.sort);
    println!("{}", display_as_table(&result, currency));
    Ok(())
}
