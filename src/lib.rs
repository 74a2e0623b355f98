pub mod cli;
pub mod core;

use crate::core::catalog::Query;
use crate::core::config::AppConfig;
use crate::core::transaction::TransactionQuery;
use anyhow::Result;
use tracing::{debug, info};

/// A command run against a loaded configuration. Calculator inputs left as
/// `None` fall back to the configured defaults.
#[derive(Debug, Clone)]
pub enum AppCommand {
    Funds(Query),
    Portfolio,
    Transactions(TransactionQuery),
    Sip {
        amount: Option<f64>,
        annual_rate_pct: Option<f64>,
        years: Option<u32>,
    },
    LumpSum {
        principal: Option<f64>,
        annual_rate_pct: Option<f64>,
        years: Option<f64>,
    },
    Returns {
        initial: Option<f64>,
        final_value: Option<f64>,
        years: Option<f64>,
    },
}

pub fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    info!("fundlens starting...");

    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    let currency = config.currency.as_str();
    let defaults = &config.calculators;

    match command {
        AppCommand::Funds(query) => cli::funds::run(&config.funds, &query, currency),
        AppCommand::Portfolio => cli::portfolio::run(&config.holdings, &config.funds, currency),
        AppCommand::Transactions(query) => {
            cli::transactions::run(&config.transactions, &query, currency)
        }
        AppCommand::Sip {
            amount,
            annual_rate_pct,
            years,
        } => {
            let mut input = defaults.sip;
            input.amount = amount.unwrap_or(input.amount);
            input.annual_rate_pct = annual_rate_pct.unwrap_or(input.annual_rate_pct);
            input.years = years.unwrap_or(input.years);
            cli::calculators::run_sip(&input, currency)
        }
        AppCommand::LumpSum {
            principal,
            annual_rate_pct,
            years,
        } => {
            let mut input = defaults.lump_sum;
            input.principal = principal.unwrap_or(input.principal);
            input.annual_rate_pct = annual_rate_pct.unwrap_or(input.annual_rate_pct);
            input.years = years.unwrap_or(input.years);
            cli::calculators::run_lump_sum(&input, currency)
        }
        AppCommand::Returns {
            initial,
            final_value,
            years,
        } => {
            let mut input = defaults.returns;
            input.initial = initial.unwrap_or(input.initial);
            input.final_value = final_value.unwrap_or(input.final_value);
            input.years = years.unwrap_or(input.years);
            cli::calculators::run_returns(&input, currency)
        }
    }
}
