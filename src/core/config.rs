use crate::core::calculator::{LumpSumInput, ReturnsInput, SipInput};
use crate::core::fund::Fund;
use crate::core::portfolio::Holding;
use crate::core::transaction::Transaction;
use anyhow::{Context, Result, bail};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::{fs, path::PathBuf};
use tracing::debug;

/// Default inputs for the calculator commands, used when a flag is omitted.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct CalculatorDefaults {
    #[serde(default)]
    pub sip: SipInput,
    #[serde(default)]
    pub lump_sum: LumpSumInput,
    #[serde(default)]
    pub returns: ReturnsInput,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    #[serde(default)]
    pub funds: Vec<Fund>,
    #[serde(default)]
    pub holdings: Vec<Holding>,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    pub currency: String,
    #[serde(default)]
    pub calculators: CalculatorDefaults,
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        debug!("Loading default config");
        let config_path = Self::default_config_path()?;
        Self::load_from_path(&config_path)
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("dev", "fundlens", "fundlens")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.config_dir().join("config.yaml"))
    }

    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let config_str = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Self = serde_yaml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;
        config
            .validate()
            .with_context(|| format!("Invalid config file: {}", path.as_ref().display()))?;
        debug!(
            "Successfully loaded config with {} funds, {} holdings and {} transactions",
            config.funds.len(),
            config.holdings.len(),
            config.transactions.len()
        );
        Ok(config)
    }

    /// Rejects catalog and portfolio records outside the ranges the analytics
    /// core is defined on.
    pub fn validate(&self) -> Result<()> {
        let mut ids = HashSet::new();
        for fund in &self.funds {
            if !ids.insert(fund.id.as_str()) {
                bail!("Duplicate fund id: {}", fund.id);
            }
            if !is_positive(fund.current_price) {
                bail!("Fund {} must have a positive price", fund.id);
            }
            if ![fund.aum, fund.expense_ratio, fund.min_investment]
                .into_iter()
                .all(is_non_negative)
            {
                bail!(
                    "Fund {} has a negative AUM, expense ratio or minimum investment",
                    fund.id
                );
            }
        }
        for holding in &self.holdings {
            if !is_positive(holding.units) || !is_positive(holding.invested_amount) {
                bail!(
                    "Holding {} must have positive units and invested amount",
                    holding.fund_id
                );
            }
            if !is_non_negative(holding.current_value) {
                bail!("Holding {} has a negative current value", holding.fund_id);
            }
        }
        let mut txn_ids = HashSet::new();
        for txn in &self.transactions {
            if !txn_ids.insert(txn.id.as_str()) {
                bail!("Duplicate transaction id: {}", txn.id);
            }
            if ![txn.units, txn.nav, txn.amount].into_iter().all(is_positive) {
                bail!("Transaction {} must have positive units, NAV and amount", txn.id);
            }
        }
        Ok(())
    }
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

fn is_non_negative(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}
