//! Reduces a set of holdings into summary metrics.
use crate::core::error::DomainError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A position in the user's portfolio.
///
/// `invested_amount` and `current_value` are supplied independently; nothing
/// here assumes `current_value == units * price`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Holding {
    pub fund_id: String,
    pub fund_name: String,
    pub units: f64,
    pub invested_amount: f64,
    pub current_value: f64,
    #[serde(default)]
    pub purchase_price: Option<f64>,
    #[serde(default)]
    pub purchase_date: Option<NaiveDate>,
}

impl Holding {
    pub fn gain(&self) -> f64 {
        self.current_value - self.invested_amount
    }

    pub fn gain_percentage(&self) -> Result<f64, DomainError> {
        gain_percentage(self.invested_amount, self.gain())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PortfolioMetrics {
    pub total_invested: f64,
    pub total_current: f64,
    pub total_gain: f64,
}

impl PortfolioMetrics {
    /// Fails for an empty portfolio, or one where nothing was invested. That
    /// state is distinct from a zero return.
    pub fn gain_percentage(&self) -> Result<f64, DomainError> {
        gain_percentage(self.total_invested, self.total_gain)
    }
}

fn gain_percentage(invested: f64, gain: f64) -> Result<f64, DomainError> {
    if invested == 0.0 {
        return Err(DomainError::NothingInvested);
    }
    Ok(gain / invested * 100.0)
}

/// Sums invested and current values across `holdings`.
///
/// The terms are added in a canonical order, so the totals are identical for
/// any permutation of the input.
pub fn aggregate(holdings: &[Holding]) -> PortfolioMetrics {
    let total_invested = canonical_sum(holdings.iter().map(|h| h.invested_amount));
    let total_current = canonical_sum(holdings.iter().map(|h| h.current_value));

    PortfolioMetrics {
        total_invested,
        total_current,
        total_gain: total_current - total_invested,
    }
}

/// Share of the portfolio's current value held in each holding, in percent
/// and in input order. `None` when the portfolio is worth nothing.
pub fn allocation_weights(holdings: &[Holding]) -> Option<Vec<f64>> {
    let total_current = canonical_sum(holdings.iter().map(|h| h.current_value));
    if total_current <= 0.0 {
        return None;
    }
    Some(
        holdings
            .iter()
            .map(|h| h.current_value / total_current * 100.0)
            .collect(),
    )
}

pub(crate) fn canonical_sum(values: impl Iterator<Item = f64>) -> f64 {
    let mut values: Vec<f64> = values.collect();
    values.sort_by(f64::total_cmp);
    values.into_iter().sum()
}
