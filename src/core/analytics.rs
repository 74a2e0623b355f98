//! Stable entry points for the presentation layer.
//!
//! Each function is a thin wrapper over the calculator engine, the portfolio
//! aggregator or the catalog pipeline.
use crate::core::calculator::{self, Projection, RealizedReturns};
use crate::core::catalog::Query;
use crate::core::error::DomainError;
use crate::core::fund::Fund;
use crate::core::portfolio::{self, Holding, PortfolioMetrics};
use crate::core::transaction::{self, Transaction, TransactionQuery, TransactionStats};
use tracing::debug;

pub fn compute_periodic_investment(amount: f64, annual_rate_pct: f64, years: u32) -> Projection {
    let projection = calculator::periodic_investment(amount, annual_rate_pct, years);
    debug!("SIP {amount} @ {annual_rate_pct}% for {years}y: {projection:?}");
    projection
}

pub fn compute_lump_sum(principal: f64, annual_rate_pct: f64, years: f64) -> Projection {
    let projection = calculator::lump_sum(principal, annual_rate_pct, years);
    debug!("Lump sum {principal} @ {annual_rate_pct}% for {years}y: {projection:?}");
    projection
}

pub fn compute_realized_returns(
    initial: f64,
    final_value: f64,
    years: f64,
) -> Result<RealizedReturns, DomainError> {
    let result = calculator::realized_returns(initial, final_value, years);
    debug!("Returns {initial} -> {final_value} over {years}y: {result:?}");
    result
}

pub fn aggregate_portfolio(holdings: &[Holding]) -> PortfolioMetrics {
    let metrics = portfolio::aggregate(holdings);
    debug!("Aggregated {} holdings: {metrics:?}", holdings.len());
    metrics
}

pub fn query_catalog(funds: &[Fund], query: &Query) -> Vec<Fund> {
    let result = query.apply(funds);
    debug!(
        "Catalog query {query:?} matched {} of {} funds",
        result.len(),
        funds.len()
    );
    result
}

pub fn query_transactions(
    transactions: &[Transaction],
    query: &TransactionQuery,
) -> Vec<Transaction> {
    let result = query.apply(transactions);
    debug!(
        "Transaction query {query:?} matched {} of {} entries",
        result.len(),
        transactions.len()
    );
    result
}

pub fn summarize_transactions(transactions: &[Transaction]) -> TransactionStats {
    let stats = transaction::summarize(transactions);
    debug!("Summarized {} transactions: {stats:?}", transactions.len());
    stats
}
