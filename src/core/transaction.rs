//! Buy and sell history of the portfolio.
//!
//! Like the catalog, the ledger is queried through a filter followed by a
//! stable sort. Summary statistics always cover the whole ledger, whatever
//! filter is applied to the listing.
use crate::core::catalog::Selector;
use crate::core::portfolio::canonical_sum;
use anyhow::anyhow;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Buy,
    Sell,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Buy => "Buy",
            TransactionKind::Sell => "Sell",
        }
    }
}

impl Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "buy" | "purchase" => Ok(TransactionKind::Buy),
            "sell" | "redemption" => Ok(TransactionKind::Sell),
            _ => Err(anyhow!("Invalid transaction type: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    #[default]
    Completed,
    Pending,
}

impl TransactionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionStatus::Completed => "Completed",
            TransactionStatus::Pending => "Pending",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Transaction {
    pub id: String,
    pub fund_name: String,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub units: f64,
    pub nav: f64,
    pub amount: f64,
    pub date: NaiveDate,
    #[serde(default)]
    pub status: TransactionStatus,
}

impl Transaction {
    /// Cash flow into the portfolio: positive for a buy, negative for a sell.
    pub fn signed_amount(&self) -> f64 {
        match self.kind {
            TransactionKind::Buy => self.amount,
            TransactionKind::Sell => -self.amount,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransactionSort {
    /// Most recent first.
    #[default]
    Date,
    /// Largest amount first.
    Amount,
}

impl FromStr for TransactionSort {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "date" => Ok(TransactionSort::Date),
            "amount" => Ok(TransactionSort::Amount),
            _ => Err(anyhow!("Invalid transaction sort key: {}", s)),
        }
    }
}

impl Display for TransactionSort {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            TransactionSort::Date => "date",
            TransactionSort::Amount => "amount",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TransactionQuery {
    pub kind: Selector<TransactionKind>,
    pub sort: TransactionSort,
}

impl TransactionQuery {
    pub fn apply(&self, transactions: &[Transaction]) -> Vec<Transaction> {
        let filtered = filter_by_kind(transactions, self.kind);
        sort_transactions(&filtered, self.sort)
    }
}

/// Totals over a ledger.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransactionStats {
    pub total_buy: f64,
    pub total_sell: f64,
    pub count: usize,
    /// Buys minus sells.
    pub net_amount: f64,
}

pub fn filter_by_kind(
    transactions: &[Transaction],
    kind: Selector<TransactionKind>,
) -> Vec<Transaction> {
    transactions
        .iter()
        .filter(|txn| kind.accepts(&txn.kind))
        .cloned()
        .collect()
}

/// Stable sort, descending on the key.
pub fn sort_transactions(transactions: &[Transaction], key: TransactionSort) -> Vec<Transaction> {
    let mut sorted = transactions.to_vec();
    match key {
        TransactionSort::Date => sorted.sort_by(|a, b| b.date.cmp(&a.date)),
        TransactionSort::Amount => sorted.sort_by(|a, b| b.amount.total_cmp(&a.amount)),
    }
    sorted
}

pub fn summarize(transactions: &[Transaction]) -> TransactionStats {
    let total_of = |kind: TransactionKind| {
        canonical_sum(
            transactions
                .iter()
                .filter(|txn| txn.kind == kind)
                .map(|txn| txn.amount),
        )
    };
    TransactionStats {
        total_buy: total_of(TransactionKind::Buy),
        total_sell: total_of(TransactionKind::Sell),
        count: transactions.len(),
        net_amount: canonical_sum(transactions.iter().map(Transaction::signed_amount)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn txn(id: &str, kind: TransactionKind, amount: f64, date: &str) -> Transaction {
        Transaction {
            id: id.to_string(),
            fund_name: format!("{id} Fund"),
            kind,
            units: 10.0,
            nav: amount / 10.0,
            amount,
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            status: TransactionStatus::Completed,
        }
    }

    fn ledger() -> Vec<Transaction> {
        vec![
            txn("TXN001", TransactionKind::Buy, 6500.0, "2023-08-15"),
            txn("TXN002", TransactionKind::Buy, 6000.0, "2023-10-20"),
            txn("TXN003", TransactionKind::Buy, 6000.0, "2023-12-01"),
            txn("TXN005", TransactionKind::Sell, 4912.5, "2024-01-20"),
            txn("TXN008", TransactionKind::Sell, 2080.0, "2024-02-15"),
            txn("TXN009", TransactionKind::Buy, 3150.0, "2024-02-15"),
        ]
    }

    fn ids(transactions: &[Transaction]) -> Vec<&str> {
        transactions.iter().map(|t| t.id.as_str()).collect()
    }

    #[test]
    fn sorts_by_date_newest_first_keeping_ties_in_order() {
        let sorted = sort_transactions(&ledger(), TransactionSort::Date);
        assert_eq!(
            ids(&sorted),
            vec!["TXN008", "TXN009", "TXN005", "TXN003", "TXN002", "TXN001"]
        );
    }

    #[test]
    fn sorts_by_amount_largest_first_keeping_ties_in_order() {
        let sorted = sort_transactions(&ledger(), TransactionSort::Amount);
        assert_eq!(
            ids(&sorted),
            vec!["TXN001", "TXN002", "TXN003", "TXN005", "TXN009", "TXN008"]
        );
    }

    #[test]
    fn filters_by_kind() {
        let sells = filter_by_kind(&ledger(), Selector::Only(TransactionKind::Sell));
        assert_eq!(ids(&sells), vec!["TXN005", "TXN008"]);
        assert_eq!(filter_by_kind(&ledger(), Selector::All).len(), 6);

        let query = TransactionQuery {
            kind: Selector::Only(TransactionKind::Buy),
            sort: TransactionSort::Amount,
        };
        assert_eq!(
            ids(&query.apply(&ledger())),
            vec!["TXN001", "TXN002", "TXN003", "TXN009"]
        );
    }

    #[test]
    fn summarizes_whole_ledger() {
        let stats = summarize(&ledger());
        assert_eq!(stats.total_buy, 21_650.0);
        assert_eq!(stats.total_sell, 6_992.5);
        assert_eq!(stats.count, 6);
        assert_eq!(stats.net_amount, 14_657.5);
    }

    #[test]
    fn empty_ledger_summarizes_to_zero() {
        let stats = summarize(&[]);
        assert_eq!(stats.total_buy, 0.0);
        assert_eq!(stats.total_sell, 0.0);
        assert_eq!(stats.count, 0);
        assert_eq!(stats.net_amount, 0.0);
    }

    #[test]
    fn parses_kinds_and_sort_keys() {
        assert_eq!("BUY".parse::<TransactionKind>().unwrap(), TransactionKind::Buy);
        assert_eq!(
            "sell".parse::<Selector<TransactionKind>>().unwrap(),
            Selector::Only(TransactionKind::Sell)
        );
        assert_eq!("All".parse::<Selector<TransactionKind>>().unwrap(), Selector::All);
        assert_eq!("amount".parse::<TransactionSort>().unwrap(), TransactionSort::Amount);
        assert!("transfer".parse::<TransactionKind>().is_err());
        assert!("units".parse::<TransactionSort>().is_err());
    }

    #[test]
    fn deserializes_ledger_entries() {
        let yaml = r#"
id: "TXN009"
fund_name: "Technology Innovation Fund"
type: buy
units: 10.0
nav: 315.0
amount: 3150.0
date: 2024-02-20
status: pending
"#;
        let txn: Transaction = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(txn.kind, TransactionKind::Buy);
        assert_eq!(txn.status, TransactionStatus::Pending);
        assert_eq!(txn.signed_amount(), 3150.0);
    }
}
