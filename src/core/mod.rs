//! Investment analytics core: calculators, portfolio aggregation and the
//! fund catalog query pipeline.

pub mod analytics;
pub mod calculator;
pub mod catalog;
pub mod config;
pub mod error;
pub mod fund;
pub mod log;
pub mod portfolio;
pub mod transaction;

// Re-export main types for cleaner imports
pub use calculator::{Projection, RealizedReturns};
pub use catalog::{Query, Selector, SortKey};
pub use error::DomainError;
pub use fund::{Fund, FundCategory, RiskRating};
pub use portfolio::{Holding, PortfolioMetrics};
pub use transaction::{Transaction, TransactionKind, TransactionQuery, TransactionStats};
