//! Fund catalog entries.

use anyhow::anyhow;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FundCategory {
    Equity,
    Balanced,
    Debt,
    Hybrid,
    Index,
    Liquid,
    Other,
}

impl FundCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            FundCategory::Equity => "Equity",
            FundCategory::Balanced => "Balanced",
            FundCategory::Debt => "Debt",
            FundCategory::Hybrid => "Hybrid",
            FundCategory::Index => "Index",
            FundCategory::Liquid => "Liquid",
            FundCategory::Other => "Other",
        }
    }
}

impl Display for FundCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FundCategory {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "equity" => Ok(FundCategory::Equity),
            "balanced" => Ok(FundCategory::Balanced),
            "debt" => Ok(FundCategory::Debt),
            "hybrid" => Ok(FundCategory::Hybrid),
            "index" => Ok(FundCategory::Index),
            "liquid" => Ok(FundCategory::Liquid),
            "other" => Ok(FundCategory::Other),
            _ => Err(anyhow!("Invalid fund category: {}", s)),
        }
    }
}

/// Risk rating, ordered from safest to riskiest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum RiskRating {
    Low,
    Medium,
    High,
    #[serde(rename = "Very High")]
    VeryHigh,
}

impl RiskRating {
    pub const ALL: [RiskRating; 4] = [
        RiskRating::Low,
        RiskRating::Medium,
        RiskRating::High,
        RiskRating::VeryHigh,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskRating::Low => "Low",
            RiskRating::Medium => "Medium",
            RiskRating::High => "High",
            RiskRating::VeryHigh => "Very High",
        }
    }
}

impl Display for RiskRating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RiskRating {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s
            .split(|c: char| c.is_whitespace() || c == '-' || c == '_')
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase();
        match normalized.as_str() {
            "low" => Ok(RiskRating::Low),
            "medium" => Ok(RiskRating::Medium),
            "high" => Ok(RiskRating::High),
            "very high" => Ok(RiskRating::VeryHigh),
            _ => Err(anyhow!("Invalid risk rating: {}", s)),
        }
    }
}

/// A catalog entry. Loaded once and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fund {
    pub id: String,
    pub name: String,
    pub category: FundCategory,
    pub risk_rating: RiskRating,
    pub current_price: f64,
    pub return_yearly: f64,
    pub return_three_year: f64,
    pub return_five_year: f64,
    pub aum: f64,
    /// Annual expense ratio, in percent.
    pub expense_ratio: f64,
    pub min_investment: f64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub fund_manager: Option<String>,
    #[serde(default)]
    pub nav_date: Option<NaiveDate>,
    #[serde(default)]
    pub benchmark: Option<String>,
}

impl Fund {
    /// Whether `needle` (already lowercased) occurs in the name, category or
    /// description of this fund.
    pub(crate) fn contains_text(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.category.as_str().to_lowercase().contains(needle)
            || self
                .description
                .as_deref()
                .is_some_and(|d| d.to_lowercase().contains(needle))
    }
}
