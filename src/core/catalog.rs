//! Search, filter and sort over the fund catalog.
//!
//! A query runs as a fixed pipeline: search, category filter, risk filter and
//! finally sort. Every stage returns a new sequence and the source catalog is
//! left untouched, so the same query against the same catalog always yields
//! the same result.
use crate::core::fund::{Fund, FundCategory, RiskRating};
use anyhow::anyhow;
use icu_collator::Collator;
use icu_collator::options::{CollatorOptions, Strength};
use std::cmp::Ordering;
use std::fmt::Display;
use std::str::FromStr;
use tracing::warn;

/// Either every value passes, or only an exact match does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector<T> {
    All,
    Only(T),
}

impl<T> Default for Selector<T> {
    fn default() -> Self {
        Selector::All
    }
}

impl<T: PartialEq> Selector<T> {
    pub fn accepts(&self, value: &T) -> bool {
        match self {
            Selector::All => true,
            Selector::Only(wanted) => wanted == value,
        }
    }
}

impl<T> FromStr for Selector<T>
where
    T: FromStr<Err = anyhow::Error>,
{
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(Selector::All)
        } else {
            s.parse().map(Selector::Only)
        }
    }
}

impl<T: Display> Display for Selector<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Selector::All => f.write_str("All"),
            Selector::Only(value) => write!(f, "{value}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Ascending by name, in locale-aware collation order.
    #[default]
    Name,
    /// Descending by yearly return.
    Performance,
    /// Ascending by expense ratio.
    Expense,
    /// Descending by assets under management.
    Aum,
}

impl FromStr for SortKey {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "name" => Ok(SortKey::Name),
            "performance" => Ok(SortKey::Performance),
            "expense" => Ok(SortKey::Expense),
            "aum" => Ok(SortKey::Aum),
            _ => Err(anyhow!("Invalid sort key: {}", s)),
        }
    }
}

impl Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            SortKey::Name => "name",
            SortKey::Performance => "performance",
            SortKey::Expense => "expense",
            SortKey::Aum => "aum",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Query {
    pub search: String,
    pub category: Selector<FundCategory>,
    pub risk: Selector<RiskRating>,
    pub sort: SortKey,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = term.into();
        self
    }

    pub fn category(mut self, category: FundCategory) -> Self {
        self.category = Selector::Only(category);
        self
    }

    pub fn risk(mut self, risk: RiskRating) -> Self {
        self.risk = Selector::Only(risk);
        self
    }

    pub fn sort_by(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    /// Runs the full pipeline against `funds`.
    pub fn apply(&self, funds: &[Fund]) -> Vec<Fund> {
        let found = search(funds, &self.search);
        let by_category = filter_by_category(&found, self.category);
        let by_risk = filter_by_risk(&by_category, self.risk);
        sort_funds(&by_risk, self.sort)
    }
}

/// Case-insensitive substring match. An empty term matches everything.
pub fn search(funds: &[Fund], term: &str) -> Vec<Fund> {
    let needle = term.to_lowercase();
    funds
        .iter()
        .filter(|fund| needle.is_empty() || fund.contains_text(&needle))
        .cloned()
        .collect()
}

pub fn filter_by_category(funds: &[Fund], category: Selector<FundCategory>) -> Vec<Fund> {
    funds
        .iter()
        .filter(|fund| category.accepts(&fund.category))
        .cloned()
        .collect()
}

pub fn filter_by_risk(funds: &[Fund], risk: Selector<RiskRating>) -> Vec<Fund> {
    funds
        .iter()
        .filter(|fund| risk.accepts(&fund.risk_rating))
        .cloned()
        .collect()
}

/// Stable sort; funds that tie on the key keep their relative order.
pub fn sort_funds(funds: &[Fund], key: SortKey) -> Vec<Fund> {
    let mut sorted = funds.to_vec();
    match key {
        SortKey::Name => sort_by_name(&mut sorted),
        SortKey::Performance => sorted.sort_by(|a, b| b.return_yearly.total_cmp(&a.return_yearly)),
        SortKey::Expense => sorted.sort_by(|a, b| a.expense_ratio.total_cmp(&b.expense_ratio)),
        SortKey::Aum => sorted.sort_by(|a, b| b.aum.total_cmp(&a.aum)),
    }
    sorted
}

// Root-locale collation at primary strength: case and accents are ignored,
// so "École" sorts among the E names and equal names keep their order.
fn sort_by_name(funds: &mut [Fund]) {
    let mut options = CollatorOptions::default();
    options.strength = Some(Strength::Primary);
    match Collator::try_new(Default::default(), options) {
        Ok(collator) => funds.sort_by(|a, b| collator.compare(&a.name, &b.name)),
        Err(e) => {
            warn!("Collation data unavailable, sorting names by case-folded text: {e}");
            funds.sort_by(|a, b| compare_folded(&a.name, &b.name));
        }
    }
}

fn compare_folded(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}

/// Distinct categories in the order they first appear in the catalog.
pub fn categories(funds: &[Fund]) -> Vec<FundCategory> {
    let mut seen = Vec::new();
    for fund in funds {
        if !seen.contains(&fund.category) {
            seen.push(fund.category);
        }
    }
    seen
}

pub fn find_fund<'a>(funds: &'a [Fund], id: &str) -> Option<&'a Fund> {
    funds.iter().find(|fund| fund.id == id)
}
