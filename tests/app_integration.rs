use fundlens::AppCommand;
use fundlens::core::catalog::{Query, Selector, SortKey};
use fundlens::core::fund::{FundCategory, RiskRating};
use fundlens::core::transaction::{TransactionKind, TransactionQuery, TransactionSort};
use fundlens::core::{analytics, config::AppConfig};
use std::fs;
use tracing::info;

mod test_utils {
    use std::fs;

    pub const CONFIG: &str = r#"
currency: "USD"
funds:
  - id: "MF001"
    name: "Growth Opportunity Fund"
    category: Equity
    risk_rating: High
    current_price: 145.50
    return_yearly: 15.8
    return_three_year: 12.5
    return_five_year: 10.2
    aum: 5000000000.0
    expense_ratio: 1.2
    min_investment: 500.0
    description: "An equity fund focused on large-cap growth stocks."
  - id: "MF002"
    name: "Balanced Portfolio Fund"
    category: Balanced
    risk_rating: Medium
    current_price: 210.75
    return_yearly: 9.5
    return_three_year: 8.2
    return_five_year: 7.8
    aum: 8500000000.0
    expense_ratio: 0.85
    min_investment: 1000.0
  - id: "MF005"
    name: "Dividend Income Fund"
    category: Equity
    risk_rating: Medium
    current_price: 155.80
    return_yearly: 9.5
    return_three_year: 7.8
    return_five_year: 8.0
    aum: 6800000000.0
    expense_ratio: 0.95
    min_investment: 2000.0
holdings:
  - fund_id: "MF001"
    fund_name: "Growth Opportunity Fund"
    units: 50.0
    invested_amount: 6500.0
    current_value: 7275.0
  - fund_id: "MF002"
    fund_name: "Balanced Portfolio Fund"
    units: 30.0
    invested_amount: 6000.0
    current_value: 6322.5
transactions:
  - id: "TXN001"
    fund_name: "Growth Opportunity Fund"
    type: buy
    units: 50.0
    nav: 130.0
    amount: 6500.0
    date: 2023-08-15
  - id: "TXN005"
    fund_name: "Debt Security Fund"
    type: sell
    units: 50.0
    nav: 98.25
    amount: 4912.5
    date: 2024-01-20
  - id: "TXN009"
    fund_name: "Technology Innovation Fund"
    type: buy
    units: 10.0
    nav: 315.0
    amount: 3150.0
    date: 2024-02-20
    status: pending
calculators:
  returns:
    initial: 0.0
    final_value: 100.0
    years: 1.0
"#;

    pub fn write_config(content: &str) -> tempfile::NamedTempFile {
        let config_file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
        fs::write(config_file.path(), content).expect("Failed to write config file");
        config_file
    }
}

#[test_log::test]
fn test_funds_command_runs_against_config() {
    let config_file = test_utils::write_config(test_utils::CONFIG);
    let path = config_file.path().to_str().unwrap();

    let query = Query::new()
        .category(FundCategory::Equity)
        .sort_by(SortKey::Performance);
    let result = fundlens::run_command(AppCommand::Funds(query), Some(path));
    assert!(result.is_ok(), "Funds command failed with: {:?}", result.err());
}

#[test_log::test]
fn test_portfolio_and_calculator_commands() {
    let config_file = test_utils::write_config(test_utils::CONFIG);
    let path = config_file.path().to_str().unwrap();

    for command in [
        AppCommand::Portfolio,
        AppCommand::Transactions(TransactionQuery {
            kind: Selector::Only(TransactionKind::Sell),
            sort: TransactionSort::Amount,
        }),
        AppCommand::Sip {
            amount: Some(5000.0),
            annual_rate_pct: Some(0.0),
            years: Some(10),
        },
        AppCommand::LumpSum {
            principal: None,
            annual_rate_pct: None,
            years: Some(2.5),
        },
        AppCommand::Returns {
            initial: Some(50_000.0),
            final_value: Some(75_000.0),
            years: Some(3.0),
        },
    ] {
        info!(?command, "Running command");
        let result = fundlens::run_command(command, Some(path));
        assert!(result.is_ok(), "Command failed with: {:?}", result.err());
    }
}

#[test_log::test]
fn test_returns_command_surfaces_domain_error() {
    let config_file = test_utils::write_config(test_utils::CONFIG);
    let path = config_file.path().to_str().unwrap();

    // The configured default has a zero initial investment.
    let result = fundlens::run_command(
        AppCommand::Returns {
            initial: None,
            final_value: None,
            years: None,
        },
        Some(path),
    );
    let err = result.expect_err("zero initial investment must fail");
    assert!(err.to_string().contains("initial value must be positive"));
}

#[test_log::test]
fn test_missing_config_is_reported() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("absent.yaml");
    let result = fundlens::run_command(AppCommand::Portfolio, path.to_str());
    let err = result.expect_err("missing config must fail");
    assert!(err.to_string().contains("Failed to read config file"));
}

#[test_log::test]
fn test_invalid_config_is_rejected() {
    let broken = test_utils::CONFIG.replace("invested_amount: 6000.0", "invested_amount: -1.0");
    let config_file = test_utils::write_config(&broken);
    let err = AppConfig::load_from_path(config_file.path()).unwrap_err();
    assert!(format!("{err:#}").contains("positive units and invested amount"));
}

#[test_log::test]
fn test_analytics_over_loaded_config() {
    let config_file = test_utils::write_config(test_utils::CONFIG);
    let config = AppConfig::load_from_path(config_file.path()).unwrap();

    let metrics = analytics::aggregate_portfolio(&config.holdings);
    assert_eq!(metrics.total_invested, 12_500.0);
    assert_eq!(metrics.total_current, 13_597.5);
    assert_eq!(metrics.total_gain, 1_097.5);
    assert!((metrics.gain_percentage().unwrap() - 8.78).abs() < 1e-9);

    // Balanced and Dividend tie at 9.5%; catalog order decides.
    let by_performance = analytics::query_catalog(
        &config.funds,
        &Query::new().sort_by(SortKey::Performance),
    );
    let ids: Vec<&str> = by_performance.iter().map(|f| f.id.as_str()).collect();
    assert_eq!(ids, vec!["MF001", "MF002", "MF005"]);

    let medium_equity = analytics::query_catalog(
        &config.funds,
        &Query::new()
            .category(FundCategory::Equity)
            .risk(RiskRating::Medium),
    );
    assert_eq!(medium_equity.len(), 1);
    assert_eq!(medium_equity[0].id, "MF005");

    let searched = analytics::query_catalog(&config.funds, &Query::new().search("LARGE-CAP"));
    assert_eq!(searched.len(), 1);
    assert_eq!(searched[0].id, "MF001");
}

#[test_log::test]
fn test_transactions_over_loaded_config() {
    let config_file = test_utils::write_config(test_utils::CONFIG);
    let config = AppConfig::load_from_path(config_file.path()).unwrap();

    let newest_first = analytics::query_transactions(&config.transactions, &TransactionQuery::default());
    let ids: Vec<&str> = newest_first.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["TXN009", "TXN005", "TXN001"]);

    let buys = analytics::query_transactions(
        &config.transactions,
        &TransactionQuery {
            kind: Selector::Only(TransactionKind::Buy),
            sort: TransactionSort::Amount,
        },
    );
    let ids: Vec<&str> = buys.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["TXN001", "TXN009"]);

    let stats = analytics::summarize_transactions(&config.transactions);
    assert_eq!(stats.total_buy, 9_650.0);
    assert_eq!(stats.total_sell, 4_912.5);
    assert_eq!(stats.count, 3);
    assert_eq!(stats.net_amount, 4_737.5);
}
