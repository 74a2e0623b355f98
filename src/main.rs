use anyhow::Result;
use clap::{Args, CommandFactory, Parser, Subcommand};
use fundlens::cli::input;
use fundlens::core::catalog::{Query, Selector, SortKey};
use fundlens::core::fund::{FundCategory, RiskRating};
use fundlens::core::transaction::{TransactionKind, TransactionQuery, TransactionSort};
use fundlens::core::log::init_logging;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Args)]
struct FundsArgs {
    /// Case-insensitive text matched against name, category and description
    #[arg(short, long, default_value = "")]
    search: String,

    /// Fund category, or "all"
    #[arg(long, default_value = "all")]
    category: Selector<FundCategory>,

    /// Risk rating, or "all"
    #[arg(long, default_value = "all")]
    risk: Selector<RiskRating>,

    /// One of name, performance, expense, aum
    #[arg(long, default_value = "name")]
    sort: SortKey,
}

#[derive(Args)]
struct TransactionsArgs {
    /// buy, sell, or "all"
    #[arg(long = "type", default_value = "all")]
    kind: Selector<TransactionKind>,

    /// One of date, amount (both newest or largest first)
    #[arg(long, default_value = "date")]
    sort: TransactionSort,
}

impl From<Commands> for fundlens::AppCommand {
    fn from(cmd: Commands) -> fundlens::AppCommand {
        match cmd {
            Commands::Funds(args) => fundlens::AppCommand::Funds(Query {
                search: args.search,
                category: args.category,
                risk: args.risk,
                sort: args.sort,
            }),
            Commands::Portfolio => fundlens::AppCommand::Portfolio,
            Commands::Transactions(args) => fundlens::AppCommand::Transactions(TransactionQuery {
                kind: args.kind,
                sort: args.sort,
            }),
            Commands::Sip {
                amount,
                rate,
                years,
            } => fundlens::AppCommand::Sip {
                amount,
                annual_rate_pct: rate,
                years,
            },
            Commands::Lumpsum {
                principal,
                rate,
                years,
            } => fundlens::AppCommand::LumpSum {
                principal,
                annual_rate_pct: rate,
                years,
            },
            Commands::Returns {
                initial,
                final_value,
                years,
            } => fundlens::AppCommand::Returns {
                initial,
                final_value,
                years,
            },
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// Search, filter and sort the fund catalog
    Funds(FundsArgs),
    /// Display portfolio holdings and gains
    Portfolio,
    /// List buy and sell transactions with purchase and redemption totals
    Transactions(TransactionsArgs),
    /// Project a monthly systematic investment plan
    Sip {
        /// Monthly contribution
        #[arg(long, value_parser = input::positive)]
        amount: Option<f64>,
        /// Expected annual return in percent
        #[arg(long, allow_negative_numbers = true, value_parser = input::finite)]
        rate: Option<f64>,
        /// Duration in whole years
        #[arg(long)]
        years: Option<u32>,
    },
    /// Project a single upfront investment
    Lumpsum {
        /// Amount invested upfront
        #[arg(long, value_parser = input::positive)]
        principal: Option<f64>,
        /// Expected annual return in percent
        #[arg(long, allow_negative_numbers = true, value_parser = input::finite)]
        rate: Option<f64>,
        /// Duration in years, fractions allowed
        #[arg(long, value_parser = input::non_negative)]
        years: Option<f64>,
    },
    /// Measure absolute, total and compound annual returns
    Returns {
        /// Initial investment
        #[arg(long, value_parser = input::finite)]
        initial: Option<f64>,
        /// Final value of the investment
        #[arg(long = "final", value_parser = input::finite)]
        final_value: Option<f64>,
        /// Elapsed years, fractions allowed
        #[arg(long, value_parser = input::finite)]
        years: Option<f64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose)?;

    let result = match cli.command {
        Some(Commands::Setup) => fundlens::cli::setup::setup(),
        Some(cmd) => fundlens::run_command(cmd.into(), cli.config_path.as_deref()),
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
