//! Hedera account walkthrough.
//!
//! # Overview
//!
//! ```text
//!   .env / environment ──▶ credentials ──┐
//!   config.toml + flags ──▶ config ──────┼──▶ HederaClient (testnet)
//!                                        │
//!                                        ▼
//!   create account ─▶ balance ─▶ transfer + receipt ─▶ query cost ─▶ balance
//!                                        │
//!                                        ▼
//!                             status lines on stdout
//! ```
//!
//! Each step is also available as its own subcommand.

use clap::{Parser, Subcommand};
use serde_json::json;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use hbar_walkthrough::config::{
    load_or_default, validate_config, validate_transfer_amount, validate_walkthrough, ConfigError,
    LogFormat, Network,
};
use hbar_walkthrough::ledger::{AccountId, Tinybars};
use hbar_walkthrough::{lifecycle, observability, walkthrough, AppResult, WalkthroughConfig};

#[derive(Parser)]
#[command(name = "hbar-walkthrough")]
#[command(about = "Create a Hedera account, move tinybars around and inspect the results", long_about = None)]
struct Cli {
    /// TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Network to use (testnet, previewnet, mainnet).
    #[arg(short, long)]
    network: Option<Network>,

    /// Upper bound for each SDK call, in seconds.
    #[arg(long)]
    timeout_secs: Option<u64>,

    #[arg(long, value_enum)]
    log_format: Option<LogFormat>,

    /// Print results as JSON instead of status lines.
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full walkthrough (default)
    Run {
        /// Balance to fund the new account with, in tinybars.
        #[arg(long)]
        initial_balance: Option<i64>,
        /// Amount the new account sends back to the operator, in tinybars.
        #[arg(long)]
        amount: Option<i64>,
    },
    /// Create a new account
    CreateAccount {
        #[arg(long)]
        initial_balance: Option<i64>,
    },
    /// Show an account balance (defaults to the operator)
    Balance { account: Option<AccountId> },
    /// Show the cost of a balance query (defaults to the operator)
    Cost { account: Option<AccountId> },
    /// Transfer tinybars from the operator
    Transfer {
        #[arg(long)]
        to: AccountId,
        #[arg(long)]
        amount: i64,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match resolve_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    observability::init_logging(
        &config.observability.log_filter,
        config.observability.log_format,
    );

    match execute(cli, config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Walkthrough failed");
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn execute(cli: Cli, config: WalkthroughConfig) -> AppResult<()> {
    tracing::info!(
        network = %config.network.name,
        timeout_secs = config.network.request_timeout_secs,
        "Configuration loaded"
    );

    let (credentials, client) = lifecycle::connect_from_env(&config)?;
    let operator = credentials.account_id;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command.unwrap_or(Commands::Run {
        initial_balance: None,
        amount: None,
    }) {
        Commands::Run { .. } => {
            let settings = (&config.walkthrough).into();
            if cli.json {
                let report = walkthrough::run(&client, &operator, settings, &mut io::sink()).await?;
                writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
            } else {
                walkthrough::run(&client, &operator, settings, &mut out).await?;
            }
        }
        Commands::CreateAccount { initial_balance } => {
            let initial = initial_balance
                .map(Tinybars)
                .unwrap_or(Tinybars(config.walkthrough.initial_balance_tinybars));
            let account = walkthrough::create_account(&client, initial).await?;
            if cli.json {
                let body = json!({ "account_id": account, "initial_balance": initial });
                writeln!(out, "{}", serde_json::to_string_pretty(&body)?)?;
            } else {
                writeln!(out, "new account ID: {}", account)?;
            }
        }
        Commands::Balance { account } => {
            let account = account.unwrap_or(operator);
            let balance = walkthrough::account_balance(&client, &account).await?;
            if cli.json {
                let body = json!({ "account_id": account, "balance": balance });
                writeln!(out, "{}", serde_json::to_string_pretty(&body)?)?;
            } else {
                writeln!(out, "balance of {}: {}", account, balance)?;
            }
        }
        Commands::Cost { account } => {
            let account = account.unwrap_or(operator);
            let cost = walkthrough::balance_query_cost(&client, &account).await?;
            if cli.json {
                let body = json!({ "account_id": account, "balance_query_cost": cost });
                writeln!(out, "{}", serde_json::to_string_pretty(&body)?)?;
            } else {
                writeln!(out, "cost of balance query: {}", cost)?;
            }
        }
        Commands::Transfer { to, amount } => {
            let amount = Tinybars(amount);
            let receipt = if cli.json {
                walkthrough::transfer_and_get_receipt(&client, &operator, &to, amount, &mut io::sink())
                    .await?
            } else {
                walkthrough::transfer_and_get_receipt(&client, &operator, &to, amount, &mut out)
                    .await?
            };
            if cli.json {
                writeln!(out, "{}", serde_json::to_string_pretty(&receipt)?)?;
            } else {
                writeln!(out, "transfer status: {}", receipt.status)?;
            }
        }
    }

    Ok(())
}

/// Defaults, then the config file, then command-line overrides.
fn resolve_config(cli: &Cli) -> Result<WalkthroughConfig, ConfigError> {
    let mut config = load_or_default(cli.config.as_deref())?;

    if let Some(network) = cli.network {
        config.network.name = network;
    }
    if let Some(secs) = cli.timeout_secs {
        config.network.request_timeout_secs = secs;
    }
    if let Some(format) = cli.log_format {
        config.observability.log_format = format;
    }
    match &cli.command {
        Some(Commands::Run { initial_balance, amount }) => {
            if let Some(initial) = initial_balance {
                config.walkthrough.initial_balance_tinybars = *initial;
            }
            if let Some(amount) = amount {
                config.walkthrough.transfer_amount_tinybars = *amount;
            }
        }
        Some(Commands::CreateAccount { initial_balance: Some(initial) }) => {
            config.walkthrough.initial_balance_tinybars = *initial;
        }
        _ => {}
    }

    validate_config(&config).map_err(ConfigError::Validation)?;

    match &cli.command {
        None | Some(Commands::Run { .. }) => {
            validate_walkthrough(&config.walkthrough).map_err(ConfigError::Validation)?;
        }
        Some(Commands::Transfer { amount, .. }) => {
            validate_transfer_amount(*amount).map_err(ConfigError::Validation)?;
        }
        _ => {}
    }

    Ok(config)
}
