//! Nimbus - DynamoDB schema lookup and request validation.
//!
//! # Usage
//!
//! ```text
//! nimbus operations
//! nimbus describe PutItem
//! nimbus validate PutItem request.json
//! nimbus endpoint eu-west-1 --http
//! ```
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `DEFAULT_REGION` | `us-east-1` | Region used by `endpoint` and `encode` when none is given |
//! | `ENDPOINT_SCHEME` | `https` | Scheme used when `--http` is not passed |
//! | `WAITER_INTERVAL_SECS` | `20` | Effective waiter interval shown by `waiters` |
//! | `WAITER_MAX_ATTEMPTS` | `25` | Effective waiter attempts shown by `waiters` |
//! | `LOG_LEVEL` | `info` | Log level filter |
//! | `RUST_LOG` | *(unset)* | Fine-grained tracing filter (overrides `LOG_LEVEL`) |

mod commands;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use nimbus_core::NimbusConfig;
use nimbus_dynamodb_core::WaiterConfig;
use nimbus_dynamodb_http::resolve_endpoint;

/// Inspect the DynamoDB 2012-08-10 service description
#[derive(Debug, Parser)]
#[command(name = "nimbus", version, long_about = None)]
struct Cli {
    /// Print machine-readable JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Log level filter (overrides LOG_LEVEL)
    #[arg(long, global = true, value_name = "FILTER")]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List every operation with its summary
    Operations,

    /// Show the HTTP binding, parameters, and errors of an operation
    Describe {
        /// Operation name, e.g. PutItem
        operation: String,
    },

    /// List the errors an operation may return
    Errors {
        /// Operation name, e.g. PutItem
        operation: String,
    },

    /// Validate a JSON request body against an operation's parameters
    Validate {
        /// Operation name, e.g. PutItem
        operation: String,
        /// Request body file, or `-` for stdin
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Validate and print the HTTP request that would be sent
    Encode {
        /// Operation name, e.g. PutItem
        operation: String,
        /// Request body file, or `-` for stdin
        #[arg(value_name = "FILE")]
        input: PathBuf,
        /// Region to target (defaults to DEFAULT_REGION)
        #[arg(long)]
        region: Option<String>,
        /// Use plain HTTP
        #[arg(long)]
        http: bool,
    },

    /// Resolve the endpoint URL of a region
    Endpoint {
        /// Region name (defaults to DEFAULT_REGION)
        region: Option<String>,
        /// Use plain HTTP
        #[arg(long)]
        http: bool,
    },

    /// List the table waiters and their polling cadence
    Waiters,
}

/// Initialize the tracing subscriber.
///
/// Uses `RUST_LOG` if set, otherwise falls back to the `LOG_LEVEL` config value.
fn init_tracing(log_level: &str) -> Result<()> {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::try_new(log_level)
            .with_context(|| format!("invalid log level filter: {log_level}"))?
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    Ok(())
}

fn run(cli: Cli, config: &NimbusConfig) -> Result<String> {
    let json = cli.json;
    match cli.command {
        Command::Operations => commands::operations(json),
        Command::Describe { operation } => {
            commands::describe(commands::normalize_operation(&operation)?, json)
        }
        Command::Errors { operation } => {
            commands::errors(commands::normalize_operation(&operation)?, json)
        }
        Command::Validate { operation, input } => {
            let body = commands::read_json(&input)?;
            commands::validate(commands::normalize_operation(&operation)?, &body)
        }
        Command::Encode {
            operation,
            input,
            region,
            http,
        } => {
            let region = region.unwrap_or_else(|| config.default_region.as_str().to_owned());
            let scheme = commands::pick_scheme(http, config.endpoint_scheme);
            let endpoint = resolve_endpoint(&region, scheme)?;
            let body = commands::read_json(&input)?;
            commands::encode(commands::normalize_operation(&operation)?, &body, &endpoint)
        }
        Command::Endpoint { region, http } => {
            let region = region.unwrap_or_else(|| config.default_region.as_str().to_owned());
            commands::endpoint(&region, commands::pick_scheme(http, config.endpoint_scheme))
        }
        Command::Waiters => {
            let waiter_config =
                WaiterConfig::from_env().context("failed to load waiter configuration")?;
            commands::waiters(&waiter_config, json)
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = NimbusConfig::from_env().context("failed to load configuration")?;

    let log_level = cli.log_level.as_deref().unwrap_or(&config.log_level);
    init_tracing(log_level)?;
    debug!(
        region = %config.default_region,
        scheme = %config.endpoint_scheme,
        command = ?cli.command,
        "starting nimbus"
    );

    let output = run(cli, &config)?;
    print!("{output}");
    Ok(())
}
