//! TablePlan - declarative DynamoDB table provisioning.
//!
//! Reads one or more table-definition documents (JSON files), validates each
//! against DynamoDB's structural constraints, and issues a create-table call
//! per definition. Structural violations are reported before any network call;
//! service errors are reported exactly as the service returned them.
//!
//! # Usage
//!
//! ```text
//! tableplan [--dry-run] <definition.json>...
//! ```
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `AWS_REGION` / `DEFAULT_REGION` | `us-east-1` | Target region |
//! | `DYNAMODB_ENDPOINT_URL` | *(unset)* | Endpoint override for local development |
//! | `LOG_LEVEL` | `info` | Log level filter |
//! | `RUST_LOG` | *(unset)* | Fine-grained tracing filter (overrides `LOG_LEVEL`) |

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use tableplan_core::config::ProvisionerConfig;
use tableplan_core::definition::TableDefinition;
use tableplan_core::provision::{ProvisionFailure, Provisioner};
use tableplan_core::{DynamoDbApi, build, validate};

const USAGE: &str = "Usage: tableplan [--dry-run] <definition.json>...

Options:
  --dry-run   Validate and print the create-table request without calling the service
  --help      Print this message";

/// Parsed command line.
#[derive(Debug, PartialEq, Eq)]
struct CliOptions {
    dry_run: bool,
    help: bool,
    files: Vec<PathBuf>,
}

/// Parse command-line arguments (program name already stripped).
fn parse_args(args: &[String]) -> Result<CliOptions> {
    let mut options = CliOptions {
        dry_run: false,
        help: false,
        files: Vec::new(),
    };
    for arg in args {
        match arg.as_str() {
            "--dry-run" => options.dry_run = true,
            "--help" | "-h" => options.help = true,
            flag if flag.starts_with('-') => {
                anyhow::bail!("unknown option: {flag}\n{USAGE}");
            }
            path => options.files.push(PathBuf::from(path)),
        }
    }
    if !options.help && options.files.is_empty() {
        anyhow::bail!("no definition files given\n{USAGE}");
    }
    Ok(options)
}

/// Initialize the tracing subscriber.
///
/// Uses `RUST_LOG` if set, otherwise falls back to the `LOG_LEVEL` value.
fn init_tracing(log_level: &str) -> Result<()> {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::try_new(log_level)
            .with_context(|| format!("invalid log level filter: {log_level}"))?
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    Ok(())
}

/// Read the log level from the environment.
fn log_level() -> String {
    std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string())
}

/// Load a table definition document from a JSON file.
fn load_definition(path: &Path) -> Result<TableDefinition> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("cannot read definition file {}", path.display()))?;
    serde_json::from_slice(&bytes)
        .with_context(|| format!("invalid table definition in {}", path.display()))
}

/// Validate one definition and print the request it would send.
fn dry_run(path: &Path) -> Result<()> {
    let definition = load_definition(path)?;
    let validated = validate(definition).map_err(|e| {
        anyhow::anyhow!("invalid table definition in {}: {e}", path.display())
    })?;
    let request = build(validated);
    println!("{}", serde_json::to_string_pretty(&request)?);
    Ok(())
}

/// Provision one definition and print the resulting table description.
async fn provision(provisioner: &Provisioner<DynamoDbApi>, path: &Path) -> Result<()> {
    let definition = load_definition(path)?;
    let table = definition.name.clone();
    info!(file = %path.display(), table = %table, "provisioning table");

    match provisioner.provision(definition).await {
        Ok(description) => {
            println!("{}", serde_json::to_string_pretty(&description)?);
            Ok(())
        }
        Err(failure @ ProvisionFailure::Validation(_)) => {
            anyhow::bail!("{}: {failure}", path.display())
        }
        Err(ProvisionFailure::Service(err)) => {
            anyhow::bail!("{}: table {table:?} not created: {err}", path.display())
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = parse_args(&args)?;

    if options.help {
        println!("{USAGE}");
        return Ok(());
    }

    init_tracing(&log_level())?;

    if options.dry_run {
        for path in &options.files {
            dry_run(path)?;
        }
        return Ok(());
    }

    let config = ProvisionerConfig::from_env();
    info!(
        region = %config.region,
        endpoint = config.endpoint_url.as_deref().unwrap_or("default"),
        "initializing DynamoDB client",
    );
    let provisioner = Provisioner::new(DynamoDbApi::from_config(&config).await);

    let mut failed = false;
    for path in &options.files {
        if let Err(e) = provision(&provisioner, path).await {
            error!("{e:#}");
            failed = true;
        }
    }

    if failed {
        anyhow::bail!("one or more table definitions failed");
    }
    Ok(())
}
