//! PDFVector node - Entry Point
//!
//! Describes the node, runs batches read from a file or stdin, and validates keys.

use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use pdfvector_node::credentials::{API_KEY_ENV, ApiKey, CredentialDescriptor};
use pdfvector_node::models::{Batch, InputItem, Resource};
use pdfvector_node::{Config, Dispatcher, PdfVectorClient, schema};

#[derive(Parser, Debug)]
#[command(name = "pdfvector-node")]
#[command(about = "Run PDFVector API operations over batches of items")]
#[command(version)]
struct Cli {
    /// PDFVector API key (format: pdfvector_xxxxxxxxxxxxxxxx)
    #[arg(long, env = API_KEY_ENV, hide_env_values = true, global = true)]
    api_key: Option<String>,

    /// Credential record file (`{ "apiKey": "..." }`), used instead of --api-key
    #[arg(long, global = true)]
    credential_file: Option<PathBuf>,

    /// API root (override for testing)
    #[arg(long, env = "PDFVECTOR_BASE_URL", global = true)]
    base_url: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", env = "RUST_LOG", global = true)]
    log_level: String,

    /// Output logs as JSON
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the node description as JSON
    Describe {
        /// Print the credential descriptor instead
        #[arg(long)]
        credential: bool,
    },
    /// Execute a batch and print the output items as JSON
    Run {
        /// Batch file (reads stdin when omitted)
        #[arg(long, short)]
        input: Option<PathBuf>,

        /// Record per-item failures instead of aborting
        #[arg(long)]
        continue_on_fail: bool,
    },
    /// Check the API key against the service
    ValidateKey,
}

fn init_tracing(log_level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let subscriber = tracing_subscriber::registry().with(filter);

    // stdout carries JSON output, so logs go to stderr
    if json {
        subscriber.with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr)).init();
    } else {
        subscriber
            .with(tracing_subscriber::fmt::layer().compact().with_writer(std::io::stderr))
            .init();
    }
}

fn dispatcher(cli: &Cli) -> anyhow::Result<Dispatcher> {
    let mut config = if let Some(path) = &cli.credential_file {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Config::from_record_json(&text)?
    } else {
        let key = cli.api_key.clone().with_context(|| {
            format!("an API key is required (--api-key, --credential-file or {API_KEY_ENV})")
        })?;
        Config::new(ApiKey::new(key))
    };

    if let Some(base_url) = &cli.base_url {
        config = config.with_base_url(base_url.clone());
    }

    Ok(Dispatcher::new(Arc::new(PdfVectorClient::new(config)?)))
}

fn read_batch(input: Option<&PathBuf>) -> anyhow::Result<Batch> {
    let text = match input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text).context("failed to read stdin")?;
            text
        }
    };

    serde_json::from_str(&text).context("input is not a valid batch")
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    init_tracing(&cli.log_level, cli.json_logs);

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), command = ?cli.command, "Starting");

    let output = match &cli.command {
        Command::Describe { credential: true } => {
            serde_json::to_value(CredentialDescriptor::pdfvector())?
        }
        Command::Describe { credential: false } => serde_json::to_value(schema::describe())?,
        Command::Run { input, continue_on_fail } => {
            let mut batch = read_batch(input.as_ref())?;
            batch.continue_on_fail |= *continue_on_fail;
            let records = dispatcher(&cli)?.execute(batch).await?;
            serde_json::to_value(records)?
        }
        Command::ValidateKey => {
            let batch = Batch {
                resource: Resource::Key,
                operation: None,
                continue_on_fail: false,
                items: vec![InputItem::default()],
            };
            let records = dispatcher(&cli)?.execute(batch).await?;
            serde_json::to_value(records)?
        }
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
