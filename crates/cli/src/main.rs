//! # simpledns
//!
//! One-shot DNS lookup tool: reads the target name and query type from
//! the environment, resolves through the handler loop, and prints the
//! answer as JSON on stdout.

use anyhow::{bail, Context};
use clap::Parser;
use simpledns_application::{run_handler, Request};
use simpledns_domain::{CliOverrides, QueryType};
use tokio::sync::mpsc;
use tracing::info;

mod bootstrap;
mod di;

/// Environment variable naming the target to resolve. Required.
const ENV_TARGET_NAME: &str = "SIMPLEDNS_NAME";
/// Environment variable holding the query-type token. Absent means `a`.
const ENV_QUERY_TYPE: &str = "SIMPLEDNS_TYPE";

#[derive(Parser)]
#[command(name = "simpledns")]
#[command(version = "0.1.0")]
#[command(about = "Typed DNS lookups, answered as JSON")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Upstream resolver (system, cloudflare, google)
    #[arg(long)]
    upstream: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        upstream: cli.upstream.clone(),
        log_level: cli.log_level.clone(),
    };
    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;
    bootstrap::init_logging(&config);

    let name = match std::env::var(ENV_TARGET_NAME) {
        Ok(name) if !name.is_empty() => name,
        _ => bail!("no name specified ({ENV_TARGET_NAME})"),
    };
    let query_type = match std::env::var(ENV_QUERY_TYPE) {
        Ok(token) => QueryType::parse(&token),
        Err(_) => QueryType::A,
    };

    info!(name = %name, query_type = %query_type, upstream = %config.dns.upstream, "resolving");

    let (requests_tx, requests_rx) = mpsc::channel(16);
    let handler = tokio::spawn(run_handler(requests_rx, di::resolver_factory(&config)));

    let (request, reply) = Request::new(name.clone(), query_type.clone());
    requests_tx
        .send(request)
        .await
        .context("handler loop is gone")?;
    // Queue closed: the loop drains this one request and stops.
    drop(requests_tx);

    let result = reply
        .await
        .context("reply channel closed without an answer")?;
    let answer = match result {
        Ok(answer) => answer,
        Err(err) => bail!("unable to get the answer. type={query_type}, name={name}: {err}"),
    };

    let json = serde_json::to_string(&answer).context("unable to serialize the answer")?;
    println!("{json}");

    handler.await?;
    Ok(())
}
