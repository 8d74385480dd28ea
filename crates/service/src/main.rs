//! Risk evaluator binary.
//!
//! Loads configuration, initializes tracing, composes the rule set once, and
//! serves the `Evaluate` endpoint until interrupted.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tokio_util::sync::CancellationToken;

use rev_core::config::AppConfig;
use rev_risk::{rules, Evaluator};

/// Risk evaluator service
#[derive(Parser, Debug)]
#[command(name = "rev-service", version, about = "Rule-based client risk evaluator")]
struct Args {
    /// Path to TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = AppConfig::load(args.config)?;

    rev_core::logging::init_tracing(config.logging.json);

    let addr = config.listen_addr()?;
    let evaluator = Evaluator::new(rules::from_config(&config.rules));

    tracing::info!(
        service.name = %config.service.name,
        service.version = env!("CARGO_PKG_VERSION"),
        %addr,
        rules = ?evaluator.rule_names().collect::<Vec<_>>(),
        "starting risk evaluator"
    );

    let cancel = CancellationToken::new();
    let shutdown = cancel.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                tracing::info!("shutdown signal received");
                shutdown.cancel();
            }
            Err(e) => tracing::warn!(error = %e, "failed to listen for shutdown signal"),
        }
    });

    rev_service::run_server(addr, Arc::new(evaluator), cancel).await
}
