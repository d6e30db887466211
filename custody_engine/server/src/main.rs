//! Custody ledger server binary

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use custody_ledger::{CustodyService, ServiceConfig, TrustModel, logging::init_logging};
use tracing::info;

#[derive(Parser)]
#[command(name = "custody-server", version, about = "Custodian share ledger over HTTP")]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, env = "CUSTODY_CONFIG", default_value = "custody.toml")]
    config: PathBuf,

    /// Bind address (overrides config file)
    #[arg(long, env = "CUSTODY_BIND")]
    bind: Option<SocketAddr>,

    /// Trust model: server-hash | client-hash (overrides config file)
    #[arg(long, env = "CUSTODY_TRUST_MODEL")]
    trust_model: Option<TrustModel>,

    /// Do not stamp accepted shares with server time
    #[arg(long)]
    no_timestamps: bool,

    /// Log directory (overrides config file)
    #[arg(long, env = "CUSTODY_LOG_DIR")]
    log_dir: Option<PathBuf>,

    /// Write the log file as JSON lines
    #[arg(long)]
    json_logs: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = ServiceConfig::load(&cli.config)?;

    // Apply CLI overrides
    if let Some(bind) = cli.bind {
        config.bind_addr = bind;
    }
    if let Some(trust_model) = cli.trust_model {
        config.trust_model = trust_model;
    }
    if cli.no_timestamps {
        config.record_timestamps = false;
    }
    if let Some(dir) = cli.log_dir {
        config.log.dir = dir;
    }
    if cli.json_logs {
        config.log.json = true;
    }

    let _log_guard = init_logging(&config.log);

    info!(
        trust_model = %config.trust_model,
        record_timestamps = config.record_timestamps,
        "Starting custody ledger"
    );

    let service = Arc::new(CustodyService::from_config(&config));
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;

    custody_server::server::run(listener, service)
        .await
        .map_err(|e| anyhow::anyhow!(e))?;

    Ok(())
}
