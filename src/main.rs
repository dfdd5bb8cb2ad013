use std::path::PathBuf;

use clap::Parser;
use salesq_core::config::Config;

#[derive(Parser)]
#[command(name = "salesq", about = "Synthetic sales dataset served over MCP")]
struct Cli {
    /// Config file (default: $XDG_CONFIG_HOME/salesq/config.toml).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Address to listen on, overriding `server.bind`.
    #[arg(long)]
    bind: Option<String>,

    /// Records generated per session, overriding `dataset.records`.
    #[arg(long)]
    records: Option<usize>,

    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(bind) = cli.bind {
        config.server.bind = bind;
    }
    if let Some(records) = cli.records {
        config.dataset.records = records;
    }
    config.validate()?;

    salesq_server::serve(config, shutdown_signal()).await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown requested");
}
