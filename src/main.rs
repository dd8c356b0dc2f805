use std::path::PathBuf;

use clap::Parser;
use strand::config::Config;
use strand::server;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "strand")]
#[command(about = "Minimal HTTP/1.1 file server", long_about = None)]
struct Cli {
    /// Directory served and written by the /files endpoints
    #[arg(long)]
    directory: Option<PathBuf>,

    /// Address to listen on, e.g. 0.0.0.0:4221
    #[arg(long)]
    listen: Option<String>,

    /// YAML config file
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .with_level(true)
        .init();

    let cli = Cli::parse();

    let mut cfg = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::load(),
    };
    if let Some(directory) = cli.directory {
        cfg.storage_dir = directory;
    }
    if let Some(listen) = cli.listen {
        cfg.listen_addr = listen;
    }

    tokio::select! {
        res = server::listener::run(&cfg) => {
            res?;
        }

        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
    }

    Ok(())
}
