//! Faucet service binary.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tokio::net::TcpListener;

use testnet_faucet::chain::StargateChain;
use testnet_faucet::config::load_config;
use testnet_faucet::http::HttpServer;
use testnet_faucet::observability::{logging, metrics};

#[derive(Parser)]
#[command(name = "testnet-faucet", about = "Token faucet for a test network")]
struct Cli {
    /// Path to the configuration file.
    #[arg(long, default_value = "faucet.toml")]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = Arc::new(load_config(&cli.config)?);
    logging::init(&config.observability);

    tracing::info!(
        name = %config.name,
        port = config.server.port,
        lcd_url = %config.chain.lcd_url,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let chain = Arc::new(StargateChain::connect(&config).await?);

    let listener = TcpListener::bind(("0.0.0.0", config.server.port)).await?;
    tracing::info!(
        address = %listener.local_addr()?,
        "{} faucet listening",
        config.name
    );

    let server = HttpServer::new(config, chain);
    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
