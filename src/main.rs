//! WETH Wrap CLI — Entry Point
//!
//! Initializes configuration, logging, and the blockchain connection,
//! then runs the interactive menu until the user exits.
//!
//! Wiring sequence:
//! 1. Load RPC_URL + PRIVATE_KEY from env + validate (malformed key is fatal)
//! 2. Init tracing (console logging, RUST_LOG overridable)
//! 3. Connect the alloy provider with the local signing wallet, check chain ID
//! 4. Bind the WETH contract adapter (ChainClient port)
//! 5. Run the menu loop; exit 0 when the user picks Exit

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

mod adapters;
mod cli;
mod config;
mod domain;
mod ports;
mod usecases;

use adapters::chain::{EthereumProvider, WethContract};
use usecases::WethWrapper;

#[tokio::main]
async fn main() -> Result<()> {
    // ── 1. Load configuration from the environment ──────────
    let config = config::AppConfig::from_env()
        .context("Failed to load configuration")?;

    // ── 2. Initialize logging ───────────────────────────────
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!(
        version = env!("CARGO_PKG_VERSION"),
        "Starting WETH wrap CLI"
    );

    // ── 3. Connect to Ethereum RPC with the signing wallet ──
    let provider = Arc::new(
        EthereumProvider::connect(&config)
            .await
            .context("Failed to connect to the RPC endpoint")?,
    );
    let account = provider.account();

    // ── 4. Bind the WETH contract adapter ───────────────────
    let weth = Arc::new(WethContract::new(Arc::clone(&provider)));
    let wrapper = WethWrapper::new(weth);

    // ── 5. Run the interactive menu until Exit ──────────────
    cli::run(wrapper, account).await
}
