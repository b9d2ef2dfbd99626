//! Ethereum RPC Provider - alloy-rs 0.9 Connection Management
//!
//! Manages the connection to Ethereum mainnet via alloy-rs, with the
//! account's private key installed as a wallet filler so write calls are
//! signed locally before broadcast. Validates RPC connectivity and the
//! chain ID at startup.
//!
//! In alloy 0.9, `ProviderBuilder::new().on_http()` returns a complex
//! filler type. We store it as a type-erased `dyn Provider` to keep
//! the API clean across the adapter layer.

use std::sync::Arc;

use alloy::network::EthereumWallet;
use alloy::primitives::Address;
use alloy::providers::{Provider, ProviderBuilder};
use alloy::signers::local::PrivateKeySigner;
use anyhow::{Context, Result};
use tracing::{info, instrument};

use crate::config::AppConfig;

/// Ethereum mainnet chain ID.
const MAINNET_CHAIN_ID: u64 = 1;

/// Shared Ethereum RPC provider backed by alloy-rs 0.9.
///
/// One provider instance serves both reads and signed writes for the
/// process lifetime. Uses `dyn Provider` for type erasure because alloy
/// 0.9's `ProviderBuilder` returns a deeply-nested generic filler type
/// that would leak implementation details.
pub struct EthereumProvider {
    /// The alloy HTTP provider with wallet filler (type-erased).
    provider: Arc<dyn Provider + Send + Sync>,
    /// Address derived from the signing key.
    account: Address,
}

impl EthereumProvider {
    /// Connect to the RPC endpoint and validate the chain ID.
    ///
    /// The signing key and RPC URL come from the environment config; the
    /// key's shape has already been validated, so a parse failure here is a
    /// startup bug rather than user input. The key itself is never logged.
    #[instrument(skip_all)]
    pub async fn connect(config: &AppConfig) -> Result<Self> {
        let signer: PrivateKeySigner = config
            .private_key
            .parse()
            .context("Failed to construct signer from PRIVATE_KEY")?;
        let account = signer.address();
        let wallet = EthereumWallet::from(signer);

        // alloy 0.9: build an HTTP client boxed to BoxTransport so the
        // resulting provider matches `dyn Provider`'s default transport
        let client = alloy::rpc::client::ClientBuilder::default()
            .http(config.rpc_url.parse().context("Invalid RPC URL")?)
            .boxed();
        let provider = ProviderBuilder::new().wallet(wallet).on_client(client);

        // Wrap in Arc<dyn Provider> for type erasure
        let provider: Arc<dyn Provider + Send + Sync> = Arc::new(provider);

        // Validate chain ID at startup
        let chain_id = provider
            .get_chain_id()
            .await
            .context("Failed to query chain ID")?;

        if chain_id != MAINNET_CHAIN_ID {
            anyhow::bail!(
                "Expected Ethereum mainnet (chain_id={MAINNET_CHAIN_ID}), got {chain_id}"
            );
        }

        info!(chain_id, account = %account, "Connected to Ethereum RPC");

        Ok(Self { provider, account })
    }

    /// Get a shared reference to the alloy provider (type-erased).
    pub fn inner(&self) -> Arc<dyn Provider + Send + Sync> {
        Arc::clone(&self.provider)
    }

    /// The account address derived from the signing key.
    pub fn account(&self) -> Address {
        self.account
    }
}
