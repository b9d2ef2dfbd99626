//! WETH Wrapper Use Case - Wrap, Unwrap, and Balance Queries
//!
//! Thin orchestration over the unit converter and the `ChainClient` port.
//! Every operation validates its input locally first: an invalid amount or
//! address short-circuits with no transaction submitted and no balance
//! queried. Balance reads report failures and return `None` rather than
//! propagating; writes return the error for the caller to report.

use std::sync::Arc;

use alloy::primitives::{Address, TxHash};
use anyhow::{Context, Result};
use tracing::error;

use crate::domain::{from_wei, parse_address, to_wei};
use crate::ports::chain_client::ChainClient;

/// Drives the three WETH operations and the native-balance query against
/// an injected chain client.
pub struct WethWrapper<C: ChainClient> {
    chain: Arc<C>,
}

impl<C: ChainClient> WethWrapper<C> {
    pub fn new(chain: Arc<C>) -> Self {
        Self { chain }
    }

    /// Wrap ETH: convert `amount` to wei and submit a deposit transaction.
    ///
    /// Returns the transaction hash as soon as the node accepts the
    /// broadcast; confirmation is not awaited.
    pub async fn deposit(&self, amount: &str) -> Result<TxHash> {
        let wei = to_wei(amount)?;
        self.chain
            .deposit(wei)
            .await
            .context("Failed to submit deposit transaction")
    }

    /// Unwrap WETH: convert `amount` to wei and submit a withdraw
    /// transaction.
    pub async fn withdraw(&self, amount: &str) -> Result<TxHash> {
        let wei = to_wei(amount)?;
        self.chain
            .withdraw(wei)
            .await
            .context("Failed to submit withdraw transaction")
    }

    /// Query the WETH balance of a user-supplied address.
    ///
    /// Returns the balance as a decimal ETH string, or `None` after logging
    /// if the address is malformed or the query fails. A malformed address
    /// never reaches the network.
    pub async fn wrapped_balance(&self, address: &str) -> Option<String> {
        let address = match parse_address(address) {
            Ok(address) => address,
            Err(e) => {
                error!(error = %e, "Rejected balance query input");
                return None;
            }
        };

        match self.chain.wrapped_balance(address).await {
            Ok(wei) => Some(from_wei(wei)),
            Err(e) => {
                error!(error = %e, address = %address, "WETH balance query failed");
                None
            }
        }
    }

    /// Query the native ETH balance of an already-validated address
    /// (the menu passes the account derived from the signing key).
    pub async fn native_balance(&self, address: Address) -> Option<String> {
        match self.chain.native_balance(address).await {
            Ok(wei) => Some(from_wei(wei)),
            Err(e) => {
                error!(error = %e, address = %address, "Native balance query failed");
                None
            }
        }
    }
}
