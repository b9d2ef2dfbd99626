//! Chain Adapters - Ethereum Blockchain Interaction Layer
//!
//! Provides on-chain access via alloy-rs 0.9 for:
//! - RPC provider management with a local signing wallet
//! - WETH contract interactions (balanceOf, deposit, withdraw)

pub mod provider;
pub mod weth;

pub use provider::EthereumProvider;
pub use weth::WethContract;
