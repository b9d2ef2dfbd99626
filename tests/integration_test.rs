//! Integration Tests - Use Case over a Mocked Chain Client
//!
//! Tests the interaction between the `WethWrapper` use case and the
//! `ChainClient` port using a mockall double in place of live network
//! calls. Call-count expectations verify that invalid input never
//! reaches the chain.

use std::sync::Arc;

use alloy::primitives::{Address, TxHash, U256};
use mockall::mock;
use mockall::predicate::*;

use weth_wrap_cli::usecases::WethWrapper;

// ---- Mock Definitions ----

mock! {
    pub Chain {}

    #[async_trait::async_trait]
    impl weth_wrap_cli::ports::chain_client::ChainClient for Chain {
        async fn native_balance(&self, address: Address) -> anyhow::Result<U256>;
        async fn wrapped_balance(&self, address: Address) -> anyhow::Result<U256>;
        async fn deposit(&self, value: U256) -> anyhow::Result<TxHash>;
        async fn withdraw(&self, amount: U256) -> anyhow::Result<TxHash>;
    }
}

fn wrapper_with(chain: MockChain) -> WethWrapper<MockChain> {
    WethWrapper::new(Arc::new(chain))
}

const HOLDER: &str = "0x00000000219ab540356cBB839Cbe05303d7705Fa";

// ---- Deposit / withdraw ----

#[tokio::test]
async fn deposit_submits_the_exact_wei_value() {
    let mut chain = MockChain::new();
    chain
        .expect_deposit()
        .with(eq(U256::from(2_500_000_000_000_000_000u128)))
        .times(1)
        .returning(|_| Ok(TxHash::repeat_byte(0xab)));

    let wrapper = wrapper_with(chain);
    let tx_hash = wrapper.deposit("2.5").await.expect("deposit should succeed");
    assert_eq!(tx_hash, TxHash::repeat_byte(0xab));
}

#[tokio::test]
async fn withdraw_submits_the_exact_wei_amount() {
    let mut chain = MockChain::new();
    chain
        .expect_withdraw()
        .with(eq(U256::from(100_000_000_000_000_000u128)))
        .times(1)
        .returning(|_| Ok(TxHash::repeat_byte(0x01)));

    let wrapper = wrapper_with(chain);
    wrapper.withdraw("0.1").await.expect("withdraw should succeed");
}

#[tokio::test]
async fn invalid_amount_short_circuits_before_any_chain_call() {
    let mut chain = MockChain::new();
    chain.expect_deposit().times(0);
    chain.expect_withdraw().times(0);

    let wrapper = wrapper_with(chain);
    for bad in ["0", "-1", "abc", "", "1e400"] {
        assert!(wrapper.deposit(bad).await.is_err(), "deposit({bad:?})");
        assert!(wrapper.withdraw(bad).await.is_err(), "withdraw({bad:?})");
    }
}

#[tokio::test]
async fn amount_rejection_is_classified_as_invalid_input() {
    let chain = MockChain::new();
    let wrapper = wrapper_with(chain);

    let err = wrapper.deposit("-1").await.unwrap_err();
    assert!(
        err.downcast_ref::<weth_wrap_cli::domain::InputError>().is_some(),
        "expected a typed input error, got: {err:#}"
    );
}

#[tokio::test]
async fn node_rejection_surfaces_as_an_error() {
    let mut chain = MockChain::new();
    chain
        .expect_deposit()
        .times(1)
        .returning(|_| Err(anyhow::anyhow!("node rejected the transaction")));

    let wrapper = wrapper_with(chain);
    assert!(wrapper.deposit("1").await.is_err());
}

// ---- Balance queries ----

#[tokio::test]
async fn wrapped_balance_formats_the_returned_wei() {
    let mut chain = MockChain::new();
    chain
        .expect_wrapped_balance()
        .times(1)
        .returning(|_| Ok(U256::from(2_500_000_000_000_000_000u128)));

    let wrapper = wrapper_with(chain);
    assert_eq!(wrapper.wrapped_balance(HOLDER).await.as_deref(), Some("2.5"));
}

#[tokio::test]
async fn malformed_address_returns_none_without_a_network_call() {
    let mut chain = MockChain::new();
    chain.expect_wrapped_balance().times(0);

    let wrapper = wrapper_with(chain);
    assert_eq!(wrapper.wrapped_balance("0xnot-an-address").await, None);
    assert_eq!(wrapper.wrapped_balance("").await, None);
}

#[tokio::test]
async fn failing_remote_query_returns_none_instead_of_raising() {
    let mut chain = MockChain::new();
    chain
        .expect_wrapped_balance()
        .times(1)
        .returning(|_| Err(anyhow::anyhow!("request-level RPC failure")));

    let wrapper = wrapper_with(chain);
    assert_eq!(wrapper.wrapped_balance(HOLDER).await, None);
}

#[tokio::test]
async fn native_balance_reports_none_on_failure() {
    let mut chain = MockChain::new();
    chain
        .expect_native_balance()
        .times(1)
        .returning(|_| Err(anyhow::anyhow!("connection refused")));

    let wrapper = wrapper_with(chain);
    let account: Address = HOLDER.parse().unwrap();
    assert_eq!(wrapper.native_balance(account).await, None);
}

#[tokio::test]
async fn native_balance_formats_the_returned_wei() {
    let mut chain = MockChain::new();
    chain
        .expect_native_balance()
        .times(1)
        .returning(|_| Ok(U256::from(1_000_000_000_000_000_000u128)));

    let wrapper = wrapper_with(chain);
    let account: Address = HOLDER.parse().unwrap();
    assert_eq!(wrapper.native_balance(account).await.as_deref(), Some("1"));
}
