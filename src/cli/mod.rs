//! Interactive Menu - REPL Driving the WETH Operations
//!
//! A sequential prompt loop: display the options, read one choice, collect
//! any further input the action needs, invoke the operation, print the
//! outcome, and return to the menu. Failures inside an action are printed
//! and the loop resumes; nothing is retried. One operation runs at a time,
//! the loop suspends while awaiting console input or the outbound call.

use std::io::Write as _;

use alloy::primitives::Address;
use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

use crate::ports::chain_client::ChainClient;
use crate::usecases::WethWrapper;

/// Run the menu loop until the user picks Exit or stdin closes.
pub async fn run<C: ChainClient>(wrapper: WethWrapper<C>, account: Address) -> Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        println!("---------------------");
        println!("\nAddress: {account}");
        println!("\nSelect an action:\n");
        println!("0. Check native ETH balance");
        println!("1. Check WETH balance");
        println!("2. Deposit ETH (wrap into WETH)");
        println!("3. Withdraw WETH (unwrap to ETH)");
        println!("4. Exit");

        let Some(choice) = prompt(&mut lines, "Enter action number: ").await? else {
            break;
        };

        match choice.trim() {
            "0" => match wrapper.native_balance(account).await {
                Some(balance) => {
                    println!("Native ETH balance for address {account}: {balance} ETH");
                }
                None => println!("Could not fetch the native ETH balance."),
            },
            "1" => {
                let Some(address) =
                    prompt(&mut lines, "Enter the address to check balance: ").await?
                else {
                    break;
                };
                match wrapper.wrapped_balance(&address).await {
                    Some(balance) => {
                        println!("WETH balance for address {}: {balance}", address.trim());
                    }
                    None => println!("Could not fetch the WETH balance."),
                }
            }
            "2" => {
                let Some(amount) =
                    prompt(&mut lines, "Enter the amount of ETH to deposit: ").await?
                else {
                    break;
                };
                match wrapper.deposit(&amount).await {
                    Ok(tx_hash) => println!("Transaction sent. Transaction hash: {tx_hash}"),
                    Err(e) => println!("Error during ETH deposit: {e:#}"),
                }
            }
            "3" => {
                let Some(amount) = prompt(
                    &mut lines,
                    "Enter the amount of WETH to withdraw (in ETH units): ",
                )
                .await?
                else {
                    break;
                };
                match wrapper.withdraw(&amount).await {
                    Ok(tx_hash) => println!("Transaction sent. Transaction hash: {tx_hash}"),
                    Err(e) => println!("Error during WETH withdrawal: {e:#}"),
                }
            }
            "4" => {
                println!("Exiting...");
                break;
            }
            _ => println!("Invalid input. Please try again."),
        }
    }

    Ok(())
}

/// Print `query` without a newline and read one line from stdin.
///
/// Returns `None` once stdin is closed, which the caller treats as Exit.
async fn prompt(lines: &mut Lines<BufReader<Stdin>>, query: &str) -> Result<Option<String>> {
    print!("{query}");
    std::io::stdout().flush()?;
    Ok(lines.next_line().await?)
}
