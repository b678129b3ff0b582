//! Example: Query the Kairos testnet explorer for various information.
//!
//! Run with: cargo run --example kairos [account-address] [token-address]

use kaiascan_client::{BlockRange, KaiascanClient, Paging, client::Result, network};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    network::configure(true);
    let client = KaiascanClient::from_selected()?;
    let mut args = std::env::args().skip(1);
    let account = args
        .next()
        .unwrap_or_else(|| "0x0000000000000000000000000000000000000000".to_string());
    let token = args.next();

    println!("=== Kaiascan client (chain {}) ===\n", client.network().chain_id());

    // 1. Latest block
    println!("1. Fetching latest block...");
    let latest = client.latest_block().await?;
    println!("   {latest:#}");
    println!();

    // 2. Fungible token
    if let Some(token) = &token {
        println!("2. Fetching token {token}...");
        match client.fungible_token(token).await {
            Ok(info) => {
                println!("   Name: {} ({})", info.name, info.symbol);
                println!("   Decimals: {}", info.decimal);
                println!("   Total supply: {}", info.total_supply);
            }
            Err(err) => println!("   Failed: {err}"),
        }
        println!();
    }

    // 3. Account
    println!("3. Fetching account {account}...");
    let info = client.account_info(&account).await?;
    println!("   {info:#}");
    let transfers = client
        .account_token_transfers(&account, Paging::first(5), None, BlockRange::ALL)
        .await?;
    println!("   Recent token transfers: {transfers:#}");

    println!("\n=== Done! ===");
    Ok(())
}
