/*
[INPUT]:  BINANCE_API_KEY, BINANCE_SECRET_KEY, mining user name
[OUTPUT]: Worker list and payout history
[POS]:    Examples - signed mining queries
[UPDATE]: When adding mining endpoints
*/

use binance_mining_adapter::*;
use tracing_subscriber::EnvFilter;

/// Example: List workers and payouts of a mining account
///
/// Usage: BINANCE_API_KEY=.. BINANCE_SECRET_KEY=.. cargo run --example mining_example -- <user>
#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Binance Mining Example ===\n");

    let (Ok(api_key), Ok(secret_key)) = (
        std::env::var("BINANCE_API_KEY"),
        std::env::var("BINANCE_SECRET_KEY"),
    ) else {
        eprintln!("BINANCE_API_KEY and BINANCE_SECRET_KEY must be set");
        return;
    };
    let user_name = std::env::args().nth(1).unwrap_or_else(|| "trocopasso".to_string());

    let client = match ApiCredentials::new(api_key, secret_key)
        .map_err(|e| e.to_string())
        .and_then(|credentials| BinanceClient::new(credentials).map_err(|e| e.to_string()))
    {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };

    let query = MiningQuery::ethash(user_name);

    println!("Querying workers for {}...", query.user_name);
    match client.mining_workers(&query).await {
        Ok(workers) => {
            for worker in workers {
                println!(
                    "✓ {} [{:?}] {:.2} H/s (reject {:.2}%)",
                    worker.worker_name,
                    worker.status,
                    worker.hash_rate,
                    worker.reject_rate * 100.0
                );
            }
        }
        Err(e) => println!("✗ Error ({:?}): {}", e.kind(), e),
    }

    println!("\nQuerying earnings for {}...", query.user_name);
    match client.mining_earnings(&query).await {
        Ok(profits) => {
            for profit in profits {
                println!(
                    "✓ {} {} {:?} {:?}",
                    profit.profit_amount, profit.coin_name, profit.profit_type, profit.status
                );
            }
        }
        Err(e) => println!("✗ Error ({:?}): {}", e.kind(), e),
    }

    println!("\n✓ Mining example complete");
}
