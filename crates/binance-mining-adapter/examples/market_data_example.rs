/*
[INPUT]:  Symbol identifier (e.g., "BTCUSDT")
[OUTPUT]: Latest symbol price
[POS]:    Examples - public market data queries
[UPDATE]: When adding new market data endpoints
*/

use binance_mining_adapter::*;
use tracing_subscriber::EnvFilter;

/// Example: Query the latest price of a symbol
///
/// MARKET_DATA endpoints need an API key header but no signature.
#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Binance Market Data Example ===\n");

    let api_key = std::env::var("BINANCE_API_KEY").unwrap_or_else(|_| "public".to_string());
    let secret_key = std::env::var("BINANCE_SECRET_KEY").unwrap_or_else(|_| "unused".to_string());

    let credentials = match ApiCredentials::new(api_key, secret_key) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Invalid credentials: {}", e);
            return;
        }
    };

    let client = match BinanceClient::new(credentials) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };

    for symbol in ["BTCUSDT", "ETHUSDT"] {
        println!("Querying price for {}...", symbol);
        match client.symbol_price_ticker(symbol).await {
            Ok(ticker) => println!("✓ {} = {}", ticker.symbol, ticker.price),
            Err(e) => println!("✗ Error ({:?}): {}", e.kind(), e),
        }
    }

    println!("\n✓ Market data example complete");
}
