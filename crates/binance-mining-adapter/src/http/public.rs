/*
[INPUT]:  Symbol identifiers
[OUTPUT]: Market data (latest symbol price)
[POS]:    HTTP layer - MARKET_DATA endpoints (API key, no signature)
[UPDATE]: When adding new public endpoints or changing response format
*/

use crate::http::signature::SecurityTier;
use crate::http::{BinanceClient, Result};
use crate::types::{QueryParams, SymbolPriceTicker};

impl BinanceClient {
    /// Latest price for a symbol
    ///
    /// GET /api/v3/ticker/price?symbol={symbol}
    pub async fn symbol_price_ticker(&self, symbol: &str) -> Result<SymbolPriceTicker> {
        let mut params = QueryParams::new();
        params.push("symbol", symbol);
        self.call("/api/v3/ticker/price", &params, SecurityTier::MarketData)
            .await
    }
}
