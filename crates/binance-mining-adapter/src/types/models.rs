/*
[INPUT]:  JSON payloads from ticker and mining endpoints
[OUTPUT]: Typed Rust structs with serialization support
[POS]:    Data layer - domain values surfaced to callers
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

use super::enums::{ProfitStatus, ProfitType, WorkerStatus};

/// Latest price for a symbol
///
/// GET /api/v3/ticker/price sends the price as a JSON string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymbolPriceTicker {
    pub symbol: String,
    #[serde(with = "serde_helpers::f64_str")]
    pub price: f64,
}

/// Mining worker reported by the pool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Worker {
    pub worker_id: String,
    pub worker_name: String,
    pub status: WorkerStatus,
    pub hash_rate: f64,
    pub day_hash_rate: f64,
    pub reject_rate: f64,
    pub last_share_time: f64,
}

/// Single mining payout record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountProfit {
    pub time: i64,
    #[serde(rename = "type")]
    pub profit_type: ProfitType,
    /// Absent and zero are different values
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hash_transfer: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transfer_amount: Option<f64>,
    pub day_hash_rate: f64,
    pub profit_amount: f64,
    pub coin_name: String,
    pub status: ProfitStatus,
}

mod serde_helpers {
    pub mod f64_str {
        use serde::{Deserialize, Deserializer, Serializer};

        /// Parse a numeral carried in a JSON string, rejecting anything else
        pub fn deserialize<'de, D>(deserializer: D) -> Result<f64, D::Error>
        where
            D: Deserializer<'de>,
        {
            let raw = String::deserialize(deserializer)?;
            let value: f64 = raw.parse().map_err(|_| {
                serde::de::Error::custom(format!("invalid numeral string {raw:?}"))
            })?;

            if !value.is_finite() {
                return Err(serde::de::Error::custom(format!(
                    "non-finite numeral string {raw:?}"
                )));
            }

            Ok(value)
        }

        pub fn serialize<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.serialize_str(&value.to_string())
        }
    }
}
