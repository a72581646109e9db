/*
[INPUT]:  Serialized base parameters, security tier, clock
[OUTPUT]: Query payload with timestamp and HMAC signature appended
[POS]:    HTTP layer - request signing for SIGNED endpoints
[UPDATE]: When changing signing rules or tier semantics
*/

use crate::auth::HmacSigner;

/// Authentication class of an endpoint
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum SecurityTier<'a> {
    /// Public, sent as-is
    None,
    /// API key and timestamp, no signature
    MarketData,
    UserStream,
    /// Timestamp and HMAC signature
    UserData(&'a str),
    Trade(&'a str),
    Margin(&'a str),
}

impl<'a> SecurityTier<'a> {
    /// Signing secret, for tiers that require one
    pub fn secret(&self) -> Option<&'a str> {
        match *self {
            SecurityTier::UserData(secret)
            | SecurityTier::Trade(secret)
            | SecurityTier::Margin(secret) => Some(secret),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SecurityTier::None => "NONE",
            SecurityTier::MarketData => "MARKET_DATA",
            SecurityTier::UserStream => "USER_STREAM",
            SecurityTier::UserData(_) => "USER_DATA",
            SecurityTier::Trade(_) => "TRADE",
            SecurityTier::Margin(_) => "MARGIN",
        }
    }
}

impl std::fmt::Debug for SecurityTier<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Builds the query payload for a tier
#[derive(Debug, Clone, Copy, Default)]
pub struct PayloadSigner;

impl PayloadSigner {
    /// Build the payload stamped with the current time
    pub fn build(base: &str, tier: &SecurityTier<'_>) -> String {
        Self::build_at(base, tier, current_timestamp_ms())
    }

    /// Build the payload stamped with `timestamp_ms`.
    ///
    /// The signature covers `base&timestamp=..` exactly as sent and is
    /// always the last field.
    ///
    /// # Panics
    /// If a secret-carrying tier holds an empty secret.
    pub fn build_at(base: &str, tier: &SecurityTier<'_>, timestamp_ms: i64) -> String {
        if let SecurityTier::None = tier {
            return base.to_string();
        }

        let signed_base = if base.is_empty() {
            format!("timestamp={timestamp_ms}")
        } else {
            format!("{base}&timestamp={timestamp_ms}")
        };

        let Some(secret) = tier.secret() else {
            return signed_base;
        };
        assert!(
            !secret.is_empty(),
            "{} tier requires a non-empty secret",
            tier.name()
        );

        let signature = HmacSigner::sign(secret, &signed_base);
        format!("{signed_base}&signature={signature}")
    }
}

/// Milliseconds since the Unix epoch
pub fn current_timestamp_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
