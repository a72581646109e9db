/*
[INPUT]:  Message bytes and secret key bytes
[OUTPUT]: Lowercase hex HMAC-SHA256 signatures
[POS]:    Auth layer - signing primitive for SIGNED endpoints
[UPDATE]: When changing signing algorithm or signature encoding
*/

use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// HMAC-SHA256 signer used for Binance SIGNED endpoints
#[derive(Debug, Clone, Copy, Default)]
pub struct HmacSigner;

impl HmacSigner {
    /// Sign `message` with `secret` and return the lowercase hex digest
    pub fn sign(secret: &str, message: &str) -> String {
        let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
            .expect("HMAC can take key of any size");
        mac.update(message.as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }
}
