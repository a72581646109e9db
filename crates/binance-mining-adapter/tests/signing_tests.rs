/*
[INPUT]:  Fixed parameters, timestamps and secrets
[OUTPUT]: Test results for payload signing
[POS]:    Integration tests - request signing contract
[UPDATE]: When signing rules change
*/

mod common;

use std::sync::Arc;

use binance_mining_adapter::{
    BinanceClient, HmacSigner, MiningQuery, MockTransport, PayloadSigner, SecurityTier,
};
use common::test_credentials;
use tokio_test::assert_ok;

#[test]
fn test_fixed_timestamp_reference_payload() {
    let payload = PayloadSigner::build_at(
        "algo=ethash&userName=trocopasso",
        &SecurityTier::UserData("S"),
        1_700_000_000_000,
    );

    let signed_base = "algo=ethash&userName=trocopasso&timestamp=1700000000000";
    assert_eq!(
        payload,
        format!("{signed_base}&signature={}", HmacSigner::sign("S", signed_base))
    );
}

#[test]
fn test_none_tier_is_byte_identical() {
    for base in ["", "symbol=BTCUSDT", "algo=ethash&userName=trocopasso"] {
        assert_eq!(PayloadSigner::build(base, &SecurityTier::None), base);
    }
}

#[test]
fn test_determinism_across_secret_tiers() {
    let base = "algo=ethash&userName=trocopasso";
    for tier in [
        SecurityTier::UserData("S"),
        SecurityTier::Trade("S"),
        SecurityTier::Margin("S"),
    ] {
        let first = PayloadSigner::build_at(base, &tier, 42);
        let second = PayloadSigner::build_at(base, &tier, 42);
        assert_eq!(first, second);
        assert_ne!(
            first,
            PayloadSigner::build_at(base, &SecurityTier::UserData("other"), 42)
        );
    }
}

#[tokio::test]
async fn test_client_never_transmits_secret() {
    let transport = Arc::new(MockTransport::new());
    transport.push_json(r#"{"code":0,"msg":"","data":{"accountProfits":[]}}"#);
    let client = assert_ok!(BinanceClient::with_transport(
        test_credentials(),
        "https://api.binance.com",
        transport.clone(),
    ));

    let profits = assert_ok!(
        client
            .mining_earnings(&MiningQuery::ethash("trocopasso"))
            .await
    );
    assert!(profits.is_empty());

    let request = &transport.requests()[0];
    assert_eq!(request.url.path(), "/sapi/v1/mining/payment/list");

    let pairs = request.query_pairs();
    let keys: Vec<_> = pairs.iter().map(|(key, _)| key.as_str()).collect();
    assert_eq!(keys, ["algo", "userName", "timestamp", "signature"]);
    assert!(pairs.iter().all(|(_, value)| value != "S"));
    assert!(request.headers.iter().all(|(_, value)| value != "S"));
}
