/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for binance-mining-adapter tests

use binance_mining_adapter::{ApiCredentials, BinanceClient, ClientConfig};
use wiremock::MockServer;

pub const TEST_API_KEY: &str = "K";
pub const TEST_SECRET_KEY: &str = "S";

/// Setup a mock HTTP server for testing
#[allow(dead_code)]
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Credentials matching the fixtures
pub fn test_credentials() -> ApiCredentials {
    ApiCredentials::new(TEST_API_KEY, TEST_SECRET_KEY).expect("test credentials")
}

/// Client pointed at the mock server
#[allow(dead_code)]
pub fn client_for(server: &MockServer) -> BinanceClient {
    BinanceClient::with_config_and_base_url(test_credentials(), ClientConfig::default(), &server.uri())
        .expect("client init")
}

/// Worker list envelope with one worker
#[allow(dead_code)]
pub fn worker_list_body() -> serde_json::Value {
    serde_json::json!({
        "code": 0,
        "msg": "",
        "data": {
            "workerDatas": [{
                "workerId": "1420554439452400131",
                "workerName": "rig01",
                "status": 1,
                "hashRate": 52245833.33,
                "dayHashRate": 48621666.67,
                "rejectRate": 0.0,
                "lastShareTime": 1587712919000u64
            }],
            "totalNum": 1,
            "pageSize": 20
        }
    })
}
