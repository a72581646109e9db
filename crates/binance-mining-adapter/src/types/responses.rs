/*
[INPUT]:  Envelope JSON from mining list endpoints
[OUTPUT]: Envelope structs that hand back only the inner list
[POS]:    Data layer - response wrappers consumed by the HTTP layer
[UPDATE]: When envelope shape changes or new list endpoints added
*/

use serde::{Deserialize, Serialize};

use super::models::{AccountProfit, Worker};

/// `{code, msg, data}` wrapper used by the mining endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MiningResponse<D> {
    pub code: i32,
    pub msg: String,
    pub data: D,
}

/// `data` of GET /sapi/v1/mining/worker/list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkerListData {
    pub worker_datas: Vec<Worker>,
}

/// `data` of GET /sapi/v1/mining/payment/list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentListData {
    pub account_profits: Vec<AccountProfit>,
}

/// Envelope payloads that carry a single list
pub trait ListData {
    type Item;

    fn into_items(self) -> Vec<Self::Item>;
}

impl ListData for WorkerListData {
    type Item = Worker;

    fn into_items(self) -> Vec<Worker> {
        self.worker_datas
    }
}

impl ListData for PaymentListData {
    type Item = AccountProfit;

    fn into_items(self) -> Vec<AccountProfit> {
        self.account_profits
    }
}

pub type WorkerListResponse = MiningResponse<WorkerListData>;
pub type PaymentListResponse = MiningResponse<PaymentListData>;

/// Error object Binance returns on rejected requests
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub code: i32,
    pub msg: String,
}
