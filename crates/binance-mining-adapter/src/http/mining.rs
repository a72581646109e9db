/*
[INPUT]:  Mining account filter (algorithm, user name, paging)
[OUTPUT]: Worker list and payout history
[POS]:    HTTP layer - USER_DATA mining endpoints (signed)
[UPDATE]: When adding mining endpoints or changing query parameters
*/

use tracing::debug;

use crate::http::{BinanceClient, Result};
use crate::types::{
    AccountProfit, ListData, MiningQuery, MiningResponse, PaymentListData, Worker,
    WorkerListData,
};

impl BinanceClient {
    /// Workers of a mining account
    ///
    /// GET /sapi/v1/mining/worker/list?algo={algo}&userName={user}&timestamp=..&signature=..
    pub async fn mining_workers(&self, query: &MiningQuery) -> Result<Vec<Worker>> {
        self.mining_list::<WorkerListData>("/sapi/v1/mining/worker/list", query)
            .await
    }

    /// Payout history of a mining account
    ///
    /// GET /sapi/v1/mining/payment/list?algo={algo}&userName={user}&timestamp=..&signature=..
    pub async fn mining_earnings(&self, query: &MiningQuery) -> Result<Vec<AccountProfit>> {
        self.mining_list::<PaymentListData>("/sapi/v1/mining/payment/list", query)
            .await
    }

    async fn mining_list<D>(&self, path: &str, query: &MiningQuery) -> Result<Vec<D::Item>>
    where
        D: ListData + serde::de::DeserializeOwned,
    {
        let response: MiningResponse<D> = self
            .call(path, &query.to_params(), self.user_data_tier())
            .await?;

        if response.code != 0 {
            debug!(path, code = response.code, msg = %response.msg, "mining envelope status");
        }

        Ok(response.data.into_items())
    }
}
