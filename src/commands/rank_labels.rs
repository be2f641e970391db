//! Rank Label Commands

use alliance_core::{Persistence, RankLabel, SaveReceipt, SyncError};
use async_trait::async_trait;
use serde::Serialize;

use super::{ApiResponse, RestClient};

#[derive(Serialize)]
struct SaveRankLabelsArgs<'a> {
    rank_labels: &'a [RankLabel],
}

#[derive(Clone)]
pub struct RankLabelEndpoint {
    client: RestClient,
}

impl RankLabelEndpoint {
    pub fn new(client: RestClient) -> Self {
        Self { client }
    }
}

#[async_trait(?Send)]
impl Persistence<RankLabel> for RankLabelEndpoint {
    async fn load(&self) -> Result<Vec<RankLabel>, SyncError> {
        self.client.get("rank-labels").await
    }

    async fn save(&self, records: &[RankLabel]) -> Result<SaveReceipt, SyncError> {
        let response: ApiResponse = self
            .client
            .post("rank-labels", &SaveRankLabelsArgs { rank_labels: records })
            .await?;
        response.into_receipt()
    }
}
