use crate::domain::models::payout::Payout;
use crate::domain::ports::PayoutApi;
use crate::error::AppError;
use crate::infra::upstream::client::UpstreamClient;
use async_trait::async_trait;
use serde_json::json;
use std::sync::Arc;

pub struct HttpPayoutApi {
    client: Arc<UpstreamClient>,
}

impl HttpPayoutApi {
    pub fn new(client: Arc<UpstreamClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PayoutApi for HttpPayoutApi {
    async fn list(&self, token: &str) -> Result<Vec<Payout>, AppError> {
        self.client.get("/api/payouts", Some(token)).await
    }

    async fn approve(&self, token: &str, id: &str) -> Result<Payout, AppError> {
        self.client
            .post(&format!("/api/payouts/{}/approve", id), Some(token), &json!({}))
            .await
    }

    async fn reject(&self, token: &str, id: &str, reason: Option<&str>) -> Result<Payout, AppError> {
        self.client
            .post(
                &format!("/api/payouts/{}/reject", id),
                Some(token),
                &json!({ "reason": reason }),
            )
            .await
    }
}
