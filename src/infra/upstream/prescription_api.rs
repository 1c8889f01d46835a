use crate::domain::models::prescription::Prescription;
use crate::domain::ports::PrescriptionApi;
use crate::error::AppError;
use crate::infra::upstream::client::UpstreamClient;
use async_trait::async_trait;
use serde_json::json;
use std::sync::Arc;

pub struct HttpPrescriptionApi {
    client: Arc<UpstreamClient>,
}

impl HttpPrescriptionApi {
    pub fn new(client: Arc<UpstreamClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PrescriptionApi for HttpPrescriptionApi {
    async fn list(&self, token: &str) -> Result<Vec<Prescription>, AppError> {
        self.client.get("/api/prescriptions", Some(token)).await
    }

    async fn assign(&self, token: &str, id: &str, provider_id: &str) -> Result<Prescription, AppError> {
        self.client
            .post(
                &format!("/api/prescriptions/{}/assign", id),
                Some(token),
                &json!({ "providerId": provider_id }),
            )
            .await
    }

    async fn finalize(&self, token: &str, id: &str, amount: f64) -> Result<Prescription, AppError> {
        self.client
            .post(
                &format!("/api/prescriptions/{}/finalize", id),
                Some(token),
                &json!({ "amount": amount }),
            )
            .await
    }
}
