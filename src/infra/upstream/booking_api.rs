use crate::domain::models::booking::Booking;
use crate::domain::ports::BookingApi;
use crate::error::AppError;
use crate::infra::upstream::client::UpstreamClient;
use async_trait::async_trait;
use serde_json::json;
use std::sync::Arc;

pub struct HttpBookingApi {
    client: Arc<UpstreamClient>,
}

impl HttpBookingApi {
    pub fn new(client: Arc<UpstreamClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl BookingApi for HttpBookingApi {
    async fn list(&self, token: &str) -> Result<Vec<Booking>, AppError> {
        // The marketplace has no server-side filtering; the full list comes
        // back and projections happen here.
        self.client.get("/api/bookings", Some(token)).await
    }

    async fn find_by_id(&self, token: &str, id: &str) -> Result<Option<Booking>, AppError> {
        match self.client.get(&format!("/api/bookings/{}", id), Some(token)).await {
            Ok(booking) => Ok(Some(booking)),
            Err(AppError::NotFound(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn assign(&self, token: &str, id: &str, provider_id: &str) -> Result<Booking, AppError> {
        self.client
            .post(
                &format!("/api/bookings/{}/assign", id),
                Some(token),
                &json!({ "providerId": provider_id }),
            )
            .await
    }

    async fn update_status(&self, token: &str, id: &str, status: &str) -> Result<Booking, AppError> {
        self.client
            .put(
                &format!("/api/bookings/{}/status", id),
                Some(token),
                &json!({ "status": status }),
            )
            .await
    }

    async fn delete(&self, token: &str, id: &str) -> Result<(), AppError> {
        self.client.delete(&format!("/api/bookings/{}", id), Some(token)).await
    }
}
