use crate::domain::models::coupon::{Coupon, CouponPatch, NewCoupon};
use crate::domain::ports::CouponApi;
use crate::error::AppError;
use crate::infra::upstream::client::UpstreamClient;
use async_trait::async_trait;
use std::sync::Arc;

pub struct HttpCouponApi {
    client: Arc<UpstreamClient>,
}

impl HttpCouponApi {
    pub fn new(client: Arc<UpstreamClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CouponApi for HttpCouponApi {
    async fn list(&self, token: &str) -> Result<Vec<Coupon>, AppError> {
        self.client.get("/api/coupons", Some(token)).await
    }

    async fn create(&self, token: &str, coupon: &NewCoupon) -> Result<Coupon, AppError> {
        self.client.post("/api/coupons", Some(token), coupon).await
    }

    async fn update(&self, token: &str, id: &str, patch: &CouponPatch) -> Result<Coupon, AppError> {
        self.client.put(&format!("/api/coupons/{}", id), Some(token), patch).await
    }

    async fn delete(&self, token: &str, id: &str) -> Result<(), AppError> {
        self.client.delete(&format!("/api/coupons/{}", id), Some(token)).await
    }
}
