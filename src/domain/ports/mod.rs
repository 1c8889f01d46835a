use crate::domain::models::{
    booking::Booking,
    catalog::CatalogItem,
    category::{Category, CategoryPatch, NewCategory},
    content::{BlogPost, JobOpening},
    coupon::{Coupon, CouponPatch, NewCoupon},
    notification::Toast,
    payout::Payout,
    prescription::Prescription,
};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

// Admin operations take the caller's bearer token; the gateway holds no
// credentials of its own.

#[async_trait]
pub trait BookingApi: Send + Sync {
    async fn list(&self, token: &str) -> Result<Vec<Booking>, AppError>;
    async fn find_by_id(&self, token: &str, id: &str) -> Result<Option<Booking>, AppError>;
    async fn assign(&self, token: &str, id: &str, provider_id: &str) -> Result<Booking, AppError>;
    async fn update_status(&self, token: &str, id: &str, status: &str) -> Result<Booking, AppError>;
    async fn delete(&self, token: &str, id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait CouponApi: Send + Sync {
    async fn list(&self, token: &str) -> Result<Vec<Coupon>, AppError>;
    async fn create(&self, token: &str, coupon: &NewCoupon) -> Result<Coupon, AppError>;
    async fn update(&self, token: &str, id: &str, patch: &CouponPatch) -> Result<Coupon, AppError>;
    async fn delete(&self, token: &str, id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait CategoryApi: Send + Sync {
    async fn list(&self) -> Result<Vec<Category>, AppError>;
    async fn create(&self, token: &str, category: &NewCategory) -> Result<Category, AppError>;
    async fn update(&self, token: &str, id: &str, patch: &CategoryPatch) -> Result<Category, AppError>;
    async fn delete(&self, token: &str, id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait PrescriptionApi: Send + Sync {
    async fn list(&self, token: &str) -> Result<Vec<Prescription>, AppError>;
    async fn assign(&self, token: &str, id: &str, provider_id: &str) -> Result<Prescription, AppError>;
    async fn finalize(&self, token: &str, id: &str, amount: f64) -> Result<Prescription, AppError>;
}

#[async_trait]
pub trait PayoutApi: Send + Sync {
    async fn list(&self, token: &str) -> Result<Vec<Payout>, AppError>;
    async fn approve(&self, token: &str, id: &str) -> Result<Payout, AppError>;
    async fn reject(&self, token: &str, id: &str, reason: Option<&str>) -> Result<Payout, AppError>;
}

#[async_trait]
pub trait ContentApi: Send + Sync {
    async fn list_posts(&self) -> Result<Vec<BlogPost>, AppError>;
    async fn find_post(&self, slug: &str) -> Result<Option<BlogPost>, AppError>;
    async fn list_openings(&self) -> Result<Vec<JobOpening>, AppError>;
}

#[async_trait]
pub trait CatalogApi: Send + Sync {
    async fn list_items(&self) -> Result<Vec<CatalogItem>, AppError>;
}

#[async_trait]
pub trait NotificationStore: Send + Sync {
    async fn push(&self, toast: Toast) -> Result<Toast, AppError>;
    async fn list_active(&self, now: DateTime<Utc>) -> Result<Vec<Toast>, AppError>;
    async fn dismiss(&self, id: &str) -> Result<bool, AppError>;
    async fn purge_expired(&self, now: DateTime<Utc>) -> Result<usize, AppError>;
}
