use crate::config::Config;
use crate::domain::ports::{
    BookingApi, CatalogApi, CategoryApi, ContentApi, CouponApi, NotificationStore, PayoutApi,
    PrescriptionApi,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub booking_api: Arc<dyn BookingApi>,
    pub coupon_api: Arc<dyn CouponApi>,
    pub category_api: Arc<dyn CategoryApi>,
    pub prescription_api: Arc<dyn PrescriptionApi>,
    pub payout_api: Arc<dyn PayoutApi>,
    pub content_api: Arc<dyn ContentApi>,
    pub catalog_api: Arc<dyn CatalogApi>,
    pub notification_store: Arc<dyn NotificationStore>,
}
