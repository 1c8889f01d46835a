use std::sync::Arc;
use std::time::Duration;
use tracing::info;

use crate::config::Config;
use crate::infra::memory::notification_store::InMemoryNotificationStore;
use crate::infra::upstream::{
    booking_api::HttpBookingApi, catalog_api::HttpCatalogApi, category_api::HttpCategoryApi,
    client::UpstreamClient, content_api::HttpContentApi, coupon_api::HttpCouponApi,
    payout_api::HttpPayoutApi, prescription_api::HttpPrescriptionApi,
};
use crate::state::AppState;

pub fn bootstrap_state(config: &Config) -> AppState {
    info!("Connecting to marketplace API at {}", config.marketplace_api_url);

    let client = Arc::new(UpstreamClient::new(
        config.marketplace_api_url.clone(),
        Duration::from_secs(config.upstream_timeout_secs),
    ));

    AppState {
        config: config.clone(),
        booking_api: Arc::new(HttpBookingApi::new(client.clone())),
        coupon_api: Arc::new(HttpCouponApi::new(client.clone())),
        category_api: Arc::new(HttpCategoryApi::new(client.clone())),
        prescription_api: Arc::new(HttpPrescriptionApi::new(client.clone())),
        payout_api: Arc::new(HttpPayoutApi::new(client.clone())),
        content_api: Arc::new(HttpContentApi::new(client.clone())),
        catalog_api: Arc::new(HttpCatalogApi::new(client)),
        notification_store: Arc::new(InMemoryNotificationStore::new()),
    }
}
