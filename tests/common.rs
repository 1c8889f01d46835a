// Not every test binary touches every helper here.
#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use chrono::Utc;
use std::sync::Arc;
use tokio::sync::Mutex;
use uuid::Uuid;

use labdesk_dashboard::{
    api::router::create_router,
    config::Config,
    domain::models::{
        booking::{lenient_datetime, Booking},
        catalog::CatalogItem,
        category::{Category, CategoryPatch, NewCategory},
        content::{BlogPost, JobOpening},
        coupon::{Coupon, CouponPatch, NewCoupon},
        payout::Payout,
        prescription::Prescription,
    },
    domain::ports::{
        BookingApi, CatalogApi, CategoryApi, ContentApi, CouponApi, PayoutApi, PrescriptionApi,
    },
    error::AppError,
    infra::memory::notification_store::InMemoryNotificationStore,
    state::AppState,
};

pub const TEST_TOKEN: &str = "test-admin-token";

// In-process stand-ins for the marketplace API. They mimic the upstream's
// observable behavior (including its error answers) so handler tests run
// without a network.

#[derive(Default)]
pub struct MockBookingApi {
    pub bookings: Mutex<Vec<Booking>>,
}

#[async_trait]
impl BookingApi for MockBookingApi {
    async fn list(&self, _token: &str) -> Result<Vec<Booking>, AppError> {
        Ok(self.bookings.lock().await.clone())
    }

    async fn find_by_id(&self, _token: &str, id: &str) -> Result<Option<Booking>, AppError> {
        Ok(self.bookings.lock().await.iter().find(|b| b.id == id).cloned())
    }

    async fn assign(&self, _token: &str, id: &str, provider_id: &str) -> Result<Booking, AppError> {
        let mut bookings = self.bookings.lock().await;
        let booking = bookings
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or(AppError::NotFound("Not found in marketplace API".into()))?;
        booking.assigned_provider_id = Some(provider_id.to_string());
        Ok(booking.clone())
    }

    async fn update_status(&self, _token: &str, id: &str, status: &str) -> Result<Booking, AppError> {
        let mut bookings = self.bookings.lock().await;
        let booking = bookings
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or(AppError::NotFound("Not found in marketplace API".into()))?;
        booking.status = status.to_string();
        Ok(booking.clone())
    }

    async fn delete(&self, _token: &str, id: &str) -> Result<(), AppError> {
        let mut bookings = self.bookings.lock().await;
        let before = bookings.len();
        bookings.retain(|b| b.id != id);
        if bookings.len() == before {
            return Err(AppError::NotFound("Not found in marketplace API".into()));
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct MockCouponApi {
    pub coupons: Mutex<Vec<Coupon>>,
}

#[async_trait]
impl CouponApi for MockCouponApi {
    async fn list(&self, _token: &str) -> Result<Vec<Coupon>, AppError> {
        Ok(self.coupons.lock().await.clone())
    }

    async fn create(&self, _token: &str, coupon: &NewCoupon) -> Result<Coupon, AppError> {
        let created = Coupon {
            id: Uuid::new_v4().to_string(),
            code: coupon.code.clone(),
            discount_percent: coupon.discount_percent,
            max_discount: coupon.max_discount,
            expires_at: coupon.expires_at,
            active: true,
        };
        self.coupons.lock().await.push(created.clone());
        Ok(created)
    }

    async fn update(&self, _token: &str, id: &str, patch: &CouponPatch) -> Result<Coupon, AppError> {
        let mut coupons = self.coupons.lock().await;
        let coupon = coupons
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(AppError::NotFound("Not found in marketplace API".into()))?;
        if let Some(ref code) = patch.code {
            coupon.code = code.clone();
        }
        if let Some(discount) = patch.discount_percent {
            coupon.discount_percent = discount;
        }
        if let Some(max) = patch.max_discount {
            coupon.max_discount = Some(max);
        }
        if let Some(expires) = patch.expires_at {
            coupon.expires_at = Some(expires);
        }
        if let Some(active) = patch.active {
            coupon.active = active;
        }
        Ok(coupon.clone())
    }

    async fn delete(&self, _token: &str, id: &str) -> Result<(), AppError> {
        let mut coupons = self.coupons.lock().await;
        let before = coupons.len();
        coupons.retain(|c| c.id != id);
        if coupons.len() == before {
            return Err(AppError::NotFound("Not found in marketplace API".into()));
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct MockCategoryApi {
    pub categories: Mutex<Vec<Category>>,
}

#[async_trait]
impl CategoryApi for MockCategoryApi {
    async fn list(&self) -> Result<Vec<Category>, AppError> {
        Ok(self.categories.lock().await.clone())
    }

    async fn create(&self, _token: &str, category: &NewCategory) -> Result<Category, AppError> {
        let created = Category {
            id: Uuid::new_v4().to_string(),
            name: category.name.clone(),
            description: category.description.clone(),
            active: true,
        };
        self.categories.lock().await.push(created.clone());
        Ok(created)
    }

    async fn update(&self, _token: &str, id: &str, patch: &CategoryPatch) -> Result<Category, AppError> {
        let mut categories = self.categories.lock().await;
        let category = categories
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(AppError::NotFound("Not found in marketplace API".into()))?;
        if let Some(ref name) = patch.name {
            category.name = name.clone();
        }
        if let Some(ref description) = patch.description {
            category.description = Some(description.clone());
        }
        if let Some(active) = patch.active {
            category.active = active;
        }
        Ok(category.clone())
    }

    async fn delete(&self, _token: &str, id: &str) -> Result<(), AppError> {
        let mut categories = self.categories.lock().await;
        let before = categories.len();
        categories.retain(|c| c.id != id);
        if categories.len() == before {
            return Err(AppError::NotFound("Not found in marketplace API".into()));
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct MockPrescriptionApi {
    pub prescriptions: Mutex<Vec<Prescription>>,
}

#[async_trait]
impl PrescriptionApi for MockPrescriptionApi {
    async fn list(&self, _token: &str) -> Result<Vec<Prescription>, AppError> {
        Ok(self.prescriptions.lock().await.clone())
    }

    async fn assign(&self, _token: &str, id: &str, provider_id: &str) -> Result<Prescription, AppError> {
        let mut prescriptions = self.prescriptions.lock().await;
        let prescription = prescriptions
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(AppError::NotFound("Not found in marketplace API".into()))?;
        prescription.status = "ASSIGNED".to_string();
        prescription.assigned_provider_id = Some(provider_id.to_string());
        Ok(prescription.clone())
    }

    async fn finalize(&self, _token: &str, id: &str, amount: f64) -> Result<Prescription, AppError> {
        let mut prescriptions = self.prescriptions.lock().await;
        let prescription = prescriptions
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(AppError::NotFound("Not found in marketplace API".into()))?;
        if prescription.status == "FINALIZED" {
            return Err(AppError::Conflict("Prescription already finalized".into()));
        }
        prescription.status = "FINALIZED".to_string();
        prescription.quoted_amount = Some(amount);
        Ok(prescription.clone())
    }
}

#[derive(Default)]
pub struct MockPayoutApi {
    pub payouts: Mutex<Vec<Payout>>,
}

#[async_trait]
impl PayoutApi for MockPayoutApi {
    async fn list(&self, _token: &str) -> Result<Vec<Payout>, AppError> {
        Ok(self.payouts.lock().await.clone())
    }

    async fn approve(&self, _token: &str, id: &str) -> Result<Payout, AppError> {
        let mut payouts = self.payouts.lock().await;
        let payout = payouts
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(AppError::NotFound("Not found in marketplace API".into()))?;
        if payout.status != "PENDING" {
            return Err(AppError::Conflict("Payout already processed".into()));
        }
        payout.status = "APPROVED".to_string();
        payout.processed_at = Some(Utc::now());
        Ok(payout.clone())
    }

    async fn reject(&self, _token: &str, id: &str, reason: Option<&str>) -> Result<Payout, AppError> {
        let mut payouts = self.payouts.lock().await;
        let payout = payouts
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(AppError::NotFound("Not found in marketplace API".into()))?;
        if payout.status != "PENDING" {
            return Err(AppError::Conflict("Payout already processed".into()));
        }
        payout.status = "REJECTED".to_string();
        payout.processed_at = Some(Utc::now());
        payout.rejection_reason = reason.map(String::from);
        Ok(payout.clone())
    }
}

pub struct MockContentApi {
    pub posts: Vec<BlogPost>,
    pub openings: Vec<JobOpening>,
}

#[async_trait]
impl ContentApi for MockContentApi {
    async fn list_posts(&self) -> Result<Vec<BlogPost>, AppError> {
        Ok(self.posts.clone())
    }

    async fn find_post(&self, slug: &str) -> Result<Option<BlogPost>, AppError> {
        Ok(self.posts.iter().find(|p| p.slug == slug).cloned())
    }

    async fn list_openings(&self) -> Result<Vec<JobOpening>, AppError> {
        Ok(self.openings.clone())
    }
}

pub struct MockCatalogApi {
    pub items: Vec<CatalogItem>,
}

#[async_trait]
impl CatalogApi for MockCatalogApi {
    async fn list_items(&self) -> Result<Vec<CatalogItem>, AppError> {
        Ok(self.items.clone())
    }
}

pub struct TestApp {
    pub router: Router,
    pub state: Arc<AppState>,
    pub bookings: Arc<MockBookingApi>,
    pub coupons: Arc<MockCouponApi>,
    pub categories: Arc<MockCategoryApi>,
    pub prescriptions: Arc<MockPrescriptionApi>,
    pub payouts: Arc<MockPayoutApi>,
    pub notifications: Arc<InMemoryNotificationStore>,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_catalog(default_catalog(), default_posts(), default_openings())
    }

    pub fn with_catalog(
        items: Vec<CatalogItem>,
        posts: Vec<BlogPost>,
        openings: Vec<JobOpening>,
    ) -> Self {
        let bookings = Arc::new(MockBookingApi::default());
        let coupons = Arc::new(MockCouponApi::default());
        let categories = Arc::new(MockCategoryApi::default());
        let prescriptions = Arc::new(MockPrescriptionApi::default());
        let payouts = Arc::new(MockPayoutApi::default());
        let notifications = Arc::new(InMemoryNotificationStore::new());

        let config = Config {
            port: 0,
            marketplace_api_url: "http://marketplace.test".to_string(),
            upstream_timeout_secs: 5,
            toast_ttl_secs: 3,
            sweep_interval_secs: 1,
        };

        let state = Arc::new(AppState {
            config,
            booking_api: bookings.clone(),
            coupon_api: coupons.clone(),
            category_api: categories.clone(),
            prescription_api: prescriptions.clone(),
            payout_api: payouts.clone(),
            content_api: Arc::new(MockContentApi { posts, openings }),
            catalog_api: Arc::new(MockCatalogApi { items }),
            notification_store: notifications.clone(),
        });

        TestApp {
            router: create_router(state.clone()),
            state,
            bookings,
            coupons,
            categories,
            prescriptions,
            payouts,
            notifications,
        }
    }

    #[allow(dead_code)]
    pub async fn seed_bookings(&self, items: Vec<Booking>) {
        *self.bookings.bookings.lock().await = items;
    }

    #[allow(dead_code)]
    pub async fn seed_prescriptions(&self, items: Vec<Prescription>) {
        *self.prescriptions.prescriptions.lock().await = items;
    }

    #[allow(dead_code)]
    pub async fn seed_payouts(&self, items: Vec<Payout>) {
        *self.payouts.payouts.lock().await = items;
    }
}

pub fn booking(id: &str, amount: f64, created_at: &str, booking_type: &str, status: &str) -> Booking {
    Booking {
        id: id.to_string(),
        amount,
        status: status.to_string(),
        created_at: lenient_datetime::parse(created_at),
        booking_type: booking_type.to_string(),
        user: None,
        assigned_provider_id: None,
    }
}

fn default_catalog() -> Vec<CatalogItem> {
    vec![
        CatalogItem {
            id: "cat-1".to_string(),
            name: "Complete Blood Count".to_string(),
            category: "Hematology".to_string(),
            description: Some("Counts red cells, white cells and platelets".to_string()),
            price: 350.0,
            kind: "TEST".to_string(),
        },
        CatalogItem {
            id: "cat-2".to_string(),
            name: "Lipid Profile".to_string(),
            category: "Biochemistry".to_string(),
            description: Some("Cholesterol and triglyceride panel".to_string()),
            price: 600.0,
            kind: "TEST".to_string(),
        },
        CatalogItem {
            id: "cat-3".to_string(),
            name: "Dengue Panel".to_string(),
            category: "Serology".to_string(),
            description: Some("Detects blood-borne dengue antigens".to_string()),
            price: 900.0,
            kind: "PACKAGE".to_string(),
        },
    ]
}

fn default_posts() -> Vec<BlogPost> {
    vec![BlogPost {
        id: "post-1".to_string(),
        slug: "fasting-before-tests".to_string(),
        title: "Why some tests need fasting".to_string(),
        excerpt: Some("A short guide".to_string()),
        body: "Fasting stabilizes several analytes...".to_string(),
        author: Some("Dr. Rao".to_string()),
        published_at: None,
    }]
}

fn default_openings() -> Vec<JobOpening> {
    vec![JobOpening {
        id: "job-1".to_string(),
        title: "Phlebotomist".to_string(),
        department: "Operations".to_string(),
        location: "Pune".to_string(),
        description: "Home collection rounds".to_string(),
        active: true,
        posted_at: None,
    }]
}
