use axum::{
    body::Body,
    extract::Request,
    routing::{delete, get, post, put},
    Router,
};
use std::sync::Arc;
use std::time::Duration;

use crate::api::handlers::{
    booking, category, content, coupon, health, notification, payout, prescription, search,
    statistics,
};
use crate::state::AppState;
use tower_http::{classify::ServerErrorsFailureClass, trace::TraceLayer};
use tracing::{error, info, info_span, Span};
use uuid::Uuid;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health_check))

        // Admin booking management & statistics
        .route("/api/v1/bookings", get(booking::list_bookings))
        .route("/api/v1/bookings/monthly", get(statistics::monthly_booking_summary))
        .route("/api/v1/bookings/{booking_id}", get(booking::get_booking).delete(booking::delete_booking))
        .route("/api/v1/bookings/{booking_id}/assign", post(booking::assign_booking))
        .route("/api/v1/bookings/{booking_id}/status", put(booking::update_booking_status))

        // Coupons
        .route("/api/v1/coupons", get(coupon::list_coupons).post(coupon::create_coupon))
        .route("/api/v1/coupons/{coupon_id}", put(coupon::update_coupon).delete(coupon::delete_coupon))

        // Categories (public listing, admin mutation)
        .route("/api/v1/categories", get(category::list_categories).post(category::create_category))
        .route("/api/v1/categories/{category_id}", put(category::update_category).delete(category::delete_category))

        // Prescriptions
        .route("/api/v1/prescriptions", get(prescription::list_prescriptions))
        .route("/api/v1/prescriptions/{prescription_id}/assign", post(prescription::assign_prescription))
        .route("/api/v1/prescriptions/{prescription_id}/finalize", post(prescription::finalize_prescription))

        // Payouts
        .route("/api/v1/payouts", get(payout::list_payouts))
        .route("/api/v1/payouts/{payout_id}/approve", post(payout::approve_payout))
        .route("/api/v1/payouts/{payout_id}/reject", post(payout::reject_payout))

        // Public storefront surfaces
        .route("/api/v1/blog", get(content::list_posts))
        .route("/api/v1/blog/{slug}", get(content::get_post))
        .route("/api/v1/careers", get(content::list_openings))
        .route("/api/v1/search", get(search::search))

        // Dashboard notifications
        .route("/api/v1/notifications", get(notification::list_notifications).post(notification::create_notification))
        .route("/api/v1/notifications/{toast_id}", delete(notification::dismiss_notification))

        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = Uuid::new_v4().to_string();
                    info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = ?request.method(),
                        uri = ?request.uri(),
                        version = ?request.version(),
                        session = tracing::field::Empty,
                    )
                })
                .on_request(|request: &Request<Body>, _span: &Span| {
                    info!("started processing request: {} {}", request.method(), request.uri().path());
                })
                .on_response(|response: &axum::http::Response<Body>, latency: Duration, _span: &Span| {
                    info!(
                        status = response.status().as_u16(),
                        latency_ms = latency.as_millis(),
                        "finished processing request"
                    );
                })
                .on_failure(|error: ServerErrorsFailureClass, _latency: Duration, _span: &Span| {
                    error!("request failed: {:?}", error);
                })
        )
        .with_state(state)
}
