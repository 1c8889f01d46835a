use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use std::sync::Arc;
use tracing::info;

use crate::api::dtos::requests::{CreateCouponRequest, UpdateCouponRequest};
use crate::api::extractors::session::AdminSession;
use crate::domain::models::coupon::{CouponPatch, NewCoupon};
use crate::error::AppError;
use crate::state::AppState;

fn check_discount(discount_percent: f64) -> Result<(), AppError> {
    if !(discount_percent > 0.0 && discount_percent <= 100.0) {
        return Err(AppError::Validation("discountPercent must be within (0, 100]".into()));
    }
    Ok(())
}

pub async fn list_coupons(
    State(state): State<Arc<AppState>>,
    session: AdminSession,
) -> Result<impl IntoResponse, AppError> {
    let coupons = state.coupon_api.list(&session.token).await?;
    Ok(Json(coupons))
}

pub async fn create_coupon(
    State(state): State<Arc<AppState>>,
    session: AdminSession,
    Json(payload): Json<CreateCouponRequest>,
) -> Result<impl IntoResponse, AppError> {
    if payload.code.trim().is_empty() {
        return Err(AppError::Validation("code must not be empty".into()));
    }
    check_discount(payload.discount_percent)?;

    let coupon = NewCoupon {
        code: payload.code,
        discount_percent: payload.discount_percent,
        max_discount: payload.max_discount,
        expires_at: payload.expires_at,
    };
    let created = state.coupon_api.create(&session.token, &coupon).await?;
    info!("Created coupon: {}", created.code);
    Ok(Json(created))
}

pub async fn update_coupon(
    State(state): State<Arc<AppState>>,
    session: AdminSession,
    Path(coupon_id): Path<String>,
    Json(payload): Json<UpdateCouponRequest>,
) -> Result<impl IntoResponse, AppError> {
    if let Some(discount) = payload.discount_percent {
        check_discount(discount)?;
    }

    let patch = CouponPatch {
        code: payload.code,
        discount_percent: payload.discount_percent,
        max_discount: payload.max_discount,
        expires_at: payload.expires_at,
        active: payload.active,
    };
    let updated = state.coupon_api.update(&session.token, &coupon_id, &patch).await?;
    Ok(Json(updated))
}

pub async fn delete_coupon(
    State(state): State<Arc<AppState>>,
    session: AdminSession,
    Path(coupon_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.coupon_api.delete(&session.token, &coupon_id).await?;
    info!("Deleted coupon: {}", coupon_id);
    Ok(Json(serde_json::json!({ "status": "deleted" })))
}
