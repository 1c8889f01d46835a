use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use std::sync::Arc;
use tracing::info;

use crate::api::dtos::requests::{AssignBookingRequest, UpdateBookingStatusRequest};
use crate::api::extractors::session::AdminSession;
use crate::error::AppError;
use crate::state::AppState;

pub async fn list_bookings(
    State(state): State<Arc<AppState>>,
    session: AdminSession,
) -> Result<impl IntoResponse, AppError> {
    let bookings = state.booking_api.list(&session.token).await?;
    Ok(Json(bookings))
}

pub async fn get_booking(
    State(state): State<Arc<AppState>>,
    session: AdminSession,
    Path(booking_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let booking = state
        .booking_api
        .find_by_id(&session.token, &booking_id)
        .await?
        .ok_or(AppError::NotFound("Booking not found".into()))?;
    Ok(Json(booking))
}

pub async fn assign_booking(
    State(state): State<Arc<AppState>>,
    session: AdminSession,
    Path(booking_id): Path<String>,
    Json(payload): Json<AssignBookingRequest>,
) -> Result<impl IntoResponse, AppError> {
    if payload.provider_id.trim().is_empty() {
        return Err(AppError::Validation("providerId must not be empty".into()));
    }

    let updated = state
        .booking_api
        .assign(&session.token, &booking_id, &payload.provider_id)
        .await?;
    info!("Assigned booking {} to provider {}", booking_id, payload.provider_id);
    Ok(Json(updated))
}

pub async fn update_booking_status(
    State(state): State<Arc<AppState>>,
    session: AdminSession,
    Path(booking_id): Path<String>,
    Json(payload): Json<UpdateBookingStatusRequest>,
) -> Result<impl IntoResponse, AppError> {
    if payload.status.trim().is_empty() {
        return Err(AppError::Validation("status must not be empty".into()));
    }

    let updated = state
        .booking_api
        .update_status(&session.token, &booking_id, &payload.status)
        .await?;
    info!("Updated booking {} status to {}", booking_id, payload.status);
    Ok(Json(updated))
}

pub async fn delete_booking(
    State(state): State<Arc<AppState>>,
    session: AdminSession,
    Path(booking_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.booking_api.delete(&session.token, &booking_id).await?;
    info!("Deleted booking: {}", booking_id);
    Ok(Json(serde_json::json!({ "status": "deleted" })))
}
