use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use std::sync::Arc;
use tracing::info;

use crate::api::dtos::requests::{AssignPrescriptionRequest, FinalizePrescriptionRequest};
use crate::api::extractors::session::AdminSession;
use crate::error::AppError;
use crate::state::AppState;

pub async fn list_prescriptions(
    State(state): State<Arc<AppState>>,
    session: AdminSession,
) -> Result<impl IntoResponse, AppError> {
    let prescriptions = state.prescription_api.list(&session.token).await?;
    Ok(Json(prescriptions))
}

pub async fn assign_prescription(
    State(state): State<Arc<AppState>>,
    session: AdminSession,
    Path(prescription_id): Path<String>,
    Json(payload): Json<AssignPrescriptionRequest>,
) -> Result<impl IntoResponse, AppError> {
    if payload.provider_id.trim().is_empty() {
        return Err(AppError::Validation("providerId must not be empty".into()));
    }

    let updated = state
        .prescription_api
        .assign(&session.token, &prescription_id, &payload.provider_id)
        .await?;
    info!(
        "Assigned prescription {} to provider {}",
        prescription_id, payload.provider_id
    );
    Ok(Json(updated))
}

pub async fn finalize_prescription(
    State(state): State<Arc<AppState>>,
    session: AdminSession,
    Path(prescription_id): Path<String>,
    Json(payload): Json<FinalizePrescriptionRequest>,
) -> Result<impl IntoResponse, AppError> {
    if payload.amount <= 0.0 {
        return Err(AppError::Validation("amount must be greater than zero".into()));
    }

    let finalized = state
        .prescription_api
        .finalize(&session.token, &prescription_id, payload.amount)
        .await?;
    info!("Finalized prescription {} at {}", prescription_id, payload.amount);
    Ok(Json(finalized))
}
