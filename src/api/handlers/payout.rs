use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use std::sync::Arc;
use tracing::info;

use crate::api::dtos::requests::RejectPayoutRequest;
use crate::api::extractors::session::AdminSession;
use crate::error::AppError;
use crate::state::AppState;

pub async fn list_payouts(
    State(state): State<Arc<AppState>>,
    session: AdminSession,
) -> Result<impl IntoResponse, AppError> {
    let payouts = state.payout_api.list(&session.token).await?;
    Ok(Json(payouts))
}

pub async fn approve_payout(
    State(state): State<Arc<AppState>>,
    session: AdminSession,
    Path(payout_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let approved = state.payout_api.approve(&session.token, &payout_id).await?;
    info!("Approved payout: {}", payout_id);
    Ok(Json(approved))
}

pub async fn reject_payout(
    State(state): State<Arc<AppState>>,
    session: AdminSession,
    Path(payout_id): Path<String>,
    Json(payload): Json<RejectPayoutRequest>,
) -> Result<impl IntoResponse, AppError> {
    let rejected = state
        .payout_api
        .reject(&session.token, &payout_id, payload.reason.as_deref())
        .await?;
    info!("Rejected payout: {}", payout_id);
    Ok(Json(rejected))
}
