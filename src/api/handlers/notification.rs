use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use chrono::{Duration, Utc};
use std::sync::Arc;

use crate::api::dtos::requests::CreateNotificationRequest;
use crate::api::extractors::session::AdminSession;
use crate::domain::models::notification::Toast;
use crate::error::AppError;
use crate::state::AppState;

pub async fn list_notifications(
    State(state): State<Arc<AppState>>,
    _session: AdminSession,
) -> Result<impl IntoResponse, AppError> {
    let toasts = state.notification_store.list_active(Utc::now()).await?;
    Ok(Json(toasts))
}

pub async fn create_notification(
    State(state): State<Arc<AppState>>,
    _session: AdminSession,
    Json(payload): Json<CreateNotificationRequest>,
) -> Result<impl IntoResponse, AppError> {
    if payload.message.trim().is_empty() {
        return Err(AppError::Validation("message must not be empty".into()));
    }

    let ttl_secs = payload.ttl_secs.unwrap_or(state.config.toast_ttl_secs);
    if ttl_secs < 0 {
        return Err(AppError::Validation("ttlSecs must not be negative".into()));
    }

    let toast = Toast::new(payload.level, payload.message, Duration::seconds(ttl_secs));
    let stored = state.notification_store.push(toast).await?;
    Ok(Json(stored))
}

pub async fn dismiss_notification(
    State(state): State<Arc<AppState>>,
    _session: AdminSession,
    Path(toast_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    if !state.notification_store.dismiss(&toast_id).await? {
        return Err(AppError::NotFound("Notification not found".into()));
    }
    Ok(Json(serde_json::json!({ "status": "dismissed" })))
}
