use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use std::sync::Arc;
use tracing::info;

use crate::api::dtos::requests::{CreateCategoryRequest, UpdateCategoryRequest};
use crate::api::extractors::session::AdminSession;
use crate::domain::models::category::{CategoryPatch, NewCategory};
use crate::error::AppError;
use crate::state::AppState;

// Listing is public: the storefront renders categories without a session.
pub async fn list_categories(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let categories = state.category_api.list().await?;
    Ok(Json(categories))
}

pub async fn create_category(
    State(state): State<Arc<AppState>>,
    session: AdminSession,
    Json(payload): Json<CreateCategoryRequest>,
) -> Result<impl IntoResponse, AppError> {
    if payload.name.trim().is_empty() {
        return Err(AppError::Validation("name must not be empty".into()));
    }

    let category = NewCategory {
        name: payload.name,
        description: payload.description,
    };
    let created = state.category_api.create(&session.token, &category).await?;
    info!("Created category: {}", created.name);
    Ok(Json(created))
}

pub async fn update_category(
    State(state): State<Arc<AppState>>,
    session: AdminSession,
    Path(category_id): Path<String>,
    Json(payload): Json<UpdateCategoryRequest>,
) -> Result<impl IntoResponse, AppError> {
    let patch = CategoryPatch {
        name: payload.name,
        description: payload.description,
        active: payload.active,
    };
    let updated = state.category_api.update(&session.token, &category_id, &patch).await?;
    Ok(Json(updated))
}

pub async fn delete_category(
    State(state): State<Arc<AppState>>,
    session: AdminSession,
    Path(category_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.category_api.delete(&session.token, &category_id).await?;
    info!("Deleted category: {}", category_id);
    Ok(Json(serde_json::json!({ "status": "deleted" })))
}
