use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use std::sync::Arc;

use crate::error::AppError;
use crate::state::AppState;

pub async fn list_posts(State(state): State<Arc<AppState>>) -> Result<impl IntoResponse, AppError> {
    let posts = state.content_api.list_posts().await?;
    Ok(Json(posts))
}

pub async fn get_post(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let post = state
        .content_api
        .find_post(&slug)
        .await?
        .ok_or(AppError::NotFound("Post not found".into()))?;
    Ok(Json(post))
}

pub async fn list_openings(State(state): State<Arc<AppState>>) -> Result<impl IntoResponse, AppError> {
    let openings = state.content_api.list_openings().await?;
    Ok(Json(openings))
}
