use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};
use std::sync::Arc;

use crate::api::dtos::requests::SearchQuery;
use crate::domain::services::search::search_catalog;
use crate::error::AppError;
use crate::state::AppState;

pub async fn search(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SearchQuery>,
) -> Result<impl IntoResponse, AppError> {
    let items = state.catalog_api.list_items().await?;
    let hits: Vec<_> = search_catalog(&items, query.q.as_deref().unwrap_or(""))
        .into_iter()
        .cloned()
        .collect();
    Ok(Json(hits))
}
