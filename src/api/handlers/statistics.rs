use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};
use std::sync::Arc;

use crate::api::dtos::requests::MonthlySummaryQuery;
use crate::api::dtos::responses::MonthlySummaryResponse;
use crate::api::extractors::session::AdminSession;
use crate::domain::services::statistics::{monthly_summary, MonthSelection};
use crate::error::AppError;
use crate::state::AppState;

pub async fn monthly_booking_summary(
    State(state): State<Arc<AppState>>,
    session: AdminSession,
    Query(query): Query<MonthlySummaryQuery>,
) -> Result<impl IntoResponse, AppError> {
    let selected = MonthSelection::new(query.year, query.month)
        .ok_or(AppError::Validation("month must be between 1 and 12".into()))?;

    let bookings = state.booking_api.list(&session.token).await?;
    let summary = monthly_summary(&bookings, selected, query.booking_type.as_deref());

    Ok(Json(MonthlySummaryResponse::from(summary)))
}
