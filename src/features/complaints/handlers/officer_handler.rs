use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppPath;
use crate::features::complaints::dtos::OfficerStatsDto;
use crate::features::complaints::services::ComplaintStorage;
use crate::shared::types::ErrorResponse;

/// Complaint counts for an officer
#[utoipa::path(
    get,
    path = "/api/officers/{id}/stats",
    params(
        ("id" = String, Path, description = "Officer ID")
    ),
    responses(
        (status = 200, description = "Officer stats, zero when nothing is assigned", body = OfficerStatsDto),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    ),
    tag = "officers"
)]
pub async fn get_officer_stats(
    State(storage): State<Arc<dyn ComplaintStorage>>,
    AppPath(officer_id): AppPath<String>,
) -> Result<Json<OfficerStatsDto>> {
    let stats = storage
        .get_officer_stats(&officer_id)
        .await
        .map_err(AppError::masked("Failed to fetch officer stats"))?;

    Ok(Json(stats.into()))
}
