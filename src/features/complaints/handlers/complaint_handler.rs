use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppJson, AppPath};
use crate::features::complaints::dtos::{
    ComplaintResponseDto, CreateComplaintDto, UpdateComplaintStatusDto,
};
use crate::features::complaints::models::NewComplaint;
use crate::features::complaints::services::ComplaintStorage;
use crate::shared::types::ErrorResponse;

const COMPLAINT_NOT_FOUND: &str = "Complaint not found";

/// List all complaints, newest first
#[utoipa::path(
    get,
    path = "/api/complaints",
    responses(
        (status = 200, description = "All complaints", body = Vec<ComplaintResponseDto>),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    ),
    tag = "complaints"
)]
pub async fn list_complaints(
    State(storage): State<Arc<dyn ComplaintStorage>>,
) -> Result<Json<Vec<ComplaintResponseDto>>> {
    let complaints = storage
        .get_all_complaints()
        .await
        .map_err(AppError::masked("Failed to fetch complaints"))?;

    Ok(Json(complaints.into_iter().map(Into::into).collect()))
}

/// Get complaint by ID
#[utoipa::path(
    get,
    path = "/api/complaints/{id}",
    params(
        ("id" = i32, Path, description = "Complaint ID")
    ),
    responses(
        (status = 200, description = "Complaint found", body = ComplaintResponseDto),
        (status = 400, description = "Invalid complaint ID", body = ErrorResponse),
        (status = 404, description = "Complaint not found", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    ),
    tag = "complaints"
)]
pub async fn get_complaint(
    State(storage): State<Arc<dyn ComplaintStorage>>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<ComplaintResponseDto>> {
    let complaint = storage
        .get_complaint(id)
        .await
        .map_err(AppError::masked("Failed to fetch complaint"))?
        .ok_or_else(|| AppError::NotFound(COMPLAINT_NOT_FOUND.to_string()))?;

    Ok(Json(complaint.into()))
}

/// Submit a new complaint
///
/// `title`, `description`, `category` and `location` are required. `status`
/// defaults to "pending".
#[utoipa::path(
    post,
    path = "/api/complaints",
    request_body = CreateComplaintDto,
    responses(
        (status = 201, description = "Complaint created", body = ComplaintResponseDto),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    ),
    tag = "complaints"
)]
pub async fn create_complaint(
    State(storage): State<Arc<dyn ComplaintStorage>>,
    AppJson(dto): AppJson<CreateComplaintDto>,
) -> Result<(StatusCode, Json<ComplaintResponseDto>)> {
    let new_complaint = NewComplaint::try_from(dto)?;

    let complaint = storage
        .create_complaint(new_complaint)
        .await
        .map_err(AppError::masked("Failed to create complaint"))?;

    Ok((StatusCode::CREATED, Json(complaint.into())))
}

/// Update complaint status and optionally assign an officer
///
/// The status is free text. An omitted `officerId` keeps the current assignment.
#[utoipa::path(
    patch,
    path = "/api/complaints/{id}/status",
    params(
        ("id" = i32, Path, description = "Complaint ID")
    ),
    request_body = UpdateComplaintStatusDto,
    responses(
        (status = 200, description = "Status updated", body = ComplaintResponseDto),
        (status = 400, description = "Status missing", body = ErrorResponse),
        (status = 404, description = "Complaint not found", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    ),
    tag = "complaints"
)]
pub async fn update_complaint_status(
    State(storage): State<Arc<dyn ComplaintStorage>>,
    AppPath(id): AppPath<i32>,
    AppJson(dto): AppJson<UpdateComplaintStatusDto>,
) -> Result<Json<ComplaintResponseDto>> {
    let status = dto
        .status
        .filter(|s| !s.is_empty())
        .ok_or_else(|| AppError::BadRequest("Status is required".to_string()))?;

    let complaint = storage
        .update_complaint_status(id, &status, dto.officer_id.as_deref())
        .await
        .map_err(AppError::masked("Failed to update complaint"))?
        .ok_or_else(|| AppError::NotFound(COMPLAINT_NOT_FOUND.to_string()))?;

    Ok(Json(complaint.into()))
}
