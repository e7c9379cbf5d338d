use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppJson, AppPath};
use crate::features::complaints::dtos::{CreateReviewDto, ReviewResponseDto};
use crate::features::complaints::models::NewReview;
use crate::features::complaints::services::ComplaintStorage;
use crate::shared::types::ErrorResponse;

/// Leave a review on a complaint
///
/// The complaint is not looked up first. An unknown `complaintId` is rejected
/// by the database and answered with 500.
#[utoipa::path(
    post,
    path = "/api/reviews",
    request_body = CreateReviewDto,
    responses(
        (status = 201, description = "Review created", body = ReviewResponseDto),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 500, description = "Storage failure or unknown complaint", body = ErrorResponse)
    ),
    tag = "reviews"
)]
pub async fn create_review(
    State(storage): State<Arc<dyn ComplaintStorage>>,
    AppJson(dto): AppJson<CreateReviewDto>,
) -> Result<(StatusCode, Json<ReviewResponseDto>)> {
    let new_review = NewReview::try_from(dto)?;

    let review = storage
        .create_review(new_review)
        .await
        .map_err(AppError::masked("Failed to create review"))?;

    Ok((StatusCode::CREATED, Json(review.into())))
}

/// List reviews of a complaint
///
/// Returns an empty list for complaints without reviews, including unknown ids.
#[utoipa::path(
    get,
    path = "/api/complaints/{id}/reviews",
    params(
        ("id" = i32, Path, description = "Complaint ID")
    ),
    responses(
        (status = 200, description = "Reviews of the complaint", body = Vec<ReviewResponseDto>),
        (status = 400, description = "Invalid complaint ID", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    ),
    tag = "reviews"
)]
pub async fn list_reviews(
    State(storage): State<Arc<dyn ComplaintStorage>>,
    AppPath(complaint_id): AppPath<i32>,
) -> Result<Json<Vec<ReviewResponseDto>>> {
    let reviews = storage
        .get_reviews_by_complaint(complaint_id)
        .await
        .map_err(AppError::masked("Failed to fetch reviews"))?;

    Ok(Json(reviews.into_iter().map(Into::into).collect()))
}
