use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::complaints::models::NewReview;
use crate::shared::validation::format_validation_errors;

/// Request DTO for reviewing a complaint
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateReviewDto {
    #[schema(required = true)]
    #[validate(required(message = "Required"))]
    pub complaint_id: Option<i32>,

    #[schema(required = true)]
    #[validate(required(message = "Required"))]
    pub rating: Option<i32>,

    pub review_text: Option<String>,
}

impl TryFrom<CreateReviewDto> for NewReview {
    type Error = AppError;

    fn try_from(dto: CreateReviewDto) -> Result<Self> {
        dto.validate()
            .map_err(|e| AppError::Validation(format_validation_errors(&e)))?;

        Ok(Self {
            complaint_id: dto.complaint_id.unwrap_or_default(),
            rating: dto.rating.unwrap_or_default(),
            review_text: dto.review_text,
        })
    }
}

/// Response DTO for review
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReviewResponseDto {
    pub id: i32,
    pub complaint_id: i32,
    pub rating: i32,
    pub review_text: Option<String>,
    pub created_at: DateTime<Utc>,
}
