use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::complaints::models::NewComplaint;
use crate::shared::validation::format_validation_errors;

/// Request DTO for submitting a complaint
///
/// Required fields are modelled as `Option` so that a missing field is
/// reported through validation rather than as a JSON parse failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateComplaintDto {
    #[schema(required = true)]
    #[validate(
        required(message = "Required"),
        length(min = 1, message = "Title must not be empty")
    )]
    pub title: Option<String>,

    #[schema(required = true)]
    #[validate(required(message = "Required"))]
    pub description: Option<String>,

    #[schema(required = true)]
    #[validate(required(message = "Required"))]
    pub category: Option<String>,

    #[schema(required = true)]
    #[validate(required(message = "Required"))]
    pub location: Option<String>,

    /// Defaults to "pending" when omitted
    pub status: Option<String>,

    pub officer_id: Option<String>,
}

impl TryFrom<CreateComplaintDto> for NewComplaint {
    type Error = AppError;

    fn try_from(dto: CreateComplaintDto) -> Result<Self> {
        dto.validate()
            .map_err(|e| AppError::Validation(format_validation_errors(&e)))?;

        Ok(Self {
            title: dto.title.unwrap_or_default(),
            description: dto.description.unwrap_or_default(),
            category: dto.category.unwrap_or_default(),
            location: dto.location.unwrap_or_default(),
            status: dto.status,
            officer_id: dto.officer_id,
        })
    }
}

/// Request DTO for changing a complaint's status
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateComplaintStatusDto {
    /// Any non-empty text; conventionally pending, in-progress, work-done or resolved
    #[schema(required = true)]
    pub status: Option<String>,

    /// Left untouched when omitted
    pub officer_id: Option<String>,
}

/// Response DTO for complaint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ComplaintResponseDto {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub category: String,
    pub location: String,
    pub status: String,
    pub officer_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Complaint counts for one officer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OfficerStatsDto {
    pub resolved: i64,
    pub in_progress: i64,
    pub work_done: i64,
}
