use utoipa::{Modify, OpenApi};

use crate::features::complaints::{dtos as complaints_dtos, handlers as complaints_handlers};
use crate::shared::types::ErrorResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        // Complaints
        complaints_handlers::list_complaints,
        complaints_handlers::get_complaint,
        complaints_handlers::create_complaint,
        complaints_handlers::update_complaint_status,
        // Reviews
        complaints_handlers::create_review,
        complaints_handlers::list_reviews,
        // Officers
        complaints_handlers::get_officer_stats,
    ),
    components(
        schemas(
            ErrorResponse,
            complaints_dtos::CreateComplaintDto,
            complaints_dtos::UpdateComplaintStatusDto,
            complaints_dtos::ComplaintResponseDto,
            complaints_dtos::OfficerStatsDto,
            complaints_dtos::CreateReviewDto,
            complaints_dtos::ReviewResponseDto,
        )
    ),
    tags(
        (name = "complaints", description = "Citizen complaints and their status"),
        (name = "reviews", description = "Citizen reviews of handled complaints"),
        (name = "officers", description = "Per-officer complaint statistics"),
    ),
    info(
        title = "Civic Complaints API",
        version = "0.1.0",
        description = "API documentation for the civic complaints service",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
