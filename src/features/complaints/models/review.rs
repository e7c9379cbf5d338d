use chrono::{DateTime, Utc};
use sqlx::FromRow;

use crate::features::complaints::dtos::ReviewResponseDto;

/// Database model for review
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Review {
    pub id: i32,
    pub complaint_id: i32,
    pub rating: i32,
    pub review_text: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Data for creating a new review
#[derive(Debug, Clone)]
pub struct NewReview {
    pub complaint_id: i32,
    pub rating: i32,
    pub review_text: Option<String>,
}

impl From<Review> for ReviewResponseDto {
    fn from(r: Review) -> Self {
        Self {
            id: r.id,
            complaint_id: r.complaint_id,
            rating: r.rating,
            review_text: r.review_text,
            created_at: r.created_at,
        }
    }
}
