use std::sync::Arc;

use async_trait::async_trait;
use axum_test::TestServer;
use fake::faker::address::en::StreetName;
use fake::faker::lorem::en::{Paragraph, Sentence, Word};
use fake::Fake;
use serde_json::{json, Value};

use crate::core::error::{AppError, Result};
use crate::features::complaints::models::{
    Complaint, NewComplaint, NewReview, OfficerStats, Review,
};
use crate::features::complaints::routes;
use crate::features::complaints::services::ComplaintStorage;

pub fn test_server(storage: Arc<dyn ComplaintStorage>) -> TestServer {
    TestServer::new(routes::routes(storage)).unwrap()
}

pub fn fake_new_complaint() -> NewComplaint {
    NewComplaint {
        title: Sentence(2..5).fake(),
        description: Paragraph(1..3).fake(),
        category: Word().fake(),
        location: StreetName().fake(),
        status: None,
        officer_id: None,
    }
}

/// A valid POST /api/complaints body
pub fn fake_complaint_body() -> Value {
    let complaint = fake_new_complaint();
    json!({
        "title": complaint.title,
        "description": complaint.description,
        "category": complaint.category,
        "location": complaint.location,
    })
}

/// Storage whose every call fails like a lost database connection
pub struct FailingStorage;

fn unavailable() -> AppError {
    AppError::Database(sqlx::Error::PoolTimedOut)
}

#[async_trait]
impl ComplaintStorage for FailingStorage {
    async fn get_all_complaints(&self) -> Result<Vec<Complaint>> {
        Err(unavailable())
    }

    async fn get_complaint(&self, _id: i32) -> Result<Option<Complaint>> {
        Err(unavailable())
    }

    async fn create_complaint(&self, _complaint: NewComplaint) -> Result<Complaint> {
        Err(unavailable())
    }

    async fn update_complaint_status(
        &self,
        _id: i32,
        _status: &str,
        _officer_id: Option<&str>,
    ) -> Result<Option<Complaint>> {
        Err(unavailable())
    }

    async fn create_review(&self, _review: NewReview) -> Result<Review> {
        Err(unavailable())
    }

    async fn get_reviews_by_complaint(&self, _complaint_id: i32) -> Result<Vec<Review>> {
        Err(unavailable())
    }

    async fn get_officer_stats(&self, _officer_id: &str) -> Result<OfficerStats> {
        Err(unavailable())
    }
}
