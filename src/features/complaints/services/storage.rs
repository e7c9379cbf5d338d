use async_trait::async_trait;

use crate::core::error::Result;
use crate::features::complaints::models::{
    Complaint, NewComplaint, NewReview, OfficerStats, Review,
};

/// Persistence boundary for complaints and their reviews.
///
/// Every method is a single round trip to the store. Errors are persistence
/// failures only; "not found" is reported as `Ok(None)`.
#[async_trait]
pub trait ComplaintStorage: Send + Sync {
    /// All complaints, newest first
    async fn get_all_complaints(&self) -> Result<Vec<Complaint>>;

    async fn get_complaint(&self, id: i32) -> Result<Option<Complaint>>;

    async fn create_complaint(&self, complaint: NewComplaint) -> Result<Complaint>;

    /// Overwrite the status. `officer_id` is only written when it is `Some`.
    async fn update_complaint_status(
        &self,
        id: i32,
        status: &str,
        officer_id: Option<&str>,
    ) -> Result<Option<Complaint>>;

    /// The complaint reference is not checked here; the store's foreign key rejects
    /// dangling ids.
    async fn create_review(&self, review: NewReview) -> Result<Review>;

    async fn get_reviews_by_complaint(&self, complaint_id: i32) -> Result<Vec<Review>>;

    /// Counts by exact status match; pending and unknown statuses are not counted
    async fn get_officer_stats(&self, officer_id: &str) -> Result<OfficerStats>;
}
