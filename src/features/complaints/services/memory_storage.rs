use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::core::error::{AppError, Result};
use crate::features::complaints::models::{
    Complaint, NewComplaint, NewReview, OfficerStats, Review,
};
use crate::features::complaints::services::ComplaintStorage;
use crate::shared::constants::{
    STATUS_IN_PROGRESS, STATUS_PENDING, STATUS_RESOLVED, STATUS_WORK_DONE,
};

#[derive(Default)]
struct Tables {
    complaints: Vec<Complaint>,
    reviews: Vec<Review>,
    next_complaint_id: i32,
    next_review_id: i32,
}

/// In-memory storage mirroring the Postgres schema: serial ids, the `pending`
/// default and the reviews -> complaints foreign key.
#[derive(Default)]
pub struct MemoryStorage {
    tables: RwLock<Tables>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn complaint_count(&self) -> usize {
        self.tables.read().await.complaints.len()
    }

    pub async fn review_count(&self) -> usize {
        self.tables.read().await.reviews.len()
    }
}

#[async_trait]
impl ComplaintStorage for MemoryStorage {
    async fn get_all_complaints(&self) -> Result<Vec<Complaint>> {
        let mut complaints = self.tables.read().await.complaints.clone();
        complaints.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));
        Ok(complaints)
    }

    async fn get_complaint(&self, id: i32) -> Result<Option<Complaint>> {
        let tables = self.tables.read().await;
        Ok(tables.complaints.iter().find(|c| c.id == id).cloned())
    }

    async fn create_complaint(&self, complaint: NewComplaint) -> Result<Complaint> {
        let mut tables = self.tables.write().await;
        tables.next_complaint_id += 1;

        let created = Complaint {
            id: tables.next_complaint_id,
            title: complaint.title,
            description: complaint.description,
            category: complaint.category,
            location: complaint.location,
            status: complaint
                .status
                .unwrap_or_else(|| STATUS_PENDING.to_string()),
            officer_id: complaint.officer_id,
            created_at: Utc::now(),
        };
        tables.complaints.push(created.clone());

        Ok(created)
    }

    async fn update_complaint_status(
        &self,
        id: i32,
        status: &str,
        officer_id: Option<&str>,
    ) -> Result<Option<Complaint>> {
        let mut tables = self.tables.write().await;
        let Some(complaint) = tables.complaints.iter_mut().find(|c| c.id == id) else {
            return Ok(None);
        };

        complaint.status = status.to_string();
        if let Some(officer_id) = officer_id {
            complaint.officer_id = Some(officer_id.to_string());
        }

        Ok(Some(complaint.clone()))
    }

    async fn create_review(&self, review: NewReview) -> Result<Review> {
        let mut tables = self.tables.write().await;
        if !tables.complaints.iter().any(|c| c.id == review.complaint_id) {
            return Err(AppError::Internal(format!(
                "insert on table \"reviews\" violates foreign key constraint: complaint {} does not exist",
                review.complaint_id
            )));
        }

        tables.next_review_id += 1;
        let created = Review {
            id: tables.next_review_id,
            complaint_id: review.complaint_id,
            rating: review.rating,
            review_text: review.review_text,
            created_at: Utc::now(),
        };
        tables.reviews.push(created.clone());

        Ok(created)
    }

    async fn get_reviews_by_complaint(&self, complaint_id: i32) -> Result<Vec<Review>> {
        let tables = self.tables.read().await;
        Ok(tables
            .reviews
            .iter()
            .filter(|r| r.complaint_id == complaint_id)
            .cloned()
            .collect())
    }

    async fn get_officer_stats(&self, officer_id: &str) -> Result<OfficerStats> {
        let tables = self.tables.read().await;
        let assigned: Vec<&Complaint> = tables
            .complaints
            .iter()
            .filter(|c| c.officer_id.as_deref() == Some(officer_id))
            .collect();
        let count = |status: &str| assigned.iter().filter(|c| c.status == status).count() as i64;

        Ok(OfficerStats {
            resolved: count(STATUS_RESOLVED),
            in_progress: count(STATUS_IN_PROGRESS),
            work_done: count(STATUS_WORK_DONE),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::complaints::services::storage_contract as contract;

    #[tokio::test]
    async fn test_create_then_get_round_trips() {
        contract::create_then_get_round_trips(&MemoryStorage::new()).await;
    }

    #[tokio::test]
    async fn test_explicit_status_is_kept() {
        contract::explicit_status_is_kept(&MemoryStorage::new()).await;
    }

    #[tokio::test]
    async fn test_get_unknown_complaint_is_none() {
        contract::get_unknown_complaint_is_none(&MemoryStorage::new()).await;
    }

    #[tokio::test]
    async fn test_list_is_newest_first() {
        contract::list_is_newest_first(&MemoryStorage::new()).await;
    }

    #[tokio::test]
    async fn test_update_unknown_is_none_and_creates_nothing() {
        contract::update_unknown_is_none_and_creates_nothing(&MemoryStorage::new()).await;
    }

    #[tokio::test]
    async fn test_update_sets_status_and_officer() {
        contract::update_sets_status_and_officer(&MemoryStorage::new()).await;
    }

    #[tokio::test]
    async fn test_officer_stats_count_by_status() {
        contract::officer_stats_count_by_status(&MemoryStorage::new()).await;
    }

    #[tokio::test]
    async fn test_officer_without_complaints_has_zero_stats() {
        contract::officer_without_complaints_has_zero_stats(&MemoryStorage::new()).await;
    }

    #[tokio::test]
    async fn test_reviews_are_scoped_to_their_complaint() {
        contract::reviews_are_scoped_to_their_complaint(&MemoryStorage::new()).await;
    }

    #[tokio::test]
    async fn test_review_of_unknown_complaint_fails() {
        let storage = MemoryStorage::new();
        contract::review_of_unknown_complaint_fails(&storage).await;
        assert_eq!(storage.review_count().await, 0);
    }
}
