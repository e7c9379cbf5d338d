use async_trait::async_trait;
use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::complaints::models::{
    Complaint, NewComplaint, NewReview, OfficerStats, Review,
};
use crate::features::complaints::services::ComplaintStorage;
use crate::shared::constants::{
    STATUS_IN_PROGRESS, STATUS_PENDING, STATUS_RESOLVED, STATUS_WORK_DONE,
};

/// Postgres-backed storage
pub struct DatabaseStorage {
    pool: PgPool,
}

impl DatabaseStorage {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ComplaintStorage for DatabaseStorage {
    async fn get_all_complaints(&self) -> Result<Vec<Complaint>> {
        sqlx::query_as(
            r#"
            SELECT id, title, description, category, location, status, officer_id, created_at
            FROM complaints
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list complaints: {:?}", e);
            AppError::Database(e)
        })
    }

    async fn get_complaint(&self, id: i32) -> Result<Option<Complaint>> {
        sqlx::query_as(
            r#"
            SELECT id, title, description, category, location, status, officer_id, created_at
            FROM complaints
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get complaint {}: {:?}", id, e);
            AppError::Database(e)
        })
    }

    async fn create_complaint(&self, complaint: NewComplaint) -> Result<Complaint> {
        let created: Complaint = sqlx::query_as(
            r#"
            INSERT INTO complaints (title, description, category, location, status, officer_id)
            VALUES ($1, $2, $3, $4, COALESCE($5, $6), $7)
            RETURNING id, title, description, category, location, status, officer_id, created_at
            "#,
        )
        .bind(&complaint.title)
        .bind(&complaint.description)
        .bind(&complaint.category)
        .bind(&complaint.location)
        .bind(&complaint.status)
        .bind(STATUS_PENDING)
        .bind(&complaint.officer_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create complaint: {:?}", e);
            AppError::Database(e)
        })?;

        tracing::info!(
            "Complaint created: id={}, category={}, status={}",
            created.id,
            created.category,
            created.status
        );

        Ok(created)
    }

    async fn update_complaint_status(
        &self,
        id: i32,
        status: &str,
        officer_id: Option<&str>,
    ) -> Result<Option<Complaint>> {
        let updated: Option<Complaint> = sqlx::query_as(
            r#"
            UPDATE complaints
            SET status = $2, officer_id = COALESCE($3, officer_id)
            WHERE id = $1
            RETURNING id, title, description, category, location, status, officer_id, created_at
            "#,
        )
        .bind(id)
        .bind(status)
        .bind(officer_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update complaint {} status: {:?}", id, e);
            AppError::Database(e)
        })?;

        if let Some(ref complaint) = updated {
            tracing::info!(
                "Complaint status updated: id={}, status={}, officer_id={:?}",
                complaint.id,
                complaint.status,
                complaint.officer_id
            );
        }

        Ok(updated)
    }

    async fn create_review(&self, review: NewReview) -> Result<Review> {
        let created: Review = sqlx::query_as(
            r#"
            INSERT INTO reviews (complaint_id, rating, review_text)
            VALUES ($1, $2, $3)
            RETURNING id, complaint_id, rating, review_text, created_at
            "#,
        )
        .bind(review.complaint_id)
        .bind(review.rating)
        .bind(&review.review_text)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(
                "Failed to create review for complaint {}: {:?}",
                review.complaint_id,
                e
            );
            AppError::Database(e)
        })?;

        tracing::info!(
            "Review created: id={}, complaint_id={}, rating={}",
            created.id,
            created.complaint_id,
            created.rating
        );

        Ok(created)
    }

    async fn get_reviews_by_complaint(&self, complaint_id: i32) -> Result<Vec<Review>> {
        sqlx::query_as(
            r#"
            SELECT id, complaint_id, rating, review_text, created_at
            FROM reviews
            WHERE complaint_id = $1
            ORDER BY id
            "#,
        )
        .bind(complaint_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(
                "Failed to list reviews for complaint {}: {:?}",
                complaint_id,
                e
            );
            AppError::Database(e)
        })
    }

    async fn get_officer_stats(&self, officer_id: &str) -> Result<OfficerStats> {
        sqlx::query_as(
            r#"
            SELECT
                COUNT(*) FILTER (WHERE status = $2) AS resolved,
                COUNT(*) FILTER (WHERE status = $3) AS in_progress,
                COUNT(*) FILTER (WHERE status = $4) AS work_done
            FROM complaints
            WHERE officer_id = $1
            "#,
        )
        .bind(officer_id)
        .bind(STATUS_RESOLVED)
        .bind(STATUS_IN_PROGRESS)
        .bind(STATUS_WORK_DONE)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get stats for officer {}: {:?}", officer_id, e);
            AppError::Database(e)
        })
    }
}
