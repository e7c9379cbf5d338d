use std::sync::Arc;

use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::features::complaints::handlers;
use crate::features::complaints::services::ComplaintStorage;

/// Create routes for the complaints feature
///
/// Note: All routes are public (no authentication required)
pub fn routes(storage: Arc<dyn ComplaintStorage>) -> Router {
    Router::new()
        .route(
            "/api/complaints",
            get(handlers::list_complaints).post(handlers::create_complaint),
        )
        .route("/api/complaints/{id}", get(handlers::get_complaint))
        .route(
            "/api/complaints/{id}/status",
            patch(handlers::update_complaint_status),
        )
        .route("/api/complaints/{id}/reviews", get(handlers::list_reviews))
        .route("/api/reviews", post(handlers::create_review))
        .route("/api/officers/{id}/stats", get(handlers::get_officer_stats))
        .with_state(storage)
}
