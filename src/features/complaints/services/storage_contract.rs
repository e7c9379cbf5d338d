//! Behaviour every `ComplaintStorage` adapter must share. Each adapter's test
//! module runs these against a fresh store.

use crate::features::complaints::models::{NewComplaint, NewReview, OfficerStats};
use crate::features::complaints::services::ComplaintStorage;
use crate::shared::test_helpers::fake_new_complaint;

fn assigned(officer_id: &str, status: &str) -> NewComplaint {
    NewComplaint {
        status: Some(status.to_string()),
        officer_id: Some(officer_id.to_string()),
        ..fake_new_complaint()
    }
}

pub async fn create_then_get_round_trips(storage: &dyn ComplaintStorage) {
    let created = storage.create_complaint(fake_new_complaint()).await.unwrap();

    assert_eq!(created.status, "pending");
    assert!(created.officer_id.is_none());

    let fetched = storage.get_complaint(created.id).await.unwrap();
    assert_eq!(fetched, Some(created));
}

pub async fn explicit_status_is_kept(storage: &dyn ComplaintStorage) {
    let created = storage
        .create_complaint(assigned("officer-9", "in-progress"))
        .await
        .unwrap();

    assert_eq!(created.status, "in-progress");
    assert_eq!(created.officer_id.as_deref(), Some("officer-9"));
}

pub async fn get_unknown_complaint_is_none(storage: &dyn ComplaintStorage) {
    assert_eq!(storage.get_complaint(424_242).await.unwrap(), None);
}

pub async fn list_is_newest_first(storage: &dyn ComplaintStorage) {
    let first = storage.create_complaint(fake_new_complaint()).await.unwrap();
    let second = storage.create_complaint(fake_new_complaint()).await.unwrap();
    let third = storage.create_complaint(fake_new_complaint()).await.unwrap();

    let ids: Vec<i32> = storage
        .get_all_complaints()
        .await
        .unwrap()
        .into_iter()
        .map(|c| c.id)
        .collect();

    assert_eq!(ids, vec![third.id, second.id, first.id]);
}

pub async fn update_unknown_is_none_and_creates_nothing(storage: &dyn ComplaintStorage) {
    let updated = storage
        .update_complaint_status(424_242, "resolved", None)
        .await
        .unwrap();

    assert_eq!(updated, None);
    assert!(storage.get_all_complaints().await.unwrap().is_empty());
}

pub async fn update_sets_status_and_officer(storage: &dyn ComplaintStorage) {
    let created = storage.create_complaint(fake_new_complaint()).await.unwrap();

    let assigned = storage
        .update_complaint_status(created.id, "in-progress", Some("officer-1"))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(assigned.status, "in-progress");
    assert_eq!(assigned.officer_id.as_deref(), Some("officer-1"));
    assert_eq!(assigned.created_at, created.created_at);

    // Omitted officer keeps the assignment; free-text statuses are accepted
    let updated = storage
        .update_complaint_status(created.id, "escalated", None)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.status, "escalated");
    assert_eq!(updated.officer_id.as_deref(), Some("officer-1"));

    let fetched = storage.get_complaint(created.id).await.unwrap();
    assert_eq!(fetched, Some(updated));
}

pub async fn officer_stats_count_by_status(storage: &dyn ComplaintStorage) {
    for status in ["resolved", "resolved", "in-progress", "pending"] {
        storage
            .create_complaint(assigned("officer-1", status))
            .await
            .unwrap();
    }
    storage
        .create_complaint(assigned("officer-2", "work-done"))
        .await
        .unwrap();

    assert_eq!(
        storage.get_officer_stats("officer-1").await.unwrap(),
        OfficerStats {
            resolved: 2,
            in_progress: 1,
            work_done: 0,
        }
    );
    assert_eq!(
        storage.get_officer_stats("officer-2").await.unwrap(),
        OfficerStats {
            resolved: 0,
            in_progress: 0,
            work_done: 1,
        }
    );
}

pub async fn officer_without_complaints_has_zero_stats(storage: &dyn ComplaintStorage) {
    assert_eq!(
        storage.get_officer_stats("nobody").await.unwrap(),
        OfficerStats::default()
    );
}

pub async fn reviews_are_scoped_to_their_complaint(storage: &dyn ComplaintStorage) {
    let reviewed = storage.create_complaint(fake_new_complaint()).await.unwrap();
    let other = storage.create_complaint(fake_new_complaint()).await.unwrap();

    assert!(storage
        .get_reviews_by_complaint(reviewed.id)
        .await
        .unwrap()
        .is_empty());

    let review = storage
        .create_review(NewReview {
            complaint_id: reviewed.id,
            rating: 4,
            review_text: Some("Fixed within a week".to_string()),
        })
        .await
        .unwrap();
    assert_eq!(review.complaint_id, reviewed.id);
    assert_eq!(review.rating, 4);

    storage
        .create_review(NewReview {
            complaint_id: reviewed.id,
            rating: 2,
            review_text: None,
        })
        .await
        .unwrap();

    let reviews = storage.get_reviews_by_complaint(reviewed.id).await.unwrap();
    assert_eq!(reviews.len(), 2);
    assert!(reviews.contains(&review));

    assert!(storage
        .get_reviews_by_complaint(other.id)
        .await
        .unwrap()
        .is_empty());
}

pub async fn review_of_unknown_complaint_fails(storage: &dyn ComplaintStorage) {
    let result = storage
        .create_review(NewReview {
            complaint_id: 424_242,
            rating: 5,
            review_text: None,
        })
        .await;

    assert!(result.is_err());
    assert!(storage
        .get_reviews_by_complaint(424_242)
        .await
        .unwrap()
        .is_empty());
}
