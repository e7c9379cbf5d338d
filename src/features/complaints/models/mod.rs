mod complaint;
mod review;

pub use complaint::{Complaint, NewComplaint, OfficerStats};
pub use review::{NewReview, Review};
