// =============================================================================
// COMPLAINT STATUS VALUES
// =============================================================================
//
// Status is stored as free text. These are the values the clients agree on;
// nothing rejects other strings.

/// Initial status, applied by the database default
pub const STATUS_PENDING: &str = "pending";

/// An officer picked the complaint up
pub const STATUS_IN_PROGRESS: &str = "in-progress";

/// Field work finished, waiting for confirmation
pub const STATUS_WORK_DONE: &str = "work-done";

/// Closed; citizens may leave a review
pub const STATUS_RESOLVED: &str = "resolved";
