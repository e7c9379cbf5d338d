use chrono::{DateTime, Utc};
use sqlx::FromRow;

use crate::features::complaints::dtos::{ComplaintResponseDto, OfficerStatsDto};

/// Database model for complaint
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Complaint {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub category: String,
    pub location: String,
    pub status: String,
    pub officer_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Data for creating a new complaint. `status` falls back to the column default.
#[derive(Debug, Clone)]
pub struct NewComplaint {
    pub title: String,
    pub description: String,
    pub category: String,
    pub location: String,
    pub status: Option<String>,
    pub officer_id: Option<String>,
}

/// Per-officer complaint counts by status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, FromRow)]
pub struct OfficerStats {
    pub resolved: i64,
    pub in_progress: i64,
    pub work_done: i64,
}

impl From<Complaint> for ComplaintResponseDto {
    fn from(c: Complaint) -> Self {
        Self {
            id: c.id,
            title: c.title,
            description: c.description,
            category: c.category,
            location: c.location,
            status: c.status,
            officer_id: c.officer_id,
            created_at: c.created_at,
        }
    }
}

impl From<OfficerStats> for OfficerStatsDto {
    fn from(s: OfficerStats) -> Self {
        Self {
            resolved: s.resolved,
            in_progress: s.in_progress,
            work_done: s.work_done,
        }
    }
}
