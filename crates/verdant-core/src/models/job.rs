//! Job model definition.

use jiff::{civil::Date, Timestamp};
use serde::{Deserialize, Serialize};

use super::JobStatus;

/// A concrete crew visit to a client property.
///
/// A job may fulfill at most one planned service or treatment instance;
/// the instance row holds the reference.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Job {
    /// Unique identifier for the job
    pub id: u64,

    /// ID of the visited client
    pub client_id: u64,

    /// Short description of the work
    pub title: String,

    /// Date the job is on the calendar for
    pub scheduled_for: Option<Date>,

    /// Name of the assigned crew
    pub crew: Option<String>,

    /// Current status of the job
    #[serde(default)]
    pub status: JobStatus,

    /// Timestamp when the job was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the job was last modified (UTC)
    pub updated_at: Timestamp,
}
