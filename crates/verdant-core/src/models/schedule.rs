//! Settings-level treatment program schedules.
//!
//! Distinct from per-client instances: a [`TreatmentProgram`] is a named
//! schedule defined in settings, and each [`ScheduleEntry`] is either
//! anchored to a calendar month or explicitly flexible (consumed at any
//! visit). Entries may carry a visit number for grouping by visit order
//! within a period.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// A named settings-level treatment schedule.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TreatmentProgram {
    /// Unique identifier for the schedule
    pub id: u64,

    /// Name of the schedule
    pub name: String,

    /// Detailed description
    pub description: Option<String>,

    /// Timestamp when the schedule was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the schedule was last modified (UTC)
    pub updated_at: Timestamp,

    /// Entries in the schedule (eagerly loaded on fetch)
    #[serde(default)]
    pub entries: Vec<ScheduleEntry>,
}

/// One row in a treatment program schedule.
///
/// Invariant: exactly one of `month` / `is_flexible` is set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScheduleEntry {
    /// Unique identifier for the entry
    pub id: u64,

    /// ID of the owning treatment program
    pub treatment_program_id: u64,

    /// ID of the treatment type applied
    pub treatment_type_id: u64,

    /// Anchoring calendar month (1-12), absent for flexible entries
    pub month: Option<i8>,

    /// Whether the entry may be consumed at any visit
    #[serde(default)]
    pub is_flexible: bool,

    /// Optional visit-order grouping within a period
    pub visit_number: Option<u32>,

    /// Free-text application instructions
    pub instructions: Option<String>,

    /// Timestamp when the entry was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the entry was last modified (UTC)
    pub updated_at: Timestamp,
}
