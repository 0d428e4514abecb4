//! Program summary types and functionality.

use jiff::{civil::Date, Timestamp};
use serde::{Deserialize, Serialize};

use super::{Cadence, ProgramStatus};

/// Summary information about a client program with service instance
/// statistics, as produced by the `program_summaries` view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgramSummary {
    /// Program ID
    pub id: u64,
    /// Owning client ID
    pub client_id: u64,
    /// Owning client name
    pub client_name: String,
    /// Assigned template ID
    pub template_id: u64,
    /// Display name (custom name when set, template name otherwise)
    pub name: String,
    /// Date service begins
    pub start_date: Date,
    /// Cadence override, when one is set
    pub cadence: Option<Cadence>,
    /// Program status
    pub status: ProgramStatus,
    /// Creation timestamp
    pub created_at: Timestamp,
    /// Last update timestamp
    pub updated_at: Timestamp,
    /// Total number of service instances
    pub total_services: u32,
    /// Number of completed service instances
    pub completed_services: u32,
    /// Number of pending or scheduled service instances
    pub pending_services: u32,
}
