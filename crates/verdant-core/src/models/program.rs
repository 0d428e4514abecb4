//! Client program assignment models.
//!
//! A [`ClientProgram`] is a client's live assignment of a
//! [`crate::models::ProgramTemplate`]. Its planned visits and treatments are
//! concrete instance rows ([`ClientProgramService`],
//! [`ClientProgramTreatment`]) that advance through status transitions as
//! jobs complete. A freshly assigned program has no instances; generation
//! is a separate concern and an empty instance set is always valid.

use jiff::{civil::Date, Timestamp};
use serde::{Deserialize, Serialize};

use super::{Cadence, ProgramStatus, ServiceStatus};

/// A client's live assignment of a program template.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClientProgram {
    /// Unique identifier for the assignment
    pub id: u64,

    /// ID of the owning client
    pub client_id: u64,

    /// ID of the assigned template
    pub template_id: u64,

    /// Date service begins
    pub start_date: Date,

    /// Optional cadence override; falls back to the template default
    pub cadence: Option<Cadence>,

    /// Current status of the assignment
    #[serde(default)]
    pub status: ProgramStatus,

    /// Optional client-facing name overriding the template name
    pub custom_name: Option<String>,

    /// Timestamp when the assignment was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the assignment was last modified (UTC)
    pub updated_at: Timestamp,

    /// Planned/completed visit instances (eagerly loaded on fetch)
    #[serde(default)]
    pub services: Vec<ClientProgramService>,

    /// Planned/completed treatment instances (eagerly loaded on fetch)
    #[serde(default)]
    pub treatments: Vec<ClientProgramTreatment>,
}

/// One planned or completed visit instance for a client program.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClientProgramService {
    /// Unique identifier for the instance
    pub id: u64,

    /// ID of the owning program
    pub program_id: u64,

    /// Calendar month the visit targets (1-12)
    pub target_month: i8,

    /// Calendar year the visit targets
    pub target_year: i16,

    /// Concrete date once placed on the calendar
    pub scheduled_date: Option<Date>,

    /// Job that fulfills this instance, once one exists
    pub job_id: Option<u64>,

    /// Current status of the instance
    pub status: ServiceStatus,

    /// Timestamp when the instance was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the instance was last modified (UTC)
    pub updated_at: Timestamp,
}

/// One planned or completed treatment instance for a client program.
///
/// Like a service instance, but additionally tied to a treatment type and
/// carrying completion metadata.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClientProgramTreatment {
    /// Unique identifier for the instance
    pub id: u64,

    /// ID of the owning program
    pub program_id: u64,

    /// ID of the treatment type applied
    pub treatment_type_id: u64,

    /// Calendar month the treatment targets (1-12)
    pub target_month: i8,

    /// Calendar year the treatment targets
    pub target_year: i16,

    /// Date by which the treatment should be applied
    pub due_date: Option<Date>,

    /// Job that fulfills this instance, once one exists
    pub job_id: Option<u64>,

    /// Current status of the instance
    pub status: ServiceStatus,

    /// Staff member who completed the treatment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_by: Option<String>,

    /// Timestamp when the treatment was completed (UTC)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<Timestamp>,

    /// Timestamp when the instance was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the instance was last modified (UTC)
    pub updated_at: Timestamp,
}
