//! Parameter structures for scheduler operations
//!
//! This module contains shared parameter structures that can be used across
//! different interfaces (CLI today, other front ends later) without
//! framework-specific derives or dependencies.
//!
//! ## Architecture: Parameter Wrapper Pattern
//!
//! Interface layers define their own wrapper structs (e.g. clap `Args`
//! types) and convert into these core parameters via `From`/`Into`:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │  Core Params    │    │   Scheduler     │
//! │  (clap derives) │───▶│ (this module)   │───▶│  (business      │
//! └─────────────────┘    └─────────────────┘    │   logic)        │
//!                                               └─────────────────┘
//! ```
//!
//! This keeps clap attributes out of the core crate, keeps business
//! validation at the scheduler boundary where it is authoritative, and
//! makes the conversion between layers explicit and compile-checked.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::models::{Cadence, ProgramStatus, StaffRole, TreatmentCategory};

/// Generic parameters for operations requiring just an ID.
///
/// Used for operations like show_template, pause_program, skip_service.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Id {
    /// The ID of the resource to operate on
    pub id: u64,
}

/// Parameters for creating a new client.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateClient {
    /// Display name of the client (required)
    pub name: String,
    /// Street address of the serviced property
    pub address: Option<String>,
    /// Gate or lockbox code for property access
    pub gate_code: Option<String>,
    /// Monthly rate in integer cents
    pub monthly_rate_cents: Option<i64>,
    /// Free-form notes
    pub notes: Option<String>,
}

/// Parameters for showing a client with role-based field visibility.
///
/// Capability-gated fields (gate code, rate) are stripped unless the
/// caller's role holds the matching capability.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShowClient {
    /// The ID of the client to show
    pub id: u64,
    /// Role of the caller; defaults to the least-privileged role
    #[serde(default)]
    pub role: StaffRole,
}

/// Parameters for creating a new program template.
///
/// When `services_per_month` is omitted, the monthly distribution is
/// seeded from the allocator for the current year so the sum invariant
/// holds from the first write.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateTemplate {
    /// Name of the offering (required)
    pub name: String,
    /// Detailed description of the offering
    pub description: Option<String>,
    /// Annual visit target
    pub services_per_year: u32,
    /// Explicit per-month counts; must have 12 entries summing to
    /// `services_per_year`
    pub services_per_month: Option<Vec<u32>>,
    /// Default visit cadence for assignments of this template
    #[serde(default)]
    pub default_cadence: Cadence,
}

/// Parameters for listing program templates.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListTemplates {
    /// Include templates that are no longer offered
    #[serde(default)]
    pub all: bool,
}

/// Parameters for replacing a template's monthly distribution.
///
/// The counts must have exactly 12 entries and sum to the template's
/// `services_per_year`; the check runs at this boundary regardless of any
/// client-side validation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SetMonthlyDistribution {
    /// The ID of the template to update
    pub template_id: u64,
    /// Per-month visit counts, January first
    pub monthly_counts: Vec<u32>,
}

/// Parameters for linking a treatment type to a template month.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LinkTreatment {
    /// The ID of the template to link into
    pub template_id: u64,
    /// The ID of the treatment type to apply
    pub treatment_type_id: u64,
    /// Calendar month the treatment targets (1-12)
    pub month: i8,
    /// Optional quantity of product or passes
    pub quantity: Option<u32>,
    /// Free-text application instructions
    pub instructions: Option<String>,
}

/// Parameters for permanently deleting a template.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeleteTemplate {
    /// The ID of the template to delete
    pub id: u64,
    /// Explicit confirmation flag; deletion is refused without it
    #[serde(default)]
    pub confirmed: bool,
}

/// Parameters for creating a treatment catalog entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateTreatmentType {
    /// Name of the treatment (required)
    pub name: String,
    /// Category of the treatment
    #[serde(default)]
    pub category: TreatmentCategory,
    /// Default application notes
    pub notes: Option<String>,
}

/// Parameters for assigning a program template to a client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignProgram {
    /// The ID of the client receiving the program
    pub client_id: u64,
    /// The ID of the template being assigned
    pub template_id: u64,
    /// Date service begins
    pub start_date: Date,
    /// Optional cadence override; falls back to the template default
    pub cadence: Option<Cadence>,
    /// Optional client-facing name overriding the template name
    pub custom_name: Option<String>,
}

/// Parameters for listing client programs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListPrograms {
    /// Restrict to programs owned by a client
    pub client_id: Option<u64>,
    /// Restrict to programs in a specific status
    pub status: Option<ProgramStatus>,
    /// Show programs regardless of status
    #[serde(default)]
    pub all: bool,
}

/// Parameters for adding a planned service instance to a program.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AddService {
    /// The ID of the owning program
    pub program_id: u64,
    /// Calendar month the visit targets (1-12)
    pub target_month: i8,
    /// Calendar year the visit targets
    pub target_year: i16,
}

/// Parameters for placing a service instance on the calendar.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleService {
    /// The ID of the service instance
    pub id: u64,
    /// Concrete visit date
    pub date: Date,
}

/// Parameters for completing a service instance.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompleteService {
    /// The ID of the service instance
    pub id: u64,
    /// Job that fulfilled the visit, when one was recorded
    pub job_id: Option<u64>,
}

/// Parameters for adding a planned treatment instance to a program.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AddProgramTreatment {
    /// The ID of the owning program
    pub program_id: u64,
    /// The ID of the treatment type to apply
    pub treatment_type_id: u64,
    /// Calendar month the treatment targets (1-12)
    pub target_month: i8,
    /// Calendar year the treatment targets
    pub target_year: i16,
    /// Date by which the treatment should be applied
    pub due_date: Option<Date>,
}

/// Parameters for completing a treatment instance.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompleteTreatment {
    /// The ID of the treatment instance
    pub id: u64,
    /// Staff member who performed the treatment
    pub completed_by: String,
    /// Job that fulfilled the treatment, when one was recorded
    pub job_id: Option<u64>,
}

/// Parameters for creating a settings-level treatment program.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateTreatmentProgram {
    /// Name of the schedule (required)
    pub name: String,
    /// Detailed description
    pub description: Option<String>,
}

/// Parameters for adding an entry to a treatment program schedule.
///
/// Exactly one of `month` / `is_flexible` must be provided: an entry is
/// either anchored to a calendar month or explicitly flexible.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AddScheduleEntry {
    /// The ID of the owning treatment program
    pub treatment_program_id: u64,
    /// The ID of the treatment type to apply
    pub treatment_type_id: u64,
    /// Anchoring calendar month (1-12)
    pub month: Option<i8>,
    /// Whether the entry may be consumed at any visit
    #[serde(default)]
    pub is_flexible: bool,
    /// Optional visit-order grouping within a period
    pub visit_number: Option<u32>,
    /// Free-text application instructions
    pub instructions: Option<String>,
}

/// Parameters for creating a job.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateJob {
    /// The ID of the visited client
    pub client_id: u64,
    /// Short description of the work (required)
    pub title: String,
    /// Date the job is on the calendar for
    pub scheduled_for: Option<Date>,
    /// Name of the assigned crew
    pub crew: Option<String>,
}

/// Parameters for the monthly distribution allocator.
///
/// `cadence` is accepted as part of the contract but does not alter the
/// weighting (see [`crate::allocator`]).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Distribute {
    /// Four-digit calendar year; determines month lengths
    pub year: i16,
    /// Annual visit target
    pub annual_services: u32,
    /// Visit cadence preference
    #[serde(default)]
    pub cadence: Cadence,
}
