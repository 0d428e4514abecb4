//! Data models for the scheduling domain.
//!
//! This module contains the core domain models: clients, reusable program
//! templates with their treatment links, the treatment catalog, per-client
//! program assignments and their generated service/treatment instances,
//! settings-level treatment schedules, jobs, and the staff role model.
//! Display implementations live in [`crate::display::models`] to keep data
//! structures separate from presentation logic.
//!
//! Two value types deserve a note:
//!
//! - [`MonthlyDistribution`] carries the per-month visit counts and owns
//!   the dual-format persistence codec (canonical JSON array plus the
//!   legacy brace-delimited form).
//! - [`StaffRole`] is a closed enumeration with a central capability
//!   table; permission predicates never compare role strings.

pub mod client;
pub mod distribution;
pub mod filters;
pub mod job;
pub mod program;
pub mod roles;
pub mod schedule;
pub mod status;
pub mod summary;
pub mod template;
pub mod treatment;


// Re-export all public types at the models level
pub use client::Client;
pub use distribution::MonthlyDistribution;
pub use filters::{ProgramFilter, TemplateFilter};
pub use job::Job;
pub use program::{ClientProgram, ClientProgramService, ClientProgramTreatment};
pub use roles::{can_view_gate_code, can_view_money, Capability, StaffRole};
pub use schedule::{ScheduleEntry, TreatmentProgram};
pub use status::{Cadence, JobStatus, ProgramStatus, ServiceStatus};
pub use summary::ProgramSummary;
pub use template::{ProgramTemplate, TemplateTreatment};
pub use treatment::{TreatmentCategory, TreatmentType};
