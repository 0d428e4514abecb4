//! Program template model definitions.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{Cadence, MonthlyDistribution};

/// A reusable service offering: an annual visit target spread across the
/// twelve months, with linked treatment definitions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProgramTemplate {
    /// Unique identifier for the template
    pub id: u64,

    /// Name of the offering (e.g. "24 visits/year")
    pub name: String,

    /// Detailed description of the offering
    pub description: Option<String>,

    /// Annual visit target
    pub services_per_year: u32,

    /// Per-month visit counts; must sum to `services_per_year` whenever
    /// the template is persisted
    pub services_per_month: MonthlyDistribution,

    /// Default visit cadence for assignments of this template
    #[serde(default)]
    pub default_cadence: Cadence,

    /// Whether the template is offered to new assignments
    pub is_active: bool,

    /// Timestamp when the template was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the template was last modified (UTC)
    pub updated_at: Timestamp,

    /// Linked treatment definitions (eagerly loaded on fetch)
    #[serde(default)]
    pub treatments: Vec<TemplateTreatment>,
}

/// Links a template to a treatment type in a specific calendar month.
///
/// Many treatments may target the same month.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TemplateTreatment {
    /// Unique identifier for the link row
    pub id: u64,

    /// ID of the owning template
    pub template_id: u64,

    /// ID of the treatment type applied
    pub treatment_type_id: u64,

    /// Calendar month the treatment targets (1-12)
    pub month: i8,

    /// Optional quantity of product or passes
    pub quantity: Option<u32>,

    /// Free-text application instructions
    pub instructions: Option<String>,

    /// Timestamp when the link was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the link was last modified (UTC)
    pub updated_at: Timestamp,
}
