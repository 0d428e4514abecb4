//! Treatment catalog model definitions.

use std::str::FromStr;

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// Catalog entry for a chemical or service applied during visits.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TreatmentType {
    /// Unique identifier for the treatment type
    pub id: u64,

    /// Name of the treatment (e.g. "Pre-emergent herbicide")
    pub name: String,

    /// Category of the treatment
    pub category: TreatmentCategory,

    /// Default application notes
    pub notes: Option<String>,

    /// Timestamp when the entry was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the entry was last modified (UTC)
    pub updated_at: Timestamp,
}

/// Treatment catalog categories.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TreatmentCategory {
    Fertilizer,
    Soil,
    Aeration,
    Irrigation,
    Pest,
    #[default]
    Other,
}

impl FromStr for TreatmentCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fertilizer" => Ok(TreatmentCategory::Fertilizer),
            "soil" => Ok(TreatmentCategory::Soil),
            "aeration" => Ok(TreatmentCategory::Aeration),
            "irrigation" => Ok(TreatmentCategory::Irrigation),
            "pest" => Ok(TreatmentCategory::Pest),
            "other" => Ok(TreatmentCategory::Other),
            _ => Err(format!("Invalid treatment category: {s}")),
        }
    }
}

impl TreatmentCategory {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            TreatmentCategory::Fertilizer => "fertilizer",
            TreatmentCategory::Soil => "soil",
            TreatmentCategory::Aeration => "aeration",
            TreatmentCategory::Irrigation => "irrigation",
            TreatmentCategory::Pest => "pest",
            TreatmentCategory::Other => "other",
        }
    }
}
