//! Filter types for querying templates and programs.

use super::ProgramStatus;

/// Filter options for querying client programs.
#[derive(Debug, Clone, Default)]
pub struct ProgramFilter {
    /// Restrict to programs owned by a client
    pub client_id: Option<u64>,

    /// Restrict to programs in a specific status
    /// If None, defaults to showing only active programs
    pub status: Option<ProgramStatus>,

    /// Show programs regardless of status
    pub include_all: bool,
}

impl From<&crate::params::ListPrograms> for ProgramFilter {
    fn from(params: &crate::params::ListPrograms) -> Self {
        Self {
            client_id: params.client_id,
            status: params.status,
            include_all: params.all,
        }
    }
}

/// Filter options for querying program templates.
#[derive(Debug, Clone, Default)]
pub struct TemplateFilter {
    /// Include templates that are no longer offered
    pub include_inactive: bool,
}

impl From<&crate::params::ListTemplates> for TemplateFilter {
    fn from(params: &crate::params::ListTemplates) -> Self {
        Self {
            include_inactive: params.all,
        }
    }
}
