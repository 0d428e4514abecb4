//! Staff roles and the central capability table.
//!
//! Role checks are expressed as a closed enumeration plus a single
//! role-to-capability mapping, queried once per request. Handlers never
//! compare role strings directly.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Closed set of staff roles.
///
/// The default is the least-privileged role, so an absent or unparsed
/// role never widens visibility.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum StaffRole {
    /// Field worker on a crew
    #[default]
    CrewMember,

    /// Office staff without financial visibility
    Staff,

    /// Crew lead with property-access visibility
    TeamLeader,

    /// Operations manager
    Manager,

    /// Business owner
    Owner,
}

impl FromStr for StaffRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "crew_member" | "crewmember" => Ok(StaffRole::CrewMember),
            "staff" => Ok(StaffRole::Staff),
            "team_leader" | "teamleader" => Ok(StaffRole::TeamLeader),
            "manager" => Ok(StaffRole::Manager),
            "owner" => Ok(StaffRole::Owner),
            _ => Err(format!("Invalid staff role: {s}")),
        }
    }
}

impl StaffRole {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            StaffRole::CrewMember => "crew_member",
            StaffRole::Staff => "staff",
            StaffRole::TeamLeader => "team_leader",
            StaffRole::Manager => "manager",
            StaffRole::Owner => "owner",
        }
    }

    /// Whether this role holds the given capability.
    ///
    /// This is the single source of truth for permission checks; both
    /// [`can_view_money`] and [`can_view_gate_code`] go through it.
    pub fn can(&self, capability: Capability) -> bool {
        match capability {
            Capability::ViewMoney | Capability::ViewGateCode => matches!(
                self,
                StaffRole::TeamLeader | StaffRole::Manager | StaffRole::Owner
            ),
        }
    }
}

/// Capabilities a role may hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    /// See rates, invoices, and other financial fields
    ViewMoney,

    /// See gate and lockbox codes
    ViewGateCode,
}

impl Capability {
    /// Human-readable description used in permission errors.
    pub fn describe(&self) -> &'static str {
        match self {
            Capability::ViewMoney => "view financial information",
            Capability::ViewGateCode => "view gate codes",
        }
    }
}

/// Whether the role may see financial fields.
///
/// # Examples
///
/// ```rust
/// use verdant_core::models::{can_view_money, StaffRole};
///
/// assert!(can_view_money(StaffRole::Owner));
/// assert!(!can_view_money(StaffRole::CrewMember));
/// ```
pub fn can_view_money(role: StaffRole) -> bool {
    role.can(Capability::ViewMoney)
}

/// Whether the role may see gate and lockbox codes.
pub fn can_view_gate_code(role: StaffRole) -> bool {
    role.can(Capability::ViewGateCode)
}
