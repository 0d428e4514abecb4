//! Client model definition and related functionality.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{Capability, StaffRole};

/// Represents a service client (a property the business maintains).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Client {
    /// Unique identifier for the client
    pub id: u64,

    /// Display name of the client
    pub name: String,

    /// Street address of the serviced property
    pub address: Option<String>,

    /// Gate or lockbox code for property access (capability-gated)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gate_code: Option<String>,

    /// Monthly rate in integer cents (capability-gated)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly_rate_cents: Option<i64>,

    /// Free-form notes about the client
    pub notes: Option<String>,

    /// Timestamp when the client was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the client was last modified (UTC)
    pub updated_at: Timestamp,
}

impl Client {
    /// Return a copy with capability-gated fields stripped for roles that
    /// lack the matching capability.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jiff::Timestamp;
    /// use verdant_core::models::{Client, StaffRole};
    ///
    /// let client = Client {
    ///     id: 1,
    ///     name: "Maple Street HOA".to_string(),
    ///     address: None,
    ///     gate_code: Some("4417".to_string()),
    ///     monthly_rate_cents: Some(24_500),
    ///     notes: None,
    ///     created_at: Timestamp::now(),
    ///     updated_at: Timestamp::now(),
    /// };
    ///
    /// let redacted = client.clone().redacted_for(StaffRole::CrewMember);
    /// assert!(redacted.gate_code.is_none());
    /// assert!(redacted.monthly_rate_cents.is_none());
    ///
    /// let full = client.redacted_for(StaffRole::Manager);
    /// assert_eq!(full.gate_code.as_deref(), Some("4417"));
    /// ```
    pub fn redacted_for(mut self, role: StaffRole) -> Self {
        if !role.can(Capability::ViewGateCode) {
            self.gate_code = None;
        }
        if !role.can(Capability::ViewMoney) {
            self.monthly_rate_cents = None;
        }
        self
    }
}
