//! Status and cadence enumerations for programs, services, and jobs.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of client program statuses.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProgramStatus {
    /// Program is running and generating visits
    #[default]
    Active,

    /// Program is temporarily suspended
    Paused,

    /// Program ran through its full term
    Completed,

    /// Program was terminated before its full term
    Cancelled,
}

impl FromStr for ProgramStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(ProgramStatus::Active),
            "paused" => Ok(ProgramStatus::Paused),
            "completed" => Ok(ProgramStatus::Completed),
            "cancelled" => Ok(ProgramStatus::Cancelled),
            _ => Err(format!("Invalid program status: {s}")),
        }
    }
}

impl ProgramStatus {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            ProgramStatus::Active => "active",
            ProgramStatus::Paused => "paused",
            ProgramStatus::Completed => "completed",
            ProgramStatus::Cancelled => "cancelled",
        }
    }

    /// Whether the status admits no further transitions.
    pub fn is_terminal(&self) -> bool {
        matches!(self, ProgramStatus::Completed | ProgramStatus::Cancelled)
    }

    /// Whether a transition from `self` to `next` is allowed.
    ///
    /// Active programs can pause, complete, or cancel; paused programs can
    /// resume or cancel. Completed and cancelled are terminal.
    pub fn can_transition_to(&self, next: ProgramStatus) -> bool {
        match self {
            ProgramStatus::Active => matches!(
                next,
                ProgramStatus::Paused | ProgramStatus::Completed | ProgramStatus::Cancelled
            ),
            ProgramStatus::Paused => {
                matches!(next, ProgramStatus::Active | ProgramStatus::Cancelled)
            }
            ProgramStatus::Completed | ProgramStatus::Cancelled => false,
        }
    }
}

/// Type-safe enumeration of planned service/treatment instance statuses.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ServiceStatus {
    /// Instance exists but has no concrete date yet
    #[default]
    Pending,

    /// Instance has a concrete date on the calendar
    Scheduled,

    /// Instance was performed
    Completed,

    /// Instance was deliberately not performed
    Skipped,
}

impl FromStr for ServiceStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(ServiceStatus::Pending),
            "scheduled" => Ok(ServiceStatus::Scheduled),
            "completed" => Ok(ServiceStatus::Completed),
            "skipped" => Ok(ServiceStatus::Skipped),
            _ => Err(format!("Invalid service status: {s}")),
        }
    }
}

impl ServiceStatus {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceStatus::Pending => "pending",
            ServiceStatus::Scheduled => "scheduled",
            ServiceStatus::Completed => "completed",
            ServiceStatus::Skipped => "skipped",
        }
    }

    /// Get status with consistent icon formatting for display.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use verdant_core::models::ServiceStatus;
    ///
    /// assert_eq!(ServiceStatus::Completed.with_icon(), "✓ Completed");
    /// assert_eq!(ServiceStatus::Scheduled.with_icon(), "◷ Scheduled");
    /// assert_eq!(ServiceStatus::Pending.with_icon(), "○ Pending");
    /// assert_eq!(ServiceStatus::Skipped.with_icon(), "− Skipped");
    /// ```
    pub fn with_icon(&self) -> &'static str {
        match self {
            ServiceStatus::Completed => "✓ Completed",
            ServiceStatus::Scheduled => "◷ Scheduled",
            ServiceStatus::Pending => "○ Pending",
            ServiceStatus::Skipped => "− Skipped",
        }
    }
}

/// Type-safe enumeration of job statuses.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    /// Job is on the calendar
    #[default]
    Scheduled,

    /// Job was performed
    Completed,

    /// Job was called off
    Cancelled,
}

impl FromStr for JobStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "scheduled" => Ok(JobStatus::Scheduled),
            "completed" => Ok(JobStatus::Completed),
            "cancelled" => Ok(JobStatus::Cancelled),
            _ => Err(format!("Invalid job status: {s}")),
        }
    }
}

impl JobStatus {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::Scheduled => "scheduled",
            JobStatus::Completed => "completed",
            JobStatus::Cancelled => "cancelled",
        }
    }
}

/// Visit cadence preference for a program.
///
/// The cadence rides along on templates and assignments for display and
/// future use; the monthly distribution math does not branch on it (see
/// [`crate::allocator`]).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Cadence {
    /// Visits roughly every two weeks
    #[default]
    TwoWeek,

    /// Visits roughly every four weeks
    FourWeek,
}

impl FromStr for Cadence {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "two_week" | "twoweek" => Ok(Cadence::TwoWeek),
            "four_week" | "fourweek" => Ok(Cadence::FourWeek),
            _ => Err(format!("Invalid cadence: {s}")),
        }
    }
}

impl Cadence {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Cadence::TwoWeek => "two_week",
            Cadence::FourWeek => "four_week",
        }
    }
}
