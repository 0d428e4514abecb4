//! Display implementations for domain models.
//!
//! All Display implementations produce markdown for rich terminal
//! rendering: header lines with IDs, metadata bullet lists, and nested
//! sections for owned collections.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::allocator::MONTH_NAMES;
use crate::models::{
    Cadence, Client, ClientProgram, ClientProgramService, ClientProgramTreatment, Job, JobStatus,
    MonthlyDistribution, ProgramStatus, ProgramSummary, ProgramTemplate, ScheduleEntry,
    ServiceStatus, StaffRole, TemplateTreatment, TreatmentCategory, TreatmentProgram,
    TreatmentType,
};

impl fmt::Display for ProgramStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for ServiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Cadence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for TreatmentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for StaffRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for MonthlyDistribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .counts()
            .iter()
            .zip(MONTH_NAMES)
            .map(|(count, name)| format!("{name} {count}"))
            .collect();
        write!(f, "{}", parts.join(", "))
    }
}

/// Format integer cents as dollars for display.
fn dollars(cents: i64) -> String {
    format!("${}.{:02}", cents / 100, (cents % 100).abs())
}

impl fmt::Display for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.id, self.name)?;
        writeln!(f)?;

        if let Some(address) = &self.address {
            writeln!(f, "- Address: {address}")?;
        }
        if let Some(gate_code) = &self.gate_code {
            writeln!(f, "- Gate code: {gate_code}")?;
        }
        if let Some(rate) = self.monthly_rate_cents {
            writeln!(f, "- Monthly rate: {}", dollars(rate))?;
        }
        writeln!(f, "- Created: {}", LocalDateTime(&self.created_at))?;
        writeln!(f, "- Updated: {}", LocalDateTime(&self.updated_at))?;

        if let Some(notes) = &self.notes {
            writeln!(f)?;
            writeln!(f, "{notes}")?;
        }

        Ok(())
    }
}

impl fmt::Display for ProgramTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.id, self.name)?;
        writeln!(f)?;

        writeln!(
            f,
            "- Status: {}",
            if self.is_active { "active" } else { "inactive" }
        )?;
        writeln!(f, "- Services per year: {}", self.services_per_year)?;
        writeln!(f, "- Default cadence: {}", self.default_cadence)?;
        writeln!(f, "- Monthly distribution: {}", self.services_per_month)?;
        writeln!(f, "- Created: {}", LocalDateTime(&self.created_at))?;
        writeln!(f, "- Updated: {}", LocalDateTime(&self.updated_at))?;

        if let Some(desc) = &self.description {
            writeln!(f)?;
            writeln!(f, "{desc}")?;
        }

        if !self.treatments.is_empty() {
            writeln!(f, "\n## Treatments")?;
            writeln!(f)?;
            for treatment in &self.treatments {
                write!(f, "{}", treatment)?;
            }
        }

        Ok(())
    }
}

impl fmt::Display for TemplateTreatment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let month_name = MONTH_NAMES
            .get(usize::try_from(self.month - 1).unwrap_or(12))
            .copied()
            .unwrap_or("?");
        write!(
            f,
            "- {}: treatment type {} in {month_name}",
            self.id, self.treatment_type_id
        )?;
        if let Some(quantity) = self.quantity {
            write!(f, " (x{quantity})")?;
        }
        if let Some(instructions) = &self.instructions {
            write!(f, " — {instructions}")?;
        }
        writeln!(f)
    }
}

impl fmt::Display for TreatmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {} (ID: {})", self.name, self.id)?;
        writeln!(f)?;
        writeln!(f, "- Category: {}", self.category)?;
        if let Some(notes) = &self.notes {
            writeln!(f, "- Notes: {notes}")?;
        }
        writeln!(f)
    }
}

impl fmt::Display for ClientProgram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.custom_name {
            Some(name) => writeln!(f, "# {}. {}", self.id, name)?,
            None => writeln!(f, "# Program {}", self.id)?,
        }
        writeln!(f)?;

        writeln!(f, "- Status: {}", self.status)?;
        writeln!(f, "- Client: {}", self.client_id)?;
        writeln!(f, "- Template: {}", self.template_id)?;
        writeln!(f, "- Start date: {}", self.start_date)?;
        if let Some(cadence) = self.cadence {
            writeln!(f, "- Cadence: {cadence}")?;
        }
        writeln!(f, "- Created: {}", LocalDateTime(&self.created_at))?;
        writeln!(f, "- Updated: {}", LocalDateTime(&self.updated_at))?;

        if !self.services.is_empty() {
            writeln!(f, "\n## Services")?;
            writeln!(f)?;
            for service in &self.services {
                write!(f, "{}", service)?;
            }
        } else {
            writeln!(f, "\nNo service instances yet.")?;
        }

        if !self.treatments.is_empty() {
            writeln!(f, "\n## Treatments")?;
            writeln!(f)?;
            for treatment in &self.treatments {
                write!(f, "{}", treatment)?;
            }
        }

        Ok(())
    }
}

impl fmt::Display for ClientProgramService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let month_name = MONTH_NAMES
            .get(usize::try_from(self.target_month - 1).unwrap_or(12))
            .copied()
            .unwrap_or("?");
        write!(
            f,
            "- {}: {month_name} {} ({})",
            self.id,
            self.target_year,
            self.status.with_icon()
        )?;
        if let Some(date) = self.scheduled_date {
            write!(f, " on {date}")?;
        }
        if let Some(job_id) = self.job_id {
            write!(f, ", job {job_id}")?;
        }
        writeln!(f)
    }
}

impl fmt::Display for ClientProgramTreatment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let month_name = MONTH_NAMES
            .get(usize::try_from(self.target_month - 1).unwrap_or(12))
            .copied()
            .unwrap_or("?");
        write!(
            f,
            "- {}: treatment type {} in {month_name} {} ({})",
            self.id,
            self.treatment_type_id,
            self.target_year,
            self.status.with_icon()
        )?;
        if let Some(due) = self.due_date {
            write!(f, ", due {due}")?;
        }
        if let Some(by) = &self.completed_by {
            write!(f, ", completed by {by}")?;
        }
        writeln!(f)
    }
}

impl fmt::Display for TreatmentProgram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.id, self.name)?;
        writeln!(f)?;

        if let Some(desc) = &self.description {
            writeln!(f, "{desc}")?;
            writeln!(f)?;
        }

        if !self.entries.is_empty() {
            writeln!(f, "## Schedule")?;
            writeln!(f)?;
            for entry in &self.entries {
                write!(f, "{}", entry)?;
            }
        } else {
            writeln!(f, "No schedule entries yet.")?;
        }

        Ok(())
    }
}

impl fmt::Display for ScheduleEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let anchor = match self.month {
            Some(month) => MONTH_NAMES
                .get(usize::try_from(month - 1).unwrap_or(12))
                .copied()
                .unwrap_or("?")
                .to_string(),
            None => "flexible".to_string(),
        };
        write!(
            f,
            "- {}: treatment type {} ({anchor})",
            self.id, self.treatment_type_id
        )?;
        if let Some(visit) = self.visit_number {
            write!(f, ", visit {visit}")?;
        }
        if let Some(instructions) = &self.instructions {
            write!(f, " — {instructions}")?;
        }
        writeln!(f)
    }
}

impl fmt::Display for Job {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.id, self.title)?;
        writeln!(f)?;

        writeln!(f, "- Status: {}", self.status)?;
        writeln!(f, "- Client: {}", self.client_id)?;
        if let Some(date) = self.scheduled_for {
            writeln!(f, "- Scheduled for: {date}")?;
        }
        if let Some(crew) = &self.crew {
            writeln!(f, "- Crew: {crew}")?;
        }
        writeln!(f, "- Created: {}", LocalDateTime(&self.created_at))?;

        Ok(())
    }
}

impl fmt::Display for ProgramSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let progress = if self.total_services > 0 {
            format!(" ({}/{})", self.completed_services, self.total_services)
        } else {
            String::new()
        };

        writeln!(f, "## {} (ID: {}){progress}", self.name, self.id)?;
        writeln!(f)?;

        writeln!(f, "- **Client**: {}", self.client_name)?;
        writeln!(f, "- **Status**: {}", self.status)?;
        writeln!(f, "- **Start date**: {}", self.start_date)?;
        if let Some(cadence) = self.cadence {
            writeln!(f, "- **Cadence**: {cadence}")?;
        }
        writeln!(f, "- **Created**: {}", LocalDateTime(&self.created_at))?;
        writeln!(f)?;

        Ok(())
    }
}
