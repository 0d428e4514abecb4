//! Collection wrapper types for displaying groups of domain objects.
//!
//! Newtype wrappers provide Display implementations for collections with
//! consistent structure and graceful empty-collection handling.

use std::{fmt, ops::Index};

use crate::allocator::MonthShare;
use crate::models::{Client, ProgramSummary, ProgramTemplate, TreatmentProgram, TreatmentType};

/// Newtype wrapper for displaying collections of program summaries.
///
/// # Examples
///
/// ```rust
/// use jiff::{civil::date, Timestamp};
/// use verdant_core::{
///     display::ProgramSummaries,
///     models::{ProgramStatus, ProgramSummary},
/// };
///
/// let summary = ProgramSummary {
///     id: 1,
///     client_id: 4,
///     client_name: "Maple Street HOA".to_string(),
///     template_id: 2,
///     name: "Estate turf care".to_string(),
///     start_date: date(2026, 3, 1),
///     cadence: None,
///     status: ProgramStatus::Active,
///     created_at: Timestamp::now(),
///     updated_at: Timestamp::now(),
///     total_services: 24,
///     completed_services: 5,
///     pending_services: 19,
/// };
///
/// let summaries = ProgramSummaries(vec![summary]);
/// let output = format!("{}", summaries);
/// assert!(output.contains("Estate turf care"));
/// ```
pub struct ProgramSummaries(pub Vec<ProgramSummary>);

impl ProgramSummaries {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of program summaries in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get a reference to the program summary at the given index.
    pub fn get(&self, index: usize) -> Option<&ProgramSummary> {
        self.0.get(index)
    }

    /// Get an iterator over the program summaries.
    pub fn iter(&self) -> std::slice::Iter<'_, ProgramSummary> {
        self.0.iter()
    }
}

impl Index<usize> for ProgramSummaries {
    type Output = ProgramSummary;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for ProgramSummaries {
    type Item = ProgramSummary;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ProgramSummaries {
    type Item = &'a ProgramSummary;
    type IntoIter = std::slice::Iter<'a, ProgramSummary>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for ProgramSummaries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No programs found.")
        } else {
            for summary in &self.0 {
                write!(f, "{}", summary)?;
            }
            Ok(())
        }
    }
}

/// Newtype wrapper for displaying collections of clients.
pub struct Clients(pub Vec<Client>);

impl Clients {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of clients in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for Clients {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No clients found.")
        } else {
            for client in &self.0 {
                write!(f, "{}", client)?;
                writeln!(f)?;
            }
            Ok(())
        }
    }
}

/// Newtype wrapper for displaying collections of program templates.
pub struct Templates(pub Vec<ProgramTemplate>);

impl Templates {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of templates in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for Templates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No templates found.")
        } else {
            for template in &self.0 {
                write!(f, "{}", template)?;
                writeln!(f)?;
            }
            Ok(())
        }
    }
}

/// Newtype wrapper for displaying the treatment catalog.
pub struct TreatmentTypes(pub Vec<TreatmentType>);

impl TreatmentTypes {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of treatment types in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for TreatmentTypes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No treatment types found.")
        } else {
            for treatment_type in &self.0 {
                write!(f, "{}", treatment_type)?;
            }
            Ok(())
        }
    }
}

/// Newtype wrapper for displaying collections of treatment programs.
pub struct TreatmentPrograms(pub Vec<TreatmentProgram>);

impl TreatmentPrograms {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of treatment programs in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for TreatmentPrograms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No treatment programs found.")
        } else {
            for program in &self.0 {
                write!(f, "{}", program)?;
                writeln!(f)?;
            }
            Ok(())
        }
    }
}

/// Newtype wrapper rendering an allocator result as a markdown table.
///
/// # Examples
///
/// ```rust
/// use verdant_core::{allocator, display::Distribution, params::Distribute};
///
/// let shares = allocator::distribute(&Distribute {
///     year: 2026,
///     annual_services: 24,
///     cadence: Default::default(),
/// });
/// let table = format!("{}", Distribution(shares));
/// assert!(table.contains("| Jan |"));
/// assert!(table.contains("Total: 24 services"));
/// ```
pub struct Distribution(pub Vec<MonthShare>);

impl fmt::Display for Distribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "| Month | Weeks | Services |")?;
        writeln!(f, "|-------|-------|----------|")?;
        for share in &self.0 {
            writeln!(
                f,
                "| {} | {:.2} | {} |",
                share.name, share.weeks, share.services
            )?;
        }
        writeln!(f)?;

        let total_services: u32 = self.0.iter().map(|s| s.services).sum();
        let total_weeks: f64 = self.0.iter().map(|s| s.weeks).sum();
        writeln!(
            f,
            "Total: {total_services} services over {total_weeks:.2} weeks"
        )
    }
}
