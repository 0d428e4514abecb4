//! High-level scheduler API for the lawn-care operations core.
//!
//! This module provides the main [`Scheduler`] interface. The scheduler
//! acts as the central coordinator between the application layers and the
//! database, implementing all business logic for clients, templates,
//! program assignments, instances, treatment schedules, and jobs.
//!
//! # Architecture Overview
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │    Handlers     │    │   Operations    │    │    Database     │
//! │ (template_,     │───▶│ (client_ops,    │───▶│   (via db/)     │
//! │  program_       │    │  template_ops,  │    │                 │
//! │  handlers)      │    │  program_ops,   │    │                 │
//! │                 │    │  schedule_ops)  │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//!     User Interface      Business Logic         Data Persistence
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for creating [`Scheduler`] instances
//! - [`client_ops`]: Client and job operations
//! - [`template_ops`]: Template and treatment catalog operations
//! - [`program_ops`]: Program assignment and instance operations
//! - [`schedule_ops`]: Settings-level treatment schedule operations
//! - [`template_handlers`], [`program_handlers`]: High-level operations
//!   returning formatted wrapper types
//!
//! All database-touching operations are async and wrap the blocking
//! [`crate::db::Database`] in `tokio::task::spawn_blocking`. The monthly
//! distribution allocator is pure and exposed synchronously through
//! [`Scheduler::distribute`].
//!
//! # Usage Examples
//!
//! ```rust,no_run
//! use verdant_core::{params::CreateClient, SchedulerBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let scheduler = SchedulerBuilder::new()
//!     .with_database_path(Some("verdant.db"))
//!     .build()
//!     .await?;
//!
//! let client = scheduler
//!     .create_client(&CreateClient {
//!         name: "Maple Street HOA".to_string(),
//!         ..Default::default()
//!     })
//!     .await?;
//! println!("Created client: {}", client.name);
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

// Module declarations
pub mod builder;
pub mod client_ops;
pub mod program_handlers;
pub mod program_ops;
pub mod schedule_ops;
pub mod template_handlers;
pub mod template_ops;

#[cfg(test)]
mod tests;

// Re-export the main types
pub use builder::SchedulerBuilder;

/// Main scheduler interface for the operations core.
pub struct Scheduler {
    pub(crate) db_path: PathBuf,
}

impl Scheduler {
    /// Creates a new scheduler with the specified database path.
    pub(crate) fn new(db_path: PathBuf) -> Self {
        Self { db_path }
    }

    /// Compute the full monthly distribution for a year.
    ///
    /// Pure pass-through to [`crate::allocator::distribute`]; no I/O, so
    /// no blocking-task hop.
    pub fn distribute(&self, params: &crate::params::Distribute) -> Vec<crate::allocator::MonthShare> {
        crate::allocator::distribute(params)
    }
}
