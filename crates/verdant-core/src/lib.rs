//! Core library for the Verdant lawn-care operations application.
//!
//! This crate provides the scheduling core for a lawn-care service
//! business: clients, reusable program templates, a treatment catalog,
//! per-client program assignments with generated service/treatment
//! instances, settings-level treatment schedules, jobs, and the staff
//! role model — plus the monthly service-distribution allocator that
//! spreads an annual visit target across the twelve months of a year.
//!
//! # Architecture
//!
//! - **Domain Models** ([`models`]): entities with [`std::fmt::Display`]
//!   implementations (in [`display::models`]) for direct formatting
//! - **Allocator** ([`allocator`]): pure largest-remainder distribution
//!   of visits weighted by weeks-per-month
//! - **Persistence** ([`db`]): SQLite-backed per-aggregate query modules
//! - **Operations** ([`scheduler`]): the async [`Scheduler`] facade with
//!   its builder
//! - **Display Wrappers** ([`display`]): contextual and specialized
//!   formatting for collections and operation results
//!
//! # Quick Start
//!
//! ```rust
//! use verdant_core::{params::CreateClient, SchedulerBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Create a scheduler instance
//! let scheduler = SchedulerBuilder::new()
//!     .with_database_path(Some("verdant.db"))
//!     .build()
//!     .await?;
//!
//! // Create a client
//! let client = scheduler
//!     .create_client(&CreateClient {
//!         name: "Maple Street HOA".to_string(),
//!         address: Some("12 Maple St".to_string()),
//!         ..Default::default()
//!     })
//!     .await?;
//! println!("Created client: {}", client);
//!
//! // Preview a monthly distribution without touching the database
//! use verdant_core::params::Distribute;
//! let counts = verdant_core::allocator::services_array(&Distribute {
//!     year: 2026,
//!     annual_services: 24,
//!     cadence: Default::default(),
//! });
//! assert_eq!(counts.iter().sum::<u32>(), 24);
//! # Ok(())
//! # }
//! ```

pub mod allocator;
pub mod db;
pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod scheduler;

// Re-export commonly used types
pub use allocator::{MonthShare, MONTH_NAMES};
pub use db::Database;
pub use display::{
    CreateResult, DeleteResult, Distribution, OperationStatus, ProgramSummaries, UpdateResult,
};
pub use error::{Result, SchedulerError};
pub use models::{
    Cadence, Client, ClientProgram, ClientProgramService, ClientProgramTreatment, Job, JobStatus,
    MonthlyDistribution, ProgramStatus, ProgramSummary, ProgramTemplate, ScheduleEntry,
    ServiceStatus, StaffRole, TreatmentCategory, TreatmentProgram, TreatmentType,
};
pub use params::{
    AddScheduleEntry, AssignProgram, CreateClient, CreateTemplate, Distribute, Id, LinkTreatment,
    ListPrograms, ListTemplates, SetMonthlyDistribution,
};
pub use scheduler::{Scheduler, SchedulerBuilder};
