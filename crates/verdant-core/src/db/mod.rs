//! Database operations and SQLite management for the scheduling domain.
//!
//! This module provides low-level database operations for the scheduling
//! system. It handles the SQLite connection, schema management, and
//! per-aggregate query interfaces: clients, program templates, the
//! treatment catalog, client program assignments and their instances,
//! settings-level treatment schedules, and jobs. Each aggregate's queries
//! live in their own module so ownership and invariant checks stay
//! localized.

use std::path::Path;

use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result};

pub mod client_queries;
pub mod job_queries;
pub mod migrations;
pub mod program_queries;
pub mod schedule_queries;
pub mod template_queries;
pub mod treatment_queries;
mod utils;

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Creates a new database connection and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}
