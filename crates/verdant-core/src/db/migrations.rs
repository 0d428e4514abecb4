//! Database schema initialization and migrations.

use crate::error::{DatabaseResultExt, Result, SchedulerError};

impl super::Database {
    /// Initializes the database schema using the embedded SQL file.
    pub(super) fn initialize_schema(&self) -> Result<()> {
        // Enable foreign keys for this connection
        self.connection
            .execute("PRAGMA foreign_keys = ON", [])
            .db_context("Failed to enable foreign keys")?;

        // Execute the schema SQL
        let schema_sql = include_str!("../../assets/schema.sql");
        self.connection
            .execute_batch(schema_sql)
            .db_context("Failed to initialize database schema")?;

        // Apply migrations for existing databases
        self.apply_migrations()?;

        Ok(())
    }

    /// Apply database migrations for existing databases
    fn apply_migrations(&self) -> Result<()> {
        // Check if custom_name column exists in client_programs table
        let has_custom_name: bool = self
            .connection
            .query_row(
                "SELECT COUNT(*) FROM pragma_table_info('client_programs') WHERE name = 'custom_name'",
                [],
                |row| row.get(0),
            )
            .map(|count: i64| count > 0)
            .unwrap_or(false);

        if !has_custom_name {
            self.connection
                .execute("ALTER TABLE client_programs ADD COLUMN custom_name TEXT", [])
                .map_err(|e| {
                    SchedulerError::database_error(
                        "Failed to add custom_name column to client_programs table",
                        e,
                    )
                })?;
        }

        Ok(())
    }
}
